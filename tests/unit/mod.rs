mod boundary;
mod engine;
mod install;
mod round_trips;
