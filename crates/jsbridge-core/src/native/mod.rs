//! Native types exchanged with the engine's C API.

mod engine;
mod enums;
mod math;

pub use engine::*;
pub use enums::*;
pub use math::*;
