//! Per-call scratch arenas.
//!
//! Decoding often needs an addressable temporary: a NUL-terminated copy of a
//! string, a vector the native function receives by pointer, a struct built
//! from a plain object. These live in a [`bumpalo::Bump`] checked out for the
//! duration of one top-level dispatch and reset when the call returns.
//!
//! Arenas are pooled per thread. A native call that re-enters script and
//! dispatches again checks out a different arena, so the outer call's
//! temporaries are never overwritten.

use std::cell::RefCell;
use std::ops::Deref;

use bumpalo::Bump;

/// Limits for the thread-local arena pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchConfig {
    /// Idle arenas kept for reuse.
    pub max_pooled_arenas: usize,
    /// Arenas that grew past this many bytes are dropped instead of pooled.
    pub max_retained_bytes: usize,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            max_pooled_arenas: 16,
            max_retained_bytes: 64 * 1024,
        }
    }
}

impl ScratchConfig {
    pub fn with_max_pooled_arenas(mut self, count: usize) -> Self {
        self.max_pooled_arenas = count;
        self
    }

    pub fn with_max_retained_bytes(mut self, bytes: usize) -> Self {
        self.max_retained_bytes = bytes;
        self
    }
}

#[derive(Default)]
struct PoolState {
    idle: Vec<Bump>,
    config: ScratchConfig,
    in_flight: usize,
}

thread_local! {
    static POOL: RefCell<PoolState> = RefCell::new(PoolState::default());
}

/// Access to the calling thread's arena pool.
pub struct ScratchPool;

impl ScratchPool {
    /// Replace this thread's pool limits, trimming idle arenas to fit.
    pub fn configure(config: ScratchConfig) {
        POOL.with_borrow_mut(|pool| {
            pool.config = config;
            pool.idle.truncate(config.max_pooled_arenas);
        });
    }

    pub fn config() -> ScratchConfig {
        POOL.with_borrow(|pool| pool.config)
    }

    /// Check out an arena for one call.
    pub fn checkout() -> Scratch {
        let arena = POOL
            .try_with(|pool| {
                let mut pool = pool.borrow_mut();
                pool.in_flight += 1;
                pool.idle.pop()
            })
            .ok()
            .flatten()
            .unwrap_or_default();
        Scratch { arena }
    }

    /// Idle arenas currently pooled on this thread.
    pub fn idle_count() -> usize {
        POOL.with_borrow(|pool| pool.idle.len())
    }

    /// Arenas currently checked out on this thread.
    pub fn in_flight() -> usize {
        POOL.with_borrow(|pool| pool.in_flight)
    }
}

/// A checked-out arena. Returns to the pool on drop.
pub struct Scratch {
    arena: Bump,
}

impl Scratch {
    pub fn arena(&self) -> &Bump {
        self
    }
}

impl Deref for Scratch {
    type Target = Bump;

    fn deref(&self) -> &Bump {
        &self.arena
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let mut arena = std::mem::take(&mut self.arena);
        arena.reset();
        // The pool may already be gone during thread teardown
        let _ = POOL.try_with(|pool| {
            let mut pool = pool.borrow_mut();
            pool.in_flight = pool.in_flight.saturating_sub(1);
            if pool.idle.len() < pool.config.max_pooled_arenas
                && arena.allocated_bytes() <= pool.config.max_retained_bytes
            {
                pool.idle.push(arena);
            }
        });
    }
}
