//! Identifier hashing.
//!
//! The engine addresses named things (units, nodes, properties, resources) by
//! hashed identifiers rather than strings. There are two independent spaces:
//! [`IdString32`] for `u32` slots and [`IdString64`] for 64-bit opaque-id
//! slots. Both are deterministic xxHash digests with seed 0.

use std::fmt;

use xxhash_rust::xxh32::xxh32;
use xxhash_rust::xxh64::xxh64;

const SEED: u64 = 0;

/// 32-bit hashed identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IdString32(pub u32);

impl IdString32 {
    pub fn new(name: &str) -> Self {
        Self(xxh32(name.as_bytes(), SEED as u32))
    }

    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for IdString32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#ID[{:08x}]", self.0)
    }
}

/// 64-bit hashed identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IdString64(pub u64);

impl IdString64 {
    pub fn new(name: &str) -> Self {
        Self(xxh64(name.as_bytes(), SEED))
    }

    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for IdString64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#ID[{:016x}]", self.0)
    }
}
