//! Geometric value types shared with the engine.
//!
//! Matrices use the engine's row-vector convention: `v[0..4]` is the x axis,
//! `v[4..8]` the y axis, `v[8..12]` the z axis and `v[12..16]` the
//! translation. Script sees the same 16 numbers in the same order.

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation part of a local transform, one row per axis.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub x: Vector3,
    pub y: Vector3,
    pub z: Vector3,
}

impl Matrix3x3 {
    pub const IDENTITY: Self = Self {
        x: Vector3 { x: 1.0, y: 0.0, z: 0.0 },
        y: Vector3 { x: 0.0, y: 1.0, z: 0.0 },
        z: Vector3 { x: 0.0, y: 0.0, z: 1.0 },
    };
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    pub v: [f32; 16],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self {
        v: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub fn translation(&self) -> Vector3 {
        Vector3 {
            x: self.v[12],
            y: self.v[13],
            z: self.v[14],
        }
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Fixed-length float aggregates that travel as script number arrays.
pub trait FloatTuple: Copy + 'static {
    const LEN: usize;
    const NAME: &'static str;

    /// Build from `f(0)..f(LEN)`.
    fn from_fn(f: impl FnMut(usize) -> f32) -> Self;

    /// Component `i`, `i < LEN`.
    fn component(&self, i: usize) -> f32;
}

macro_rules! impl_float_tuple {
    ($($ty:ident [$($field:ident),+] = $len:literal),* $(,)?) => {
        $(
            impl FloatTuple for $ty {
                const LEN: usize = $len;
                const NAME: &'static str = stringify!($ty);

                fn from_fn(mut f: impl FnMut(usize) -> f32) -> Self {
                    let mut i = 0;
                    let mut next = || {
                        i += 1;
                        f(i - 1)
                    };
                    Self { $($field: next()),+ }
                }

                fn component(&self, i: usize) -> f32 {
                    [$(self.$field),+][i]
                }
            }
        )*
    };
}

impl_float_tuple!(
    Vector2[x, y] = 2,
    Vector3[x, y, z] = 3,
    Vector4[x, y, z, w] = 4,
    Quaternion[x, y, z, w] = 4,
);

impl FloatTuple for Matrix4x4 {
    const LEN: usize = 16;
    const NAME: &'static str = "Matrix4x4";

    fn from_fn(f: impl FnMut(usize) -> f32) -> Self {
        Self {
            v: std::array::from_fn(f),
        }
    }

    fn component(&self, i: usize) -> f32 {
        self.v[i]
    }
}
