//! Pure math namespaces: `Vector2`, `Vector3`, `Quaternion` and `Matrix4x4`.
//!
//! Computation happens in `glam`; the engine's value types are only used at
//! the script edge. Matrices keep the engine's layout, where each engine row
//! is a glam column.

use glam::{Mat4, Quat, Vec2, Vec3};
use jsbridge_core::native::{Matrix4x4, Quaternion, Vector2, Vector3};
use jsbridge_registry::{Module, RegistrationError};

// =============================================================================
// CONVERSIONS
// =============================================================================

fn vec2(v: Vector2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn from_vec2(v: Vec2) -> Vector2 {
    Vector2 { x: v.x, y: v.y }
}

fn vec3(v: Vector3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn from_vec3(v: Vec3) -> Vector3 {
    Vector3 {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

fn quat(q: Quaternion) -> Quat {
    Quat::from_xyzw(q.x, q.y, q.z, q.w)
}

fn from_quat(q: Quat) -> Quaternion {
    Quaternion {
        x: q.x,
        y: q.y,
        z: q.z,
        w: q.w,
    }
}

fn mat4(m: Matrix4x4) -> Mat4 {
    Mat4::from_cols_array(&m.v)
}

fn from_mat4(m: Mat4) -> Matrix4x4 {
    Matrix4x4 {
        v: m.to_cols_array(),
    }
}

// =============================================================================
// VECTOR2
// =============================================================================

fn vector2_zero() -> Vector2 {
    from_vec2(Vec2::ZERO)
}

fn vector2_create(x: f32, y: f32) -> Vector2 {
    Vector2 { x, y }
}

fn vector2_equal(a: Vector2, b: Vector2) -> bool {
    a == b
}

fn vector2_normalize(v: Vector2) -> Vector2 {
    from_vec2(vec2(v).normalize_or_zero())
}

fn vector2_add(a: Vector2, b: Vector2) -> Vector2 {
    from_vec2(vec2(a) + vec2(b))
}

fn vector2_subtract(a: Vector2, b: Vector2) -> Vector2 {
    from_vec2(vec2(a) - vec2(b))
}

fn vector2_multiply(v: Vector2, s: f32) -> Vector2 {
    from_vec2(vec2(v) * s)
}

fn vector2_multiply_elements(a: Vector2, b: Vector2) -> Vector2 {
    from_vec2(vec2(a) * vec2(b))
}

fn vector2_dot(a: Vector2, b: Vector2) -> f32 {
    vec2(a).dot(vec2(b))
}

/// The `Vector2` namespace.
pub fn vector2_module() -> Result<Module, RegistrationError> {
    let mut module = Module::new("Vector2");
    module.register_fn("zero", vector2_zero as fn() -> Vector2)?;
    module.register_fn("create", vector2_create as fn(f32, f32) -> Vector2)?;
    module.register_fn("equal", vector2_equal as fn(Vector2, Vector2) -> bool)?;
    module.register_fn("normalize", vector2_normalize as fn(Vector2) -> Vector2)?;
    module.register_fn("add", vector2_add as fn(Vector2, Vector2) -> Vector2)?;
    module.register_fn("subtract", vector2_subtract as fn(Vector2, Vector2) -> Vector2)?;
    module.register_fn("multiply", vector2_multiply as fn(Vector2, f32) -> Vector2)?;
    module.register_fn(
        "multiply_elements",
        vector2_multiply_elements as fn(Vector2, Vector2) -> Vector2,
    )?;
    module.register_fn("dot", vector2_dot as fn(Vector2, Vector2) -> f32)?;
    Ok(module)
}

// =============================================================================
// VECTOR3
// =============================================================================

fn vector3_zero() -> Vector3 {
    from_vec3(Vec3::ZERO)
}

fn vector3_create(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3 { x, y, z }
}

fn vector3_equal(a: Vector3, b: Vector3) -> bool {
    a == b
}

fn vector3_normalize(v: Vector3) -> Vector3 {
    from_vec3(vec3(v).normalize_or_zero())
}

fn vector3_add(a: Vector3, b: Vector3) -> Vector3 {
    from_vec3(vec3(a) + vec3(b))
}

fn vector3_subtract(a: Vector3, b: Vector3) -> Vector3 {
    from_vec3(vec3(a) - vec3(b))
}

fn vector3_multiply(v: Vector3, s: f32) -> Vector3 {
    from_vec3(vec3(v) * s)
}

fn vector3_multiply_elements(a: Vector3, b: Vector3) -> Vector3 {
    from_vec3(vec3(a) * vec3(b))
}

fn vector3_dot(a: Vector3, b: Vector3) -> f32 {
    vec3(a).dot(vec3(b))
}

/// The `Vector3` namespace.
pub fn vector3_module() -> Result<Module, RegistrationError> {
    let mut module = Module::new("Vector3");
    module.register_fn("zero", vector3_zero as fn() -> Vector3)?;
    module.register_fn("create", vector3_create as fn(f32, f32, f32) -> Vector3)?;
    module.register_fn("equal", vector3_equal as fn(Vector3, Vector3) -> bool)?;
    module.register_fn("normalize", vector3_normalize as fn(Vector3) -> Vector3)?;
    module.register_fn("add", vector3_add as fn(Vector3, Vector3) -> Vector3)?;
    module.register_fn("subtract", vector3_subtract as fn(Vector3, Vector3) -> Vector3)?;
    module.register_fn("multiply", vector3_multiply as fn(Vector3, f32) -> Vector3)?;
    module.register_fn(
        "multiply_elements",
        vector3_multiply_elements as fn(Vector3, Vector3) -> Vector3,
    )?;
    module.register_fn("dot", vector3_dot as fn(Vector3, Vector3) -> f32)?;
    Ok(module)
}

// =============================================================================
// QUATERNION
// =============================================================================

fn quaternion_identity() -> Quaternion {
    Quaternion::IDENTITY
}

fn quaternion_multiply(a: Quaternion, b: Quaternion) -> Quaternion {
    from_quat(quat(a) * quat(b))
}

fn quaternion_forward(q: Quaternion) -> Vector3 {
    from_vec3(quat(q) * Vec3::Y)
}

fn quaternion_up(q: Quaternion) -> Vector3 {
    from_vec3(quat(q) * Vec3::Z)
}

fn quaternion_right(q: Quaternion) -> Vector3 {
    from_vec3(quat(q) * Vec3::X)
}

fn quaternion_axis_angle(axis: Vector3, angle: f32) -> Quaternion {
    from_quat(Quat::from_axis_angle(vec3(axis), angle))
}

/// The `Quaternion` namespace.
pub fn quaternion_module() -> Result<Module, RegistrationError> {
    let mut module = Module::new("Quaternion");
    module.register_fn("identity", quaternion_identity as fn() -> Quaternion)?;
    module.register_fn(
        "multiply",
        quaternion_multiply as fn(Quaternion, Quaternion) -> Quaternion,
    )?;
    module.register_fn("forward", quaternion_forward as fn(Quaternion) -> Vector3)?;
    module.register_fn("up", quaternion_up as fn(Quaternion) -> Vector3)?;
    module.register_fn("right", quaternion_right as fn(Quaternion) -> Vector3)?;
    module.register_fn(
        "axis_angle",
        quaternion_axis_angle as fn(Vector3, f32) -> Quaternion,
    )?;
    Ok(module)
}

// =============================================================================
// MATRIX4X4
// =============================================================================

fn matrix4x4_zero() -> Matrix4x4 {
    from_mat4(Mat4::ZERO)
}

fn matrix4x4_identity() -> Matrix4x4 {
    Matrix4x4::IDENTITY
}

fn matrix4x4_x(m: Matrix4x4) -> Vector3 {
    from_vec3(mat4(m).x_axis.truncate())
}

fn matrix4x4_y(m: Matrix4x4) -> Vector3 {
    from_vec3(mat4(m).y_axis.truncate())
}

fn matrix4x4_z(m: Matrix4x4) -> Vector3 {
    from_vec3(mat4(m).z_axis.truncate())
}

fn matrix4x4_from_quaternion(q: Quaternion) -> Matrix4x4 {
    from_mat4(Mat4::from_quat(quat(q)))
}

fn matrix4x4_transform(m: Matrix4x4, p: Vector3) -> Vector3 {
    from_vec3(mat4(m).transform_point3(vec3(p)))
}

/// The `Matrix4x4` namespace.
pub fn matrix4x4_module() -> Result<Module, RegistrationError> {
    let mut module = Module::new("Matrix4x4");
    module.register_fn("zero", matrix4x4_zero as fn() -> Matrix4x4)?;
    module.register_fn("identity", matrix4x4_identity as fn() -> Matrix4x4)?;
    module.register_fn("forward_axis", matrix4x4_y as fn(Matrix4x4) -> Vector3)?;
    module.register_fn(
        "from_quaternion",
        matrix4x4_from_quaternion as fn(Quaternion) -> Matrix4x4,
    )?;
    module.register_fn("x", matrix4x4_x as fn(Matrix4x4) -> Vector3)?;
    module.register_fn("y", matrix4x4_y as fn(Matrix4x4) -> Vector3)?;
    module.register_fn("z", matrix4x4_z as fn(Matrix4x4) -> Vector3)?;
    module.register_fn(
        "transform",
        matrix4x4_transform as fn(Matrix4x4, Vector3) -> Vector3,
    )?;
    Ok(module)
}

/// All four math namespaces.
pub fn modules() -> Result<Vec<Module>, RegistrationError> {
    Ok(vec![
        vector2_module()?,
        vector3_module()?,
        quaternion_module()?,
        matrix4x4_module()?,
    ])
}
