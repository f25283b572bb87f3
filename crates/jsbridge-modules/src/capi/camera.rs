use jsbridge_core::native::{
    CApiCamera, CameraMode, CameraProjectionType, LocalTransform, Matrix4x4, Quaternion, Vector3,
};

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CameraCApi {
    pub local_position: extern "C" fn(camera: *mut CApiCamera) -> Vector3,
    pub local_rotation: extern "C" fn(camera: *mut CApiCamera) -> Quaternion,
    pub local_scale: extern "C" fn(camera: *mut CApiCamera) -> Vector3,
    pub local_pose: extern "C" fn(camera: *mut CApiCamera) -> Matrix4x4,
    pub set_local_position: extern "C" fn(camera: *mut CApiCamera, pos: *const Vector3),
    pub set_local_rotation: extern "C" fn(camera: *mut CApiCamera, rot: *const Quaternion),
    pub set_local_scale: extern "C" fn(camera: *mut CApiCamera, scale: *const Vector3),
    pub set_local_pose: extern "C" fn(camera: *mut CApiCamera, pose: *const Matrix4x4),
    pub set_local: extern "C" fn(camera: *mut CApiCamera, transform: *const LocalTransform),
    pub world_position: extern "C" fn(camera: *mut CApiCamera) -> Vector3,
    pub world_rotation: extern "C" fn(camera: *mut CApiCamera) -> Quaternion,
    pub world_pose: extern "C" fn(camera: *mut CApiCamera) -> Matrix4x4,

    pub near_range: extern "C" fn(camera: *mut CApiCamera) -> f32,
    pub far_range: extern "C" fn(camera: *mut CApiCamera) -> f32,
    pub set_near_range: extern "C" fn(camera: *mut CApiCamera, near: f32),
    pub set_far_range: extern "C" fn(camera: *mut CApiCamera, far: f32),
    pub vertical_fov: extern "C" fn(camera: *mut CApiCamera) -> f32,
    pub set_vertical_fov: extern "C" fn(camera: *mut CApiCamera, fov: f32),
    pub projection_type: extern "C" fn(camera: *mut CApiCamera) -> CameraProjectionType,
    pub set_projection_type:
        extern "C" fn(camera: *mut CApiCamera, projection: CameraProjectionType),
    pub set_orthographic_view:
        extern "C" fn(camera: *mut CApiCamera, min_x: f32, max_x: f32, min_z: f32, max_z: f32),
    pub set_frustum:
        extern "C" fn(camera: *mut CApiCamera, left: f32, right: f32, bottom: f32, top: f32),
    pub inside_frustum:
        extern "C" fn(camera: *mut CApiCamera, point: *const Vector3, radius: f32) -> i32,
    pub mode: extern "C" fn(camera: *mut CApiCamera) -> CameraMode,
    pub set_mode: extern "C" fn(camera: *mut CApiCamera, mode: CameraMode),
    pub screen_to_world:
        extern "C" fn(camera: *mut CApiCamera, screen: *const Vector3, depth: f32) -> Vector3,
}
