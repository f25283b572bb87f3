use jsbridge::{ScriptValue, handle};
use jsbridge_core::native::CApiWorld;

use super::engine::{self, MY_UNIT, WORLD, bridge, call, camera, take_calls, world};

#[test]
fn string_in_an_id_slot_is_hashed() {
    let bridge = bridge();
    assert_eq!(
        call(&bridge, "World", "unit_by_name", &[world(), "my_unit".into()]),
        Ok(ScriptValue::from(MY_UNIT))
    );
}

#[test]
fn identity_matrix_is_sixteen_numbers() {
    let bridge = bridge();
    let pose = call(&bridge, "World", "debug_camera_pose", &[world()]).unwrap();
    let expected: Vec<ScriptValue> = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
    .into_iter()
    .map(ScriptValue::from)
    .collect();
    assert_eq!(pose.as_array().unwrap().to_vec(), expected);
}

#[test]
fn short_vector_fails_before_the_native_call() {
    let bridge = bridge();
    let err = call(
        &bridge,
        "Camera",
        "set_local_position",
        &[camera(), ScriptValue::from([1.0, 2.0])],
    )
    .unwrap_err();

    assert!(
        err.message()
            .starts_with("Failed to execute `set_local_position`.\n"),
        "{err}"
    );
    assert!(take_calls().is_empty());

    call(
        &bridge,
        "Camera",
        "set_local_position",
        &[camera(), ScriptValue::from([1.0, 2.0, 3.0])],
    )
    .unwrap();
    assert_eq!(take_calls(), ["set_local_position 0x2000"]);
}

#[test]
fn returned_pointers_decode_to_the_same_pointer() {
    let bridge = bridge();
    let main_world = call(&bridge, "Application", "main_world", &[]).unwrap();
    assert!(main_world.is_user_created());
    assert_eq!(handle::unwrap(&main_world) as usize, WORLD);

    assert_eq!(
        call(&bridge, "World", "num_units", &[main_world]),
        Ok(ScriptValue::from(3))
    );
    assert_eq!(take_calls(), ["num_units 0x1000"]);
}

#[test]
fn missing_trailing_float_is_infinity() {
    let bridge = bridge();
    call(&bridge, "World", "update", &[world()]).unwrap();
    call(&bridge, "World", "update", &[world(), ScriptValue::from(0.5)]).unwrap();
    assert_eq!(take_calls(), ["update 0x1000 inf", "update 0x1000 0.5"]);
}

#[test]
fn missing_pointer_is_null() {
    let bridge = bridge();
    call(&bridge, "World", "update", &[]).unwrap();
    assert_eq!(take_calls(), ["update 0x0 inf"]);
}

#[test]
fn id_handles_carry_their_id() {
    let id = handle::wrap_id(42);
    assert_eq!(handle::id_of(&id), 42);
    assert_eq!(handle::unwrap(&id) as usize as u64, 42);

    let bridge = bridge();
    assert_eq!(
        call(&bridge, "World", "unit_by_id", &[world(), id]),
        Ok(ScriptValue::from(42))
    );
}

#[test]
fn byte_handles_own_a_copy() {
    let mut source = vec![1u8, 2, 3, 4];
    let bytes = handle::wrap_bytes(&source);
    source.fill(0);

    let copy = unsafe {
        std::slice::from_raw_parts(handle::unwrap(&bytes).cast::<u8>(), handle::size_of(&bytes))
    };
    assert_eq!(copy, [1, 2, 3, 4]);
}

#[test]
fn signaled_failures_name_the_function() {
    let bridge = bridge();
    let err = call(&bridge, "fs", "read", &["save.dat".into()]).unwrap_err();
    assert_eq!(err.message(), "Failed to execute `read`.\nfs.read is not implemented");

    // the bridge keeps working after a failed call
    assert_eq!(
        call(&bridge, "World", "unit_by_name", &[world(), "my_unit".into()]),
        Ok(ScriptValue::from(MY_UNIT))
    );
}

#[test]
fn wrong_argument_kind_is_reported() {
    let bridge = bridge();
    let err = call(&bridge, "fs", "exists", &[ScriptValue::from(1)]).unwrap_err();
    assert!(err.message().starts_with("Failed to execute `exists`.\n"));

    let null_world = handle::wrap_pointer(std::ptr::null_mut::<CApiWorld>());
    call(&bridge, "World", "num_units", &[null_world]).unwrap();
    assert_eq!(engine::take_calls(), ["num_units 0x0"]);
}
