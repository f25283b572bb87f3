use jsbridge::{ScriptValue, handle};

use super::engine::{MY_UNIT, bridge, call};

fn unit() -> ScriptValue {
    ScriptValue::from(MY_UNIT)
}

#[test]
fn unit_position_round_trips() {
    let bridge = bridge();
    call(
        &bridge,
        "Unit",
        "set_local_position",
        &[unit(), ScriptValue::from(0), ScriptValue::from([1.5, -2.0, 8.0])],
    )
    .unwrap();

    assert_eq!(
        call(&bridge, "Unit", "local_position", &[unit(), ScriptValue::from(0)]),
        Ok(ScriptValue::from([1.5, -2.0, 8.0]))
    );
    assert_eq!(
        call(&bridge, "Unit", "local_position", &[unit(), ScriptValue::from(1)]),
        Ok(ScriptValue::from([0.0, 0.0, 0.0]))
    );
}

#[test]
fn strings_come_back_as_strings() {
    let bridge = bridge();
    assert_eq!(
        call(&bridge, "Application", "platform", &[]),
        Ok(ScriptValue::from("win32"))
    );
}

#[test]
fn unit_data_round_trips_through_the_engine() {
    let bridge = bridge();
    let set = |value: ScriptValue, keys: &[&str]| {
        let mut args = vec![unit(), value];
        args.extend(keys.iter().map(|k| ScriptValue::from(*k)));
        call(&bridge, "Unit", "set_data", &args).unwrap();
    };
    let get = |keys: &[&str]| {
        let mut args = vec![unit()];
        args.extend(keys.iter().map(|k| ScriptValue::from(*k)));
        call(&bridge, "Unit", "get_data", &args).unwrap()
    };

    set(ScriptValue::from(75.0), &["stats", "health"]);
    set(ScriptValue::from([0.0, 1.0, 2.0]), &["spawn"]);
    set(ScriptValue::from("ogre"), &["kind"]);
    set(ScriptValue::Bool(true), &["hostile"]);
    set(handle::wrap_id(0xfeed), &["owner"]);

    assert_eq!(get(&["stats", "health"]), ScriptValue::from(75.0));
    assert_eq!(get(&["spawn"]), ScriptValue::from([0.0, 1.0, 2.0]));
    assert_eq!(get(&["kind"]), ScriptValue::from("ogre"));
    assert_eq!(get(&["hostile"]), ScriptValue::Bool(true));
    assert_eq!(handle::id_of(&get(&["owner"])), 0xfeed);
    assert_eq!(get(&["stats"]), ScriptValue::Undefined);

    assert_eq!(
        call(&bridge, "Unit", "has_data", &[unit(), "kind".into()]),
        Ok(ScriptValue::Bool(true))
    );
    assert_eq!(
        call(&bridge, "Unit", "has_data", &[unit(), "missing".into()]),
        Ok(ScriptValue::Bool(false))
    );
}

#[test]
fn matrices_are_not_dynamic_values() {
    let bridge = bridge();
    let matrix: Vec<ScriptValue> = (0..16).map(|i| ScriptValue::from(i as f64)).collect();
    let err = call(
        &bridge,
        "Unit",
        "set_data",
        &[unit(), matrix.into(), "pose".into()],
    )
    .unwrap_err();
    assert!(err.message().starts_with("Failed to execute `set_data`.\n"));
}
