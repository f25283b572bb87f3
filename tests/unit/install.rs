use jsbridge::{
    Bridge, BridgeConfig, BridgeError, Module, ModuleSet, RegistrationError, ScriptObject,
    ScriptValue,
};
use jsbridge_modules::testing;

use super::engine::{PAD, bridge, call, take_calls};

const NAMESPACES: [&str; 18] = [
    "Application",
    "World",
    "Unit",
    "Camera",
    "Window",
    "Level",
    "Input",
    "Keyboard",
    "Mouse",
    "Tablet",
    "TouchPanel",
    "Pad",
    "Gui",
    "Vector2",
    "Vector3",
    "Quaternion",
    "Matrix4x4",
    "fs",
];

#[test]
fn default_modules_install_every_namespace() {
    let bridge = bridge();
    assert!(!bridge.is_sealed());
    assert_eq!(bridge.registry().namespace_count(), NAMESPACES.len());
    for name in NAMESPACES {
        assert!(bridge.registry().contains(name), "{name} missing");
        assert!(bridge.root().get(name).is_some_and(|ns| ns.is_object()));
    }

    let registry = bridge.registry();
    assert_eq!(registry.function_count("Application"), Some(18));
    assert_eq!(registry.function_count("Input"), Some(5));
    assert_eq!(registry.function_count("fs"), Some(12));
    assert_eq!(
        registry.function_count("Keyboard"),
        registry.function_count("Pad")
    );
}

#[test]
fn any_pad_can_be_driven_from_script() {
    let bridge = bridge();
    let pad = call(&bridge, "Input", "pad", &[ScriptValue::from(1)]).unwrap();
    let pressed = pad.get_key("pressed");
    assert_eq!(
        pressed.as_function().unwrap().invoke(&[ScriptValue::from(1)]),
        Ok(ScriptValue::from(1))
    );
    assert_eq!(take_calls(), [format!("pressed {:#x} 1", PAD + 1)]);
}

#[test]
fn module_set_selects_namespaces() {
    let config = BridgeConfig::default().with_modules(ModuleSet::MATH | ModuleSet::FS);
    let mut bridge = Bridge::with_config(config);
    bridge
        .install_default_modules(&testing::script_api())
        .unwrap();

    assert_eq!(bridge.registry().namespace_count(), 5);
    assert!(bridge.registry().contains("Vector3"));
    assert!(!bridge.registry().contains("World"));

    let sum = call(
        &bridge,
        "Vector3",
        "add",
        &[
            ScriptValue::from([1.0, 2.0, 3.0]),
            ScriptValue::from([1.0, 1.0, 1.0]),
        ],
    )
    .unwrap();
    assert_eq!(sum, ScriptValue::from([2.0, 3.0, 4.0]));
}

#[test]
fn namespaces_cannot_be_replaced_from_script() {
    let bridge = bridge();
    assert!(bridge.root().set("World", 1).is_err());
    assert!(bridge.root().delete("World").is_err());

    let world = bridge.registry().namespace("World").unwrap();
    assert!(world.set("num_units", ScriptValue::Null).is_err());
    assert!(world.get("num_units").is_some_and(|f| f.is_function()));
}

#[test]
fn embedder_modules_join_the_defaults() {
    let mut bridge = bridge();

    let mut game = Module::new("Game");
    game.register_native("version", |_| Ok(ScriptValue::from("1.2.0")))
        .unwrap();
    bridge.install(game).unwrap();
    assert_eq!(call(&bridge, "Game", "version", &[]), Ok(ScriptValue::from("1.2.0")));

    assert_eq!(
        bridge.install(Module::new("World")),
        Err(BridgeError::Registration(
            RegistrationError::DuplicateRegistration {
                name: "World".to_string(),
                kind: "namespace",
            }
        ))
    );

    bridge.seal();
    assert!(matches!(
        bridge.install(Module::new("Late")),
        Err(BridgeError::Registration(RegistrationError::Sealed(_)))
    ));
}

#[test]
fn root_is_exposed_under_the_configured_name() {
    let bridge = bridge();
    let global = ScriptObject::new();
    bridge.expose(&global).unwrap();

    let root = global.get("stingray").unwrap();
    assert!(root.get_key("Unit").is_object());
    assert!(global.delete("stingray").is_err());
}
