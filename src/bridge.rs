//! The assembled set of script namespaces.
//!
//! A `Bridge` owns the [`Registry`] every namespace is installed into and the
//! [`BridgeConfig`] it was created with.
//!
//! # Example
//!
//! ```ignore
//! use jsbridge::Bridge;
//!
//! let mut bridge = Bridge::with_default_modules(&api)?;
//! bridge.install(my_module)?;
//! bridge.seal();
//! bridge.expose(&global)?;
//! ```

use tracing::info;

use jsbridge_core::{PropertyAttributes, ScratchPool, ScriptFunction, ScriptObject};
use jsbridge_modules::{
    ScriptApi, application, camera, fs, gui, input, level, math, unit, window, world,
};
use jsbridge_registry::{Module, Registry};

use crate::config::{BridgeConfig, ModuleSet};
use crate::error::BridgeError;

/// Installed namespaces plus the settings they were installed with.
#[derive(Debug)]
pub struct Bridge {
    registry: Registry,
    config: BridgeConfig,
}

impl Bridge {
    /// Create an empty bridge with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    /// Create an empty bridge.
    ///
    /// The scratch limits are applied to the calling thread's arena pool.
    pub fn with_config(config: BridgeConfig) -> Self {
        ScratchPool::configure(config.scratch);
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Create a bridge with every subsystem namespace bound to `api`.
    ///
    /// The bridge is NOT sealed, so embedders can add their own modules.
    pub fn with_default_modules(api: &ScriptApi) -> Result<Self, BridgeError> {
        Self::with_config_and_default_modules(BridgeConfig::default(), api)
    }

    /// Like [`with_default_modules`](Self::with_default_modules), installing
    /// only the namespaces selected by `config.modules`.
    pub fn with_config_and_default_modules(
        config: BridgeConfig,
        api: &ScriptApi,
    ) -> Result<Self, BridgeError> {
        let mut bridge = Self::with_config(config);
        bridge.install_default_modules(api)?;
        Ok(bridge)
    }

    /// Install the subsystem namespaces selected by `config.modules`.
    pub fn install_default_modules(&mut self, api: &ScriptApi) -> Result<(), BridgeError> {
        let selected = self.config.modules;

        if selected.contains(ModuleSet::APPLICATION) {
            self.install(application::module(&api.application)?)?;
        }
        if selected.contains(ModuleSet::WORLD) {
            self.install(world::module(&api.world, &api.world_data)?)?;
        }
        if selected.contains(ModuleSet::UNIT) {
            self.install(unit::module(&api.unit, &api.unit_data)?)?;
        }
        if selected.contains(ModuleSet::CAMERA) {
            self.install(camera::module(&api.camera, &api.camera_data)?)?;
        }
        if selected.contains(ModuleSet::WINDOW) {
            self.install(window::module(&api.window)?)?;
        }
        if selected.contains(ModuleSet::LEVEL) {
            self.install(level::module(&api.level, &api.level_data)?)?;
        }
        if selected.contains(ModuleSet::INPUT) {
            self.install_all(input::modules(&api.input, &api.input_controller)?)?;
        }
        if selected.contains(ModuleSet::GUI) {
            self.install(gui::module(&api.gui)?)?;
        }
        if selected.contains(ModuleSet::MATH) {
            self.install_all(math::modules()?)?;
        }
        if selected.contains(ModuleSet::FS) {
            self.install(fs::module()?)?;
        }
        Ok(())
    }

    /// Install `module` as a namespace of the root object.
    ///
    /// # Errors
    ///
    /// Fails if the bridge is sealed or the namespace name is already taken.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn install(&mut self, module: Module) -> Result<(), BridgeError> {
        self.registry.install(module)?;
        Ok(())
    }

    pub fn install_all(
        &mut self,
        modules: impl IntoIterator<Item = Module>,
    ) -> Result<(), BridgeError> {
        modules.into_iter().try_for_each(|module| self.install(module))
    }

    /// Stop accepting namespaces. Sealing twice is a no-op.
    pub fn seal(&mut self) {
        if self.registry.is_sealed() {
            return;
        }
        self.registry.seal();
        info!(
            root = %self.config.root_namespace,
            namespaces = self.registry.namespace_count(),
            "bridge sealed"
        );
    }

    pub fn is_sealed(&self) -> bool {
        self.registry.is_sealed()
    }

    /// Attach the root object to `global` under the configured root name.
    ///
    /// The property is read-only and cannot be deleted from script.
    pub fn expose(&self, global: &ScriptObject) -> Result<(), BridgeError> {
        let name = &self.config.root_namespace;
        global
            .define(
                name,
                self.root().clone(),
                PropertyAttributes::READ_ONLY | PropertyAttributes::DONT_DELETE,
            )
            .map_err(|source| BridgeError::Expose {
                name: name.clone(),
                source,
            })
    }

    /// The object holding every installed namespace.
    pub fn root(&self) -> &ScriptObject {
        self.registry.root()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Look up `namespace.name`.
    pub fn function(&self, namespace: &str, name: &str) -> Option<ScriptFunction> {
        self.registry
            .namespace(namespace)?
            .get(name)?
            .as_function()
            .cloned()
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use jsbridge_core::{NativeError, ScriptValue};
    use jsbridge_registry::RegistrationError;

    use super::*;

    fn echo(name: &str) -> Module {
        let mut module = Module::new(name);
        module
            .register_native("echo", |args| Ok(args.value(0).cloned().unwrap_or_default()))
            .unwrap();
        module
            .register_native("fail", |_| {
                Err(NativeError::engine("device lost"))
            })
            .unwrap();
        module
    }

    #[test]
    fn install_and_call() {
        let mut bridge = Bridge::new();
        bridge.install(echo("Debug")).unwrap();

        let f = bridge.function("Debug", "echo").unwrap();
        assert_eq!(f.invoke(&["hi".into()]), Ok(ScriptValue::from("hi")));
        assert!(bridge.function("Debug", "missing").is_none());
        assert!(bridge.function("Missing", "echo").is_none());
    }

    #[test]
    fn failures_become_exceptions() {
        let mut bridge = Bridge::new();
        bridge.install(echo("Debug")).unwrap();

        let err = bridge.function("Debug", "fail").unwrap().invoke(&[]).unwrap_err();
        assert_eq!(err.message(), "Failed to execute `fail`.\ndevice lost");
    }

    #[test]
    fn sealed_bridge_rejects_modules() {
        let mut bridge = Bridge::new();
        bridge.seal();
        bridge.seal();
        assert!(bridge.is_sealed());
        assert_eq!(
            bridge.install(echo("Debug")),
            Err(BridgeError::Registration(RegistrationError::Sealed(
                "Debug".to_string()
            )))
        );
    }

    #[test]
    fn install_all_stops_at_first_duplicate() {
        let mut bridge = Bridge::new();
        let result = bridge.install_all([echo("A"), echo("A"), echo("B")]);
        assert!(matches!(
            result,
            Err(BridgeError::Registration(
                RegistrationError::DuplicateRegistration { .. }
            ))
        ));
        assert!(bridge.registry().contains("A"));
        assert!(!bridge.registry().contains("B"));
    }

    #[test]
    fn expose_defines_read_only_root() {
        let mut bridge = Bridge::with_config(BridgeConfig::default().with_root_namespace("engine"));
        bridge.install(echo("Debug")).unwrap();

        let global = ScriptObject::new();
        bridge.expose(&global).unwrap();

        let root = global.get("engine").unwrap();
        assert!(root.get_key("Debug").is_object());
        assert!(global.set("engine", 1).is_err());
        assert!(matches!(
            bridge.expose(&global),
            Err(BridgeError::Expose { name, .. }) if name == "engine"
        ));
    }

    #[test]
    fn default_modules_follow_the_config() {
        let config = BridgeConfig::default()
            .with_root_namespace("engine")
            .with_modules(ModuleSet::MATH);
        let api = jsbridge_modules::testing::script_api();
        let bridge = Bridge::with_config_and_default_modules(config, &api).unwrap();

        assert_eq!(bridge.registry().namespace_count(), 4);
        assert!(bridge.registry().contains("Matrix4x4"));
        assert!(!bridge.registry().contains("fs"));
        assert_eq!(bridge.config().root_namespace, "engine");
        assert!(!bridge.is_sealed());
    }

    #[test]
    fn config_applies_scratch_limits() {
        let scratch = jsbridge_core::ScratchConfig::default().with_max_pooled_arenas(3);
        let bridge = Bridge::with_config(BridgeConfig::default().with_scratch(scratch));
        assert_eq!(ScratchPool::config(), scratch);
        assert_eq!(bridge.config().scratch, scratch);
    }
}
