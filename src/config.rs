//! Bridge configuration.

use bitflags::bitflags;

use jsbridge_core::ScratchConfig;

bitflags! {
    /// Subsystem namespaces installed by
    /// [`Bridge::install_default_modules`](crate::Bridge::install_default_modules).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModuleSet: u16 {
        const APPLICATION = 1 << 0;
        const WORLD = 1 << 1;
        const UNIT = 1 << 2;
        const CAMERA = 1 << 3;
        const WINDOW = 1 << 4;
        const LEVEL = 1 << 5;
        /// `Input` plus the `Keyboard`, `Mouse`, `Tablet`, `TouchPanel` and `Pad` controllers.
        const INPUT = 1 << 6;
        const GUI = 1 << 7;
        /// `Vector2`, `Vector3`, `Quaternion` and `Matrix4x4`.
        const MATH = 1 << 8;
        const FS = 1 << 9;
    }
}

impl Default for ModuleSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Settings for a [`Bridge`](crate::Bridge).
///
/// # Example
///
/// ```ignore
/// let config = BridgeConfig::default()
///     .with_root_namespace("engine")
///     .with_modules(ModuleSet::MATH | ModuleSet::FS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Global property name the root object is exposed under.
    pub root_namespace: String,
    pub modules: ModuleSet,
    /// Limits for the per-thread scratch arena pool.
    pub scratch: ScratchConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            root_namespace: "stingray".to_string(),
            modules: ModuleSet::default(),
            scratch: ScratchConfig::default(),
        }
    }
}

impl BridgeConfig {
    pub fn with_root_namespace(mut self, name: impl Into<String>) -> Self {
        self.root_namespace = name.into();
        self
    }

    pub fn with_modules(mut self, modules: ModuleSet) -> Self {
        self.modules = modules;
        self
    }

    pub fn with_scratch(mut self, scratch: ScratchConfig) -> Self {
        self.scratch = scratch;
        self
    }
}
