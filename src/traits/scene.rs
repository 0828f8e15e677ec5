use crate::config::SketchConfig;
use crate::scene::Scene;

/// Scene construction abstraction
pub trait SceneComposer {
    /// Build a fresh scene; every call yields new shape instances
    fn compose(&self, config: &SketchConfig) -> Scene;

    /// Layout name, as written in configuration files
    fn name(&self) -> &str;
}
