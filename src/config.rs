//! Sketch configuration.
//!
//! Everything a composer, the camera, the controls or the animation loop needs
//! to know lives here, so no module reaches for shared constants of its own.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the shapes of a sketch are placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutConfig {
    /// Plane, sphere and torus side by side on the x axis
    Fixed {
        #[serde(default = "default_offset")]
        offset: f32,
        #[serde(default = "default_true")]
        shared_material: bool,
    },
    /// 2 x `count` instances per kind placed on a circle
    Ring {
        #[serde(default = "default_ring_count")]
        count: usize,
        #[serde(default = "default_ring_radius")]
        radius: f32,
        /// How many instances of each kind spin; `null` spins all of them
        #[serde(default = "default_animated_per_kind")]
        animated_per_kind: Option<usize>,
    },
}

fn default_offset() -> f32 {
    1.5
}

fn default_true() -> bool {
    true
}

fn default_ring_count() -> usize {
    20
}

fn default_ring_radius() -> f32 {
    10.0
}

fn default_animated_per_kind() -> Option<usize> {
    Some(6)
}

impl LayoutConfig {
    pub fn fixed() -> Self {
        LayoutConfig::Fixed {
            offset: default_offset(),
            shared_material: default_true(),
        }
    }

    pub fn ring() -> Self {
        LayoutConfig::Ring {
            count: default_ring_count(),
            radius: default_ring_radius(),
            animated_per_kind: default_animated_per_kind(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutConfig::Fixed { .. } => "fixed",
            LayoutConfig::Ring { .. } => "ring",
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Material family used for every instance of one shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialStyle {
    Flat,
    Textured,
    Matcap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    pub plane: MaterialStyle,
    pub sphere: MaterialStyle,
    pub torus: MaterialStyle,
    /// Color of flat materials when the layout shares a single material
    pub base_color: [f32; 3],
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            plane: MaterialStyle::Flat,
            sphere: MaterialStyle::Flat,
            torus: MaterialStyle::Flat,
            base_color: [1.0, 1.0, 1.0],
        }
    }
}

/// Asset paths. Paths are resolved relative to the working directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub texture_maps: Vec<PathBuf>,
    pub matcaps: Vec<PathBuf>,
    /// Equirectangular image drawn behind the scene
    pub environment: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            position: [0.0, 0.0, 2.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    /// Unbounded when absent
    pub max_distance: Option<f32>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Radians per second applied to every spinning axis
    pub angular_rate: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { angular_rate: 0.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: [f32; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Shape Sketches".to_string(),
            width: 800,
            height: 600,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

/// Complete configuration of one sketch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub layout: LayoutConfig,
    pub materials: MaterialConfig,
    pub assets: AssetConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub animation: AnimationConfig,
    pub window: WindowConfig,
}

impl SketchConfig {
    /// Three shapes in a row, one shared white material
    pub fn fixed() -> Self {
        Self::default()
    }

    /// Ring of 20 positions per kind, camera pulled back to frame the circle
    pub fn ring() -> Self {
        Self {
            layout: LayoutConfig::ring(),
            camera: CameraConfig {
                position: [0.0, 6.0, 8.0],
                target: [0.0, 0.0, -10.0],
                ..CameraConfig::default()
            },
            ..Self::default()
        }
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        log::debug!("Loaded {} layout configuration from {:?}", config.layout.name(), path);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values that would produce an empty ring or a degenerate projection
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let LayoutConfig::Ring { count, radius, .. } = &self.layout {
            if *count == 0 {
                return Err(ConfigError::Invalid("ring count must be at least 1".into()));
            }
            if !(radius.is_finite() && *radius > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "ring radius must be positive, got {}",
                    radius
                )));
            }
        }

        let camera = &self.camera;
        if !(camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "field of view must be within (0, 180) degrees, got {}",
                camera.fov_y_degrees
            )));
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(ConfigError::Invalid(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                camera.near, camera.far
            )));
        }

        let controls = &self.controls;
        if !(0.0..=1.0).contains(&controls.damping_factor) {
            return Err(ConfigError::Invalid(format!(
                "damping factor must be within [0, 1], got {}",
                controls.damping_factor
            )));
        }
        if controls.max_distance.is_some_and(|max| controls.min_distance > max) {
            return Err(ConfigError::Invalid(
                "min_distance must not exceed max_distance".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_sketch() {
        let config = SketchConfig::default();
        assert_eq!(config.layout, LayoutConfig::fixed());
        assert_eq!(config.camera.fov_y_degrees, 75.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.camera.position, [0.0, 0.0, 2.0]);
        assert_eq!(config.animation.angular_rate, 0.5);
        assert!(config.controls.enable_damping);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ring_preset() {
        let config = SketchConfig::ring();
        match config.layout {
            LayoutConfig::Ring { count, radius, animated_per_kind } => {
                assert_eq!(count, 20);
                assert_eq!(radius, 10.0);
                assert_eq!(animated_per_kind, Some(6));
            }
            other => panic!("unexpected layout {:?}", other),
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SketchConfig::ring();
        let json = config.to_json().unwrap();
        let parsed: SketchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "layout": { "kind": "ring", "count": 8, "radius": 4.0, "animated_per_kind": null } }"#;
        let config: SketchConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.layout,
            LayoutConfig::Ring { count: 8, radius: 4.0, animated_per_kind: None }
        );
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.materials.torus, MaterialStyle::Flat);
    }

    #[test]
    fn test_validate_rejects_empty_ring() {
        let mut config = SketchConfig::ring();
        config.layout = LayoutConfig::Ring { count: 0, radius: 10.0, animated_per_kind: None };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_clip_planes() {
        let mut config = SketchConfig::default();
        config.camera.near = 10.0;
        config.camera.far = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        for radius in [0.0, -3.0, f32::NAN] {
            let mut config = SketchConfig::ring();
            config.layout = LayoutConfig::Ring { count: 4, radius, animated_per_kind: None };
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "radius {}", radius);
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_fov() {
        for fov in [0.0, -10.0, 180.0, 270.0] {
            let mut config = SketchConfig::default();
            config.camera.fov_y_degrees = fov;
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "fov {}", fov);
        }
    }

    #[test]
    fn test_validate_rejects_bad_damping() {
        for factor in [-0.1, 1.5] {
            let mut config = SketchConfig::default();
            config.controls.damping_factor = factor;
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "damping {}", factor);
        }

        let mut config = SketchConfig::default();
        config.controls.damping_factor = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_distance_limits() {
        let mut config = SketchConfig::default();
        config.controls.min_distance = 5.0;
        config.controls.max_distance = Some(2.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.controls.max_distance = None;
        assert!(config.validate().is_ok());
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shape-sketches-{}-{}.json", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_partial_layouts_take_defaults() {
        let fixed = write_temp("fixed-layout", r#"{ "layout": { "kind": "fixed" } }"#);
        let config = SketchConfig::load(&fixed).unwrap();
        assert_eq!(config.layout, LayoutConfig::fixed());

        let ring = write_temp("ring-layout", r#"{ "layout": { "kind": "ring", "count": 8 } }"#);
        let config = SketchConfig::load(&ring).unwrap();
        assert_eq!(
            config.layout,
            LayoutConfig::Ring { count: 8, radius: 10.0, animated_per_kind: Some(6) }
        );

        std::fs::remove_file(fixed).ok();
        std::fs::remove_file(ring).ok();
    }

    #[test]
    fn test_load_full_file() {
        let path = write_temp("full", &SketchConfig::ring().to_json().unwrap());
        assert_eq!(SketchConfig::load(&path).unwrap(), SketchConfig::ring());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = write_temp("broken", r#"{ "layout": { "kind": "spiral" } }"#);
        let result = SketchConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { path: ref p, .. }) if *p == path));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_validates() {
        let path = write_temp("invalid", r#"{ "layout": { "kind": "ring", "count": 0 } }"#);
        assert!(matches!(SketchConfig::load(&path), Err(ConfigError::Invalid(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let result = SketchConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
