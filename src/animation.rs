//! Time-driven shape rotation.
//!
//! Rotation is a pure function of elapsed time: every tracked axis is set to
//! `angular_rate * elapsed` on each tick, so there is no per-shape velocity
//! and no accumulated drift.

use crate::config::{LayoutConfig, SketchConfig};
use crate::scene::{Scene, ShapeId, ShapeKind};

/// Axes a shape spins about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAxes {
    Y,
    YZ,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spin {
    pub shape: ShapeId,
    pub axes: SpinAxes,
}

#[derive(Debug, Clone)]
pub struct AnimationLoop {
    spins: Vec<Spin>,
    angular_rate: f32,
    ticks: u64,
}

impl AnimationLoop {
    pub fn new(spins: Vec<Spin>, angular_rate: f32) -> Self {
        Self {
            spins,
            angular_rate,
            ticks: 0,
        }
    }

    /// Track the shapes the configured layout animates.
    ///
    /// Fixed layout: every shape about y. Ring layout: the first
    /// `animated_per_kind` instances of each kind, planes also about z.
    pub fn for_scene(scene: &Scene, config: &SketchConfig) -> Self {
        let spins: Vec<Spin> = match config.layout {
            LayoutConfig::Fixed { .. } => (0..scene.len())
                .map(|i| Spin {
                    shape: ShapeId(i),
                    axes: SpinAxes::Y,
                })
                .collect(),
            LayoutConfig::Ring {
                animated_per_kind, ..
            } => ShapeKind::ALL
                .iter()
                .flat_map(|&kind| {
                    let axes = match kind {
                        ShapeKind::Plane => SpinAxes::YZ,
                        _ => SpinAxes::Y,
                    };
                    scene
                        .ids_of(kind)
                        .take(animated_per_kind.unwrap_or(usize::MAX))
                        .map(move |shape| Spin { shape, axes })
                        .collect::<Vec<_>>()
                })
                .collect(),
        };

        log::debug!("Animating {} of {} shapes", spins.len(), scene.len());
        Self::new(spins, config.animation.angular_rate)
    }

    pub fn spins(&self) -> &[Spin] {
        &self.spins
    }

    pub fn angular_rate(&self) -> f32 {
        self.angular_rate
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Angle every tracked axis holds at `elapsed` seconds
    pub fn angle_at(&self, elapsed: f32) -> f32 {
        self.angular_rate * elapsed
    }

    /// Write the rotation for `elapsed` seconds onto every tracked shape
    pub fn tick(&mut self, elapsed: f32, scene: &mut Scene) {
        let angle = self.angle_at(elapsed);

        for spin in &self.spins {
            if let Some(shape) = scene.shape_mut(spin.shape) {
                shape.rotation.y = angle;
                if spin.axes == SpinAxes::YZ {
                    shape.rotation.z = angle;
                }
            }
        }

        self.ticks += 1;
    }
}
