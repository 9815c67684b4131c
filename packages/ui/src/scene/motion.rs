//! Time-based poses. Everything here is a pure function of elapsed seconds
//! plus the per-instance phase.

use std::f64::consts::TAU;

/// Rotation and uniform scale of the mesh at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshPose {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub scale: f64,
}

impl MeshPose {
    pub const MIN_SCALE: f64 = 0.97;
    pub const MAX_SCALE: f64 = 1.03;

    /// `t` is elapsed seconds already offset by the instance phase.
    pub fn at(t: f64) -> Self {
        Self {
            rotation_x: t * 0.25,
            rotation_y: t * 0.35,
            scale: 1.0 + (t * 0.8).sin() * 0.03,
        }
    }
}

/// Bob-and-tilt wrapper around the mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Float {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

impl Default for Float {
    fn default() -> Self {
        Self {
            speed: 1.2,
            rotation_intensity: 0.8,
            float_intensity: 1.2,
        }
    }
}

/// Outer transform produced by [`Float`]: an XYZ Euler tilt plus a vertical offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatPose {
    pub rotation: (f64, f64, f64),
    pub offset_y: f64,
}

impl Float {
    pub fn at(&self, t: f64) -> FloatPose {
        let wave = t / 4.0 * self.speed;
        let k = self.rotation_intensity;
        FloatPose {
            rotation: (wave.cos() / 8.0 * k, wave.sin() / 8.0 * k, wave.sin() / 20.0 * k),
            offset_y: wave.sin() / 10.0 * self.float_intensity,
        }
    }
}

/// Random phase in `[0, 2π)` so that several mounted scenes drift apart.
pub fn random_phase() -> f64 {
    rand::random::<f64>() * TAU
}
