//! Perspective camera on an auto-rotating orbit around the origin.

use std::f64::consts::{FRAC_PI_2, TAU};

use content::SceneConfig;

use super::math::Vec3;

const NEAR: f64 = 0.1;

/// Orbit controller with zoom locked. The camera circles the origin at a fixed
/// distance; only the azimuth changes over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub distance: f64,
    /// Angle from +Y; `π/2` keeps the camera level with the target.
    pub polar: f64,
    /// Vertical field of view in degrees.
    pub fov: f64,
    pub auto_rotate_speed: f64,
    pub enable_zoom: bool,
}

impl OrbitCamera {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            distance: 4.2,
            polar: FRAC_PI_2,
            fov: 50.0,
            auto_rotate_speed: config.auto_rotate_speed,
            enable_zoom: config.enable_zoom,
        }
    }

    /// Azimuth after `elapsed` seconds. Speed 2.0 is one revolution every
    /// 30 seconds; rotation runs clockwise seen from above.
    pub fn azimuth(&self, elapsed: f64) -> f64 {
        -(TAU / 60.0 * self.auto_rotate_speed) * elapsed
    }

    pub fn eye(&self, elapsed: f64) -> Vec3 {
        Vec3::from_spherical(self.distance, self.polar, self.azimuth(elapsed))
    }

    /// View basis looking at the origin from `elapsed`'s eye position.
    pub fn view(&self, elapsed: f64) -> View {
        let eye = self.eye(elapsed);
        let forward = (Vec3::ZERO - eye).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        View {
            eye,
            right,
            up,
            forward,
            fov: self.fov,
        }
    }
}

/// Camera basis for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub eye: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    fov: f64,
}

/// World point projected onto a `width × height` viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Distance in front of the camera along its view axis.
    pub depth: f64,
}

impl View {
    /// Camera-space coordinates: `x` right, `y` up, `z` forward.
    pub fn to_camera(&self, p: Vec3) -> Vec3 {
        let d = p - self.eye;
        Vec3::new(d.dot(self.right), d.dot(self.up), d.dot(self.forward))
    }

    /// `None` when the point is behind the near plane.
    pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<Projected> {
        let c = self.to_camera(p);
        if c.z <= NEAR {
            return None;
        }
        let focal = (height / 2.0) / (self.fov.to_radians() / 2.0).tan();
        Some(Projected {
            x: width / 2.0 + c.x * focal / c.z,
            y: height / 2.0 - c.y * focal / c.z,
            depth: c.z,
        })
    }

    /// Whether a counter-clockwise face with corners `a`, `b`, `c` faces the camera.
    pub fn faces_camera(&self, a: Vec3, b: Vec3, c: Vec3) -> bool {
        let normal = (b - a).cross(c - a);
        normal.dot(self.eye - a) > 0.0
    }
}
