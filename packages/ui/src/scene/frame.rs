use content::SceneConfig;
use rand::Rng;

use super::camera::OrbitCamera;
use super::math::{Rgb, Vec3};
use super::mesh::{icosahedron, Lighting, Material, Triangle};
use super::motion::{Float, MeshPose};
use super::stars::{sprite_size, Starfield};

const MESH_RADIUS: f64 = 1.25;
const MESH_DETAIL: u32 = 1;

/// Star sprite ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct StarSprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgb,
}

/// Visible mesh face, already shaded and projected.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadedFace {
    pub points: [(f64, f64); 3],
    pub depth: f64,
    pub color: Rgb,
}

/// Everything the painter draws for one tick. Faces are ordered far to near.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneFrame {
    pub width: f64,
    pub height: f64,
    pub stars: Vec<StarSprite>,
    pub faces: Vec<ShadedFace>,
}

/// Immutable scene description. Frames are computed from it on demand.
pub struct SceneState {
    phase: f64,
    mesh: Vec<Triangle>,
    material: Material,
    lighting: Lighting,
    float: Float,
    stars: Starfield,
    camera: OrbitCamera,
}

impl SceneState {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, phase: f64, rng: &mut R) -> Self {
        Self {
            phase,
            mesh: icosahedron(MESH_RADIUS, MESH_DETAIL),
            material: Material::default(),
            lighting: Lighting::default(),
            float: Float::default(),
            stars: Starfield::generate(config, rng),
            camera: OrbitCamera::new(config),
        }
    }

    /// Mesh pose `elapsed` seconds after mount.
    pub fn pose(&self, elapsed: f64) -> MeshPose {
        MeshPose::at(elapsed + self.phase)
    }

    fn to_world(&self, p: Vec3, elapsed: f64) -> Vec3 {
        let t = elapsed + self.phase;
        let pose = MeshPose::at(t);
        let float = self.float.at(t);
        let (fx, fy, fz) = float.rotation;
        (p * pose.scale)
            .rotate_euler(pose.rotation_x, pose.rotation_y, 0.0)
            .rotate_euler(fx, fy, fz)
            + Vec3::new(0.0, float.offset_y, 0.0)
    }

    pub fn frame(&self, elapsed: f64, width: f64, height: f64) -> SceneFrame {
        let view = self.camera.view(elapsed);

        let stars = self
            .stars
            .stars
            .iter()
            .filter_map(|star| {
                let p = view.project(star.position, width, height)?;
                Some(StarSprite {
                    x: p.x,
                    y: p.y,
                    size: sprite_size(star, p.depth, elapsed),
                    color: star.color,
                })
            })
            .collect();

        let mut faces: Vec<ShadedFace> = self
            .mesh
            .iter()
            .filter_map(|tri| {
                let [a, b, c] = tri.map(|p| self.to_world(p, elapsed));
                if !view.faces_camera(a, b, c) {
                    return None;
                }
                let pa = view.project(a, width, height)?;
                let pb = view.project(b, width, height)?;
                let pc = view.project(c, width, height)?;
                let normal = (b - a).cross(c - a);
                Some(ShadedFace {
                    points: [(pa.x, pa.y), (pb.x, pb.y), (pc.x, pc.y)],
                    depth: (pa.depth + pb.depth + pc.depth) / 3.0,
                    color: self.material.shade(normal, &self.lighting),
                })
            })
            .collect();
        faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        SceneFrame {
            width,
            height,
            stars,
            faces,
        }
    }
}
