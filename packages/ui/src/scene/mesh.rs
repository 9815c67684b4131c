//! Subdivided icosahedron and its material.

use super::math::{Rgb, Vec3};

/// Counter-clockwise triangle in model space.
pub type Triangle = [Vec3; 3];

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5f64.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Icosahedron of `radius`, each face split `detail` times into four, with
/// every vertex pushed back onto the sphere.
pub fn icosahedron(radius: f64, detail: u32) -> Vec<Triangle> {
    let v = icosahedron_vertices();
    let mut faces: Vec<Triangle> = ICOSAHEDRON_FACES
        .iter()
        .map(|[a, b, c]| [v[*a], v[*b], v[*c]])
        .collect();

    for _ in 0..detail {
        faces = faces.into_iter().flat_map(subdivide).collect();
    }

    faces
        .into_iter()
        .map(|tri| tri.map(|p| p.normalize() * radius))
        .collect()
}

fn subdivide([a, b, c]: Triangle) -> [Triangle; 4] {
    let mid = |p: Vec3, q: Vec3| ((p + q) * 0.5).normalize();
    let (ab, bc, ca) = (mid(a, b), mid(b, c), mid(c, a));
    [[a, ab, ca], [ab, b, bc], [ca, bc, c], [ab, bc, ca]]
}

/// Surface parameters for a lit, slightly glowing solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f64,
    pub metalness: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(0x7c3aed),
            emissive: Rgb::from_hex(0x4c1d95),
            emissive_intensity: 0.25,
            metalness: 0.4,
        }
    }
}

/// Ambient light plus one directional light aimed at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f64,
    pub directional_from: Vec3,
    pub directional: f64,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.6,
            directional_from: Vec3::new(5.0, 5.0, 5.0),
            directional: 1.2,
        }
    }
}

impl Material {
    /// Flat Lambert shade for a face with world-space `normal`.
    pub fn shade(&self, normal: Vec3, lighting: &Lighting) -> Rgb {
        let to_light = lighting.directional_from.normalize();
        let lambert = normal.normalize().dot(to_light).max(0.0);
        let light = lighting.ambient + lighting.directional * lambert;
        self.color
            .scale((1.0 - self.metalness) * light)
            .add(self.emissive.scale(self.emissive_intensity))
            .clamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_counts() {
        assert_eq!(icosahedron(1.0, 0).len(), 20);
        assert_eq!(icosahedron(1.25, 1).len(), 80);
    }

    #[test]
    fn test_vertices_on_sphere() {
        for tri in icosahedron(1.25, 1) {
            for p in tri {
                assert!((p.length() - 1.25).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_faces_wind_outward() {
        for [a, b, c] in icosahedron(1.0, 1) {
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) * (1.0 / 3.0);
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_lit_side_is_brighter() {
        let material = Material::default();
        let lighting = Lighting::default();
        let lit = material.shade(Vec3::new(1.0, 1.0, 1.0), &lighting);
        let dark = material.shade(Vec3::new(-1.0, -1.0, -1.0), &lighting);
        assert!(lit.r + lit.g + lit.b > dark.r + dark.g + dark.b);
    }
}
