//! Background starfield: point sprites scattered over a thick spherical shell.

use std::f64::consts::TAU;

use content::SceneConfig;
use rand::Rng;

use super::math::{Rgb, Vec3};

/// Sprite size multiplier.
const FACTOR: f64 = 4.0;
const SATURATION: f64 = 1.0;
const LIGHTNESS: f64 = 0.9;
/// Twinkle speed.
const SPEED: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub color: Rgb,
    /// Base sprite size before perspective attenuation.
    pub size: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `config.star_count` stars, starting at the outer edge of the
    /// shell and stepping inwards by a random fraction of `depth / count` each
    /// time. Hues sweep once around the colour wheel across the field.
    pub fn generate<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let count = config.star_count;
        let mut radius = config.star_radius + config.star_depth;
        let increment = if count == 0 {
            0.0
        } else {
            config.star_depth / count as f64
        };

        let stars = (0..count)
            .map(|i| {
                radius -= increment * rng.gen::<f64>();
                let phi = (1.0 - rng.gen::<f64>() * 2.0).acos();
                let theta = rng.gen::<f64>() * TAU;
                Star {
                    position: Vec3::from_spherical(radius, phi, theta),
                    color: Rgb::from_hsl(i as f64 / count as f64, SATURATION, LIGHTNESS),
                    size: (0.5 + 0.5 * rng.gen::<f64>()) * FACTOR,
                }
            })
            .collect();

        Self { stars }
    }
}

/// Global twinkle multiplier applied to every sprite at `elapsed` seconds.
pub fn twinkle(elapsed: f64) -> f64 {
    3.0 + (elapsed * SPEED + 100.0).sin()
}

/// On-screen sprite size in pixels for a star `depth` units in front of the camera.
pub fn sprite_size(star: &Star, depth: f64, elapsed: f64) -> f64 {
    star.size * (30.0 / depth) * twinkle(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_configured_count_inside_shell() {
        let config = SceneConfig::default();
        let field = Starfield::generate(&config, &mut StdRng::seed_from_u64(7));
        assert_eq!(field.stars.len(), 3000);
        for star in &field.stars {
            let r = star.position.length();
            assert!(r >= config.star_radius - 1e-9 && r <= config.star_radius + config.star_depth + 1e-9);
            assert!((2.0..=4.0).contains(&star.size));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let config = SceneConfig {
            star_count: 50,
            ..SceneConfig::default()
        };
        let a = Starfield::generate(&config, &mut StdRng::seed_from_u64(1));
        let b = Starfield::generate(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_field() {
        let config = SceneConfig {
            star_count: 0,
            ..SceneConfig::default()
        };
        assert!(Starfield::generate(&config, &mut StdRng::seed_from_u64(0))
            .stars
            .is_empty());
    }

    #[test]
    fn test_twinkle_bounds() {
        for i in 0..500 {
            let k = twinkle(i as f64 * 0.07);
            assert!((2.0..=4.0).contains(&k));
        }
    }
}
