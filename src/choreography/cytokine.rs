//! The cytokine particle cloud: ambient depth, untouched by the cycle.
//!
//! Points are scattered once with a seeded generator so the cloud is
//! identical on every run, then the whole field drifts with a slow yaw and
//! a gentle tilt sway.

use cgmath::{Matrix3, Rad, Vector3};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::units::Seconds;

use super::Rgba;

pub const PARTICLE_COUNT: usize = 130;
pub const COLOR: Rgba = [0.431, 0.906, 0.718, 0.55];

const SCATTER_SEED: u64 = 0x5EED_CE11;
const INNER_RADIUS: f32 = 1.1;
const SHELL_DEPTH: f32 = 2.4;
const YAW_SPEED: f32 = 0.05;
const TILT_SPEED: f32 = 0.03;
const TILT_AMPLITUDE: f32 = 0.06;

pub struct CytokineCloud {
    points: Vec<Vector3<f32>>,
}

impl CytokineCloud {
    pub fn new() -> Self {
        use std::f32::consts::TAU;
        let mut rng = ChaCha8Rng::seed_from_u64(SCATTER_SEED);
        let points = (0..PARTICLE_COUNT)
            .map(|_| {
                let radius = INNER_RADIUS + rng.random_range(0.0..SHELL_DEPTH);
                let azimuth = rng.random_range(0.0..TAU);
                let polar = (rng.random_range(-1.0f32..1.0)).acos();
                Vector3::new(
                    radius * polar.sin() * azimuth.cos(),
                    radius * polar.cos(),
                    radius * polar.sin() * azimuth.sin(),
                )
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vector3<f32>] {
        &self.points
    }

    /// Slow ambient drift, independent of the phase cycle.
    pub fn orientation(&self, elapsed: Seconds) -> Matrix3<f32> {
        let yaw = *elapsed * YAW_SPEED;
        let tilt = (*elapsed * TILT_SPEED).sin() * TILT_AMPLITUDE;
        Matrix3::from_angle_y(Rad(yaw)) * Matrix3::from_angle_x(Rad(tilt))
    }
}

impl Default for CytokineCloud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn test_scatter_is_reproducible() {
        let first = CytokineCloud::new();
        let second = CytokineCloud::new();
        assert_eq!(first.points(), second.points());
        assert_eq!(first.points().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_points_fill_the_shell() {
        for point in CytokineCloud::new().points() {
            let distance = point.magnitude();
            assert!(distance >= INNER_RADIUS - 1e-4);
            assert!(distance <= INNER_RADIUS + SHELL_DEPTH + 1e-4);
        }
    }

    #[test]
    fn test_orientation_preserves_distance() {
        let cloud = CytokineCloud::new();
        let rotation = cloud.orientation(Seconds(42.0));
        let point = cloud.points()[0];
        let rotated = rotation * point;
        assert!((rotated.magnitude() - point.magnitude()).abs() < 1e-4);
    }
}
