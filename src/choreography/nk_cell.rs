//! Natural killer cells: wide patrol orbits, indifferent to the cycle.

use cgmath::Vector3;

use crate::units::Seconds;

use super::Rgba;

pub const BODY_RADIUS: f32 = 0.13;
pub const BODY_COLOR: Rgba = [0.42, 0.659, 1.0, 1.0];
pub const BODY_EMISSIVE: Rgba = [0.231, 0.51, 0.965, 0.45];

const SWAY_SPEED_RATIO: f32 = 0.6;
const SWAY_HEIGHT_RATIO: f32 = 0.25;

pub struct NkCell {
    pub patrol_radius: f32,
    pub angular_speed: f32,
    pub phase_offset: f32,
}

/// Three patrollers on the outer perimeter.
pub fn patrol() -> Vec<NkCell> {
    use std::f32::consts::PI;
    [
        (2.7, 0.17, PI * 0.25),
        (2.9, 0.13, PI * 1.1),
        (2.6, 0.2, PI * 1.75),
    ]
    .into_iter()
    .map(|(patrol_radius, angular_speed, phase_offset)| NkCell {
        patrol_radius,
        angular_speed,
        phase_offset,
    })
    .collect()
}

impl NkCell {
    pub fn position(&self, elapsed: Seconds) -> Vector3<f32> {
        let angle = *elapsed * self.angular_speed + self.phase_offset;
        let sway = (*elapsed * self.angular_speed * SWAY_SPEED_RATIO + self.phase_offset).cos();
        Vector3::new(
            self.patrol_radius * angle.cos(),
            sway * self.patrol_radius * SWAY_HEIGHT_RATIO,
            self.patrol_radius * angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn test_patrol_stays_on_its_ring() {
        for cell in patrol() {
            for tick in 0..100 {
                let position = cell.position(Seconds(tick as f32 * 0.37));
                let horizontal = (position.x * position.x + position.z * position.z).sqrt();
                assert!((horizontal - cell.patrol_radius).abs() < 1e-4);
                assert!(position.magnitude().is_finite());
            }
        }
    }
}
