//! Pose telemetry samples

use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

use crate::point::{Point3d, Vector3d};

/// One pose sample from the telemetry feed.
///
/// Position, velocity and rates are expressed in the pose (world) frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Microseconds since the epoch
    pub utime: i64,
    pub pos: Point3d,
    pub vel: Vector3d,
    pub orientation: UnitQuaternion<f64>,
    /// Angular rate, radians per second
    pub rotation_rate: Vector3d,
    pub accel: Vector3d,
}

impl Pose {
    /// A stationary pose at `pos` with the given orientation
    pub fn at_rest(utime: i64, pos: Point3d, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            utime,
            pos,
            vel: Vector3d::zeros(),
            orientation,
            rotation_rate: Vector3d::zeros(),
            accel: Vector3d::zeros(),
        }
    }

    /// Roll, pitch and yaw in degrees
    pub fn roll_pitch_yaw_degrees(&self) -> [f64; 3] {
        let (roll, pitch, yaw) = self.orientation.euler_angles();
        [roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roll_pitch_yaw_degrees() {
        let pose = Pose::at_rest(
            0,
            Point3d::origin(),
            UnitQuaternion::from_euler_angles(
                10f64.to_radians(),
                -20f64.to_radians(),
                135f64.to_radians(),
            ),
        );
        let rpy = pose.roll_pitch_yaw_degrees();
        assert_relative_eq!(rpy[0], 10.0, epsilon = 1e-9);
        assert_relative_eq!(rpy[1], -20.0, epsilon = 1e-9);
        assert_relative_eq!(rpy[2], 135.0, epsilon = 1e-9);
    }
}
