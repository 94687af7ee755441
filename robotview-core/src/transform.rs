//! Rigid transforms between kinematic frames and their render matrices

use nalgebra::{Isometry3, Matrix4, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::point::{Point3d, Vector3d};

/// A rigid transform mapping points expressed in one frame into another.
///
/// `p_to = rotation * p_from + translation`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    pub translation: Vector3d,
    pub rotation: UnitQuaternion<f64>,
}

impl RigidTransform {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            translation: Vector3d::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a transformation from translation and rotation
    pub fn from_translation_rotation(translation: Vector3d, rotation: UnitQuaternion<f64>) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Create a pure translation
    pub fn translation(translation: Vector3d) -> Self {
        Self::from_translation_rotation(translation, UnitQuaternion::identity())
    }

    /// Create a pure rotation
    pub fn rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self::from_translation_rotation(Vector3d::zeros(), rotation)
    }

    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.translation), self.rotation)
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3d) -> Point3d {
        self.rotation * point + self.translation
    }

    /// Rotate a vector without translating it
    pub fn rotate_vector(&self, vector: &Vector3d) -> Vector3d {
        self.rotation * vector
    }

    /// Compose with another transform; `other` is applied first.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            translation: self.rotation * other.translation + self.translation,
            rotation: self.rotation * other.rotation,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            translation: -(rotation * self.translation),
            rotation,
        }
    }

    /// Roll, pitch and yaw (radians) of the rotation part
    pub fn roll_pitch_yaw(&self) -> (f64, f64, f64) {
        self.rotation.euler_angles()
    }

    /// Homogeneous 4x4 matrix, row-major (mathematical) layout.
    pub fn to_row_major(&self) -> [f64; 16] {
        let m = self.to_isometry().to_homogeneous();
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = m[(row, col)];
            }
        }
        out
    }

    /// Homogeneous matrix laid out for a column-major graphics API.
    ///
    /// This is the row-major matrix transposed; feeding `to_row_major`
    /// directly to the GPU would apply the transpose of the pose.
    pub fn to_column_major(&self) -> [f64; 16] {
        transpose_4x4(&self.to_row_major())
    }

    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        self.to_isometry().to_homogeneous()
    }
}

/// Transpose a flat 4x4 matrix
pub fn transpose_4x4(m: &[f64; 16]) -> [f64; 16] {
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[col * 4 + row] = m[row * 4 + col];
        }
    }
    out
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for RigidTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

impl From<Isometry3<f64>> for RigidTransform {
    fn from(isometry: Isometry3<f64>) -> Self {
        Self {
            translation: isometry.translation.vector,
            rotation: isometry.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn sample() -> RigidTransform {
        RigidTransform::from_translation_rotation(
            Vector3d::new(1.5, -2.0, 0.25),
            UnitQuaternion::from_euler_angles(0.1, -0.3, 2.0),
        )
    }

    #[test]
    fn test_double_transpose_is_identity() {
        for t in [RigidTransform::identity(), sample()] {
            let m = t.to_row_major();
            assert_eq!(transpose_4x4(&transpose_4x4(&m)), m);
            assert_eq!(transpose_4x4(&t.to_column_major()), m);
        }
    }

    #[test]
    fn test_row_major_layout() {
        let t = RigidTransform::translation(Vector3d::new(1.0, 2.0, 3.0));
        let m = t.to_row_major();
        // translation lives in the last column of the mathematical matrix
        assert_eq!([m[3], m[7], m[11], m[15]], [1.0, 2.0, 3.0, 1.0]);

        let gl = t.to_column_major();
        assert_eq!([gl[12], gl[13], gl[14], gl[15]], [1.0, 2.0, 3.0, 1.0]);
        // nalgebra stores column-major, so the GPU layout matches its slice
        assert_eq!(&gl[..], t.to_homogeneous().as_slice());
    }

    #[test]
    fn test_transform_point_and_vector() {
        let t = RigidTransform::from_translation_rotation(
            Vector3d::new(10.0, 0.0, 0.0),
            UnitQuaternion::from_euler_angles(0.0, 0.0, FRAC_PI_2),
        );
        let p = t.transform_point(&Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3d::new(10.0, 1.0, 0.0), epsilon = 1e-12);

        let v = t.rotate_vector(&Vector3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vector3d::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_compose_and_inverse() {
        let a = sample();
        let b = RigidTransform::from_translation_rotation(
            Vector3d::new(0.0, 3.0, -1.0),
            UnitQuaternion::from_euler_angles(0.5, 0.0, -1.0),
        );
        let p = Point3d::new(0.3, 0.4, 0.5);

        assert_relative_eq!(
            (a * b).transform_point(&p),
            a.transform_point(&b.transform_point(&p)),
            epsilon = 1e-12
        );

        let round_trip = a.compose(&a.inverse());
        assert_relative_eq!(round_trip.translation, Vector3d::zeros(), epsilon = 1e-12);
        assert_relative_eq!(round_trip.rotation.angle(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_roll_pitch_yaw() {
        let t = RigidTransform::rotation(UnitQuaternion::from_euler_angles(0.2, -0.1, 1.2));
        let (roll, pitch, yaw) = t.roll_pitch_yaw();
        assert_relative_eq!(roll, 0.2, epsilon = 1e-12);
        assert_relative_eq!(pitch, -0.1, epsilon = 1e-12);
        assert_relative_eq!(yaw, 1.2, epsilon = 1e-12);
    }
}
