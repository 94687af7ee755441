//! Camera utilities for 3D visualization

use nalgebra::{Matrix4, Point3, Vector3};

/// Eye, look-at point and up vector of a viewer camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeLook {
    pub eye: Point3<f64>,
    pub lookat: Point3<f64>,
    pub up: Vector3<f64>,
}

impl EyeLook {
    /// Move the whole rig so it looks at `target`, keeping the viewing
    /// direction and the eye-to-lookat distance. `up` is left untouched.
    pub fn recentered_on(&self, target: Point3<f64>) -> Self {
        let offset = self.eye - self.lookat;
        Self {
            eye: target + offset,
            lookat: target,
            up: self.up,
        }
    }
}

/// A 3D camera looking at a scene
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
}

impl Camera {
    pub fn new(position: Point3<f64>, target: Point3<f64>, up: Vector3<f64>) -> Self {
        Self {
            position,
            target,
            up,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    pub fn eye_look(&self) -> EyeLook {
        EyeLook {
            eye: self.position,
            lookat: self.target,
            up: self.up,
        }
    }

    pub fn set_look_at(&mut self, eye: Point3<f64>, lookat: Point3<f64>, up: Vector3<f64>) {
        self.position = eye;
        self.target = lookat;
        self.up = up;
    }
}

impl Default for Camera {
    /// Looking down at the ground plane from behind, z up
    fn default() -> Self {
        Self::new(
            Point3::new(-10.0, 0.0, 10.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }
}
