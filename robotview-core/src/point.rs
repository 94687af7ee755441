//! Point and vector aliases used across robotview

use nalgebra::{Point2, Point3, Vector3};

/// A mesh vertex with single precision coordinates
pub type Point3f = Point3<f32>;

/// A mesh normal with single precision components
pub type Vector3f = Vector3<f32>;

/// A world-space point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A world-space vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A plan-view point, x forward and y left in the body frame
pub type Point2d = Point2<f64>;
