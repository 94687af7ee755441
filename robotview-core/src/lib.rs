//! Core data structures and traits for robotview
//!
//! This crate provides the data model shared by the robot renderer (poses,
//! rigid transforms, meshes) and the narrow collaborator interfaces it is
//! driven through: the kinematic frame graph, pose telemetry subscriptions
//! and key-path configuration.

pub mod error;
pub mod frames;
pub mod mesh;
pub mod messaging;
pub mod params;
pub mod point;
pub mod pose;
pub mod subscription;
pub mod traits;
pub mod transform;

pub use error::*;
pub use frames::*;
pub use mesh::*;
pub use messaging::*;
pub use params::*;
pub use point::*;
pub use pose::*;
pub use subscription::*;
pub use traits::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point2, Point3, UnitQuaternion, Vector3};
