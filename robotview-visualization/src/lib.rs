//! Robot pose rendering for a 3D viewer
//!
//! This crate draws a robot at its live pose inside a host 3D viewer:
//! - Body pose lookup through the kinematic frame graph
//! - Wavefront model rendering, compiled once into a reusable program
//! - Footprint fallback with a heading arrow
//! - Speed and attitude overlay text
//! - Ground shadow
//! - Camera re-centering on the robot
//!
//! Drawing goes through the [`DrawContext`] abstraction so the renderer can
//! run against any immediate-mode backend, or against a [`CommandRecorder`]
//! in tests.

pub mod camera;
pub mod controls;
pub mod draw;
pub mod footprint;
pub mod frame_resolver;
pub mod model;
pub mod overlay;
pub mod pose_cache;
pub mod program_cache;
pub mod robot_renderer;
pub mod shadow;
pub mod viewer;

pub use camera::*;
pub use controls::*;
pub use draw::*;
pub use footprint::*;
pub use frame_resolver::*;
pub use model::*;
pub use overlay::*;
pub use pose_cache::*;
pub use program_cache::*;
pub use robot_renderer::*;
pub use shadow::*;
pub use viewer::*;
