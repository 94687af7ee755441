//! # robotview
//!
//! Robot pose and body geometry rendering for interactive 3D scene viewers.
//!
//! This is the umbrella crate that provides convenient access to all robotview
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Poses, rigid transforms, meshes and the collaborator traits
//!   (frame graph, pose subscriptions, parameters)
//! - **I/O**: Wavefront model loading, TOML parameters and viewer preferences
//! - **Visualization**: The robot renderer and its draw-command abstraction
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use robotview::prelude::*;
//!
//! # fn main() -> robotview::Result<()> {
//! let params = TomlParams::from_toml_str(
//!     "[calibration.vehicle_bounds]\n\
//!      front_left = [0.5, 0.3]\n\
//!      front_right = [0.5, -0.3]\n\
//!      rear_right = [-0.5, -0.3]\n\
//!      rear_left = [-0.5, 0.3]\n",
//! )?;
//! let frames = Rc::new(FrameTree::new("local"));
//! frames.add_frame("body", "local")?;
//! let viewer = Rc::new(SimpleViewer::default());
//! let poses = Rc::new(PoseBus::new());
//!
//! let mut robot = RobotRenderer::new(
//!     RobotRendererDeps {
//!         viewer: viewer.clone(),
//!         params: Rc::new(params),
//!         frames: frames.clone(),
//!         poses: poses.clone(),
//!     },
//!     &RobotRendererConfig::default(),
//! )?;
//!
//! frames.update_transform("body", RigidTransform::identity(), 0)?;
//! let mut ctx = CommandRecorder::new();
//! robot.draw(&mut ctx);
//! assert!(!ctx.commands().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables io and visualization
//! - `io`: Model, parameter and preference files
//! - `visualization`: The robot renderer (implies `io`)

// Re-export core functionality
pub use robotview_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use robotview_io as io;

#[cfg(feature = "visualization")]
pub use robotview_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use robotview_core::*;

    #[cfg(feature = "io")]
    pub use robotview_io::{read_mesh, KeyFile, MeshReader, TomlParams};

    #[cfg(feature = "visualization")]
    pub use robotview_visualization::{
        CommandRecorder, Control, DetailLevel, DrawCommand, DrawContext, EventHandler,
        RobotRenderer, RobotRendererConfig, RobotRendererDeps, Renderer, SimpleViewer, Viewer,
    };
}
