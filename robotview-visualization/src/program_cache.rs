//! Compiled render program for the robot model
//!
//! The model is compiled once into a display list together with its fixed
//! placement (translate, uniform scale, then rotations about Z, Y and X) and
//! replayed on every later frame. The program lives as long as the cache; a
//! placement change in the configuration after the first compile is not
//! picked up.

use nalgebra::{Matrix4, Rotation3, Vector3};
use robotview_core::{optional_array, optional_double, ParamSource};

use crate::draw::{Capability, DrawCommand, DrawContext, ProgramHandle};
use crate::model::ModelAsset;

/// Fixed model placement within the body frame.
///
/// Missing components are identity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub translate: Option<[f64; 3]>,
    pub scale: Option<f64>,
    /// Roll, pitch, yaw in degrees
    pub rotate_xyz: Option<[f64; 3]>,
}

impl Placement {
    /// Read `<prefix>.translate`, `<prefix>.scale` and `<prefix>.rotate_xyz`
    pub fn from_params(params: &dyn ParamSource, prefix: &str) -> Self {
        Self {
            translate: optional_array::<3>(params, &format!("{}.translate", prefix)),
            scale: optional_double(params, &format!("{}.scale", prefix)),
            rotate_xyz: optional_array::<3>(params, &format!("{}.rotate_xyz", prefix)),
        }
    }

    pub fn commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        if let Some(translate) = self.translate {
            commands.push(DrawCommand::Translate(translate));
        }
        if let Some(scale) = self.scale {
            commands.push(DrawCommand::Scale([scale; 3]));
        }
        if let Some([roll, pitch, yaw]) = self.rotate_xyz {
            commands.push(DrawCommand::Rotate {
                degrees: yaw,
                axis: [0.0, 0.0, 1.0],
            });
            commands.push(DrawCommand::Rotate {
                degrees: pitch,
                axis: [0.0, 1.0, 0.0],
            });
            commands.push(DrawCommand::Rotate {
                degrees: roll,
                axis: [1.0, 0.0, 0.0],
            });
        }
        commands
    }

    /// The matrix the placement commands compose to
    pub fn matrix(&self) -> Matrix4<f64> {
        let mut m = Matrix4::identity();
        if let Some(translate) = self.translate {
            m *= Matrix4::new_translation(&Vector3::from(translate));
        }
        if let Some(scale) = self.scale {
            m *= Matrix4::new_scaling(scale);
        }
        if let Some([roll, pitch, yaw]) = self.rotate_xyz {
            m *= Rotation3::from_axis_angle(&Vector3::z_axis(), yaw.to_radians()).to_homogeneous();
            m *= Rotation3::from_axis_angle(&Vector3::y_axis(), pitch.to_radians()).to_homogeneous();
            m *= Rotation3::from_axis_angle(&Vector3::x_axis(), roll.to_radians()).to_homogeneous();
        }
        m
    }
}

/// Lazily compiled, never invalidated program for one model asset
#[derive(Debug)]
pub struct RenderProgramCache {
    param_prefix: String,
    program: Option<ProgramHandle>,
}

impl RenderProgramCache {
    pub fn new(param_prefix: impl Into<String>) -> Self {
        Self {
            param_prefix: param_prefix.into(),
            program: None,
        }
    }

    pub fn program(&self) -> Option<ProgramHandle> {
        self.program
    }

    /// Return the compiled program, compiling it on first use.
    ///
    /// Placement parameters are only read while compiling.
    pub fn get_or_compile(
        &mut self,
        ctx: &mut dyn DrawContext,
        asset: &ModelAsset,
        params: &dyn ParamSource,
    ) -> ProgramHandle {
        if let Some(program) = self.program {
            return program;
        }

        let placement = Placement::from_params(params, &self.param_prefix);
        let program = ctx.compile_program(compile_commands(asset, &placement));
        tracing::debug!(
            model = asset.name(),
            ?placement,
            program = program.0,
            "compiled robot model program"
        );
        self.program = Some(program);
        program
    }
}

fn compile_commands(asset: &ModelAsset, placement: &Placement) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::PushMatrix];
    commands.extend(placement.commands());
    commands.push(DrawCommand::Enable(Capability::Lighting));
    asset.append_draw_commands(&mut commands);
    commands.push(DrawCommand::Disable(Capability::Lighting));
    commands.push(DrawCommand::PopMatrix);
    commands
}
