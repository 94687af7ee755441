//! Motion statistics drawn next to the robot

use robotview_core::{Pose, Result, Vector3d};

use crate::draw::{DrawCommand, DrawContext, TextStyle};
use crate::frame_resolver::FrameResolver;

/// How much detail the overlay text shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailLevel {
    #[default]
    None,
    /// Forward speed and yaw rate in the body frame
    Speed,
    /// Roll, pitch and yaw
    Attitude,
}

impl DetailLevel {
    /// None -> Speed -> Attitude -> None
    pub fn next(self) -> Self {
        match self {
            DetailLevel::None => DetailLevel::Speed,
            DetailLevel::Speed => DetailLevel::Attitude,
            DetailLevel::Attitude => DetailLevel::None,
        }
    }
}

/// Formats pose statistics and draws them at the body origin
#[derive(Debug, Clone)]
pub struct OverlayTextRenderer {
    /// Frame the pose velocities are expressed in
    pose_frame: String,
}

impl OverlayTextRenderer {
    pub fn new(pose_frame: impl Into<String>) -> Self {
        Self {
            pose_frame: pose_frame.into(),
        }
    }

    pub fn format_text(
        &self,
        level: DetailLevel,
        pose: &Pose,
        frames: &FrameResolver,
    ) -> Result<Option<String>> {
        let text = match level {
            DetailLevel::None => None,
            DetailLevel::Speed => {
                let vel = frames.rotate_into_body(&self.pose_frame, &pose.vel)?;
                let rate = frames.rotate_into_body(&self.pose_frame, &pose.rotation_rate)?;
                Some(speed_text(&vel, &rate))
            }
            DetailLevel::Attitude => Some(attitude_text(pose)),
        };
        Ok(text)
    }

    /// Draw the overlay for `level` at `anchor` (drawing frame)
    pub fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        level: DetailLevel,
        pose: &Pose,
        frames: &FrameResolver,
        anchor: &Vector3d,
    ) {
        let text = match self.format_text(level, pose, frames) {
            Ok(Some(text)) => text,
            Ok(None) => return,
            Err(err) => {
                tracing::trace!(%err, "skipping detail overlay");
                return;
            }
        };

        ctx.submit(DrawCommand::Color([1.0, 1.0, 1.0, 1.0]));
        ctx.submit(DrawCommand::Text {
            position: [anchor.x, anchor.y, anchor.z],
            text,
            style: TextStyle::DropShadow,
        });
    }
}

/// Forward speed and yaw rate, both already rotated into the body frame
pub fn speed_text(vel_body: &Vector3d, rate_body: &Vector3d) -> String {
    format!(
        "tv: {:.2} m/s\nrv: {:.2} deg/s",
        vel_body.x,
        rate_body.z.to_degrees()
    )
}

pub fn attitude_text(pose: &Pose) -> String {
    let [roll, pitch, yaw] = pose.roll_pitch_yaw_degrees();
    format!("r: {:6.2}\np: {:6.2}\ny: {:6.2}", roll, pitch, yaw)
}
