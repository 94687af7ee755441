//! Cosmetic ground shadow under the robot

use robotview_core::RigidTransform;

use crate::draw::{Capability, DrawCommand, DrawContext, Primitive};

const HALF_SIZE: f64 = 0.3;
const OFFSET: [f64; 3] = [-0.04, 0.03, 0.0];
const COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.2];

/// Draw a translucent square on the ground plane below `body_to_drawing`,
/// turned 45 degrees past the body heading.
pub fn draw_shadow(ctx: &mut dyn DrawContext, body_to_drawing: &RigidTransform) {
    let (_, _, yaw) = body_to_drawing.roll_pitch_yaw();
    let position = body_to_drawing.translation;

    ctx.submit(DrawCommand::Color(COLOR));
    ctx.submit(DrawCommand::PushMatrix);
    ctx.submit(DrawCommand::Translate([position.x, position.y, 0.0]));
    ctx.submit(DrawCommand::Translate(OFFSET));
    ctx.submit(DrawCommand::Rotate {
        degrees: yaw.to_degrees() + 45.0,
        axis: [0.0, 0.0, 1.0],
    });

    ctx.submit(DrawCommand::Enable(Capability::DepthTest));
    ctx.submit(DrawCommand::Enable(Capability::Blend));
    ctx.submit(DrawCommand::BlendAlpha);
    ctx.submit(DrawCommand::Begin(Primitive::Quads));
    for corner in [
        [HALF_SIZE, -HALF_SIZE],
        [HALF_SIZE, HALF_SIZE],
        [-HALF_SIZE, HALF_SIZE],
        [-HALF_SIZE, -HALF_SIZE],
    ] {
        ctx.submit(DrawCommand::Vertex2(corner));
    }
    ctx.submit(DrawCommand::End);
    ctx.submit(DrawCommand::PopMatrix);
    ctx.submit(DrawCommand::Disable(Capability::Blend));
    ctx.submit(DrawCommand::Disable(Capability::DepthTest));
}
