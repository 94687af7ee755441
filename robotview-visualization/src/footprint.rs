//! Plan-view vehicle footprint

use robotview_core::{require_array, ParamSource, Point2d, Result};

use crate::draw::{AttribMask, Capability, DrawCommand, DrawContext, Primitive};

const CORNER_KEYS: [&str; 4] = [
    "calibration.vehicle_bounds.front_left",
    "calibration.vehicle_bounds.front_right",
    "calibration.vehicle_bounds.rear_right",
    "calibration.vehicle_bounds.rear_left",
];

/// Vehicle outline in the body frame: front-left, front-right, rear-right,
/// rear-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub corners: [Point2d; 4],
}

impl Footprint {
    pub fn new(corners: [[f64; 2]; 4]) -> Self {
        Self {
            corners: corners.map(|[x, y]| Point2d::new(x, y)),
        }
    }

    /// Read the four calibrated corners; every one of them is required.
    pub fn from_params(params: &dyn ParamSource) -> Result<Self> {
        let mut corners = [[0.0; 2]; 4];
        for (corner, key) in corners.iter_mut().zip(CORNER_KEYS) {
            *corner = require_array::<2>(params, key)?;
        }
        Ok(Self::new(corners))
    }

    /// Front-left to rear-right distance along x
    pub fn length(&self) -> f64 {
        self.corners[0].x - self.corners[2].x
    }

    /// Front-left to front-right distance along y
    pub fn width(&self) -> f64 {
        (self.corners[0].y - self.corners[1].y).abs()
    }

    /// Where the heading arrow is centered
    pub fn arrow_center(&self) -> Point2d {
        let front_left = self.corners[0];
        Point2d::new(
            front_left.x - self.length() / 2.0,
            front_left.y - self.width() / 2.0,
        )
    }
}

/// Draws the footprint as a translucent quad, an outline and a heading arrow
#[derive(Debug, Clone)]
pub struct FootprintRenderer {
    footprint: Footprint,
}

impl FootprintRenderer {
    pub fn new(footprint: Footprint) -> Self {
        Self { footprint }
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Draw in body-local coordinates; `hovering` fills the arrow.
    pub fn draw(&self, ctx: &mut dyn DrawContext, hovering: bool) {
        let footprint = &self.footprint;

        ctx.submit(DrawCommand::PushAttrib(AttribMask {
            enable: true,
            depth_buffer: true,
        }));
        ctx.submit(DrawCommand::Disable(Capability::DepthTest));
        ctx.submit(DrawCommand::LineWidth(2.0));

        ctx.submit(DrawCommand::Color([1.0, 1.0, 0.0, 0.5]));
        ctx.submit(DrawCommand::Enable(Capability::PolygonOffsetFill));
        ctx.submit(DrawCommand::PolygonOffset {
            factor: 1.0,
            units: 1.0,
        });
        self.outline(ctx, Primitive::Quads);

        ctx.submit(DrawCommand::Color([0.0, 1.0, 0.0, 1.0]));
        self.outline(ctx, Primitive::LineLoop);
        ctx.submit(DrawCommand::Disable(Capability::PolygonOffsetFill));

        let length = footprint.length();
        let width = footprint.width();
        let center = footprint.arrow_center();

        ctx.submit(DrawCommand::PushMatrix);
        ctx.submit(DrawCommand::Translate([center.x, center.y, 0.0]));
        ctx.submit(DrawCommand::Arrow2d {
            length,
            width,
            head_width: length * 0.3,
            body_width: width * 0.5,
            fill: hovering,
        });
        ctx.submit(DrawCommand::PopMatrix);
        ctx.submit(DrawCommand::PopAttrib);
    }

    fn outline(&self, ctx: &mut dyn DrawContext, primitive: Primitive) {
        ctx.submit(DrawCommand::Begin(primitive));
        for corner in &self.footprint.corners {
            ctx.submit(DrawCommand::Vertex2([corner.x, corner.y]));
        }
        ctx.submit(DrawCommand::End);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::CommandRecorder;
    use robotview_core::Error;
    use robotview_io::TomlParams;

    fn unit_footprint() -> Footprint {
        Footprint::new([[1.0, 0.5], [1.0, -0.5], [-1.0, -0.5], [-1.0, 0.5]])
    }

    #[test]
    fn test_dimensions() {
        let footprint = unit_footprint();
        assert_eq!(footprint.length(), 2.0);
        assert_eq!(footprint.width(), 1.0);
        assert_eq!(footprint.arrow_center(), Point2d::new(0.0, 0.0));
    }

    #[test]
    fn test_offset_footprint_arrow_center() {
        let footprint = Footprint::new([[3.0, 1.0], [3.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert_eq!(footprint.arrow_center(), Point2d::new(2.0, 0.5));
    }

    #[test]
    fn test_from_params() {
        let params = TomlParams::from_toml_str(
            "[calibration.vehicle_bounds]\n\
             front_left = [1.0, 0.5]\n\
             front_right = [1.0, -0.5]\n\
             rear_right = [-1.0, -0.5]\n\
             rear_left = [-1.0, 0.5]\n",
        )
        .unwrap();
        assert_eq!(Footprint::from_params(&params).unwrap(), unit_footprint());
    }

    #[test]
    fn test_missing_corner_is_fatal() {
        let params = TomlParams::from_toml_str(
            "[calibration.vehicle_bounds]\n\
             front_left = [1.0, 0.5]\n\
             front_right = [1.0, -0.5]\n\
             rear_right = [-1.0, -0.5]\n",
        )
        .unwrap();
        match Footprint::from_params(&params) {
            Err(Error::MissingParam(key)) => {
                assert_eq!(key, "calibration.vehicle_bounds.rear_left")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_draw_arrow_and_hover() {
        let renderer = FootprintRenderer::new(unit_footprint());
        let mut ctx = CommandRecorder::new();
        renderer.draw(&mut ctx, true);

        assert!(ctx.contains(&DrawCommand::Arrow2d {
            length: 2.0,
            width: 1.0,
            head_width: 0.6,
            body_width: 0.5,
            fill: true,
        }));
        assert!(ctx.contains(&DrawCommand::Translate([0.0, 0.0, 0.0])));

        let quads = ctx
            .commands()
            .iter()
            .position(|c| *c == DrawCommand::Begin(Primitive::Quads))
            .unwrap();
        assert_eq!(ctx.commands()[quads + 1], DrawCommand::Vertex2([1.0, 0.5]));
        assert_eq!(ctx.commands()[quads + 4], DrawCommand::Vertex2([-1.0, 0.5]));
        assert_eq!(ctx.commands().last(), Some(&DrawCommand::PopAttrib));
    }
}
