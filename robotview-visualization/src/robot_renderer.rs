//! Robot pose renderer
//!
//! [`RobotRenderer`] draws the robot body every frame at its current pose in
//! the drawing frame, either as the configured 3D model or as the calibrated
//! footprint, plus an optional motion overlay and ground shadow. The same
//! component handles the viewer input that cycles the overlay detail and the
//! "find" action that re-centers the camera on the robot.

use std::path::PathBuf;
use std::rc::Rc;

use nalgebra::Point3;
use serde::Deserialize;

use robotview_core::{FrameGraph, ParamSource, Pose, PoseSource, Result};
use robotview_io::KeyFile;

use crate::controls::{Control, RobotControls};
use crate::draw::{Capability, DrawCommand, DrawContext, ProgramHandle};
use crate::footprint::{Footprint, FootprintRenderer};
use crate::frame_resolver::FrameResolver;
use crate::model::ModelAsset;
use crate::overlay::{DetailLevel, OverlayTextRenderer};
use crate::pose_cache::PoseCache;
use crate::program_cache::RenderProgramCache;
use crate::shadow::draw_shadow;
use crate::viewer::{EventHandler, MouseEvent, Renderer, Viewer};

/// Name of the renderer in the viewer and its preference section
pub const RENDERER_NAME: &str = "Robot";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RobotRendererConfig {
    /// Parameter prefix of the model keys (`wavefront_model`, `translate`, ...)
    pub model_param_prefix: String,
    /// Directory model file names are resolved against
    pub models_dir: PathBuf,
    pub pose_channel: String,
    pub body_frame: String,
    /// Frame the pose velocities and rates are expressed in
    pub pose_frame: String,
}

impl Default for RobotRendererConfig {
    fn default() -> Self {
        Self {
            model_param_prefix: "models.robot".to_string(),
            models_dir: PathBuf::from("models"),
            pose_channel: "POSE".to_string(),
            body_frame: "body".to_string(),
            pose_frame: "local".to_string(),
        }
    }
}

/// Collaborators the renderer is wired to
pub struct RobotRendererDeps {
    pub viewer: Rc<dyn Viewer>,
    pub params: Rc<dyn ParamSource>,
    pub frames: Rc<dyn FrameGraph>,
    pub poses: Rc<dyn PoseSource>,
}

/// What the robot is drawn as in a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPath {
    /// The body pose is unknown; nothing is drawn
    NoTransform,
    Model,
    Footprint,
}

impl DrawPath {
    pub fn select(has_transform: bool, bling: bool, has_model: bool) -> Self {
        if !has_transform {
            DrawPath::NoTransform
        } else if bling && has_model {
            DrawPath::Model
        } else {
            DrawPath::Footprint
        }
    }
}

/// The robot component; dropping it cancels its frame and pose subscriptions.
pub struct RobotRenderer {
    viewer: Rc<dyn Viewer>,
    params: Rc<dyn ParamSource>,
    frames: FrameResolver,
    poses: PoseCache,
    model: Option<ModelAsset>,
    program_cache: RenderProgramCache,
    footprint: FootprintRenderer,
    overlay: OverlayTextRenderer,
    controls: RobotControls,
    detail: DetailLevel,
    hovering: bool,
}

impl RobotRenderer {
    /// Wire the renderer to its collaborators.
    ///
    /// Fails if the footprint calibration is missing. A missing or unloadable
    /// model only disables the Bling control.
    pub fn new(deps: RobotRendererDeps, config: &RobotRendererConfig) -> Result<Self> {
        let footprint = Footprint::from_params(deps.params.as_ref())?;

        let model = match ModelAsset::from_params(
            deps.params.as_ref(),
            &config.model_param_prefix,
            &config.models_dir,
        ) {
            Ok(model) => Some(model),
            Err(err) => {
                tracing::warn!(%err, "drawing footprint only");
                None
            }
        };

        let mut controls = RobotControls::new();
        if model.is_none() {
            controls.set_enabled(Control::Bling, false);
        }

        let frames = FrameResolver::new(deps.frames, &config.body_frame, deps.viewer.clone());
        let poses = PoseCache::subscribed(deps.poses, &config.pose_channel);
        deps.viewer.request_redraw();

        Ok(Self {
            viewer: deps.viewer,
            params: deps.params,
            frames,
            poses,
            model,
            program_cache: RenderProgramCache::new(config.model_param_prefix.clone()),
            footprint: FootprintRenderer::new(footprint),
            overlay: OverlayTextRenderer::new(config.pose_frame.clone()),
            controls,
            detail: DetailLevel::None,
            hovering: false,
        })
    }

    pub fn footprint_only(&self) -> bool {
        self.model.is_none()
    }

    pub fn model(&self) -> Option<&ModelAsset> {
        self.model.as_ref()
    }

    pub fn footprint(&self) -> &Footprint {
        self.footprint.footprint()
    }

    pub fn controls(&self) -> &RobotControls {
        &self.controls
    }

    /// Change a control from the UI; a change requests a redraw.
    pub fn set_control(&mut self, control: Control, value: bool) {
        if self.controls.set(control, value) {
            self.viewer.request_redraw();
        }
    }

    pub fn detail_level(&self) -> DetailLevel {
        self.detail
    }

    pub fn latest_pose(&self) -> Option<Pose> {
        self.poses.latest()
    }

    /// Restore the controls; a changed value requests a redraw.
    pub fn load_preferences(&mut self, prefs: &KeyFile) {
        if self.controls.load_from(prefs, RENDERER_NAME) {
            self.viewer.request_redraw();
        }
    }

    pub fn save_preferences(&self, prefs: &mut KeyFile) {
        self.controls.save_to(prefs, RENDERER_NAME);
    }

    /// Which path the next draw takes
    pub fn draw_path(&self) -> DrawPath {
        DrawPath::select(
            self.frames.has_body_transform(),
            self.controls.get(Control::Bling),
            self.model.is_some(),
        )
    }

    /// Cycle the overlay detail level
    pub fn on_double_click(&mut self) {
        self.detail = self.detail.next();
        tracing::debug!(detail = ?self.detail, "detail level changed");
        self.viewer.request_redraw();
    }

    /// Move the camera rig so it looks at the robot, keeping its viewing
    /// direction and distance.
    pub fn on_find_requested(&self) -> Result<()> {
        let body = self.frames.body_to_drawing()?;
        let rig = self
            .viewer
            .eye_look()
            .recentered_on(Point3::from(body.translation));
        self.viewer.set_look_at(rig.eye, rig.lookat, rig.up);
        self.viewer.request_redraw();
        Ok(())
    }

    fn draw_model(ctx: &mut dyn DrawContext, program: ProgramHandle) {
        ctx.submit(DrawCommand::Enable(Capability::Blend));
        ctx.submit(DrawCommand::Enable(Capability::RescaleNormal));
        ctx.submit(DrawCommand::BlendAlpha);
        ctx.submit(DrawCommand::ShadeSmooth);
        ctx.submit(DrawCommand::Enable(Capability::Lighting));
        ctx.submit(DrawCommand::CallProgram(program));
    }
}

impl Renderer for RobotRenderer {
    fn name(&self) -> &str {
        RENDERER_NAME
    }

    fn draw(&mut self, ctx: &mut dyn DrawContext) {
        let path = self.draw_path();
        if path == DrawPath::NoTransform {
            tracing::trace!(
                body = self.frames.body_frame(),
                drawing = self.frames.drawing_frame(),
                "no body transform, skipping robot"
            );
            return;
        }
        let body_to_drawing = match self.frames.body_to_drawing() {
            Ok(transform) => transform,
            Err(err) => {
                tracing::trace!(%err, "skipping robot");
                return;
            }
        };

        let program = match (&self.model, path) {
            (Some(model), DrawPath::Model) => {
                Some(self.program_cache.get_or_compile(ctx, model, self.params.as_ref()))
            }
            _ => None,
        };

        ctx.submit(DrawCommand::Enable(Capability::DepthTest));
        ctx.submit(DrawCommand::PushMatrix);
        ctx.submit(DrawCommand::MultMatrix(body_to_drawing.to_column_major()));
        match program {
            Some(program) => Self::draw_model(ctx, program),
            None => self.footprint.draw(ctx, self.hovering),
        }
        ctx.submit(DrawCommand::PopMatrix);

        if self.detail != DetailLevel::None {
            if let Some(pose) = self.poses.latest() {
                self.overlay.draw(
                    ctx,
                    self.detail,
                    &pose,
                    &self.frames,
                    &body_to_drawing.translation,
                );
            }
        }

        if self.controls.get(Control::Shadow) {
            draw_shadow(ctx, &body_to_drawing);
        }
    }
}

impl EventHandler for RobotRenderer {
    fn name(&self) -> &str {
        RENDERER_NAME
    }

    fn mouse_press(&mut self, event: &MouseEvent) -> bool {
        if event.clicks == 2 {
            self.on_double_click();
        }
        false
    }

    fn set_hovering(&mut self, hovering: bool) {
        if self.hovering != hovering {
            self.hovering = hovering;
            self.viewer.request_redraw();
        }
    }
}
