//! Integration tests for robotview-visualization
//!
//! These tests drive the robot renderer the way a host viewer does: poses and
//! frame updates arrive through their buses, the viewer dispatches input and
//! asks the renderer for a frame whenever a redraw was requested.

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use nalgebra::{Point3, UnitQuaternion, Vector3};
use robotview_core::{FrameTree, Point3d, Pose, PoseBus, RigidTransform};
use robotview_io::{KeyFile, TomlParams};
use robotview_visualization::*;

const PARAMS: &str = r#"
[calibration.vehicle_bounds]
front_left = [0.6, 0.4]
front_right = [0.6, -0.4]
rear_right = [-0.6, -0.4]
rear_left = [-0.6, 0.4]

[models.robot]
wavefront_model = "husky.obj"
translate = [0.0, 0.0, 0.1]
scale = 0.5
"#;

/// A unit quad split in two triangles
const MODEL: &str = "\
v -1 -1 0
v 1 -1 0
v 1 1 0
v -1 1 0
vn 0 0 1
f 1//1 2//1 3//1 4//1
";

struct Scene {
    viewer: Rc<SimpleViewer>,
    frames: Rc<FrameTree>,
    poses: Rc<PoseBus>,
    robot: RobotRenderer,
    models_dir: PathBuf,
}

impl Scene {
    fn new(name: &str) -> Self {
        let models_dir = std::env::temp_dir().join(format!("robotview_it_{}", name));
        fs::create_dir_all(&models_dir).unwrap();
        fs::write(models_dir.join("husky.obj"), MODEL).unwrap();

        let viewer = Rc::new(SimpleViewer::default());
        let frames = Rc::new(FrameTree::new("local"));
        frames.add_frame("body", "local").unwrap();
        let poses = Rc::new(PoseBus::new());
        let config = RobotRendererConfig {
            models_dir: models_dir.clone(),
            ..RobotRendererConfig::default()
        };
        let robot = RobotRenderer::new(
            RobotRendererDeps {
                viewer: viewer.clone(),
                params: Rc::new(TomlParams::from_toml_str(PARAMS).unwrap()),
                frames: frames.clone(),
                poses: poses.clone(),
            },
            &config,
        )
        .unwrap();

        Self {
            viewer,
            frames,
            poses,
            robot,
            models_dir,
        }
    }

    /// Publish a pose and mirror it into the frame graph, as a state
    /// estimator would.
    fn receive_pose(&self, utime: i64, position: Point3d, yaw: f64) {
        let orientation = UnitQuaternion::from_euler_angles(0.0, 0.0, yaw);
        let mut pose = Pose::at_rest(utime, position, orientation);
        pose.vel = orientation * Vector3::new(2.0, 0.0, 0.0);
        self.poses.publish("POSE", &pose);
        self.frames
            .update_transform(
                "body",
                RigidTransform::from_translation_rotation(position.coords, orientation),
                utime,
            )
            .unwrap();
    }

    /// Draw a frame if one was requested
    fn render(&mut self, ctx: &mut CommandRecorder) -> bool {
        if !self.viewer.take_redraw_request() {
            return false;
        }
        ctx.clear_frame();
        self.robot.draw(ctx);
        true
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.models_dir);
    }
}

#[test]
fn test_pose_stream_drives_redraws() {
    let mut scene = Scene::new("pose_stream");
    let mut ctx = CommandRecorder::new();

    // the construction-time request renders an empty frame
    assert!(scene.render(&mut ctx));
    assert!(ctx.commands().is_empty());
    assert!(!scene.render(&mut ctx));

    scene.receive_pose(100, Point3d::new(1.0, 2.0, 0.0), 0.0);
    assert!(scene.render(&mut ctx));
    assert!(ctx.commands().iter().any(|c| matches!(c, DrawCommand::CallProgram(_))));
    assert_eq!(scene.robot.latest_pose().map(|p| p.utime), Some(100));
}

#[test]
fn test_model_program_is_reused_across_frames() {
    let mut scene = Scene::new("program_reuse");
    let mut ctx = CommandRecorder::new();

    for utime in 0..5 {
        scene.receive_pose(utime, Point3d::new(utime as f64, 0.0, 0.0), 0.0);
        scene.render(&mut ctx);
    }
    assert_eq!(ctx.program_count(), 1);

    let program = ctx.program(ProgramHandle(0)).unwrap();
    assert_eq!(program.first(), Some(&DrawCommand::PushMatrix));
    assert!(program.contains(&DrawCommand::Translate([0.0, 0.0, 0.1])));
    assert!(program.contains(&DrawCommand::Scale([0.5, 0.5, 0.5])));
    // two triangles from the fan-split quad
    let vertices = program
        .iter()
        .filter(|c| matches!(c, DrawCommand::Vertex3(_)))
        .count();
    assert_eq!(vertices, 6);
}

#[test]
fn test_detail_overlay_follows_double_clicks() {
    let mut scene = Scene::new("overlay");
    let mut ctx = CommandRecorder::new();
    scene.receive_pose(1, Point3d::new(0.0, 0.0, 0.0), std::f64::consts::FRAC_PI_2);

    scene.render(&mut ctx);
    assert!(ctx.texts().is_empty());

    scene
        .robot
        .mouse_press(&MouseEvent::double_click(MouseButton::Left));
    assert!(scene.render(&mut ctx));
    assert_eq!(ctx.texts(), vec!["tv: 2.00 m/s\nrv: 0.00 deg/s"]);

    scene
        .robot
        .mouse_press(&MouseEvent::double_click(MouseButton::Left));
    assert!(scene.render(&mut ctx));
    let texts = ctx.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("r: "));
    assert!(!texts[0].contains("tv:"));

    scene
        .robot
        .mouse_press(&MouseEvent::double_click(MouseButton::Left));
    scene.render(&mut ctx);
    assert!(ctx.texts().is_empty());
}

#[test]
fn test_find_follows_latest_pose() {
    let mut scene = Scene::new("find");
    scene
        .viewer
        .set_look_at(Point3::new(-4.0, 0.0, 6.0), Point3::origin(), Vector3::z());

    scene.receive_pose(1, Point3d::new(3.0, -1.0, 0.0), 0.3);
    scene.robot.on_find_requested().unwrap();
    let rig = scene.viewer.eye_look();
    assert_eq!(rig.lookat, Point3::new(3.0, -1.0, 0.0));
    assert_eq!(rig.eye, Point3::new(-1.0, -1.0, 6.0));

    let mut ctx = CommandRecorder::new();
    assert!(scene.render(&mut ctx));
}

#[test]
fn test_controls_persist_between_sessions() {
    let mut scene = Scene::new("prefs");
    scene.robot.set_control(Control::Bling, false);
    scene.robot.set_control(Control::Shadow, true);

    let mut prefs = KeyFile::new();
    scene.robot.save_preferences(&mut prefs);
    let saved = prefs.to_toml_string().unwrap();

    let mut next = Scene::new("prefs_next");
    next.robot
        .load_preferences(&KeyFile::from_toml_str(&saved).unwrap());
    assert!(!next.robot.controls().get(Control::Bling));
    assert!(next.robot.controls().get(Control::Shadow));

    let mut ctx = CommandRecorder::new();
    next.receive_pose(1, Point3d::origin(), 0.0);
    next.render(&mut ctx);
    assert_eq!(ctx.program_count(), 0);
    assert!(ctx.contains(&DrawCommand::Color([0.0, 0.0, 0.0, 0.2])));
}
