//! Replay a synthetic drive through the robot renderer
//!
//! This demo shows how to:
//! - Wire the robot renderer to a frame tree, a pose bus and a viewer
//! - Feed it a stream of poses the way a state estimator would
//! - Cycle the detail overlay and re-center the camera on the robot
//! - Persist the renderer controls in a preference file
//!
//! Frames are recorded with a `CommandRecorder` and summarized on stdout.
//! Set `RUST_LOG=robotview_visualization=debug` to follow the renderer.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context as _;
use clap::Parser;
use nalgebra::{UnitQuaternion, Vector3};
use robotview_core::{FrameTree, ParamSource, Point3d, Pose, PoseBus, RigidTransform};
use robotview_io::{KeyFile, TomlParams};
use robotview_visualization::{
    CommandRecorder, Control, DrawCommand, EventHandler, MouseButton, MouseEvent, Renderer,
    RobotRenderer, RobotRendererConfig, RobotRendererDeps, SimpleViewer, Viewer,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_PARAMS: &str = r#"
[calibration.vehicle_bounds]
front_left = [0.5, 0.35]
front_right = [0.5, -0.35]
rear_right = [-0.5, -0.35]
rear_left = [-0.5, 0.35]
"#;

#[derive(Parser, Debug)]
#[command(about = "Replay a synthetic drive through the robot renderer")]
struct Args {
    /// Parameter file (TOML) with the vehicle bounds and model settings
    #[arg(long)]
    params: Option<PathBuf>,

    /// Renderer configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory model files are looked up in
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Preference file the renderer controls are loaded from and saved to
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Number of poses to replay
    #[arg(long, default_value_t = 20)]
    frames: usize,

    /// Radius of the circular drive in meters
    #[arg(long, default_value_t = 5.0)]
    radius: f64,

    /// Draw the ground shadow
    #[arg(long)]
    shadow: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let params: Rc<dyn ParamSource> = match &args.params {
        Some(path) => Rc::new(
            TomlParams::from_file(path)
                .with_context(|| format!("reading parameters from {}", path.display()))?,
        ),
        None => Rc::new(TomlParams::from_toml_str(DEFAULT_PARAMS)?),
    };

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config from {}", path.display()))?;
            toml::from_str::<RobotRendererConfig>(&text)?
        }
        None => RobotRendererConfig::default(),
    };
    if let Some(dir) = args.models_dir {
        config.models_dir = dir;
    }

    let viewer = Rc::new(SimpleViewer::default());
    let frames = Rc::new(FrameTree::new(config.pose_frame.clone()));
    frames.add_frame(&config.body_frame, &config.pose_frame)?;
    let poses = Rc::new(PoseBus::new());

    let mut robot = RobotRenderer::new(
        RobotRendererDeps {
            viewer: viewer.clone(),
            params,
            frames: frames.clone(),
            poses: poses.clone(),
        },
        &config,
    )?;

    let mut prefs = match &args.prefs {
        Some(path) => KeyFile::load(path)?,
        None => KeyFile::new(),
    };
    robot.load_preferences(&prefs);
    if args.shadow {
        robot.set_control(Control::Shadow, true);
    }

    println!("=== Robot Viewer Replay ===\n");
    if robot.footprint_only() {
        println!("No model loaded, drawing the footprint");
    } else if let Some(model) = robot.model() {
        println!(
            "Model {} ({} faces, span {:.2} m)",
            model.name(),
            model.mesh().face_count(),
            model.max_span()
        );
    }
    println!();

    let mut ctx = CommandRecorder::new();
    let mut drawn = 0;
    let frame_count = args.frames.max(1);
    for i in 0..frame_count {
        let utime = i as i64 * 100_000;
        let pose = circle_pose(utime, args.radius, i as f64 / frame_count as f64);

        poses.publish(&config.pose_channel, &pose);
        frames.update_transform(
            &config.body_frame,
            RigidTransform::from_translation_rotation(pose.pos.coords, pose.orientation),
            utime,
        )?;

        // a third of the way in, double click to show speed; two thirds in, attitude
        if i == frame_count / 3 || i == 2 * frame_count / 3 {
            robot.mouse_press(&MouseEvent::double_click(MouseButton::Left));
        }

        if !viewer.take_redraw_request() {
            continue;
        }
        ctx.clear_frame();
        robot.draw(&mut ctx);
        drawn += 1;
        print_frame(i, &pose, &ctx);
    }
    tracing::info!(
        poses = frame_count,
        drawn,
        programs = ctx.program_count(),
        "replay finished"
    );

    robot.on_find_requested()?;
    let rig = viewer.eye_look();
    println!(
        "\nCamera re-centered: eye ({:.2}, {:.2}, {:.2}) looking at ({:.2}, {:.2}, {:.2})",
        rig.eye.x, rig.eye.y, rig.eye.z, rig.lookat.x, rig.lookat.y, rig.lookat.z
    );

    if let Some(path) = &args.prefs {
        robot.save_preferences(&mut prefs);
        prefs.save(path)?;
        println!("Saved controls to {}", path.display());
    }

    Ok(())
}

/// Pose on a counter-clockwise circle, `phase` in turns
fn circle_pose(utime: i64, radius: f64, phase: f64) -> Pose {
    let angle = phase * std::f64::consts::TAU;
    let heading = angle + std::f64::consts::FRAC_PI_2;
    let orientation = UnitQuaternion::from_euler_angles(0.0, 0.0, heading);

    let mut pose = Pose::at_rest(
        utime,
        Point3d::new(radius * angle.cos(), radius * angle.sin(), 0.0),
        orientation,
    );
    let speed = 1.5;
    pose.vel = orientation * Vector3::new(speed, 0.0, 0.0);
    pose.rotation_rate = Vector3::new(0.0, 0.0, speed / radius);
    pose
}

fn print_frame(index: usize, pose: &Pose, ctx: &CommandRecorder) {
    let programs = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::CallProgram(_)))
        .count();
    println!(
        "frame {:3} at ({:6.2}, {:6.2}): {} commands, {} program calls",
        index,
        pose.pos.x,
        pose.pos.y,
        ctx.commands().len(),
        programs
    );
    for text in ctx.texts() {
        println!("    {}", text.replace('\n', " | "));
    }
}
