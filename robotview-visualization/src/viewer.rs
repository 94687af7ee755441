//! Host viewer interfaces
//!
//! The host viewer owns the render loop and input dispatch. Components plug
//! into it as [`Renderer`]s and [`EventHandler`]s and talk back to it through
//! the [`Viewer`] handle.

use std::cell::{Cell, RefCell};

use nalgebra::{Point3, Vector3};

use crate::camera::{Camera, EyeLook};
use crate::draw::DrawContext;

/// Handle to the host viewer, shared by callbacks on the viewer's thread
pub trait Viewer {
    /// Ask for a new frame to be drawn
    fn request_redraw(&self);

    fn eye_look(&self) -> EyeLook;

    fn set_look_at(&self, eye: Point3<f64>, lookat: Point3<f64>, up: Vector3<f64>);
}

/// Something the viewer draws every frame
pub trait Renderer {
    fn name(&self) -> &str;

    fn draw(&mut self, ctx: &mut dyn DrawContext);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A mouse press, with the pick ray through the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub button: MouseButton,
    /// 1 for a single click, 2 for a double click
    pub clicks: u8,
    pub ray_start: Point3<f64>,
    pub ray_dir: Vector3<f64>,
}

impl MouseEvent {
    pub fn double_click(button: MouseButton) -> Self {
        Self {
            button,
            clicks: 2,
            ray_start: Point3::origin(),
            ray_dir: -Vector3::z(),
        }
    }
}

/// Input hooks; returning `true` consumes the event
pub trait EventHandler {
    fn name(&self) -> &str;

    fn mouse_press(&mut self, event: &MouseEvent) -> bool;

    /// The viewer reports whether the pointer is over this handler's object
    fn set_hovering(&mut self, _hovering: bool) {}
}

/// Minimal [`Viewer`] backed by a [`Camera`], counting redraw requests
#[derive(Debug, Default)]
pub struct SimpleViewer {
    camera: RefCell<Camera>,
    redraw_requests: Cell<usize>,
}

impl SimpleViewer {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera: RefCell::new(camera),
            redraw_requests: Cell::new(0),
        }
    }

    pub fn camera(&self) -> Camera {
        self.camera.borrow().clone()
    }

    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests.get()
    }

    /// Consume pending redraw requests, returning whether there were any
    pub fn take_redraw_request(&self) -> bool {
        self.redraw_requests.replace(0) > 0
    }
}

impl Viewer for SimpleViewer {
    fn request_redraw(&self) {
        self.redraw_requests.set(self.redraw_requests.get() + 1);
    }

    fn eye_look(&self) -> EyeLook {
        self.camera.borrow().eye_look()
    }

    fn set_look_at(&self, eye: Point3<f64>, lookat: Point3<f64>, up: Vector3<f64>) {
        self.camera.borrow_mut().set_look_at(eye, lookat, up);
    }
}
