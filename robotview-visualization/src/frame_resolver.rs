//! Body-to-drawing frame lookups

use std::rc::Rc;

use robotview_core::{FrameGraph, FrameUpdate, RigidTransform, Result, SubscriptionId, Vector3d};

use crate::viewer::Viewer;

/// Resolves the robot body pose in the viewer's drawing frame.
///
/// The drawing frame is the root of the frame graph. Every update of the body
/// frame requests a redraw from the viewer, until the resolver is dropped.
pub struct FrameResolver {
    graph: Rc<dyn FrameGraph>,
    body_frame: String,
    drawing_frame: String,
    subscription: SubscriptionId,
}

impl FrameResolver {
    pub fn new(graph: Rc<dyn FrameGraph>, body_frame: &str, viewer: Rc<dyn Viewer>) -> Self {
        let drawing_frame = graph.root_frame_name();
        let subscription = graph.subscribe_frame_change(
            body_frame,
            Box::new(move |update: &FrameUpdate| {
                tracing::trace!(frame = %update.frame, utime = update.utime, "body moved");
                viewer.request_redraw();
            }),
        );
        Self {
            graph,
            body_frame: body_frame.to_string(),
            drawing_frame,
            subscription,
        }
    }

    pub fn body_frame(&self) -> &str {
        &self.body_frame
    }

    pub fn drawing_frame(&self) -> &str {
        &self.drawing_frame
    }

    pub fn has_body_transform(&self) -> bool {
        self.graph.has_transform(&self.body_frame, &self.drawing_frame)
    }

    /// Current body pose in the drawing frame
    pub fn body_to_drawing(&self) -> Result<RigidTransform> {
        self.graph.get_transform(&self.body_frame, &self.drawing_frame)
    }

    /// Rotate a vector expressed in `from` into the body frame
    pub fn rotate_into_body(&self, from: &str, vector: &Vector3d) -> Result<Vector3d> {
        self.graph.rotate_vector(from, &self.body_frame, vector)
    }
}

impl Drop for FrameResolver {
    fn drop(&mut self) {
        self.graph.unsubscribe_frame_change(self.subscription);
    }
}
