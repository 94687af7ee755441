//! Kinematic frame graph
//!
//! [`FrameGraph`] is the narrow interface the renderer consumes. [`FrameTree`]
//! is an in-memory implementation: every frame hangs off a parent frame through
//! a rigid transform, and transforms between arbitrary frames are obtained by
//! walking both frames up to the root.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::point::Vector3d;
use crate::subscription::{SubscriptionId, Subscribers};
use crate::transform::RigidTransform;

/// Notification that a frame's transform relative to its parent changed
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub frame: String,
    pub relative_to: String,
    pub utime: i64,
}

pub type FrameUpdateHandler = Box<dyn FnMut(&FrameUpdate)>;

/// Read access to a graph of kinematic frames
pub trait FrameGraph {
    /// Name of the frame every other frame is ultimately expressed in
    fn root_frame_name(&self) -> String;

    /// Whether a transform from `from` to `to` can be computed right now
    fn has_transform(&self, from: &str, to: &str) -> bool;

    /// Transform mapping points in `from` into `to`
    fn get_transform(&self, from: &str, to: &str) -> Result<RigidTransform>;

    /// Rotate a vector from `from` into `to`, ignoring translation
    fn rotate_vector(&self, from: &str, to: &str, vector: &Vector3d) -> Result<Vector3d> {
        Ok(self.get_transform(from, to)?.rotate_vector(vector))
    }

    /// Call `handler` whenever `frame` is updated
    fn subscribe_frame_change(&self, frame: &str, handler: FrameUpdateHandler) -> SubscriptionId;

    fn unsubscribe_frame_change(&self, id: SubscriptionId);
}

#[derive(Debug, Clone)]
struct FrameLink {
    relative_to: String,
    transform: Option<RigidTransform>,
}

/// In-memory frame tree with change notification
pub struct FrameTree {
    root: String,
    links: RefCell<HashMap<String, FrameLink>>,
    subscribers: Subscribers<FrameUpdateHandler>,
}

impl FrameTree {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            links: RefCell::new(HashMap::new()),
            subscribers: Subscribers::default(),
        }
    }

    /// Declare `frame` as a child of `relative_to`; it has no transform until
    /// the first [`FrameTree::update_transform`].
    pub fn add_frame(&self, frame: &str, relative_to: &str) -> Result<()> {
        if frame == self.root {
            return Err(Error::InvalidData(format!(
                "cannot re-parent root frame '{}'",
                frame
            )));
        }
        self.links.borrow_mut().insert(
            frame.to_string(),
            FrameLink {
                relative_to: relative_to.to_string(),
                transform: None,
            },
        );
        Ok(())
    }

    /// Replace the transform of `frame` relative to its parent and notify subscribers
    pub fn update_transform(&self, frame: &str, transform: RigidTransform, utime: i64) -> Result<()> {
        let relative_to = {
            let mut links = self.links.borrow_mut();
            let link = links
                .get_mut(frame)
                .ok_or_else(|| Error::InvalidData(format!("unknown frame '{}'", frame)))?;
            link.transform = Some(transform);
            link.relative_to.clone()
        };

        tracing::trace!(frame, relative_to = %relative_to, utime, "frame updated");
        self.notify(&FrameUpdate {
            frame: frame.to_string(),
            relative_to,
            utime,
        });
        Ok(())
    }

    /// Declare a frame (if needed) and set its transform in one go
    pub fn set_frame(
        &self,
        frame: &str,
        relative_to: &str,
        transform: RigidTransform,
        utime: i64,
    ) -> Result<()> {
        let declared = self
            .links
            .borrow()
            .get(frame)
            .is_some_and(|link| link.relative_to == relative_to);
        if !declared {
            self.add_frame(frame, relative_to)?;
        }
        self.update_transform(frame, transform, utime)
    }

    /// Number of live frame-change subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&self, update: &FrameUpdate) {
        self.subscribers.notify(&update.frame, |handler| handler(update));
    }

    /// Transform from `frame` into the root frame
    fn to_root(&self, frame: &str) -> Option<RigidTransform> {
        let links = self.links.borrow();
        let mut current = frame;
        let mut accumulated = RigidTransform::identity();

        // A chain longer than the number of links means a cycle.
        for _ in 0..=links.len() {
            if current == self.root {
                return Some(accumulated);
            }
            let link = links.get(current)?;
            accumulated = link.transform?.compose(&accumulated);
            current = &link.relative_to;
        }
        None
    }
}

impl FrameGraph for FrameTree {
    fn root_frame_name(&self) -> String {
        self.root.clone()
    }

    fn has_transform(&self, from: &str, to: &str) -> bool {
        self.to_root(from).is_some() && self.to_root(to).is_some()
    }

    fn get_transform(&self, from: &str, to: &str) -> Result<RigidTransform> {
        match (self.to_root(from), self.to_root(to)) {
            (Some(from_root), Some(to_root)) => Ok(to_root.inverse().compose(&from_root)),
            _ => Err(Error::missing_transform(from, to)),
        }
    }

    fn subscribe_frame_change(&self, frame: &str, handler: FrameUpdateHandler) -> SubscriptionId {
        self.subscribers.add(frame, handler)
    }

    fn unsubscribe_frame_change(&self, id: SubscriptionId) {
        self.subscribers.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3d;
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;
    use std::cell::Cell;
    use std::f64::consts::FRAC_PI_2;
    use std::rc::Rc;

    fn tree() -> FrameTree {
        let tree = FrameTree::new("local");
        tree.set_frame(
            "body",
            "local",
            RigidTransform::from_translation_rotation(
                Vector3d::new(10.0, 5.0, 0.0),
                UnitQuaternion::from_euler_angles(0.0, 0.0, FRAC_PI_2),
            ),
            1,
        )
        .unwrap();
        tree.set_frame(
            "laser",
            "body",
            RigidTransform::translation(Vector3d::new(1.0, 0.0, 0.5)),
            1,
        )
        .unwrap();
        tree
    }

    #[test]
    fn test_transform_to_root() {
        let tree = tree();
        assert!(tree.has_transform("laser", "local"));

        let t = tree.get_transform("laser", "local").unwrap();
        let p = t.transform_point(&Point3d::origin());
        assert_relative_eq!(p, Point3d::new(10.0, 6.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_transform_between_siblings_and_back() {
        let tree = tree();
        let there = tree.get_transform("local", "laser").unwrap();
        let back = tree.get_transform("laser", "local").unwrap();
        let p = Point3d::new(0.1, 0.2, 0.3);
        assert_relative_eq!(
            back.transform_point(&there.transform_point(&p)),
            p,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_missing_transform() {
        let tree = FrameTree::new("local");
        tree.add_frame("body", "local").unwrap();
        assert!(!tree.has_transform("body", "local"));
        assert!(matches!(
            tree.get_transform("body", "local"),
            Err(Error::MissingTransform { .. })
        ));
        assert!(!tree.has_transform("unknown", "local"));
        assert!(tree.update_transform("unknown", RigidTransform::identity(), 0).is_err());
    }

    #[test]
    fn test_rotate_vector_ignores_translation() {
        let tree = tree();
        let v = tree
            .rotate_vector("local", "body", &Vector3d::new(0.0, 1.0, 0.0))
            .unwrap();
        assert_relative_eq!(v, Vector3d::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_frame_change_subscription() {
        let tree = tree();
        let body_updates = Rc::new(Cell::new(0));
        let counter = body_updates.clone();
        let id = tree.subscribe_frame_change(
            "body",
            Box::new(move |update: &FrameUpdate| {
                assert_eq!(update.frame, "body");
                counter.set(counter.get() + 1);
            }),
        );
        assert_eq!(tree.subscriber_count(), 1);

        tree.update_transform("laser", RigidTransform::identity(), 2).unwrap();
        assert_eq!(body_updates.get(), 0);
        tree.update_transform("body", RigidTransform::identity(), 3).unwrap();
        assert_eq!(body_updates.get(), 1);

        tree.unsubscribe_frame_change(id);
        assert_eq!(tree.subscriber_count(), 0);
        tree.update_transform("body", RigidTransform::identity(), 4).unwrap();
        assert_eq!(body_updates.get(), 1);
    }

    #[test]
    fn test_root_cannot_be_reparented() {
        let tree = FrameTree::new("local");
        assert!(tree.add_frame("local", "body").is_err());
        assert_eq!(tree.root_frame_name(), "local");
    }
}
