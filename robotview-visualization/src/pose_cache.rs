//! Latest pose sample received from telemetry

use std::cell::RefCell;
use std::rc::Rc;

use robotview_core::{Pose, PoseSource, SubscriptionId};

/// Holds at most one pose; each new sample replaces the previous one.
///
/// A subscribed cache stops receiving samples when it is dropped.
#[derive(Default)]
pub struct PoseCache {
    latest: Rc<RefCell<Option<Pose>>>,
    subscription: Option<(Rc<dyn PoseSource>, SubscriptionId)>,
}

impl PoseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache fed by `channel` on `source`
    pub fn subscribed(source: Rc<dyn PoseSource>, channel: &str) -> Self {
        let latest = Rc::new(RefCell::new(None));
        let slot = latest.clone();
        let id = source.subscribe(
            channel,
            Box::new(move |pose: &Pose| *slot.borrow_mut() = Some(*pose)),
        );
        Self {
            latest,
            subscription: Some((source, id)),
        }
    }

    pub fn replace(&self, pose: Pose) {
        *self.latest.borrow_mut() = Some(pose);
    }

    pub fn latest(&self) -> Option<Pose> {
        *self.latest.borrow()
    }
}

impl Drop for PoseCache {
    fn drop(&mut self) {
        if let Some((source, id)) = self.subscription.take() {
            source.unsubscribe(id);
        }
    }
}
