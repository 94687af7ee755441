//! Pose telemetry subscription

use crate::pose::Pose;
use crate::subscription::{SubscriptionId, Subscribers};

pub type PoseHandler = Box<dyn FnMut(&Pose)>;

/// A source of pose samples delivered on named channels
pub trait PoseSource {
    fn subscribe(&self, channel: &str, handler: PoseHandler) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

/// In-process pose bus; handlers run synchronously on `publish` and may
/// subscribe, unsubscribe or publish again from inside a handler.
#[derive(Default)]
pub struct PoseBus {
    subscribers: Subscribers<PoseHandler>,
}

impl PoseBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `pose` to every handler subscribed to `channel`.
    /// Returns the number of handlers reached.
    pub fn publish(&self, channel: &str, pose: &Pose) -> usize {
        self.subscribers.notify(channel, |handler| handler(pose))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl PoseSource for PoseBus {
    fn subscribe(&self, channel: &str, handler: PoseHandler) -> SubscriptionId {
        self.subscribers.add(channel, handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.remove(id);
    }
}
