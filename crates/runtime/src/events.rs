//! Broadcast notifications for committed configuration changes.
//!
//! Derived state (bonus readouts, candidate lists) re-runs after each
//! committed mutation by subscribing here; publication is best-effort and
//! an empty subscriber list is not an error.

use craft_core::{CopyMenu, Job, ProfileFields};
use tokio::sync::broadcast;

/// Event emitted after a committed mutation.
#[derive(Clone, Debug)]
pub enum ConfigEvent {
    /// The active job changed; the recipe slot and copy menu were cleared.
    JobSwitched { job: Job },

    /// One job's profile changed; `fields` lists what actually differs.
    ProfileChanged { job: Job, fields: ProfileFields },

    /// Every job's profile was updated (patch-all or copy-to-all).
    AllProfilesChanged { fields: ProfileFields },

    /// The copy prompt moved to a new state.
    CopyMenuChanged { state: CopyMenu },
}

/// Broadcast bus for [`ConfigEvent`]s.
pub struct EventBus {
    tx: broadcast::Sender<ConfigEvent>,
}

impl EventBus {
    /// Creates a bus with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a bus with the given channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes an event to all current subscribers.
    pub fn publish(&self, event: ConfigEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers for this event - this is normal, not an error
            tracing::trace!("config event dropped: no subscribers");
        }
    }

    /// Subscribes to events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_receive_published_events() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.publish(ConfigEvent::JobSwitched { job: Job::Weaver });

        match rx.try_recv().unwrap() {
            ConfigEvent::JobSwitched { job } => assert_eq!(job, Job::Weaver),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn publishing_without_subscribers_is_not_an_error() {
        let bus = EventBus::new();
        bus.publish(ConfigEvent::CopyMenuChanged {
            state: CopyMenu::Inactive,
        });
    }
}
