// src/core/events.rs

//! The keyspace notification bus. Successful mutations publish events such as
//! `sladd`, `slrem`, and `del` for interested subscribers.

use bytes::Bytes;
use tokio::sync::broadcast::{self, Sender as BroadcastSender};
use tracing::debug;

/// The capacity of the broadcast channel for keyspace events. Large enough to
/// absorb bursts of writes without lagging slow subscribers immediately.
const EVENT_BUS_CAPACITY: usize = 16384;

/// The notification class an event belongs to, mirroring the classes clients
/// can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    Generic,
    List,
}

/// A single keyspace event: what happened, to which key.
#[derive(Debug, Clone)]
pub struct KeyspaceEvent {
    pub class: EventClass,
    pub event: &'static str,
    pub key: Bytes,
}

/// The central distribution hub for keyspace events.
#[derive(Debug)]
pub struct NotificationBus {
    enabled: bool,
    sender: BroadcastSender<KeyspaceEvent>,
}

impl NotificationBus {
    pub fn new(enabled: bool) -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUS_CAPACITY);
        Self { enabled, sender }
    }

    /// Publishes an event to all subscribers. A bus with no subscribers (or
    /// one disabled by configuration) drops the event silently.
    pub fn publish(&self, class: EventClass, event: &'static str, key: &Bytes) {
        if !self.enabled {
            return;
        }
        let notification = KeyspaceEvent {
            class,
            event,
            key: key.clone(),
        };
        if self.sender.send(notification).is_err() {
            debug!("Published keyspace event '{}' with no active subscribers.", event);
        }
    }

    /// Provides a new receiver for a subscriber task.
    pub fn subscribe(&self) -> broadcast::Receiver<KeyspaceEvent> {
        self.sender.subscribe()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(true)
    }
}
