// src/core/storage/db.rs

//! The keyspace: a single map from key to `StoredValue`, plus the execution
//! context commands run against.
//!
//! The whole keyspace sits behind one async mutex. Commands therefore run to
//! completion with exclusive access and no yield points inside data-structure
//! operations, which is exactly the execution model the sorted-list core
//! assumes.

use crate::core::events::{EventClass, NotificationBus};
use crate::core::storage::data_types::StoredValue;
use bytes::Bytes;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

pub type Entries = HashMap<Bytes, StoredValue>;

/// The server's keyspace.
#[derive(Debug, Default)]
pub struct Db {
    entries: Mutex<Entries>,
}

impl Db {
    /// Acquires exclusive access to the keyspace for the duration of one command.
    pub async fn lock_entries(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().await
    }
}

/// Everything a command needs while it executes: the locked keyspace and the
/// notification bus for keyspace events.
pub struct ExecutionContext<'a> {
    pub entries: &'a mut Entries,
    pub notifications: &'a NotificationBus,
}

impl ExecutionContext<'_> {
    /// Publishes a keyspace event for a successful mutation.
    pub fn notify(&self, class: EventClass, event: &'static str, key: &Bytes) {
        self.notifications.publish(class, event, key);
    }
}
