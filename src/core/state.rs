// src/core/state.rs

//! The shared server state handed to every connection, plus server-wide
//! statistics counters.

use crate::config::Config;
use crate::core::events::NotificationBus;
use crate::core::storage::db::Db;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// All state shared across connections: the keyspace, the notification bus,
/// the (immutable) configuration, and statistics.
#[derive(Debug)]
pub struct ServerState {
    pub db: Db,
    pub notifications: NotificationBus,
    pub config: Config,
    pub stats: StatsState,
}

impl ServerState {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            db: Db::default(),
            notifications: NotificationBus::new(config.notify_keyspace_events),
            config,
            stats: StatsState::new(),
        })
    }
}

/// Holds all state and logic related to server-wide statistics and monitoring.
#[derive(Debug)]
pub struct StatsState {
    /// The total number of connections accepted by the server since startup.
    total_connections: AtomicU64,
    /// The total number of commands processed by the server since startup.
    total_commands: AtomicU64,
    /// The number of keys modified since startup.
    dirty: AtomicU64,
}

impl Default for StatsState {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsState {
    pub fn new() -> Self {
        Self {
            total_connections: AtomicU64::new(0),
            total_commands: AtomicU64::new(0),
            dirty: AtomicU64::new(0),
        }
    }

    pub fn increment_total_connections(&self) {
        self.total_connections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_total_commands(&self) {
        self.total_commands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_dirty(&self, keys: u64) {
        self.dirty.fetch_add(keys, Ordering::Relaxed);
    }
}
