// src/core/handler.rs

//! Routes parsed commands into the keyspace and accounts for their effects.

use crate::core::commands::command_trait::WriteOutcome;
use crate::core::state::ServerState;
use crate::core::storage::db::ExecutionContext;
use crate::core::{Command, RespValue, SlistDBError};
use std::sync::Arc;

/// Executes commands against the shared state, one at a time per keyspace.
pub struct Router {
    state: Arc<ServerState>,
}

impl Router {
    pub fn new(state: Arc<ServerState>) -> Self {
        Self { state }
    }

    /// Runs a single command to completion under the keyspace lock and
    /// returns its reply.
    pub async fn route(&self, command: Command) -> Result<RespValue, SlistDBError> {
        self.state.stats.increment_total_commands();

        let mut entries = self.state.db.lock_entries().await;
        let mut ctx = ExecutionContext {
            entries: &mut entries,
            notifications: &self.state.notifications,
        };
        let (value, outcome) = command.execute(&mut ctx).await?;

        match outcome {
            WriteOutcome::DidNotWrite => {}
            WriteOutcome::Write { keys_modified } => self.state.stats.add_dirty(keys_modified),
            WriteOutcome::Delete { keys_deleted } => self.state.stats.add_dirty(keys_deleted),
        }
        Ok(value)
    }
}
