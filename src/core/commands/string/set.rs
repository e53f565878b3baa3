// src/core/commands/string/set.rs

use crate::core::commands::command_trait::{ExecutableCommand, ParseCommand, WriteOutcome};
use crate::core::commands::helpers::{extract_bytes, validate_arg_count};
use crate::core::events::EventClass;
use crate::core::protocol::RespFrame;
use crate::core::storage::data_types::{DataValue, StoredValue};
use crate::core::storage::db::ExecutionContext;
use crate::core::{RespValue, SlistDBError};
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct Set {
    pub key: Bytes,
    pub value: Bytes,
}

impl ParseCommand for Set {
    fn parse(args: &[RespFrame]) -> Result<Self, SlistDBError> {
        validate_arg_count(args, 2, "SET")?;
        Ok(Set {
            key: extract_bytes(&args[0])?,
            value: extract_bytes(&args[1])?,
        })
    }
}

#[async_trait]
impl ExecutableCommand for Set {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), SlistDBError> {
        ctx.entries.insert(
            self.key.clone(),
            StoredValue::new(DataValue::String(self.value.clone())),
        );
        ctx.notify(EventClass::Generic, "set", &self.key);
        Ok((
            RespValue::SimpleString("OK".to_string()),
            WriteOutcome::Write { keys_modified: 1 },
        ))
    }
}
