// src/core/commands/slist/slcard.rs

use super::helpers::lookup_read;
use crate::core::commands::command_trait::{ExecutableCommand, ParseCommand, WriteOutcome};
use crate::core::commands::helpers::{extract_bytes, validate_arg_count};
use crate::core::protocol::RespFrame;
use crate::core::storage::db::ExecutionContext;
use crate::core::{RespValue, SlistDBError};
use async_trait::async_trait;
use bytes::Bytes;

/// `SLCARD key`
///
/// Replies with the number of entries, or zero when the key is missing or
/// holds another type.
#[derive(Debug, Clone, Default)]
pub struct SlCard {
    pub key: Bytes,
}

impl ParseCommand for SlCard {
    fn parse(args: &[RespFrame]) -> Result<Self, SlistDBError> {
        validate_arg_count(args, 1, "SLCARD")?;
        Ok(SlCard {
            key: extract_bytes(&args[0])?,
        })
    }
}

#[async_trait]
impl ExecutableCommand for SlCard {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), SlistDBError> {
        let len = lookup_read(ctx.entries, &self.key).map_or(0, |list| list.len());
        Ok((RespValue::Integer(len as i64), WriteOutcome::DidNotWrite))
    }
}
