// src/core/commands/slist/slall.rs

use super::helpers::lookup_read;
use crate::core::commands::command_trait::{ExecutableCommand, ParseCommand, WriteOutcome};
use crate::core::commands::helpers::{extract_bytes, validate_arg_count};
use crate::core::protocol::RespFrame;
use crate::core::storage::db::ExecutionContext;
use crate::core::{RespValue, SlistDBError};
use async_trait::async_trait;
use bytes::Bytes;

/// `SLALL key`
///
/// Enumerates the whole list in order as a flat score/member multi-bulk.
#[derive(Debug, Clone, Default)]
pub struct SlAll {
    pub key: Bytes,
}

impl ParseCommand for SlAll {
    fn parse(args: &[RespFrame]) -> Result<Self, SlistDBError> {
        validate_arg_count(args, 1, "SLALL")?;
        Ok(SlAll {
            key: extract_bytes(&args[0])?,
        })
    }
}

#[async_trait]
impl ExecutableCommand for SlAll {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), SlistDBError> {
        let resp = match lookup_read(ctx.entries, &self.key) {
            Some(list) => {
                let mut out = Vec::with_capacity(list.len() * 2);
                for (score, member) in list.iter() {
                    out.push(RespValue::BulkString(score.raw().clone()));
                    out.push(RespValue::BulkString(member.raw().clone()));
                }
                RespValue::Array(out)
            }
            None => RespValue::Array(vec![]),
        };
        Ok((resp, WriteOutcome::DidNotWrite))
    }
}
