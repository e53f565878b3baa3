// src/core/commands/slist/slrange.rs

use super::helpers::{format_entries, lookup_read};
use crate::core::commands::command_trait::{ExecutableCommand, ParseCommand, WriteOutcome};
use crate::core::commands::helpers::{extract_bytes, validate_arg_count};
use crate::core::protocol::RespFrame;
use crate::core::storage::db::ExecutionContext;
use crate::core::storage::slist::RangeSpec;
use crate::core::{RespValue, SlistDBError};
use async_trait::async_trait;
use bytes::Bytes;

/// `SLRANGE key min max`
///
/// Replies with every entry whose score falls inside the parsed interval, in
/// order, as a flat score/member multi-bulk. Bounds use the `(`/`[`/`+`/`-`/
/// bare syntax.
#[derive(Debug, Clone)]
pub struct SlRange {
    pub key: Bytes,
    pub range: RangeSpec,
}

impl ParseCommand for SlRange {
    fn parse(args: &[RespFrame]) -> Result<Self, SlistDBError> {
        validate_arg_count(args, 3, "SLRANGE")?;
        let key = extract_bytes(&args[0])?;
        let min = extract_bytes(&args[1])?;
        let max = extract_bytes(&args[2])?;
        let range = RangeSpec::parse(&min, &max)?;
        Ok(SlRange { key, range })
    }
}

#[async_trait]
impl ExecutableCommand for SlRange {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), SlistDBError> {
        let resp = match lookup_read(ctx.entries, &self.key) {
            Some(list) => format_entries(list.range(&self.range)),
            None => RespValue::Array(vec![]),
        };
        Ok((resp, WriteOutcome::DidNotWrite))
    }
}
