// src/core/commands/slist/slsearch.rs

use super::helpers::{format_entries, lookup_read};
use crate::core::commands::command_trait::{ExecutableCommand, ParseCommand, WriteOutcome};
use crate::core::commands::helpers::{extract_bytes, validate_arg_count};
use crate::core::protocol::RespFrame;
use crate::core::storage::db::ExecutionContext;
use crate::core::storage::slist::Token;
use crate::core::{RespValue, SlistDBError};
use async_trait::async_trait;
use bytes::Bytes;

/// `SLSEARCH key score`
///
/// Replies with every entry carrying exactly the given score, in member
/// order.
#[derive(Debug, Clone)]
pub struct SlSearch {
    pub key: Bytes,
    pub score: Token,
}

impl ParseCommand for SlSearch {
    fn parse(args: &[RespFrame]) -> Result<Self, SlistDBError> {
        validate_arg_count(args, 2, "SLSEARCH")?;
        Ok(SlSearch {
            key: extract_bytes(&args[0])?,
            score: Token::new(extract_bytes(&args[1])?),
        })
    }
}

#[async_trait]
impl ExecutableCommand for SlSearch {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), SlistDBError> {
        let resp = match lookup_read(ctx.entries, &self.key) {
            Some(list) => format_entries(list.entries_with_score(&self.score)),
            None => RespValue::Array(vec![]),
        };
        Ok((resp, WriteOutcome::DidNotWrite))
    }
}
