// src/core/commands/slist/slrem.rs

use crate::core::commands::command_trait::{ExecutableCommand, ParseCommand, WriteOutcome};
use crate::core::commands::helpers::extract_bytes;
use crate::core::events::EventClass;
use crate::core::protocol::RespFrame;
use crate::core::storage::data_types::DataValue;
use crate::core::storage::db::ExecutionContext;
use crate::core::storage::slist::Token;
use crate::core::{RespValue, SlistDBError};
use async_trait::async_trait;
use bytes::Bytes;

/// `SLREM key score [score ...]`
///
/// Removes every entry carrying any of the given scores and replies with the
/// number of entries removed. The key itself is dropped once the list runs
/// empty.
#[derive(Debug, Clone, Default)]
pub struct SlRem {
    pub key: Bytes,
    pub scores: Vec<Token>,
}

impl ParseCommand for SlRem {
    fn parse(args: &[RespFrame]) -> Result<Self, SlistDBError> {
        if args.is_empty() {
            return Err(SlistDBError::WrongArgumentCount("SLREM".to_string()));
        }
        // Key plus scores must make an even argument total.
        if args.len() % 2 != 0 {
            return Err(SlistDBError::SyntaxError);
        }

        let key = extract_bytes(&args[0])?;
        let scores = args[1..]
            .iter()
            .map(|frame| Ok(Token::new(extract_bytes(frame)?)))
            .collect::<Result<_, SlistDBError>>()?;

        Ok(SlRem { key, scores })
    }
}

#[async_trait]
impl ExecutableCommand for SlRem {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), SlistDBError> {
        let (removed, emptied) = {
            let Some(stored) = ctx.entries.get_mut(&self.key) else {
                return Ok((RespValue::Integer(0), WriteOutcome::DidNotWrite));
            };
            let DataValue::SortedList(list) = &mut stored.data else {
                return Err(SlistDBError::WrongType);
            };

            let mut removed = 0i64;
            for score in &self.scores {
                removed += list.remove_all_with_score(score) as i64;
            }
            let emptied = list.is_empty();
            if removed > 0 {
                stored.refresh_size();
            }
            (removed, emptied)
        };

        if removed == 0 {
            return Ok((RespValue::Integer(0), WriteOutcome::DidNotWrite));
        }

        ctx.notify(EventClass::List, "slrem", &self.key);
        let outcome = if emptied {
            ctx.entries.remove(&self.key);
            ctx.notify(EventClass::Generic, "del", &self.key);
            WriteOutcome::Delete { keys_deleted: 1 }
        } else {
            WriteOutcome::Write { keys_modified: 1 }
        };
        Ok((RespValue::Integer(removed), outcome))
    }
}
