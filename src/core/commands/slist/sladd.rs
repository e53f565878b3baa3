// src/core/commands/slist/sladd.rs

use crate::core::commands::command_trait::{ExecutableCommand, ParseCommand, WriteOutcome};
use crate::core::commands::helpers::extract_bytes;
use crate::core::events::EventClass;
use crate::core::protocol::RespFrame;
use crate::core::storage::data_types::{DataValue, StoredValue};
use crate::core::storage::db::ExecutionContext;
use crate::core::storage::slist::{SortedList, Token};
use crate::core::{RespValue, SlistDBError};
use async_trait::async_trait;
use bytes::Bytes;

/// `SLADD key score member [score member ...]`
///
/// Each pair is removed first and then inserted, so re-adding an existing
/// pair is a no-op for the reply count: the reply is the number of net-new
/// entries.
#[derive(Debug, Clone, Default)]
pub struct SlAdd {
    pub key: Bytes,
    pub pairs: Vec<(Token, Token)>,
}

impl ParseCommand for SlAdd {
    fn parse(args: &[RespFrame]) -> Result<Self, SlistDBError> {
        if args.len() < 3 {
            return Err(SlistDBError::WrongArgumentCount("SLADD".to_string()));
        }
        // Key plus pairs must make an odd argument total.
        if args.len() % 2 == 0 {
            return Err(SlistDBError::SyntaxError);
        }

        let key = extract_bytes(&args[0])?;
        let pairs = args[1..]
            .chunks_exact(2)
            .map(|chunk| -> Result<(Token, Token), SlistDBError> {
                let score = Token::new(extract_bytes(&chunk[0])?);
                let member = Token::new(extract_bytes(&chunk[1])?);
                Ok((score, member))
            })
            .collect::<Result<_, _>>()?;

        Ok(SlAdd { key, pairs })
    }
}

#[async_trait]
impl ExecutableCommand for SlAdd {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), SlistDBError> {
        let stored = ctx
            .entries
            .entry(self.key.clone())
            .or_insert_with(|| StoredValue::new(DataValue::SortedList(SortedList::new())));

        let DataValue::SortedList(list) = &mut stored.data else {
            return Err(SlistDBError::WrongType);
        };

        let mut added = 0i64;
        for (score, member) in &self.pairs {
            // Replace-on-duplicate: the list itself never deduplicates.
            if list.remove(score, member) {
                added -= 1;
            }
            list.insert(score.clone(), member.clone());
            added += 1;
        }
        stored.refresh_size();

        ctx.notify(EventClass::List, "sladd", &self.key);
        Ok((
            RespValue::Integer(added),
            WriteOutcome::Write { keys_modified: 1 },
        ))
    }
}
