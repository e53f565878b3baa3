// src/core/commands/slist/helpers.rs

//! Shared lookup and reply-shaping helpers for the sorted-list commands.

use crate::core::RespValue;
use crate::core::storage::data_types::DataValue;
use crate::core::storage::db::Entries;
use crate::core::storage::slist::{SortedList, SortedListEntry};
use bytes::Bytes;

/// Resolves a key for a read-only sorted-list command. Both a missing key and
/// a key of another type read as "nothing there": the caller replies empty or
/// zero instead of erroring.
pub fn lookup_read<'a>(entries: &'a Entries, key: &Bytes) -> Option<&'a SortedList> {
    match entries.get(key) {
        Some(stored) => match &stored.data {
            DataValue::SortedList(list) => Some(list),
            _ => None,
        },
        None => None,
    }
}

/// Shapes a list of entries into the flat `[score1, member1, score2,
/// member2, ...]` multi-bulk reply all enumerating commands share.
pub fn format_entries(entries: Vec<SortedListEntry>) -> RespValue {
    let mut out = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        out.push(RespValue::BulkString(entry.score.raw().clone()));
        out.push(RespValue::BulkString(entry.member.raw().clone()));
    }
    RespValue::Array(out)
}
