// src/core/storage/slist/range.rs

//! Parsing and evaluation of score range bounds for `SLRANGE`.

use super::token::{Token, compare_scores};
use crate::core::SlistDBError;
use bytes::Bytes;
use std::cmp::Ordering;

/// An interval over scores, with independently inclusive or exclusive ends.
///
/// The bound tokens are owned by the spec; `-` and `+` map to the `Min`/`Max`
/// sentinels so an unbounded end needs no special casing in the comparator.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSpec {
    pub min: Token,
    pub max: Token,
    /// True when the low end is exclusive.
    pub minex: bool,
    /// True when the high end is exclusive.
    pub maxex: bool,
}

impl RangeSpec {
    /// Parses a pair of wire bound tokens.
    ///
    /// The leading byte selects the interpretation: `(` exclusive, `[`
    /// inclusive, `-`/`+` the unbounded sentinels (which must be exactly one
    /// byte), and anything else an inclusive bare bound. Empty bounds are
    /// invalid.
    pub fn parse(min: &Bytes, max: &Bytes) -> Result<Self, SlistDBError> {
        let (min, minex) = parse_bound(min)?;
        let (max, maxex) = parse_bound(max)?;
        Ok(RangeSpec {
            min,
            max,
            minex,
            maxex,
        })
    }

    /// Whether `score` falls inside the interval.
    pub fn contains(&self, score: &Token) -> bool {
        let low = compare_scores(score, &self.min);
        if self.minex {
            if low != Ordering::Greater {
                return false;
            }
        } else if low == Ordering::Less {
            return false;
        }
        let high = compare_scores(score, &self.max);
        if self.maxex {
            high == Ordering::Less
        } else {
            high != Ordering::Greater
        }
    }
}

fn parse_bound(raw: &Bytes) -> Result<(Token, bool), SlistDBError> {
    match raw.first() {
        None => Err(SlistDBError::InvalidRangeBound),
        Some(b'+') => {
            if raw.len() == 1 {
                Ok((Token::Max, false))
            } else {
                Err(SlistDBError::InvalidRangeBound)
            }
        }
        Some(b'-') => {
            if raw.len() == 1 {
                Ok((Token::Min, false))
            } else {
                Err(SlistDBError::InvalidRangeBound)
            }
        }
        Some(b'(') => Ok((Token::new(raw.slice(1..)), true)),
        Some(b'[') => Ok((Token::new(raw.slice(1..)), false)),
        Some(_) => Ok((Token::new(raw.clone()), false)),
    }
}
