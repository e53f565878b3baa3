// src/core/errors.rs

//! Defines the primary error type for the entire application.

use std::num::ParseIntError;
use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing all possible failures within the server.
/// The `Display` strings double as the wire-level error messages.
#[derive(Error, Debug)]
pub enum SlistDBError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Incomplete data in stream")]
    IncompleteData,

    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Syntax error")]
    SyntaxError,

    #[error("Wrong number of arguments for '{0}' command")]
    WrongArgumentCount(String),

    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType,

    #[error("min or max is not valid")]
    InvalidRangeBound,

    #[error("Value is not an integer or out of range")]
    NotAnInteger,

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

// Manual implementation of Clone because `std::io::Error` is not cloneable.
// We wrap it in an Arc to allow for cheap, shared cloning.
impl Clone for SlistDBError {
    fn clone(&self) -> Self {
        match self {
            SlistDBError::Io(e) => SlistDBError::Io(Arc::clone(e)),
            SlistDBError::IncompleteData => SlistDBError::IncompleteData,
            SlistDBError::ProtocolError(s) => SlistDBError::ProtocolError(s.clone()),
            SlistDBError::UnknownCommand(s) => SlistDBError::UnknownCommand(s.clone()),
            SlistDBError::SyntaxError => SlistDBError::SyntaxError,
            SlistDBError::WrongArgumentCount(s) => SlistDBError::WrongArgumentCount(s.clone()),
            SlistDBError::WrongType => SlistDBError::WrongType,
            SlistDBError::InvalidRangeBound => SlistDBError::InvalidRangeBound,
            SlistDBError::NotAnInteger => SlistDBError::NotAnInteger,
            SlistDBError::Internal(s) => SlistDBError::Internal(s.clone()),
        }
    }
}

impl PartialEq for SlistDBError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SlistDBError::Io(e1), SlistDBError::Io(e2)) => e1.to_string() == e2.to_string(),
            (SlistDBError::ProtocolError(s1), SlistDBError::ProtocolError(s2)) => s1 == s2,
            (SlistDBError::UnknownCommand(s1), SlistDBError::UnknownCommand(s2)) => s1 == s2,
            (SlistDBError::WrongArgumentCount(s1), SlistDBError::WrongArgumentCount(s2)) => {
                s1 == s2
            }
            (SlistDBError::Internal(s1), SlistDBError::Internal(s2)) => s1 == s2,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for SlistDBError {
    fn from(e: std::io::Error) -> Self {
        SlistDBError::Io(Arc::new(e))
    }
}

impl From<std::str::Utf8Error> for SlistDBError {
    fn from(_: std::str::Utf8Error) -> Self {
        SlistDBError::WrongType
    }
}

impl From<std::string::FromUtf8Error> for SlistDBError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        SlistDBError::WrongType
    }
}

impl From<ParseIntError> for SlistDBError {
    fn from(_: ParseIntError) -> Self {
        SlistDBError::NotAnInteger
    }
}
