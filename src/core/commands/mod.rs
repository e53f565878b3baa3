// src/core/commands/mod.rs

//! This module defines all supported commands, organizes them into
//! categories, and provides the central `Command` enum that encapsulates
//! their parsed state.

use crate::core::commands::command_trait::{
    CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::commands::helpers::extract_string;
use crate::core::protocol::RespFrame;
use crate::core::storage::db::ExecutionContext;
use crate::core::{RespValue, SlistDBError};

pub mod command_trait;
pub mod generic;
pub mod helpers;
pub mod slist;
pub mod string;

use generic::{Del, Ping};
use slist::{SlAdd, SlAll, SlCard, SlRange, SlRem, SlSearch};
use string::{Get, Set};

/// A fully parsed command, ready to execute.
#[derive(Debug, Clone)]
pub enum Command {
    // --- Generic Commands ---
    Ping(Ping),
    Del(Del),

    // --- String Commands ---
    Get(Get),
    Set(Set),

    // --- Sorted List Commands ---
    SlAdd(SlAdd),
    SlRem(SlRem),
    SlAll(SlAll),
    SlRange(SlRange),
    SlSearch(SlSearch),
    SlCard(SlCard),
}

impl TryFrom<RespFrame> for Command {
    type Error = SlistDBError;

    /// Parses a decoded wire frame (an array of bulk strings) into a command.
    fn try_from(frame: RespFrame) -> Result<Self, Self::Error> {
        let RespFrame::Array(frames) = frame else {
            return Err(SlistDBError::ProtocolError(
                "expected an array of bulk strings".to_string(),
            ));
        };
        let Some((name_frame, args)) = frames.split_first() else {
            return Err(SlistDBError::ProtocolError(
                "empty command array".to_string(),
            ));
        };
        let name = extract_string(name_frame)?.to_ascii_lowercase();

        match name.as_str() {
            "ping" => Ok(Command::Ping(Ping::parse(args)?)),
            "del" => Ok(Command::Del(Del::parse(args)?)),
            "get" => Ok(Command::Get(Get::parse(args)?)),
            "set" => Ok(Command::Set(Set::parse(args)?)),
            "sladd" => Ok(Command::SlAdd(SlAdd::parse(args)?)),
            "slrem" => Ok(Command::SlRem(SlRem::parse(args)?)),
            "slall" => Ok(Command::SlAll(SlAll::parse(args)?)),
            "slrange" => Ok(Command::SlRange(SlRange::parse(args)?)),
            "slsearch" => Ok(Command::SlSearch(SlSearch::parse(args)?)),
            "slcard" => Ok(Command::SlCard(SlCard::parse(args)?)),
            _ => Err(SlistDBError::UnknownCommand(name)),
        }
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping(_) => "ping",
            Command::Del(_) => "del",
            Command::Get(_) => "get",
            Command::Set(_) => "set",
            Command::SlAdd(_) => "sladd",
            Command::SlRem(_) => "slrem",
            Command::SlAll(_) => "slall",
            Command::SlRange(_) => "slrange",
            Command::SlSearch(_) => "slsearch",
            Command::SlCard(_) => "slcard",
        }
    }

    pub fn flags(&self) -> CommandFlags {
        match self {
            Command::Ping(_)
            | Command::Get(_)
            | Command::SlAll(_)
            | Command::SlRange(_)
            | Command::SlSearch(_)
            | Command::SlCard(_) => CommandFlags::READONLY,
            Command::Del(_) | Command::Set(_) | Command::SlAdd(_) | Command::SlRem(_) => {
                CommandFlags::WRITE
            }
        }
    }

    /// Executes the command within a given `ExecutionContext`.
    pub async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), SlistDBError> {
        match self {
            Command::Ping(cmd) => cmd.execute(ctx).await,
            Command::Del(cmd) => cmd.execute(ctx).await,
            Command::Get(cmd) => cmd.execute(ctx).await,
            Command::Set(cmd) => cmd.execute(ctx).await,
            Command::SlAdd(cmd) => cmd.execute(ctx).await,
            Command::SlRem(cmd) => cmd.execute(ctx).await,
            Command::SlAll(cmd) => cmd.execute(ctx).await,
            Command::SlRange(cmd) => cmd.execute(ctx).await,
            Command::SlSearch(cmd) => cmd.execute(ctx).await,
            Command::SlCard(cmd) => cmd.execute(ctx).await,
        }
    }
}
