//! Source control command implementations
//!
//! This module contains all command implementations, organized into two categories:
//!
//! - `plumbing`: Direct probes of the svn command line (cat, info, version)
//! - `porcelain`: Session operations on the status model (status, stage, diff, revert, watch)
//!
//! `registry` builds the explicit table that maps command identifiers to
//! their handlers, in the order the host UI should register them.

pub mod plumbing;
pub mod porcelain;
pub mod registry;

/// Identifier of a command exposed to the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandId {
    Diff,
    Stage,
    Unstage,
    Revert,
    Refresh,
}

impl CommandId {
    pub const ALL: [CommandId; 5] = [
        CommandId::Diff,
        CommandId::Stage,
        CommandId::Unstage,
        CommandId::Revert,
        CommandId::Refresh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Diff => "svn.diff",
            CommandId::Stage => "svn.stage",
            CommandId::Unstage => "svn.unstage",
            CommandId::Revert => "svn.revert",
            CommandId::Refresh => "svn.refresh",
        }
    }

    pub fn try_parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_str() == id)
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
