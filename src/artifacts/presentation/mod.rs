//! Presentation hints handed to the UI binder
//!
//! Everything here is a pure function of a [`StatusKind`] or a probe result;
//! nothing depends on a UI framework.

pub mod icons;
pub mod status_bar;

use crate::artifacts::presentation::icons::{IconPair, Icons};
use crate::artifacts::status::status_kind::StatusKind;
use crate::commands::CommandId;
use std::path::PathBuf;

const DIFF_TITLE: &str = "Svn: Diff";

/// How a resource is drawn in the source control view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorations {
    pub icons: IconPair,
    pub strike_through: bool,
}

impl Decorations {
    pub fn for_status(status: StatusKind, icons: &Icons) -> Self {
        Decorations {
            icons: icons.pair(status),
            strike_through: status.is_deleted(),
        }
    }
}

/// Command bound to a resource, with the resource path as its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCommand {
    pub id: CommandId,
    pub title: &'static str,
    pub target: PathBuf,
}

impl ResourceCommand {
    pub fn diff(target: PathBuf) -> Self {
        ResourceCommand {
            id: CommandId::Diff,
            title: DIFF_TITLE,
            target,
        }
    }
}
