//! Working copy status model
//!
//! This module turns the textual report of `svn status` into typed entries.
//!
//! ## Components
//!
//! - `status_kind`: Classification of a file's change
//! - `status_line`: Parser for one line of the status report
//! - `resource`: Immutable tree entry (normalized path + kind)

pub mod resource;
pub mod status_kind;
pub mod status_line;

/// Eight fixed status columns followed by the path.
///
/// See `svn help status` for the meaning of each column.
pub const STATUS_LINE_REGEX: &str =
    r"^([ ACDIMRX?!~])([ CM])([ L])([ +])([ SX])([ K])([ KOTB])([ C])(.+)$";
