//! Source control data structures and algorithms
//!
//! - `core`: Shared utilities (configuration, output sink, disposal scope)
//! - `diff`: Diff requests and content providers
//! - `events`: Typed change notifications for the two trees
//! - `presentation`: Icons, decorations and the branch indicator
//! - `probe`: Parsers for `svn --version` and `svn info`
//! - `status`: Status kinds, status line parsing and resources

pub mod core;
pub mod diff;
pub mod events;
pub mod presentation;
pub mod probe;
pub mod status;
