//! Porcelain commands (session operations)
//!
//! These operate on the status model of a [`Repository`](crate::areas::repository::Repository)
//! session rather than on svn directly.
//!
//! ## Commands
//!
//! - `status`: Recompute and print the working tree
//! - `stage`: Move entries between the working and staging trees
//! - `diff`: Describe the diff of a file against its last synced revision
//! - `revert`: Revert files through svn
//! - `watch`: Interactive session driven by file system events and stdin

pub mod diff;
pub mod revert;
pub mod stage;
pub mod status;
pub mod watch;
