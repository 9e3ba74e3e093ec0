//! Plumbing commands (direct svn probes)
//!
//! Plumbing commands ask the svn command line one question and print the
//! answer. They never touch the status model.
//!
//! ## Commands
//!
//! - `cat`: Print the last synced content of a file
//! - `info`: Print the repository URL, root and branch
//! - `version`: Print the version of the svn client

pub mod cat;
pub mod info;
pub mod version;
