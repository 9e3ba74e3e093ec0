//! Stateful parts of a source control session
//!
//! - `model`: Working and staging trees, rebuilt from `svn status`
//! - `process`: Running external programs and classifying their failures
//! - `repository`: One session over a working copy and everything it owns
//! - `svn`: Thin client over the svn command line
//! - `watcher`: File system watcher that triggers recomputes

pub mod model;
pub mod process;
pub mod repository;
pub mod svn;
pub mod watcher;
