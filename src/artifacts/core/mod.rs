//! Session plumbing shared by every component
//!
//! - `config`: Session settings
//! - `output`: Shared output sink
//! - `scope`: Structured cleanup of a session

pub mod config;
pub mod output;
pub mod scope;
