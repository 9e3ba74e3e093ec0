//! Parsers for the `svn --version` and `svn info` probes
//!
//! A probe whose output does not match yields `None`, which callers treat as
//! "feature unavailable".

pub mod info;
pub mod version;

pub const VERSION_REGEX: &str = r"version (\d+)\.(\d+)\.(\d+)";
pub const URL_REGEX: &str = r"(?m)^URL: (.+)$";
pub const REPOSITORY_ROOT_REGEX: &str = r"(?m)^Repository Root: (.+)$";
