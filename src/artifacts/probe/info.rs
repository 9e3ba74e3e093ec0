use crate::artifacts::probe::{REPOSITORY_ROOT_REGEX, URL_REGEX};
use regex::Regex;

/// Location of the working copy inside its repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    pub url: String,
    pub root: String,
    /// `url` with the repository root and the leading slash removed
    pub branch: String,
}

impl Info {
    /// Reads the `URL:` and `Repository Root:` lines of `svn info` output.
    pub fn parse(output: &str) -> Option<Self> {
        let url = Self::capture(URL_REGEX, output)?;
        let root = Self::capture(REPOSITORY_ROOT_REGEX, output)?;

        let branch = url.strip_prefix(root.as_str()).unwrap_or(url.as_str());
        let branch = branch.strip_prefix('/').unwrap_or(branch).to_string();

        Some(Info { url, root, branch })
    }

    fn capture(pattern: &str, output: &str) -> Option<String> {
        let captures = Regex::new(pattern).ok()?.captures(output)?;
        let value = captures.get(1)?.as_str().trim_end();

        Some(value.to_string())
    }
}
