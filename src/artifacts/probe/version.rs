use crate::artifacts::probe::VERSION_REGEX;
use derive_new::new;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Extracts the first `version X.Y.Z` triple from `svn --version` output.
    pub fn parse(output: &str) -> Option<Self> {
        let captures = Regex::new(VERSION_REGEX).ok()?.captures(output)?;

        Some(Version {
            major: captures.get(1)?.as_str().parse().ok()?,
            minor: captures.get(2)?.as_str().parse().ok()?,
            patch: captures.get(3)?.as_str().parse().ok()?,
        })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
