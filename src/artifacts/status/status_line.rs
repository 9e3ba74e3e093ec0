use crate::artifacts::status::STATUS_LINE_REGEX;
use crate::artifacts::status::status_kind::StatusKind;
use anyhow::Context;
use regex::Regex;

/// One parsed line of `svn status` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Path exactly as printed by svn, relative to the working copy root
    pub path: String,
    pub kind: StatusKind,
}

/// Parser for the fixed-width `svn status` report.
///
/// Every line starts with eight one-character columns followed by the path.
/// Only the first column (the item status) decides the [`StatusKind`]; lines
/// that do not fit the grammar, or whose item status is not one we track,
/// yield nothing.
#[derive(Debug, Clone)]
pub struct StatusLineParser {
    regex: Regex,
}

impl StatusLineParser {
    pub fn new() -> anyhow::Result<Self> {
        let regex = Regex::new(STATUS_LINE_REGEX)
            .with_context(|| format!("invalid status line regex: {STATUS_LINE_REGEX}"))?;

        Ok(Self { regex })
    }

    pub fn parse_line(&self, line: &str) -> Option<StatusLine> {
        let captures = self.regex.captures(line)?;
        let code = captures.get(1)?.as_str().chars().next()?;
        let kind = StatusKind::from_item_code(code)?;
        let path = captures.get(9)?.as_str().to_string();

        Some(StatusLine { path, kind })
    }

    /// Parses a whole report, keeping the order of appearance.
    pub fn parse_output(&self, output: &str) -> Vec<StatusLine> {
        output
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }
}
