use colored::Colorize;

const LABEL_WIDTH: usize = 2;

/// Classification of a file's difference from the last synced revision.
///
/// Only `Modified`, `Added`, `Deleted` and `Untracked` are produced by the
/// status parser. The remaining kinds are known to the presentation layer so
/// that icons and labels exist for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusKind {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Untracked,
    Ignored,
    Conflict,
}

impl StatusKind {
    pub const ALL: [StatusKind; 8] = [
        StatusKind::Modified,
        StatusKind::Added,
        StatusKind::Deleted,
        StatusKind::Renamed,
        StatusKind::Copied,
        StatusKind::Untracked,
        StatusKind::Ignored,
        StatusKind::Conflict,
    ];

    /// Maps the item column (first column) of `svn status` to a kind.
    pub fn from_item_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(StatusKind::Modified),
            'A' => Some(StatusKind::Added),
            '?' => Some(StatusKind::Untracked),
            'D' | '!' => Some(StatusKind::Deleted),
            _ => None,
        }
    }

    /// Name used as the icon lookup key.
    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Modified => "Modified",
            StatusKind::Added => "Added",
            StatusKind::Deleted => "Deleted",
            StatusKind::Renamed => "Renamed",
            StatusKind::Copied => "Copied",
            StatusKind::Untracked => "Untracked",
            StatusKind::Ignored => "Ignored",
            StatusKind::Conflict => "Conflict",
        }
    }

    pub fn is_deleted(&self) -> bool {
        *self == StatusKind::Deleted
    }
}

impl From<&StatusKind> for &str {
    fn from(kind: &StatusKind) -> Self {
        match kind {
            StatusKind::Modified => "M",
            StatusKind::Added => "A",
            StatusKind::Deleted => "D",
            StatusKind::Renamed => "R",
            StatusKind::Copied => "+",
            StatusKind::Untracked => "?",
            StatusKind::Ignored => "I",
            StatusKind::Conflict => "C",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code: &str = self.into();
        let colored_code = match self {
            StatusKind::Modified | StatusKind::Renamed | StatusKind::Copied => code.yellow(),
            StatusKind::Added => code.green(),
            StatusKind::Deleted | StatusKind::Conflict => code.red(),
            StatusKind::Untracked | StatusKind::Ignored => code.normal(),
        };
        write!(f, "{}{:>width$}", colored_code, "", width = LABEL_WIDTH - code.len())
    }
}
