use crate::artifacts::status::status_kind::StatusKind;
use std::path::{Path, PathBuf};

const ICON_FILES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "Modified" => "status-modified.svg",
    "Added" => "status-added.svg",
    "Deleted" => "status-deleted.svg",
    "Renamed" => "status-renamed.svg",
    "Copied" => "status-copied.svg",
    "Untracked" => "status-untracked.svg",
    "Ignored" => "status-ignored.svg",
    "Conflict" => "status-conflict.svg",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn try_parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPair {
    pub light: PathBuf,
    pub dark: PathBuf,
}

/// Status icons laid out as `<base>/<theme>/status-<kind>.svg`.
#[derive(Debug, Clone)]
pub struct Icons {
    base: PathBuf,
}

impl Icons {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Icons { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Looks an icon up by status name and theme name.
    ///
    /// Returns `None` when either name is unknown.
    pub fn get(&self, name: &str, theme: &str) -> Option<PathBuf> {
        let theme = Theme::try_parse(theme)?;
        let file = ICON_FILES.get(name)?;

        Some(self.base.join(theme.name()).join(file))
    }

    pub fn pair(&self, status: StatusKind) -> IconPair {
        let file = ICON_FILES.get(status.name()).copied().unwrap_or_default();

        IconPair {
            light: self.base.join(Theme::Light.name()).join(file),
            dark: self.base.join(Theme::Dark.name()).join(file),
        }
    }
}
