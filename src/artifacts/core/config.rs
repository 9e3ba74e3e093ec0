use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PROGRAM: &str = "svn";
pub const DEFAULT_LOCALE: &str = "en_US.UTF-8";
pub const DEFAULT_ICONS_PATH: &str = "resources/icons";
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Settings of a repository session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of, or path to, the svn executable
    pub program: String,
    /// Value of `LANG` for every svn invocation; the parsers expect English output
    pub locale: String,
    pub icons_path: PathBuf,
    /// Quiet period used to coalesce bursts of file system events
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            program: DEFAULT_PROGRAM.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            icons_path: PathBuf::from(DEFAULT_ICONS_PATH),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl Config {
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_icons_path(mut self, icons_path: impl Into<PathBuf>) -> Self {
        self.icons_path = icons_path.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
