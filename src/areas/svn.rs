//! Thin client over the svn command line
//!
//! Every invocation runs in the working copy root with `LC_ALL` and `LANG`
//! pinned to the configured locale, since the status and info parsers expect
//! English output. `LC_ALL` overrides any `LC_*` the caller exported.

use crate::areas::process::{ExecResult, Invocation, ProcessRunner};
use crate::artifacts::core::config::Config;
use crate::artifacts::probe::info::Info;
use crate::artifacts::probe::version::Version;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone)]
pub struct Svn {
    program: String,
    locale: String,
    root: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl Svn {
    pub fn new(config: &Config, root: impl Into<PathBuf>, runner: Arc<dyn ProcessRunner>) -> Self {
        Svn {
            program: config.program.clone(),
            locale: config.locale.clone(),
            root: root.into(),
            runner,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub async fn run<I, S>(&self, args: I) -> ExecResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let invocation = Invocation::new(
            self.program.clone(),
            args.into_iter().map(Into::into).collect(),
            Some(self.root.clone()),
        )
        .with_env("LC_ALL", self.locale.as_str())
        .with_env("LANG", self.locale.as_str());

        self.runner.execute(&invocation).await
    }

    /// `svn status` of the whole working copy.
    pub async fn status(&self) -> ExecResult {
        self.run(["status"]).await
    }

    /// Whether svn tracks `path`.
    ///
    /// Unversioned (`?`) and ignored (`I`) paths, and paths svn refuses to
    /// report on, are not controlled. An empty report means the path is
    /// versioned and unchanged.
    pub async fn is_controlled(&self, path: &Path) -> bool {
        let result = self.run(["status".to_string(), path_arg(path)]).await;

        if let Some(failure) = result.failure() {
            debug!("{} is not controlled: {}", path.display(), failure);
            return false;
        }

        match result.stdout.chars().next() {
            None => true,
            Some(code) => code != '?' && code != 'I',
        }
    }

    /// Content of `path` at the last synced revision.
    pub async fn cat(&self, path: &Path) -> anyhow::Result<String> {
        let arg = path_arg(path);
        let invocation = format!("{} cat {}", self.program, arg);

        self.run(["cat".to_string(), arg]).await.into_stdout(&invocation)
    }

    /// Reverts `paths`.
    ///
    /// The paths are passed through as given. An empty list runs a bare
    /// `svn revert`, which svn rejects with E205001 (not enough arguments),
    /// so it comes back as an error.
    pub async fn revert(&self, paths: &[PathBuf]) -> anyhow::Result<()> {
        let args = std::iter::once("revert".to_string())
            .chain(paths.iter().map(|path| path_arg(path)))
            .collect::<Vec<_>>();
        let invocation = format!("{} {}", self.program, args.join(" "));

        self.run(args).await.into_stdout(&invocation)?;

        Ok(())
    }

    pub async fn version(&self) -> Option<Version> {
        let result = self.run(["--version"]).await;

        if let Some(failure) = result.failure() {
            debug!("svn --version failed: {}", failure);
            return None;
        }

        Version::parse(&result.stdout)
    }

    pub async fn info(&self) -> Option<Info> {
        let result = self.run(["info"]).await;

        if let Some(failure) = result.failure() {
            debug!("svn info failed: {}", failure);
            return None;
        }

        Info::parse(&result.stdout)
    }
}

impl std::fmt::Debug for Svn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Svn")
            .field("program", &self.program)
            .field("locale", &self.locale)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
