//! External process execution
//!
//! All interaction with svn goes through [`ProcessRunner`]. A runner never
//! fails: spawn errors and tool errors are reported in the [`ExecResult`],
//! and [`ExecResult::failure`] tells the two apart.

use async_trait::async_trait;
use derive_new::new;
use log::{debug, trace};
use std::path::PathBuf;
use std::process::Stdio;

/// One program invocation.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    #[new(default)]
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// First argument, i.e. the svn subcommand.
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Everything a finished (or unstartable) process produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code; `None` when the process never ran or was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Why the process could not be run, e.g. the program was not found
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The process could not be spawned
    Transport(String),
    /// The tool wrote to its error stream, whatever its exit code
    Tool(String),
}

impl Failure {
    pub fn message(&self) -> &str {
        match self {
            Failure::Transport(message) | Failure::Tool(message) => message,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message().trim_end())
    }
}

impl ExecResult {
    pub fn success(stdout: impl Into<String>) -> Self {
        ExecResult {
            code: Some(0),
            stdout: stdout.into(),
            ..Default::default()
        }
    }

    pub fn failure(&self) -> Option<Failure> {
        if !self.error.is_empty() {
            Some(Failure::Transport(self.error.clone()))
        } else if !self.stderr.is_empty() {
            Some(Failure::Tool(self.stderr.clone()))
        } else {
            None
        }
    }

    /// Stdout of a successful run, or the failure as an error.
    pub fn into_stdout(self, invocation: &str) -> anyhow::Result<String> {
        match self.failure() {
            Some(Failure::Transport(error)) => {
                anyhow::bail!("could not run `{}`: {}", invocation, error.trim_end())
            }
            Some(Failure::Tool(stderr)) => {
                anyhow::bail!("`{}` failed: {}", invocation, stderr.trim_end())
            }
            None => Ok(self.stdout),
        }
    }
}

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn execute(&self, invocation: &Invocation) -> ExecResult;
}

/// Runs programs with `tokio::process`, one child per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn execute(&self, invocation: &Invocation) -> ExecResult {
        debug!("Running `{}`", invocation);

        let mut command = tokio::process::Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(key, value)| (key, value)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        match command.output().await {
            Ok(output) => {
                let result = ExecResult {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    error: String::new(),
                };
                trace!(
                    "`{}` exited with {:?} ({} bytes stdout, {} bytes stderr)",
                    invocation,
                    result.code,
                    result.stdout.len(),
                    result.stderr.len()
                );
                result
            }
            Err(error) => {
                debug!("Failed to spawn `{}`: {}", invocation, error);
                ExecResult {
                    error: error.to_string(),
                    ..Default::default()
                }
            }
        }
    }
}
