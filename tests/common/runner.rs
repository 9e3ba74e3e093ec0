use async_trait::async_trait;
use derive_new::new;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;
use svn_scm::areas::process::{ExecResult, Invocation, ProcessRunner};

#[derive(Debug, Clone, new)]
pub struct Scripted {
    pub result: ExecResult,
    #[new(default)]
    pub delay: Option<Duration>,
}

/// Process runner that replays scripted results per svn subcommand.
///
/// Responses are taken in order when a call starts, so a delayed response
/// scripted first belongs to the first call even if a later call finishes
/// before it.
#[derive(Debug, Default)]
pub struct FakeRunner {
    responses: Mutex<HashMap<String, VecDeque<Scripted>>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn respond(&self, subcommand: &str, result: ExecResult) -> &Self {
        self.push(subcommand, Scripted::new(result))
    }

    pub fn respond_after(&self, subcommand: &str, result: ExecResult, delay: Duration) -> &Self {
        let mut scripted = Scripted::new(result);
        scripted.delay = Some(delay);
        self.push(subcommand, scripted)
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    fn push(&self, subcommand: &str, scripted: Scripted) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(subcommand.to_string())
            .or_default()
            .push_back(scripted);
        self
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn execute(&self, invocation: &Invocation) -> ExecResult {
        self.invocations.lock().unwrap().push(invocation.clone());

        let scripted = self
            .responses
            .lock()
            .unwrap()
            .get_mut(invocation.subcommand().unwrap_or_default())
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(scripted) => {
                if let Some(delay) = scripted.delay {
                    tokio::time::sleep(delay).await;
                }
                scripted.result
            }
            None => spawn_error(&format!("no response scripted for `{}`", invocation)),
        }
    }
}

pub fn success(stdout: &str) -> ExecResult {
    ExecResult::success(stdout)
}

pub fn tool_error(stderr: &str) -> ExecResult {
    ExecResult {
        code: Some(1),
        stderr: stderr.to_string(),
        ..Default::default()
    }
}

pub fn spawn_error(error: &str) -> ExecResult {
    ExecResult {
        error: error.to_string(),
        ..Default::default()
    }
}
