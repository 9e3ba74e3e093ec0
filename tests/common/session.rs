use crate::common::output::SharedBuffer;
use crate::common::runner::FakeRunner;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use svn_scm::areas::repository::Repository;
use svn_scm::artifacts::core::config::Config;
use svn_scm::artifacts::events::{ChangeEvent, TreeKind};
use svn_scm::artifacts::status::resource::Resource;
use svn_scm::artifacts::status::status_kind::StatusKind;

pub struct Session {
    pub repository: Repository,
    pub runner: Arc<FakeRunner>,
    pub output: SharedBuffer,
    pub dir: TempDir,
}

impl Session {
    pub fn path(&self, relative: &str) -> PathBuf {
        self.repository.path().join(relative)
    }

    pub fn resource(&self, relative: &str, status: StatusKind) -> Resource {
        Resource::new(self.repository.path(), relative, status)
    }

    /// Records every change event as `(kind, paths)`.
    pub fn record_events(&self) -> Arc<Mutex<Vec<(TreeKind, Vec<PathBuf>)>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();

        self.repository.subscribe(move |event: &ChangeEvent| {
            let paths = event
                .snapshot
                .iter()
                .map(|resource| resource.path().to_path_buf())
                .collect();
            sink.lock().unwrap().push((event.kind, paths));
        });

        events
    }
}

#[fixture]
pub fn working_copy() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn session(working_copy: TempDir) -> Session {
    open_session(working_copy, Config::default())
}

pub fn open_session(dir: TempDir, config: Config) -> Session {
    let runner = Arc::new(FakeRunner::default());
    let output = SharedBuffer::default();

    let repository = Repository::with_runner(
        dir.path(),
        Box::new(output.clone()),
        config,
        runner.clone(),
    )
    .expect("Failed to open repository session");

    Session {
        repository,
        runner,
        output,
        dir,
    }
}
