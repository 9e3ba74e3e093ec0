//! File system watcher for a working copy
//!
//! Watches the working copy recursively and yields one [`ChangeBatch`] per
//! burst of events. Events inside the `.svn` administrative directory are
//! ignored, since running `svn status` itself touches it.

use log::{debug, info, trace, warn};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio::time::Instant;

const ADMIN_DIR: &str = ".svn";

/// Paths changed during one burst of file system activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeBatch {
    pub paths: BTreeSet<PathBuf>,
}

pub struct RepoWatcher {
    _watcher: RecommendedWatcher,
    rx: UnboundedReceiver<Result<Event, notify::Error>>,
    debounce: Duration,
    pending: ChangeBatch,
}

impl RepoWatcher {
    pub fn new(root: &Path, debounce: Duration) -> anyhow::Result<Self> {
        info!("Creating RepoWatcher for: {:?}", root);
        let (tx, rx) = unbounded_channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(500)),
        )?;
        watcher.watch(root, RecursiveMode::Recursive)?;

        Ok(Self {
            _watcher: watcher,
            rx,
            debounce,
            pending: ChangeBatch::default(),
        })
    }

    /// Waits for the next relevant change, then collects everything that
    /// arrives until the debounce period passes without a relevant change.
    ///
    /// Only relevant paths restart the quiet period, so constant activity in
    /// the administrative directory cannot hold a batch back.
    ///
    /// Cancel safe: paths collected by a cancelled call are returned by the
    /// next one. Returns `None` once the watcher is gone.
    pub async fn next_batch(&mut self) -> Option<ChangeBatch> {
        while self.pending.paths.is_empty() {
            let event = self.rx.recv().await?;
            Self::collect(event, &mut self.pending);
        }

        let mut deadline = Instant::now() + self.debounce;
        while let Ok(Some(event)) = tokio::time::timeout_at(deadline, self.rx.recv()).await {
            if Self::collect(event, &mut self.pending) > 0 {
                deadline = Instant::now() + self.debounce;
            }
        }

        let batch = std::mem::take(&mut self.pending);
        debug!("Change batch with {} paths", batch.paths.len());
        Some(batch)
    }

    /// Adds the relevant paths of `event` to `batch`; returns how many there were.
    fn collect(event: Result<Event, notify::Error>, batch: &mut ChangeBatch) -> usize {
        match event {
            Ok(event) => {
                if matches!(event.kind, EventKind::Access(_)) {
                    trace!("Ignoring access event: {:?}", event);
                    return 0;
                }

                let mut relevant = 0;
                for path in event.paths {
                    if is_relevant(&path) {
                        trace!("File event {:?}: {}", event.kind, path.display());
                        batch.paths.insert(path);
                        relevant += 1;
                    }
                }
                relevant
            }
            Err(e) => {
                warn!("File watcher error: {:?}", e);
                0
            }
        }
    }
}

/// Whether a change to `path` can affect `svn status`.
pub fn is_relevant(path: &Path) -> bool {
    !path
        .components()
        .any(|component| component.as_os_str() == ADMIN_DIR)
}
