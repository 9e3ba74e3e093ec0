//! Working tree and staging tree of a working copy
//!
//! [`Model`] keeps two ordered trees of [`Resource`]s. The working tree is
//! rebuilt from `svn status` on every recompute; the staging tree only changes
//! through [`Model::stage`] and [`Model::unstage`].
//!
//! ## Invariants
//!
//! - A path is in at most one tree, and at most once in it. A recompute drops
//!   every path that is currently staged.
//! - Trees are only replaced after a fully successful scan.
//! - Recomputes are numbered when dispatched. A scan older than the last one
//!   applied is discarded, so an overlapping recompute can never roll the
//!   working tree back.

use crate::areas::process::Failure;
use crate::areas::svn::Svn;
use crate::artifacts::core::output::OutputSink;
use crate::artifacts::events::{ChangeNotifier, TreeKind, TreeSnapshot};
use crate::artifacts::status::resource::{Resource, normalize_path};
use crate::artifacts::status::status_line::StatusLineParser;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The two trees, without any I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trees {
    working: Vec<Resource>,
    staging: Vec<Resource>,
}

impl Trees {
    pub fn working(&self) -> &[Resource] {
        &self.working
    }

    pub fn staging(&self) -> &[Resource] {
        &self.staging
    }

    pub fn find(&self, path: &Path) -> Option<(TreeKind, &Resource)> {
        if let Some(resource) = self.working.iter().find(|r| r.path() == path) {
            return Some((TreeKind::Working, resource));
        }

        self.staging
            .iter()
            .find(|r| r.path() == path)
            .map(|resource| (TreeKind::Staging, resource))
    }

    /// Replaces the working tree, keeping the order of `resources`.
    ///
    /// Staged paths and repeated paths are skipped. Returns how many
    /// resources were skipped.
    pub fn replace_working(&mut self, resources: impl IntoIterator<Item = Resource>) -> usize {
        let mut seen = self
            .staging
            .iter()
            .map(|r| r.path().to_path_buf())
            .collect::<HashSet<_>>();
        let mut skipped = 0;

        self.working = resources
            .into_iter()
            .filter(|resource| {
                let fresh = seen.insert(resource.path().to_path_buf());
                if !fresh {
                    skipped += 1;
                }
                fresh
            })
            .collect();

        skipped
    }

    /// Moves matching working entries to the staging tree.
    pub fn stage(&mut self, targets: &[PathBuf]) -> usize {
        Self::transfer(&mut self.working, &mut self.staging, targets)
    }

    /// Moves matching staging entries back to the working tree.
    pub fn unstage(&mut self, targets: &[PathBuf]) -> usize {
        Self::transfer(&mut self.staging, &mut self.working, targets)
    }

    fn transfer(from: &mut Vec<Resource>, to: &mut Vec<Resource>, targets: &[PathBuf]) -> usize {
        let targets = targets.iter().map(PathBuf::as_path).collect::<HashSet<_>>();

        let (moved, kept): (Vec<_>, Vec<_>) = std::mem::take(from)
            .into_iter()
            .partition(|resource| targets.contains(resource.path()));

        *from = kept;
        let count = moved.len();
        to.extend(moved);

        count
    }

    pub fn len(&self) -> usize {
        self.working.len() + self.staging.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty() && self.staging.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecomputeOutcome {
    /// The scan replaced the working tree
    Applied { generation: u64, entries: usize },
    /// The scan failed; both trees are unchanged
    Failed(Failure),
    /// A newer scan was applied first; this one was discarded
    Stale { generation: u64 },
}

#[derive(Debug, Default)]
struct ModelState {
    trees: Trees,
    dispatched: u64,
    applied: u64,
}

/// Status model of one working copy.
#[derive(Debug)]
pub struct Model {
    root: PathBuf,
    svn: Svn,
    parser: StatusLineParser,
    state: Mutex<ModelState>,
    notifier: ChangeNotifier,
    output: OutputSink,
}

impl Model {
    pub fn new(svn: Svn, output: OutputSink) -> anyhow::Result<Self> {
        Ok(Model {
            root: svn.root().to_path_buf(),
            svn,
            parser: StatusLineParser::new()?,
            state: Mutex::new(ModelState::default()),
            notifier: ChangeNotifier::new(),
            output,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub async fn trees(&self) -> Trees {
        self.state.lock().await.trees.clone()
    }

    pub async fn working_tree(&self) -> TreeSnapshot {
        Arc::from(self.state.lock().await.trees.working())
    }

    pub async fn staging_tree(&self) -> TreeSnapshot {
        Arc::from(self.state.lock().await.trees.staging())
    }

    /// Finds the entry for `path` in either tree.
    pub async fn resource(&self, path: impl AsRef<Path>) -> Option<Resource> {
        let path = normalize_path(&self.root, path);
        let state = self.state.lock().await;

        state
            .trees
            .find(&path)
            .map(|(_, resource)| resource.clone())
    }

    /// Parses a status report into resources rooted at the working copy.
    pub fn parse_status(&self, output: &str) -> Vec<Resource> {
        self.parser
            .parse_output(output)
            .into_iter()
            .map(|line| Resource::new(&self.root, line.path, line.kind))
            .collect()
    }

    /// Rebuilds the working tree from `svn status`.
    ///
    /// Failures are written to the output sink and leave both trees as they
    /// were. Listeners get the new working tree on success.
    pub async fn recompute(&self) -> RecomputeOutcome {
        let generation = {
            let mut state = self.state.lock().await;
            state.dispatched += 1;
            state.dispatched
        };
        debug!("Recompute #{} dispatched for {}", generation, self.root.display());

        let result = self.svn.status().await;
        if let Some(failure) = result.failure() {
            warn!("Recompute #{} failed: {}", generation, failure);
            self.output.append(failure.message());
            return RecomputeOutcome::Failed(failure);
        }

        let resources = self.parse_status(&result.stdout);

        let mut state = self.state.lock().await;
        if generation <= state.applied {
            debug!(
                "Recompute #{} discarded, #{} already applied",
                generation, state.applied
            );
            return RecomputeOutcome::Stale { generation };
        }

        state.applied = generation;
        let skipped = state.trees.replace_working(resources);
        if skipped > 0 {
            debug!(
                "Recompute #{} skipped {} staged or repeated paths",
                generation, skipped
            );
        }

        let entries = state.trees.working().len();
        info!("Working tree has {} entries", entries);
        self.notifier
            .emit(TreeKind::Working, Arc::from(state.trees.working()));

        RecomputeOutcome::Applied {
            generation,
            entries,
        }
    }

    /// Moves the working entries for `targets` to the staging tree.
    ///
    /// Unknown paths are ignored. Returns how many entries moved. Listeners
    /// get the working tree and then the staging tree, but only when at least
    /// one entry moved; a call that matches nothing emits no events.
    pub async fn stage<P: AsRef<Path>>(&self, targets: &[P]) -> usize {
        let targets = self.normalize_targets(targets);
        let mut state = self.state.lock().await;

        let moved = state.trees.stage(&targets);
        debug!("Staged {} of {} targets", moved, targets.len());
        if moved > 0 {
            self.emit_trees(&state.trees);
        }

        moved
    }

    /// Moves the staging entries for `targets` back to the working tree.
    ///
    /// Unknown paths are ignored. Returns how many entries moved. Like
    /// [`Model::stage`], both trees are emitted only when an entry moved.
    pub async fn unstage<P: AsRef<Path>>(&self, targets: &[P]) -> usize {
        let targets = self.normalize_targets(targets);
        let mut state = self.state.lock().await;

        let moved = state.trees.unstage(&targets);
        debug!("Unstaged {} of {} targets", moved, targets.len());
        if moved > 0 {
            self.emit_trees(&state.trees);
        }

        moved
    }

    /// Drops every listener.
    pub fn dispose(&self) {
        self.notifier.clear();
    }

    fn normalize_targets<P: AsRef<Path>>(&self, targets: &[P]) -> Vec<PathBuf> {
        targets
            .iter()
            .map(|target| normalize_path(&self.root, target))
            .collect()
    }

    fn emit_trees(&self, trees: &Trees) {
        self.notifier
            .emit(TreeKind::Working, Arc::from(trees.working()));
        self.notifier
            .emit(TreeKind::Staging, Arc::from(trees.staging()));
    }
}
