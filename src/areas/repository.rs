use crate::areas::model::Model;
use crate::areas::process::{ProcessRunner, TokioProcessRunner};
use crate::areas::svn::Svn;
use crate::artifacts::core::config::Config;
use crate::artifacts::core::output::OutputSink;
use crate::artifacts::core::scope::Scope;
use crate::artifacts::diff::{
    ContentProvider, FileContentProvider, NothingContentProvider, ResourceUri, Scheme,
    SvnContentProvider,
};
use crate::artifacts::events::{ChangeEvent, SubscriptionId};
use crate::artifacts::presentation::icons::Icons;
use log::debug;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One source control session over a working copy.
///
/// Owns the svn client, the status model and everything that has to be
/// released when the session ends.
pub struct Repository {
    path: Box<Path>,
    config: Config,
    output: OutputSink,
    svn: Svn,
    model: Arc<Model>,
    icons: Icons,
    scope: Mutex<Scope>,
}

impl Repository {
    pub fn new(
        path: impl AsRef<Path>,
        writer: Box<dyn Write + Send>,
        config: Config,
    ) -> anyhow::Result<Self> {
        Self::with_runner(path, writer, config, Arc::new(TokioProcessRunner))
    }

    pub fn with_runner(
        path: impl AsRef<Path>,
        writer: Box<dyn Write + Send>,
        config: Config,
        runner: Arc<dyn ProcessRunner>,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref().canonicalize()?;

        if !path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", path);
        }

        let output = OutputSink::new(writer);
        let svn = Svn::new(&config, path.clone(), runner);
        let model = Arc::new(Model::new(svn.clone(), output.clone())?);
        let icons = Icons::new(config.icons_path.clone());

        let mut scope = Scope::new();
        let teardown = model.clone();
        scope.add(move || teardown.dispose());

        debug!("Opened repository session at {}", path.display());

        Ok(Repository {
            path: path.into_boxed_path(),
            config,
            output,
            svn,
            model,
            icons,
            scope: Mutex::new(scope),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output(&self) -> &OutputSink {
        &self.output
    }

    pub fn writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.output.writer()
    }

    pub fn svn(&self) -> &Svn {
        &self.svn
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn icons(&self) -> &Icons {
        &self.icons
    }

    /// Subscribes to tree changes for the lifetime of the session.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        let mut scope = self.scope();
        self.model.notifier().subscribe_scoped(&mut scope, listener)
    }

    pub fn content_provider(&self, scheme: Scheme) -> Box<dyn ContentProvider> {
        match scheme {
            Scheme::Svn => Box::new(SvnContentProvider::new(self.svn.clone())),
            Scheme::Nothing => Box::new(NothingContentProvider),
            Scheme::File => Box::new(FileContentProvider),
        }
    }

    pub async fn content(&self, uri: &ResourceUri) -> anyhow::Result<String> {
        self.content_provider(uri.scheme).provide(uri).await
    }

    /// Ends the session: releases subscriptions and model listeners.
    pub fn dispose(&self) {
        debug!("Disposing repository session at {}", self.path.display());
        self.scope().dispose();
    }

    fn scope(&self) -> MutexGuard<'_, Scope> {
        self.scope.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Repository {
    fn drop(&mut self) {
        self.dispose();
    }
}
