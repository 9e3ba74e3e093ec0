use crate::areas::model::RecomputeOutcome;
use crate::areas::repository::Repository;
use crate::artifacts::diff::DiffRequest;
use crate::commands::CommandId;
use futures::FutureExt;
use futures::future::BoxFuture;
use log::debug;
use std::path::PathBuf;

/// What a command produced for the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Number of entries moved between the trees
    Moved(usize),
    /// Diff to open, if there was anything to diff
    Diff(Option<DiffRequest>),
    Recomputed(RecomputeOutcome),
    Done,
}

pub type CommandHandler =
    for<'r> fn(&'r Repository, Vec<PathBuf>) -> BoxFuture<'r, anyhow::Result<CommandOutcome>>;

/// Command identifiers and their handlers, in registration order.
#[derive(Default)]
pub struct CommandTable {
    commands: Vec<(CommandId, CommandHandler)>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands of a source control session.
    pub fn standard() -> anyhow::Result<Self> {
        let mut table = Self::new();
        table.register(CommandId::Diff, diff)?;
        table.register(CommandId::Stage, stage)?;
        table.register(CommandId::Unstage, unstage)?;
        table.register(CommandId::Revert, revert)?;
        table.register(CommandId::Refresh, refresh)?;

        Ok(table)
    }

    pub fn register(&mut self, id: CommandId, handler: CommandHandler) -> anyhow::Result<()> {
        if self.get(id).is_some() {
            anyhow::bail!("command {} is already registered", id);
        }

        debug!("Registering command {}", id);
        self.commands.push((id, handler));
        Ok(())
    }

    pub fn ids(&self) -> impl Iterator<Item = CommandId> + '_ {
        self.commands.iter().map(|(id, _)| *id)
    }

    pub fn get(&self, id: CommandId) -> Option<CommandHandler> {
        self.commands
            .iter()
            .find(|(registered, _)| *registered == id)
            .map(|(_, handler)| *handler)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub async fn invoke(
        &self,
        id: &str,
        repository: &Repository,
        targets: Vec<PathBuf>,
    ) -> anyhow::Result<CommandOutcome> {
        let handler = CommandId::try_parse(id)
            .and_then(|id| self.get(id))
            .ok_or_else(|| anyhow::anyhow!("unknown command: {}", id))?;

        debug!("Invoking {} with {} targets", id, targets.len());
        handler(repository, targets).await
    }
}

fn diff(repository: &Repository, targets: Vec<PathBuf>) -> BoxFuture<'_, anyhow::Result<CommandOutcome>> {
    async move {
        let target = targets.into_iter().next();
        Ok(CommandOutcome::Diff(repository.diff(target).await?))
    }
    .boxed()
}

fn stage(repository: &Repository, targets: Vec<PathBuf>) -> BoxFuture<'_, anyhow::Result<CommandOutcome>> {
    async move { Ok(CommandOutcome::Moved(repository.stage(&targets).await)) }.boxed()
}

fn unstage(
    repository: &Repository,
    targets: Vec<PathBuf>,
) -> BoxFuture<'_, anyhow::Result<CommandOutcome>> {
    async move { Ok(CommandOutcome::Moved(repository.unstage(&targets).await)) }.boxed()
}

fn revert(repository: &Repository, targets: Vec<PathBuf>) -> BoxFuture<'_, anyhow::Result<CommandOutcome>> {
    async move {
        repository.revert(&targets).await?;
        Ok(CommandOutcome::Done)
    }
    .boxed()
}

fn refresh(
    repository: &Repository,
    _targets: Vec<PathBuf>,
) -> BoxFuture<'_, anyhow::Result<CommandOutcome>> {
    async move { Ok(CommandOutcome::Recomputed(repository.model().recompute().await)) }.boxed()
}
