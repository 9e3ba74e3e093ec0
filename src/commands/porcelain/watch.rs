use crate::areas::repository::Repository;
use crate::areas::watcher::RepoWatcher;
use crate::artifacts::events::TreeKind;
use crate::commands::porcelain::status::render_resources;
use crate::commands::registry::{CommandOutcome, CommandTable};
use log::{debug, info};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

const COMMAND_PREFIX: &str = "svn.";

impl Repository {
    /// Runs an interactive session until ctrl-c.
    ///
    /// The working tree is recomputed on start and after every burst of file
    /// changes, and both trees are printed whenever they change. Each line on
    /// stdin is a command, e.g. `stage src/a.ts` or `svn.diff src/a.ts`.
    pub async fn watch(&self) -> anyhow::Result<()> {
        let table = CommandTable::standard()?;
        let mut watcher = RepoWatcher::new(self.path(), self.config().debounce)?;

        let output = self.output().clone();
        let root = self.path().to_path_buf();
        self.subscribe(move |event| {
            let title = match event.kind {
                TreeKind::Working => "Changes",
                TreeKind::Staging => "Staged Changes",
            };
            output.append(&format!(
                "{} ({}):\n{}",
                title,
                event.snapshot.len(),
                render_resources(&root, &event.snapshot)
            ));
        });

        self.model().recompute().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;

        loop {
            tokio::select! {
                batch = watcher.next_batch() => match batch {
                    Some(batch) => {
                        debug!("{} paths changed", batch.paths.len());
                        self.model().recompute().await;
                    }
                    None => break,
                },
                line = lines.next_line(), if stdin_open => match line? {
                    Some(line) => self.run_command_line(&table, &line).await,
                    None => stdin_open = false,
                },
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        info!("Watch session ended");
        self.dispose();

        Ok(())
    }

    async fn run_command_line(&self, table: &CommandTable, line: &str) {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return;
        };

        let id = if command.starts_with(COMMAND_PREFIX) {
            command.to_string()
        } else {
            format!("{}{}", COMMAND_PREFIX, command)
        };
        let targets = words.map(PathBuf::from).collect::<Vec<_>>();

        match table.invoke(&id, self, targets).await {
            Ok(CommandOutcome::Diff(Some(request))) => self.output().append(&format!(
                "{}: {} -> {}",
                request.title, request.original, request.modified
            )),
            Ok(outcome) => debug!("{} finished: {:?}", id, outcome),
            Err(error) => self.output().append(&format!("{:#}", error)),
        }
    }
}
