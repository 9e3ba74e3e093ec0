use crate::areas::model::RecomputeOutcome;
use crate::areas::repository::Repository;
use crate::artifacts::status::resource::Resource;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

/// One `<code> <path>` line per entry, paths relative to `root`.
pub fn render_resources(root: &Path, resources: &[Resource]) -> String {
    let mut rendered = String::new();

    for resource in resources {
        let path = resource.path().strip_prefix(root).unwrap_or(resource.path());
        let _ = writeln!(rendered, "{}{}", resource.status(), path.display());
    }

    rendered
}

impl Repository {
    /// Recomputes the working tree and prints it.
    pub async fn status(&self) -> anyhow::Result<()> {
        match self.model().recompute().await {
            RecomputeOutcome::Applied { .. } | RecomputeOutcome::Stale { .. } => {}
            RecomputeOutcome::Failed(failure) => {
                anyhow::bail!("svn status failed: {}", failure)
            }
        }

        let working_tree = self.model().working_tree().await;
        let mut writer = self.writer();
        write!(writer, "{}", render_resources(self.path(), &working_tree))?;
        writer.flush()?;

        Ok(())
    }
}
