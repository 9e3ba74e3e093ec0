use crate::areas::repository::Repository;
use crate::artifacts::status::resource::normalize_path;
use log::info;
use std::path::PathBuf;

impl Repository {
    /// Reverts `targets`; the working tree catches up on the next recompute.
    pub async fn revert(&self, targets: &[PathBuf]) -> anyhow::Result<()> {
        let paths = targets
            .iter()
            .map(|target| normalize_path(self.path(), target))
            .collect::<Vec<_>>();

        self.svn().revert(&paths).await?;
        info!("Reverted {} paths", paths.len());

        Ok(())
    }
}
