use crate::areas::repository::Repository;
use crate::artifacts::presentation::status_bar::BranchIndicator;
use std::io::Write;

impl Repository {
    pub async fn branch_indicator(&self) -> BranchIndicator {
        BranchIndicator::from_info(self.svn().info().await.as_ref())
    }

    /// Prints where the working copy points to.
    pub async fn info(&self) -> anyhow::Result<()> {
        let info = self.svn().info().await;
        let indicator = BranchIndicator::from_info(info.as_ref());

        let mut writer = self.writer();
        match (&info, indicator.text()) {
            (Some(info), Some(text)) => {
                writeln!(writer, "URL: {}", info.url)?;
                writeln!(writer, "Repository Root: {}", info.root)?;
                writeln!(writer, "Branch: {}", info.branch)?;
                writeln!(writer, "{}", text)?;
            }
            _ => writeln!(writer, "not a working copy")?,
        }
        writer.flush()?;

        Ok(())
    }
}
