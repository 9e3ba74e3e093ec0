use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Prints the svn client version, or `unknown` when it can't be probed.
    pub async fn version(&self) -> anyhow::Result<()> {
        let version = self.svn().version().await;

        let mut writer = self.writer();
        match version {
            Some(version) => writeln!(writer, "svn {}", version)?,
            None => writeln!(writer, "unknown")?,
        }
        writer.flush()?;

        Ok(())
    }
}
