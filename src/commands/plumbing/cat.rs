use crate::areas::repository::Repository;
use crate::artifacts::diff::{ResourceUri, Scheme};
use crate::artifacts::status::resource::normalize_path;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Prints `path` as of the last synced revision.
    pub async fn cat(&self, path: &Path) -> anyhow::Result<()> {
        let uri = ResourceUri::file(normalize_path(self.path(), path)).with_scheme(Scheme::Svn);
        let content = self.content(&uri).await?;

        let mut writer = self.writer();
        write!(writer, "{}", content)?;
        writer.flush()?;

        Ok(())
    }
}
