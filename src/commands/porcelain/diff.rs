use crate::areas::repository::Repository;
use crate::artifacts::diff::DiffRequest;
use crate::artifacts::status::resource::normalize_path;
use std::path::PathBuf;

impl Repository {
    /// Builds the diff of `target` against its last synced revision.
    ///
    /// Without a target there is nothing to diff. A target the model knows
    /// as deleted is diffed against empty content.
    pub async fn diff(&self, target: Option<PathBuf>) -> anyhow::Result<Option<DiffRequest>> {
        let Some(target) = target else {
            return Ok(None);
        };

        let path = normalize_path(self.path(), target);
        let deleted = self
            .model()
            .resource(&path)
            .await
            .is_some_and(|resource| resource.is_deleted());

        Ok(Some(DiffRequest::for_path(&path, deleted)))
    }
}
