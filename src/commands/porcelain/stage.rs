use crate::areas::repository::Repository;
use std::path::Path;

impl Repository {
    /// Marks the working entries for `targets` for the next commit.
    pub async fn stage<P: AsRef<Path>>(&self, targets: &[P]) -> usize {
        self.model().stage(targets).await
    }

    pub async fn unstage<P: AsRef<Path>>(&self, targets: &[P]) -> usize {
        self.model().unstage(targets).await
    }
}
