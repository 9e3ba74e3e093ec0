use crate::artifacts::presentation::icons::Icons;
use crate::artifacts::presentation::{Decorations, ResourceCommand};
use crate::artifacts::status::status_kind::StatusKind;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Resolves `path` against `root` and removes `.`/`..` components.
///
/// Absolute paths are only cleaned, so a path that was normalized once
/// normalizes to itself.
pub fn normalize_path(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if path.is_absolute() {
        path.to_path_buf().clean()
    } else {
        root.join(path).clean()
    }
}

/// One file entry of the working or staging tree.
///
/// A resource never changes after construction; a new status means a new
/// resource. Tree membership compares resources by [`Resource::path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    path: PathBuf,
    status: StatusKind,
}

impl Resource {
    pub fn new(root: &Path, path: impl AsRef<Path>, status: StatusKind) -> Self {
        Resource {
            path: normalize_path(root, path),
            status,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn status(&self) -> StatusKind {
        self.status
    }

    pub fn is_deleted(&self) -> bool {
        self.status.is_deleted()
    }

    pub fn decorations(&self, icons: &Icons) -> Decorations {
        Decorations::for_status(self.status, icons)
    }

    /// Command run when the resource is activated in the source control view.
    pub fn command(&self) -> ResourceCommand {
        ResourceCommand::diff(self.path.clone())
    }
}
