//! Quick diff and content capabilities
//!
//! A UI binder shows a diff by asking for the content of two resource URIs:
//! the original (`svn` scheme, served by `svn cat`) and the modified one
//! (`file` scheme, or the `nothing` scheme for deleted files).

use crate::areas::svn::Svn;
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

const DIFF_TITLE_PREFIX: &str = "Diff - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    File,
    Svn,
    Nothing,
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::File => "file",
            Scheme::Svn => "svn",
            Scheme::Nothing => "nothing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceUri {
    pub scheme: Scheme,
    pub path: PathBuf,
}

impl ResourceUri {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ResourceUri {
            scheme: Scheme::File,
            path: path.into(),
        }
    }

    pub fn with_scheme(&self, scheme: Scheme) -> Self {
        ResourceUri {
            scheme,
            path: self.path.clone(),
        }
    }
}

impl std::fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme.name(), self.path.display())
    }
}

/// Everything needed to open a side-by-side diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRequest {
    pub original: ResourceUri,
    pub modified: ResourceUri,
    pub title: String,
    pub preview: bool,
}

impl DiffRequest {
    /// Diff of the file at `path` against its last synced revision.
    ///
    /// A deleted file is compared against empty content.
    pub fn for_path(path: &Path, deleted: bool) -> Self {
        let current = ResourceUri::file(path);
        let original = current.with_scheme(Scheme::Svn);
        let modified = if deleted {
            current.with_scheme(Scheme::Nothing)
        } else {
            current
        };
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        DiffRequest {
            original,
            modified,
            title: format!("{}{}", DIFF_TITLE_PREFIX, name),
            preview: true,
        }
    }
}

/// Maps a working file to the URI of its unmodified version.
///
/// Only `file` URIs have an original, and only when svn controls the path.
pub async fn original_resource(svn: &Svn, uri: &ResourceUri) -> Option<ResourceUri> {
    if uri.scheme != Scheme::File {
        return None;
    }

    if !svn.is_controlled(&uri.path).await {
        return None;
    }

    Some(uri.with_scheme(Scheme::Svn))
}

#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn provide(&self, uri: &ResourceUri) -> anyhow::Result<String>;
}

/// Serves `svn` URIs with the content at the last synced revision.
#[derive(Debug, Clone)]
pub struct SvnContentProvider {
    svn: Svn,
}

impl SvnContentProvider {
    pub fn new(svn: Svn) -> Self {
        SvnContentProvider { svn }
    }
}

#[async_trait]
impl ContentProvider for SvnContentProvider {
    async fn provide(&self, uri: &ResourceUri) -> anyhow::Result<String> {
        self.svn.cat(&uri.path).await
    }
}

/// Serves `nothing` URIs; always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NothingContentProvider;

#[async_trait]
impl ContentProvider for NothingContentProvider {
    async fn provide(&self, _uri: &ResourceUri) -> anyhow::Result<String> {
        Ok(String::new())
    }
}

/// Serves `file` URIs from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileContentProvider;

#[async_trait]
impl ContentProvider for FileContentProvider {
    async fn provide(&self, uri: &ResourceUri) -> anyhow::Result<String> {
        tokio::fs::read_to_string(&uri.path)
            .await
            .with_context(|| format!("failed to read {}", uri.path.display()))
    }
}
