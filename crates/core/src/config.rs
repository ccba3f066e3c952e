//! Compiled-in configuration for docsync.
//!
//! The upstream repository and the file table are fixed at build time. The
//! only value supplied at runtime is the project root, which callers pass in
//! explicitly so that the writer never has to guess where it is running.

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::errors::ConfigError;

// ---------------------------------------------------------------------------
// Build-time constants
// ---------------------------------------------------------------------------

/// Host serving raw file contents for GitHub repositories.
pub const RAW_GITHUB_HOST: &str = "https://raw.githubusercontent.com";

/// Owner of the upstream template repository.
pub const GITHUB_REPO_OWNER: &str = "K-shir0";

/// Name of the upstream template repository.
pub const GITHUB_REPO_NAME: &str = "docs-boilerplate-llm";

/// Branch the templates are read from.
pub const GITHUB_BRANCH: &str = "main";

/// Per-request timeout for fetching a single file.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Files to synchronize, processed in this order.
pub const FILES_TO_SYNC: &[SyncEntry] = &[
    SyncEntry::new("CLAUDE.md", "CLAUDE.md"),
    SyncEntry::new("docs/design.md.sample", "docs/design.md.sample"),
];

// ---------------------------------------------------------------------------
// Sync entry
// ---------------------------------------------------------------------------

/// One remote file and the local path it is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncEntry {
    /// Path inside the upstream repository.
    pub source_path: &'static str,

    /// Path relative to the project root.
    pub dest_path: &'static str,
}

impl SyncEntry {
    pub const fn new(source_path: &'static str, dest_path: &'static str) -> Self {
        Self {
            source_path,
            dest_path,
        }
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Location of the upstream template repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Raw content host, without a trailing slash.
    pub raw_host: String,
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl RepositoryConfig {
    /// Base URL every source path is joined onto.
    pub fn raw_base_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.raw_host.trim_end_matches('/'),
            self.owner,
            self.name,
            self.branch
        )
    }

    /// `owner/name`, as shown in the report header.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            raw_host: RAW_GITHUB_HOST.into(),
            owner: GITHUB_REPO_OWNER.into(),
            name: GITHUB_REPO_NAME.into(),
            branch: GITHUB_BRANCH.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Everything a sync run needs.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub repository: RepositoryConfig,

    /// Ordered file table.
    pub entries: Vec<SyncEntry>,

    /// Directory every `dest_path` is resolved against.
    pub project_root: PathBuf,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl SyncConfig {
    /// The fixed configuration, rooted at `project_root`.
    pub fn builtin(project_root: impl Into<PathBuf>) -> Self {
        Self {
            repository: RepositoryConfig::default(),
            entries: FILES_TO_SYNC.to_vec(),
            project_root: project_root.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Point the fetcher at a different raw content host.
    pub fn with_raw_host(mut self, raw_host: impl Into<String>) -> Self {
        self.repository.raw_host = raw_host.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_entries(mut self, entries: Vec<SyncEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Check the entry table and settings for obvious mistakes.
    ///
    /// Destination uniqueness is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "timeout".into(),
                detail: "must be greater than zero".into(),
            });
        }

        for entry in &self.entries {
            if entry.source_path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "source_path".into(),
                    detail: format!("empty source path for '{}'", entry.dest_path),
                });
            }
            if !is_contained_relative(Path::new(entry.dest_path)) {
                return Err(ConfigError::InvalidValue {
                    field: "dest_path".into(),
                    detail: format!(
                        "'{}' must be a relative path inside the project root",
                        entry.dest_path
                    ),
                });
            }
        }

        debug!(entries = self.entries.len(), "configuration validated");
        Ok(())
    }
}

/// True for a non-empty relative path that never climbs above its base.
fn is_contained_relative(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    depth > 0
}
