//! A directory of R sources loaded into one [`StubIndex`].
//!
//! Files get dense [`FileId`]s in path order, so ids are stable for an
//! unchanged tree. With a cache directory configured, each file goes through
//! [`IndexStore::load_or_build`] and only changed or damaged entries are
//! reparsed.

mod discovery;

pub use discovery::discover_sources;

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rpsi_ir::FileId;
use rpsi_stubs::{IndexConfig, IndexError, IndexStore, Loaded, StubIndex, StubRef};
use tracing::{debug, info, warn};

/// Failure to load a workspace at all.
///
/// Per-file problems do not abort a load; they are collected in
/// [`Workspace::failures`].
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("'{}' is not a file or directory", .0.display())]
    NotFound(PathBuf),
    #[error("too many source files")]
    TooManyFiles,
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Counters from one load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub files: usize,
    /// Files whose stubs came from the cache unchanged.
    pub cache_hits: usize,
    pub cache_misses: usize,
    /// Cache entries that were unreadable and rebuilt.
    pub repaired: usize,
    pub failed: usize,
}

/// One file that could not be indexed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Source text and path of an indexed file.
#[derive(Debug)]
pub struct SourceFile {
    pub id: FileId,
    pub path: PathBuf,
    pub text: String,
}

enum Outcome {
    Built,
    Cached(Loaded),
    Failed(String),
}

/// Every source under a root, indexed.
pub struct Workspace {
    root: PathBuf,
    files: Vec<SourceFile>,
    index: StubIndex,
    store: Option<IndexStore>,
    stats: LoadStats,
    failures: Vec<FileFailure>,
}

impl Workspace {
    /// Discover, read, and index every source under `root`.
    #[tracing::instrument(level = "info", skip_all, fields(root = %root.display()))]
    pub fn load(root: &Path, config: &IndexConfig) -> Result<Self, WorkspaceError> {
        if !root.exists() {
            return Err(WorkspaceError::NotFound(root.to_path_buf()));
        }
        let store = IndexStore::from_config(config)?;
        let index = StubIndex::with_options(config.parse.clone());

        let mut files = Vec::new();
        let mut failures = Vec::new();
        for path in discover_sources(root, config) {
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let id = FileId::new(
                        u32::try_from(files.len()).map_err(|_| WorkspaceError::TooManyFiles)?,
                    );
                    index.register(id);
                    files.push(SourceFile { id, path, text });
                }
                Err(e) => failures.push(FileFailure {
                    path,
                    error: e.to_string(),
                }),
            }
        }

        let index_one = |file: &SourceFile| -> Outcome {
            let result = match &store {
                Some(store) => store
                    .load_or_build(&file.path, &file.text)
                    .and_then(|(stubs, loaded)| {
                        index.commit(file.id, stubs).map(|_| Outcome::Cached(loaded))
                    }),
                None => index.index_source(file.id, &file.text).map(|_| Outcome::Built),
            };
            result.unwrap_or_else(|e| Outcome::Failed(e.to_string()))
        };
        let outcomes: Vec<Outcome> = if config.parallel {
            files.par_iter().map(index_one).collect()
        } else {
            files.iter().map(index_one).collect()
        };
        // Registration queued every file; files that failed stay Unindexed
        // and are reported through `failures` instead.
        let _ = index.drain_queue();

        let mut stats = LoadStats {
            files: files.len(),
            failed: failures.len(),
            ..LoadStats::default()
        };
        for (file, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Outcome::Built => stats.cache_misses += 1,
                Outcome::Cached(Loaded::Hit) => stats.cache_hits += 1,
                Outcome::Cached(Loaded::Miss) => stats.cache_misses += 1,
                Outcome::Cached(Loaded::Repaired) => {
                    stats.cache_misses += 1;
                    stats.repaired += 1;
                }
                Outcome::Failed(error) => {
                    warn!(path = %file.path.display(), %error, "failed to index file");
                    stats.failed += 1;
                    failures.push(FileFailure {
                        path: file.path.clone(),
                        error,
                    });
                }
            }
        }
        info!(
            files = stats.files,
            hits = stats.cache_hits,
            failed = stats.failed,
            "workspace loaded"
        );

        Ok(Workspace {
            root: root.to_path_buf(),
            files,
            index,
            store,
            stats,
            failures,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.raw() as usize)
    }

    pub fn index(&self) -> &StubIndex {
        &self.index
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    /// Re-read one file from disk and reindex it, along with anything else
    /// queued. With a cache directory, the file's entry is rewritten.
    pub fn reload(&mut self, id: FileId) -> Result<(), WorkspaceError> {
        let Some(file) = self.files.get_mut(id.raw() as usize) else {
            return Err(IndexError::UnknownFile(id).into());
        };
        file.text = std::fs::read_to_string(&file.path).map_err(|source| IndexError::Io {
            path: file.path.clone(),
            source,
        })?;
        self.index.invalidate(id)?;
        self.reindex(id)?;
        while let Some(next) = self.index.next_queued() {
            self.reindex(next)?;
        }
        Ok(())
    }

    fn reindex(&mut self, id: FileId) -> Result<(), WorkspaceError> {
        let Some(file) = self.files.get(id.raw() as usize) else {
            return Ok(());
        };
        debug!(file = %id, "reindexing");
        match &self.store {
            Some(store) => {
                let (stubs, loaded) = store.load_or_build(&file.path, &file.text)?;
                debug!(file = %id, ?loaded, "store entry refreshed");
                self.index.commit(id, stubs)?;
            }
            None => {
                self.index.index_source(id, &file.text)?;
            }
        }
        let path = &file.path;
        self.failures.retain(|failure| failure.path != *path);
        Ok(())
    }

    /// Source text a stub's span points into.
    pub fn source_of(&self, stub: &StubRef) -> Option<&SourceFile> {
        self.file(stub.file)
    }
}
