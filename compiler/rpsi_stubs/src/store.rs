//! On-disk stub store.
//!
//! One entry per source file, named by a hash of the source path:
//!
//! ```text
//! <cache_dir>/
//! ├── 3f2a9c0d5e7b1184.stubs   # bincode StoreEntry
//! └── ...
//! ```
//!
//! An entry records the source path, the content hash of the text it was
//! built from, and the encoded stub tree. A stale entry is a miss. A corrupt
//! entry is rebuilt from source on its own; no other entry is touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rpsi_parse::ParseOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builder::stubs_for_source;
use crate::codec::{decode, encode, StubError};
use crate::hash::{content_hash, ContentHash};
use crate::index::IndexError;
use crate::stub::StubTree;

const ENTRY_EXTENSION: &str = "stubs";

/// Indexing configuration shared by the store and its drivers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// Store directory; `None` keeps the index in memory only.
    pub cache_dir: Option<PathBuf>,
    /// Index files in parallel.
    pub parallel: bool,
    /// Source extensions, without the dot.
    pub extensions: Vec<String>,
    pub parse: ParseOptions,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            cache_dir: None,
            parallel: true,
            extensions: vec!["R".to_owned(), "r".to_owned()],
            parse: ParseOptions::default(),
        }
    }
}

impl IndexConfig {
    /// `path` has one of the source extensions.
    pub fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// How [`IndexStore::load_or_build`] obtained its stubs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Loaded {
    /// Valid entry for the current text.
    Hit,
    /// No entry, or one for older text; built and saved.
    Miss,
    /// Corrupt entry; rebuilt and overwritten.
    Repaired,
}

#[derive(Serialize, Deserialize)]
struct StoreEntry {
    source: String,
    content_hash: ContentHash,
    stubs: Vec<u8>,
}

pub struct IndexStore {
    dir: PathBuf,
    options: ParseOptions,
}

impl IndexStore {
    /// Open the store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, IndexError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| IndexError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(IndexStore {
            dir,
            options: ParseOptions::default(),
        })
    }

    /// Open the store named by `config`, if it names one.
    pub fn from_config(config: &IndexConfig) -> Result<Option<Self>, IndexError> {
        config
            .cache_dir
            .as_ref()
            .map(|dir| Ok(Self::open(dir)?.with_options(config.parse.clone())))
            .transpose()
    }

    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Entry file for `source_path`.
    pub fn entry_path(&self, source_path: &Path) -> PathBuf {
        let key = content_hash(&source_path.to_string_lossy());
        self.dir.join(format!("{key}.{ENTRY_EXTENSION}"))
    }

    /// Stubs stored for `source_path` at `hash`. `Ok(None)` when there is no
    /// entry or it was built from other text; `Err(IndexError::Stub)` when
    /// the entry is corrupt.
    pub fn load(&self, source_path: &Path, hash: ContentHash) -> Result<Option<StubTree>, IndexError> {
        let path = self.entry_path(source_path);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(IndexError::Io { path, source }),
        };
        let entry: StoreEntry = bincode::deserialize(&bytes)
            .map_err(|e| StubError::Corrupt(format!("undecodable store entry: {e}")))?;
        if entry.source != source_path.to_string_lossy() || entry.content_hash != hash {
            return Ok(None);
        }
        Ok(Some(decode(&entry.stubs)?))
    }

    /// Write the entry for `source_path`. The file is replaced atomically.
    pub fn save(&self, source_path: &Path, hash: ContentHash, stubs: &StubTree) -> Result<(), IndexError> {
        let entry = StoreEntry {
            source: source_path.to_string_lossy().into_owned(),
            content_hash: hash,
            stubs: encode(stubs),
        };
        let bytes = bincode::serialize(&entry)?;
        let path = self.entry_path(source_path);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|source| IndexError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| IndexError::Io { path, source })
    }

    /// Stubs for `source` at `source_path`, from the store when the entry
    /// is valid and built (then saved) otherwise.
    pub fn load_or_build(&self, source_path: &Path, source: &str) -> Result<(StubTree, Loaded), IndexError> {
        let hash = content_hash(source);
        let loaded = match self.load(source_path, hash) {
            Ok(Some(stubs)) => return Ok((stubs, Loaded::Hit)),
            Ok(None) => Loaded::Miss,
            Err(IndexError::Stub(e)) => {
                warn!(path = %source_path.display(), error = %e, "rebuilding corrupt store entry");
                Loaded::Repaired
            }
            Err(e) => return Err(e),
        };
        let stubs = stubs_for_source(source, &self.options)?;
        self.save(source_path, hash, &stubs)?;
        debug!(path = %source_path.display(), ?loaded, "stored stubs");
        Ok((stubs, loaded))
    }

    /// Delete the entry for `source_path`, if any.
    pub fn remove(&self, source_path: &Path) -> Result<(), IndexError> {
        let path = self.entry_path(source_path);
        match fs::remove_file(&path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(IndexError::Io { path, source: e }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
