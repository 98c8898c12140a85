//! Concurrent stub index.
//!
//! # Per-file state
//!
//! ```text
//! Unindexed --begin--> Indexing --commit--> Indexed
//!     ^                    |                   |
//!     +---- invalidate ----+---- invalidate ---+
//! ```
//!
//! Indexing is not re-entrant: a second writer for the same file is turned
//! away while the first holds the file's lock. An invalidation that arrives
//! while a file is indexing marks the run stale; its commit still publishes,
//! then the file drops back to `Unindexed` and is queued again.
//!
//! # Consistency
//!
//! Each file's committed stubs are an `Arc<StubTree>` swapped in one step.
//! The name table maps a name to the files that may contain it; lookups
//! resolve stub ids against the file's current tree, so a reader never sees
//! an id from one tree applied to another. On commit, names are added to the
//! table before the tree is swapped and removed only after, so a committed
//! name is always findable.

use std::sync::Arc;

use crossbeam::channel::{unbounded, Receiver, Sender};
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use rpsi_ir::{FileId, TreeError};
use rpsi_parse::ParseOptions;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::builder::stubs_for_source;
use crate::codec::StubError;
use crate::stub::{StubElement, StubId, StubNode, StubTree};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FileState {
    Unindexed,
    Indexing,
    Indexed,
}

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("file {0} is not registered with the index")]
    UnknownFile(FileId),
    #[error("file {0} is already being indexed")]
    AlreadyIndexing(FileId),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode store entry: {0}")]
    Encode(#[from] bincode::Error),
    #[error(transparent)]
    Stub(#[from] StubError),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// A stub found by a query, with the tree it was resolved against.
#[derive(Clone, Debug)]
pub struct StubRef {
    pub file: FileId,
    pub id: StubId,
    tree: Arc<StubTree>,
}

impl StubRef {
    pub fn node(&self) -> &StubNode {
        &self.tree[self.id]
    }

    pub fn name(&self) -> &str {
        self.node().element.name()
    }

    /// The snapshot this stub belongs to.
    pub fn tree(&self) -> &Arc<StubTree> {
        &self.tree
    }
}

impl PartialEq for StubRef {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file && self.id == other.id && Arc::ptr_eq(&self.tree, &other.tree)
    }
}

struct FileSlot {
    /// Held for the whole of one indexing run.
    writer: Mutex<()>,
    state: RwLock<SlotState>,
}

struct SlotState {
    phase: FileState,
    committed: Arc<StubTree>,
    /// Invalidated while indexing.
    stale: bool,
}

impl FileSlot {
    fn new() -> Self {
        FileSlot {
            writer: Mutex::new(()),
            state: RwLock::new(SlotState {
                phase: FileState::Unindexed,
                committed: Arc::new(StubTree::default()),
                stale: false,
            }),
        }
    }
}

/// Name index over the stubs of many files.
///
/// Shared by reference across threads; every method takes `&self`.
pub struct StubIndex {
    files: DashMap<FileId, Arc<FileSlot>>,
    names: DashMap<String, FxHashSet<FileId>>,
    queue_tx: Sender<FileId>,
    queue_rx: Receiver<FileId>,
    options: ParseOptions,
}

impl Default for StubIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl StubIndex {
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Index that parses sources with `options`.
    pub fn with_options(options: ParseOptions) -> Self {
        let (queue_tx, queue_rx) = unbounded();
        StubIndex {
            files: DashMap::new(),
            names: DashMap::new(),
            queue_tx,
            queue_rx,
            options,
        }
    }

    /// Track `file`. New files start `Unindexed` and are queued.
    pub fn register(&self, file: FileId) {
        let mut inserted = false;
        self.files.entry(file).or_insert_with(|| {
            inserted = true;
            Arc::new(FileSlot::new())
        });
        if inserted {
            self.enqueue(file);
        }
    }

    /// Forget `file` and its names.
    ///
    /// Waits for an indexing run already in progress on `file`; a run that
    /// had not yet taken the file's lock fails with `UnknownFile`.
    pub fn remove(&self, file: FileId) {
        if let Some((_, slot)) = self.files.remove(&file) {
            let _writer = slot.writer.lock();
            let old = Arc::clone(&slot.state.read().committed);
            self.unlink_names(file, &old, &StubTree::default());
        }
    }

    pub fn state(&self, file: FileId) -> Option<FileState> {
        self.slot(file).map(|slot| slot.state.read().phase)
    }

    /// Registered files, in id order.
    pub fn files(&self) -> Vec<FileId> {
        let mut files: Vec<FileId> = self.files.iter().map(|entry| *entry.key()).collect();
        files.sort_unstable();
        files
    }

    /// The source of `file` changed: its committed stubs stay visible, but
    /// it is `Unindexed` and queued until indexed again.
    pub fn invalidate(&self, file: FileId) -> Result<(), IndexError> {
        let slot = self.slot(file).ok_or(IndexError::UnknownFile(file))?;
        let mut state = slot.state.write();
        let phase = state.phase;
        match phase {
            FileState::Indexed => {
                state.phase = FileState::Unindexed;
                drop(state);
                self.enqueue(file);
            }
            FileState::Indexing => state.stale = true,
            FileState::Unindexed => {}
        }
        Ok(())
    }

    /// Parse `source` and commit its stubs for `file`, registering the file
    /// if needed.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %file))]
    pub fn index_source(&self, file: FileId, source: &str) -> Result<Arc<StubTree>, IndexError> {
        self.register(file);
        self.run(file, || stubs_for_source(source, &self.options).map_err(IndexError::from))
    }

    /// Commit already built stubs for `file`, e.g. loaded from the store.
    pub fn commit(&self, file: FileId, stubs: StubTree) -> Result<Arc<StubTree>, IndexError> {
        self.register(file);
        self.run(file, || Ok(stubs))
    }

    /// One indexing run: `Indexing`, build, publish, `Indexed`.
    fn run(
        &self,
        file: FileId,
        build: impl FnOnce() -> Result<StubTree, IndexError>,
    ) -> Result<Arc<StubTree>, IndexError> {
        let slot = self.slot(file).ok_or(IndexError::UnknownFile(file))?;
        self.run_on(file, &slot, build)
    }

    fn run_on(
        &self,
        file: FileId,
        slot: &Arc<FileSlot>,
        build: impl FnOnce() -> Result<StubTree, IndexError>,
    ) -> Result<Arc<StubTree>, IndexError> {
        let Some(_writer) = slot.writer.try_lock() else {
            return Err(IndexError::AlreadyIndexing(file));
        };
        // Removed (or removed and registered again) since `slot` was looked up.
        if !self.is_current(file, slot) {
            return Err(IndexError::UnknownFile(file));
        }
        slot.state.write().phase = FileState::Indexing;

        let stubs = match build() {
            Ok(stubs) => Arc::new(stubs),
            Err(e) => {
                let mut state = slot.state.write();
                state.phase = FileState::Unindexed;
                state.stale = false;
                return Err(e);
            }
        };

        let old = Arc::clone(&slot.state.read().committed);
        self.link_names(file, &stubs);
        let requeue = {
            let mut state = slot.state.write();
            state.committed = Arc::clone(&stubs);
            let stale = std::mem::take(&mut state.stale);
            state.phase = if stale {
                FileState::Unindexed
            } else {
                FileState::Indexed
            };
            stale
        };
        self.unlink_names(file, &old, &stubs);
        if requeue {
            self.enqueue(file);
        }
        debug!(stubs = stubs.len(), requeue, "committed stubs");
        Ok(stubs)
    }

    fn link_names(&self, file: FileId, stubs: &StubTree) {
        for node in stubs.nodes() {
            self.names
                .entry(node.element.name().to_owned())
                .or_default()
                .insert(file);
        }
    }

    /// Drop `file` from names in `old` that `new` no longer has.
    fn unlink_names(&self, file: FileId, old: &StubTree, new: &StubTree) {
        for node in old.nodes() {
            let name = node.element.name();
            if new.mentions(name) {
                continue;
            }
            if let Some(mut files) = self.names.get_mut(name) {
                files.remove(&file);
            }
            self.names.remove_if(name, |_, files| files.is_empty());
        }
    }

    fn enqueue(&self, file: FileId) {
        trace!(%file, "queued for indexing");
        // The receiver lives as long as `self`, so sending cannot fail.
        let _ = self.queue_tx.send(file);
    }

    /// Next queued file that still needs indexing. Entries for files that
    /// were indexed or removed since they were queued are skipped.
    pub fn next_queued(&self) -> Option<FileId> {
        while let Ok(file) = self.queue_rx.try_recv() {
            if self.state(file) == Some(FileState::Unindexed) {
                return Some(file);
            }
        }
        None
    }

    /// Drain the queue, deduplicated, in queue order.
    pub fn drain_queue(&self) -> Vec<FileId> {
        let mut seen = FxHashSet::default();
        std::iter::from_fn(|| self.next_queued())
            .filter(|file| seen.insert(*file))
            .collect()
    }

    fn is_current(&self, file: FileId, slot: &Arc<FileSlot>) -> bool {
        self.files
            .get(&file)
            .is_some_and(|current| Arc::ptr_eq(current.value(), slot))
    }

    fn slot(&self, file: FileId) -> Option<Arc<FileSlot>> {
        self.files.get(&file).map(|slot| Arc::clone(slot.value()))
    }

    /// The most recently committed stubs of `file`.
    pub fn file_stubs(&self, file: FileId) -> Option<Arc<StubTree>> {
        self.slot(file)
            .map(|slot| Arc::clone(&slot.state.read().committed))
    }

    /// Assignments named `name`, across files.
    pub fn find_assignments(&self, name: &str) -> Vec<StubRef> {
        self.find(name, |node| matches!(node.element, StubElement::Assignment(_)))
    }

    /// Parameters named `name`, across files.
    pub fn find_parameters(&self, name: &str) -> Vec<StubRef> {
        self.find(name, |node| matches!(node.element, StubElement::Parameter(_)))
    }

    fn find(&self, name: &str, keep: impl Fn(&StubNode) -> bool) -> Vec<StubRef> {
        let mut files: Vec<FileId> = self
            .names
            .get(name)
            .map(|files| files.iter().copied().collect())
            .unwrap_or_default();
        files.sort_unstable();
        let mut hits = Vec::new();
        for file in files {
            let Some(tree) = self.file_stubs(file) else {
                continue;
            };
            hits.extend(
                tree.iter()
                    .filter(|(_, node)| node.element.name() == name && keep(node))
                    .map(|(id, _)| StubRef {
                        file,
                        id,
                        tree: Arc::clone(&tree),
                    }),
            );
        }
        hits
    }

    /// Every top-level assignment, by file then position.
    pub fn top_level_assignments(&self) -> Vec<StubRef> {
        let mut hits = Vec::new();
        for file in self.files() {
            let Some(tree) = self.file_stubs(file) else {
                continue;
            };
            hits.extend(
                tree.assignments()
                    .filter(|(_, stub)| stub.is_top_level_assignment)
                    .map(|(id, _)| StubRef {
                        file,
                        id,
                        tree: Arc::clone(&tree),
                    }),
            );
        }
        hits
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
