//! Stubs: compact, serializable summaries of the declarations in an R file.
//!
//! A stub tree holds one record per named assignment and one per parameter
//! of a function-valued assignment. It is rebuilt wholesale from a syntax
//! tree, encoded to bytes for the on-disk store, and committed to a
//! [`StubIndex`] that answers name lookups across files.
//!
//! # Layers
//!
//! - [`stub`]: records and the [`StubTree`] arena
//! - [`builder`]: syntax tree to stub tree
//! - [`codec`]: versioned, checksummed bytes with explicit field presence
//! - [`index`]: the concurrent name index and per-file state machine
//! - [`store`]: one cache file per source, rebuilt in isolation when corrupt

pub mod builder;
pub mod codec;
mod hash;
pub mod index;
pub mod store;
pub mod stub;

pub use builder::{build_stub_tree, stubs_for_source};
pub use codec::{decode, encode, StubError};
pub use hash::{content_hash, ContentHash};
pub use index::{FileState, IndexError, StubIndex, StubRef};
pub use store::{IndexConfig, IndexStore, Loaded};
pub use stub::{AssignmentStub, ParameterStub, StubElement, StubId, StubNode, StubTree};
