//! # fusion-index
//!
//! Dynamic predecessor structures over 64-bit integer keys, built on a shared
//! word-parallel primitive: the fusion node, a compressed-trie summary that
//! answers predecessor queries over up to eight keys with a handful of packed
//! comparisons.
//!
//! ## Structures
//!
//! - [`FusionNode`]: the primitive itself, up to eight sorted keys plus a
//!   three-word summary, constant-time predecessor.
//! - [`Octrie`]: a B-tree of branching factor 9 whose nodes search with
//!   fusion-node summaries. Full 64-bit universe, supports removal.
//! - [`SamplingIndex`]: a two-level, universe-partitioned index over 40-bit
//!   keys. The bucket representation is picked at compile time: [`BitsetIndex`]
//!   (idempotent, `2^s` bits per bucket) or [`ListIndex`] (compact for sparse
//!   buckets, duplicates accumulate).
//! - [`BatchedIndex`]: defers insertions into a buffer and flushes them in
//!   sorted order, amortizing top-level updates for clustered streams.
//!
//! All structures answer queries with the same [`PredResult`] conventions and
//! agree with each other on identical inputs; the [`PredecessorSet`] trait
//! exposes that common surface.
//!
//! ## Example
//!
//! ```rust
//! use fusion_index::{BitsetIndex, Octrie};
//!
//! let keys = [17u64, 3, 29, 11, 41];
//! let mut trie = Octrie::new();
//! let mut index = BitsetIndex::new(8).unwrap();
//! for &k in &keys {
//!     trie.insert(k);
//!     index.insert(k);
//! }
//! assert_eq!(trie.predecessor(20).key(), Some(17));
//! assert_eq!(index.predecessor(20).key(), Some(17));
//! assert!(!trie.predecessor(2).exists);
//! ```
//!
//! ## Choosing a structure
//!
//! The octrie is the general-purpose choice: any `u64` key, deletions, no
//! tuning. The sampling index trades universe width (40 bits) and a
//! per-universe sampling parameter `s` for flatter lookups; `s` must be sized
//! to the expected key density, since the top array holds one slot per
//! occupied prefix range and each bitset bucket eagerly allocates `2^s` bits.

// Much of the arithmetic here packs lanes into machine words and assumes the
// word is 64 bits wide.
#[cfg(not(target_pointer_width = "64"))]
compile_error!("this crate requires a 64-bit target");

pub mod batched;
pub mod error;
pub mod fusion;
pub mod index;
pub mod octrie;
pub mod result;
pub mod word;

pub use batched::{BatchedBitsetIndex, BatchedIndex, BatchedListIndex};
pub use error::IndexError;
pub use fusion::FusionNode;
pub use index::{BitsetBucket, BitsetIndex, ListBucket, ListIndex, SamplingIndex, SuffixSet};
pub use octrie::Octrie;
pub use result::{PredResult, PredecessorSet};
