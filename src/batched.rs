//! Batched wrapper around the sampling index.
//!
//! Insertions land in an unordered buffer and only reach the underlying index
//! when the buffer is flushed: explicitly, when it grows past the flush
//! threshold, or before any query. Flushing sorts the buffer first, so runs of
//! clustered keys walk the index's top array once instead of repainting it per
//! key.

use crate::error::IndexError;
use crate::index::{SamplingIndex, SuffixSet, KEY_BITS};
use crate::result::{PredResult, PredecessorSet};
use log::debug;

/// Buffer size that triggers an automatic flush.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 1 << 16;

/// Deferred-insert façade over [`SamplingIndex`].
///
/// Queries take `&mut self`: they must observe every buffered key and
/// therefore flush first.
#[derive(Debug)]
pub struct BatchedIndex<B: SuffixSet> {
    inner: SamplingIndex<B>,
    pending: Vec<u64>,
    threshold: usize,
}

/// Batched sampling index with bitset buckets.
pub type BatchedBitsetIndex = BatchedIndex<crate::index::BitsetBucket>;
/// Batched sampling index with unordered-list buckets.
pub type BatchedListIndex = BatchedIndex<crate::index::ListBucket>;

impl<B: SuffixSet> BatchedIndex<B> {
    pub fn new(sampling: u32) -> Result<Self, IndexError> {
        Self::with_flush_threshold(sampling, DEFAULT_FLUSH_THRESHOLD)
    }

    pub fn with_flush_threshold(sampling: u32, threshold: usize) -> Result<Self, IndexError> {
        Ok(Self {
            inner: SamplingIndex::new(sampling)?,
            pending: Vec::new(),
            threshold: threshold.max(1),
        })
    }

    /// Buffers `key`; the index itself is updated on the next flush.
    pub fn insert(&mut self, key: u64) {
        assert!(key >> KEY_BITS == 0, "index keys must fit in 40 bits");
        self.pending.push(key);
        if self.pending.len() >= self.threshold {
            self.flush();
        }
    }

    /// Streams the buffered keys into the index in ascending order.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        debug!("flushing {} buffered keys", self.pending.len());
        self.pending.sort_unstable();
        for key in self.pending.drain(..) {
            self.inner.insert(key);
        }
    }

    /// Largest recorded key `<= x`. Forces a flush.
    pub fn predecessor(&mut self, x: u64) -> PredResult {
        self.flush();
        self.inner.predecessor(x)
    }

    /// Whether `key` has been inserted. Forces a flush.
    pub fn contains(&mut self, key: u64) -> bool {
        self.flush();
        self.inner.contains(key)
    }

    /// Recorded keys, buffered ones included. Shares the duplicate-counting
    /// caveat of the underlying bucket representation.
    pub fn len(&self) -> u64 {
        self.inner.len() + self.pending.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: SuffixSet> PredecessorSet for BatchedIndex<B> {
    fn insert(&mut self, key: u64) {
        BatchedIndex::insert(self, key);
    }

    fn predecessor(&mut self, x: u64) -> PredResult {
        BatchedIndex::predecessor(self, x)
    }

    fn len(&self) -> u64 {
        BatchedIndex::len(self)
    }
}
