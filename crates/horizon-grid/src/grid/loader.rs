//! Lazy row loading.
//!
//! Records are materialized in fixed-size batches from the top of the list.
//! The first `visible_row_count` records always have rows; the rest only exist
//! in the record list until the viewport scrolls to the bottom of the
//! materialized content.

use std::ops::Range;

use crate::config::DEFAULT_LOAD_ROWS_COUNT;

/// Scroll fraction at which the next batch is loaded.
pub const LOAD_TRIGGER_FRACTION: f64 = 1.0;

/// Batch bookkeeping for row materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyRowLoader {
    visible: usize,
    batch_size: usize,
}

impl LazyRowLoader {
    /// Create a loader with the given batch size (at least 1).
    pub fn new(batch_size: usize) -> Self {
        Self {
            visible: 0,
            batch_size: batch_size.max(1),
        }
    }

    /// Number of materialized records.
    #[inline]
    pub fn visible_row_count(&self) -> usize {
        self.visible
    }

    /// Records materialized per batch.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Set the batch size. Zero is treated as one.
    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size.max(1);
    }

    /// Index range of the next batch for a list of `total` records.
    ///
    /// Empty once every record is materialized.
    pub fn next_batch(&self, total: usize) -> Range<usize> {
        let start = self.visible.min(total);
        let end = self.visible.saturating_add(self.batch_size).min(total);
        start..end
    }

    /// Record that `count` more rows were materialized.
    pub fn advance(&mut self, count: usize) {
        self.visible += count;
    }

    /// Whether every one of `total` records is materialized.
    pub fn is_exhausted(&self, total: usize) -> bool {
        self.visible >= total
    }

    /// Whether a viewport at `fraction` asks for more rows.
    pub fn should_load(fraction: f64) -> bool {
        fraction >= LOAD_TRIGGER_FRACTION
    }

    /// A record was inserted at `index`.
    ///
    /// Returns `true` if it falls inside the materialized range and must be
    /// materialized right away.
    pub fn record_inserted(&mut self, index: usize) -> bool {
        if index < self.visible {
            self.visible += 1;
            true
        } else {
            false
        }
    }

    /// A record at `index` was removed.
    pub fn record_removed(&mut self, index: usize) {
        if index < self.visible {
            self.visible -= 1;
        }
    }

    /// Forget every materialized row.
    pub fn reset(&mut self) {
        self.visible = 0;
    }
}

impl Default for LazyRowLoader {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_ROWS_COUNT)
    }
}
