//! The `OutputWriter` trait implemented by backend writers.

use crate::{CarSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by trace backends.
///
/// Errors are returned to [`TraceObserver`][crate::TraceObserver], which keeps
/// the first one for [`take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of car snapshots.
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
