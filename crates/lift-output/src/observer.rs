//! `TraceObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use lift_car::Car;
use lift_core::{SimClock, SimConfig, Tick};
use lift_dispatch::{DispatchObserver, TickReport};

use crate::row::{CarSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes car snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`, using `config` for simulated
    /// wall-clock conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport, outstanding: usize) {
        let row = TickSummaryRow {
            tick:              tick.0,
            unix_time_secs:    self.clock.unix_secs_at(tick),
            satisfied_calls:   report.satisfied.len() as u32,
            assigned_calls:    report.assigned.len() as u32,
            outstanding_calls: outstanding as u32,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &[Car]) {
        let rows: Vec<CarSnapshotRow> =
            cars.iter().map(|car| CarSnapshotRow::from_car(tick, car)).collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
