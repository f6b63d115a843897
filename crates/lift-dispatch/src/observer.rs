//! Simulation observer trait for progress reporting and data collection.

use lift_car::Car;
use lift_core::Tick;

use crate::TickReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — call counter
///
/// ```rust,ignore
/// struct Answered(usize);
///
/// impl DispatchObserver for Answered {
///     fn on_tick_end(&mut self, _tick: Tick, report: &TickReport, _outstanding: usize) {
///         self.0 += report.satisfied.len();
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called at the very start of each tick, before demand is applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the dispatch step.  `outstanding` is the number of hall
    /// calls still waiting.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport, _outstanding: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the post-step state of every car.
    fn on_snapshot(&mut self, _tick: Tick, _cars: &[Car]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
