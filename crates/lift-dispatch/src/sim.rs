//! The `Sim` runner: demand, dispatch, observation, and pacing per tick.

use log::{debug, info};

use lift_core::{SimClock, SimConfig, Tick};

use crate::{
    Arrival, Demand, DispatchError, DispatchObserver, DispatchResult, Dispatcher, Pacer, TickReport,
};

/// Drives a [`Dispatcher`] tick by tick.
///
/// Each tick: poll `demand` and apply its arrivals, run
/// [`Dispatcher::step`], notify the observer, advance the clock, then let
/// `pacer` wait.
pub struct Sim<D: Demand, P: Pacer> {
    /// Total ticks, seed, snapshot interval, …
    pub config: SimConfig,

    /// Tracks the current tick and maps it to simulated wall time.
    pub clock: SimClock,

    /// Cars and outstanding calls.
    pub dispatcher: Dispatcher,

    /// Where new calls and cab requests come from.
    pub demand: D,

    /// Real-time cadence between ticks.
    pub pacer: P,
}

impl<D: Demand, P: Pacer> Sim<D, P> {
    pub fn new(config: SimConfig, dispatcher: Dispatcher, demand: D, pacer: P) -> DispatchResult<Self> {
        config.validate()?;
        Ok(Self {
            clock: config.make_clock(),
            config,
            dispatcher,
            demand,
            pacer,
        })
    }

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: DispatchObserver>(&mut self, observer: &mut O) -> DispatchResult<()> {
        info!(
            "running {} cars over {} floors until {}",
            self.dispatcher.cars().len(),
            self.dispatcher.floors().len(),
            self.config.end_tick()
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.run_one(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(
            "finished at {} with {} calls outstanding",
            self.clock,
            self.dispatcher.calls().len()
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: DispatchObserver>(&mut self, n: u64, observer: &mut O) -> DispatchResult<()> {
        for _ in 0..n {
            self.run_one(observer)?;
        }
        Ok(())
    }

    fn run_one<O: DispatchObserver>(&mut self, observer: &mut O) -> DispatchResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let report = self.process_tick(now)?;
        observer.on_tick_end(now, &report, self.dispatcher.calls().len());
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, self.dispatcher.cars());
        }

        self.clock.advance();
        self.pacer.pace();
        Ok(())
    }

    /// Apply this tick's arrivals, then step.  Every cab request is checked
    /// before anything is applied, so an unknown car leaves the tick untouched.
    fn process_tick(&mut self, now: Tick) -> DispatchResult<TickReport> {
        let arrivals = self.demand.arrivals(now, &self.dispatcher);
        for arrival in &arrivals {
            if let Arrival::Cab { car, .. } = *arrival {
                if self.dispatcher.car(car).is_none() {
                    return Err(DispatchError::UnknownCar(car));
                }
            }
        }

        for arrival in arrivals {
            match arrival {
                Arrival::Hall(call) => {
                    debug!("{now}: hall call {call}");
                    self.dispatcher.add_calls([call]);
                }
                Arrival::Cab { car, floor } => {
                    debug!("{now}: {car} cab request for floor {floor}");
                    self.dispatcher.request(car, floor)?;
                }
            }
        }
        self.dispatcher.step()
    }
}
