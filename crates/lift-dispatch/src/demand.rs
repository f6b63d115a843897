//! Sources of new hall calls and cab requests.
//!
//! The runner polls its [`Demand`] once at the start of every tick and
//! applies what it returns before the dispatch step.

use std::collections::BTreeMap;

use lift_core::{Call, CarId, Floor, SimRng, Tick};

use crate::Dispatcher;

/// Something new for the dispatcher to handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arrival {
    /// A hall button press.
    Hall(Call),
    /// A cab button press inside `car`.
    Cab { car: CarId, floor: Floor },
}

/// Produces the arrivals for one tick.
pub trait Demand {
    fn arrivals(&mut self, tick: Tick, dispatcher: &Dispatcher) -> Vec<Arrival>;
}

/// Never produces anything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDemand;

impl Demand for NoDemand {
    fn arrivals(&mut self, _tick: Tick, _dispatcher: &Dispatcher) -> Vec<Arrival> {
        Vec::new()
    }
}

// ── ScriptedDemand ────────────────────────────────────────────────────────────

/// Replays a fixed list of arrivals keyed by tick.
///
/// Ticks the runner never reaches are simply never delivered.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDemand {
    script: BTreeMap<Tick, Vec<Arrival>>,
}

impl ScriptedDemand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `arrival` for `tick`.
    pub fn at(mut self, tick: Tick, arrival: Arrival) -> Self {
        self.script.entry(tick).or_default().push(arrival);
        self
    }
}

impl Demand for ScriptedDemand {
    fn arrivals(&mut self, tick: Tick, _dispatcher: &Dispatcher) -> Vec<Arrival> {
        self.script.remove(&tick).unwrap_or_default()
    }
}

// ── RandomDemand ──────────────────────────────────────────────────────────────

/// Seeded random traffic.
///
/// Each tick: with probability `hall_call_prob` one hall call appears at a
/// random floor, and each car independently gets a cab request for a random
/// floor with probability `cab_request_prob`.  Calls at the top floor always
/// go down and calls at the bottom floor always go up.  Probabilities outside
/// [0, 1] are clamped and a NaN probability never fires.
pub struct RandomDemand {
    hall_rng:         SimRng,
    cab_rng:          SimRng,
    hall_call_prob:   f64,
    cab_request_prob: f64,
}

impl RandomDemand {
    pub fn new(seed: u64, hall_call_prob: f64, cab_request_prob: f64) -> Self {
        let mut root = SimRng::new(seed);
        Self {
            hall_rng: root.child(0),
            cab_rng:  root.child(1),
            hall_call_prob,
            cab_request_prob,
        }
    }

    fn hall_call(&mut self, floors: &[Floor]) -> Option<Call> {
        let (&bottom, &top) = (floors.iter().min()?, floors.iter().max()?);
        if bottom == top {
            return None;
        }
        let floor = *self.hall_rng.choose(floors)?;
        let call = if floor == top {
            Call::down(floor)
        } else if floor == bottom || self.hall_rng.gen_bool(0.5) {
            Call::up(floor)
        } else {
            Call::down(floor)
        };
        Some(call)
    }
}

impl Demand for RandomDemand {
    fn arrivals(&mut self, _tick: Tick, dispatcher: &Dispatcher) -> Vec<Arrival> {
        let floors = dispatcher.floors();
        let mut out = Vec::new();

        if self.hall_rng.gen_bool(self.hall_call_prob) {
            if let Some(call) = self.hall_call(floors) {
                out.push(Arrival::Hall(call));
            }
        }

        for car in dispatcher.cars() {
            if !self.cab_rng.gen_bool(self.cab_request_prob) {
                continue;
            }
            if let Some(&floor) = self.cab_rng.choose(floors) {
                out.push(Arrival::Cab { car: car.id(), floor });
            }
        }
        out
    }
}
