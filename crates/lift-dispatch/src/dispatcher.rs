//! The `Dispatcher`: cars, outstanding hall calls, and one dispatch step.

use log::debug;

use lift_car::{Car, Transition};
use lift_core::{Call, CarId, Direction, Floor};

use crate::{DispatchError, DispatchResult, Pacer};

/// Everything that happened during one [`Dispatcher::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Calls removed because a car answered them.
    pub satisfied: Vec<Call>,
    /// Calls absorbed into a car's queue, in car order.
    pub assigned: Vec<(CarId, Call)>,
    /// What each car did, in car order.
    pub transitions: Vec<(CarId, Transition)>,
}

/// Owns the cars, the outstanding hall calls, and the floor list.
///
/// Cars are held in a `Vec` and iterated in insertion order.  Calls form an
/// unordered multiset: duplicates are kept and removed independently.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    floors: Vec<Floor>,
    cars:   Vec<Car>,
    calls:  Vec<Call>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    pub fn add_floors(&mut self, floors: impl IntoIterator<Item = Floor>) {
        self.floors.extend(floors);
    }

    pub fn add_cars(&mut self, cars: impl IntoIterator<Item = Car>) {
        self.cars.extend(cars);
    }

    pub fn add_calls(&mut self, calls: impl IntoIterator<Item = Call>) {
        self.calls.extend(calls);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[inline]
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    #[inline]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|car| car.id() == id)
    }

    /// Outstanding calls at `floor`, both directions.
    pub fn calls_for(&self, floor: Floor) -> Vec<Call> {
        self.calls.iter().filter(|c| c.floor() == floor).copied().collect()
    }

    // ── Cab requests ──────────────────────────────────────────────────────

    /// A passenger inside `car` pressed the button for `floor`.
    ///
    /// Returns whether the floor was newly queued.
    pub fn request(&mut self, car: CarId, floor: Floor) -> DispatchResult<bool> {
        let target = self
            .cars
            .iter_mut()
            .find(|c| c.id() == car)
            .ok_or(DispatchError::UnknownCar(car))?;
        Ok(target.new_request(floor))
    }

    // ── Per-tick operations ───────────────────────────────────────────────

    /// Remove every call answered by a car standing at its floor with doors
    /// open, heading the call's direction.
    ///
    /// Each call is judged against the same car states, so removing one never
    /// affects another.  Returns the removed calls.
    pub fn satisfy_calls(&mut self) -> Vec<Call> {
        let cars = &self.cars;
        let (satisfied, outstanding): (Vec<Call>, Vec<Call>) = std::mem::take(&mut self.calls)
            .into_iter()
            .partition(|call| cars.iter().any(|car| answers(car, call)));
        self.calls = outstanding;

        for call in &satisfied {
            debug!("call {call} satisfied");
        }
        satisfied
    }

    /// Give each car, in order, the first outstanding call that lies on its
    /// way to its next request.
    ///
    /// At most one call per car per tick.  Idle cars take nothing.  Returns
    /// the `(car, call)` pairs that were assigned.
    pub fn assign_calls(&mut self) -> Vec<(CarId, Call)> {
        let mut assigned = Vec::new();
        for car in &mut self.cars {
            let Some(pos) = self.calls.iter().position(|call| on_the_way(car, call)) else {
                continue;
            };
            let call = self.calls.remove(pos);
            car.new_request(call.floor());
            debug!("call {call} assigned to {}", car.id());
            assigned.push((car.id(), call));
        }
        assigned
    }

    /// Advance every car by one tick, in order.
    pub fn tick_cars(&mut self) -> DispatchResult<Vec<(CarId, Transition)>> {
        let mut transitions = Vec::with_capacity(self.cars.len());
        for car in &mut self.cars {
            let transition = car.tick()?;
            transitions.push((car.id(), transition));
        }
        Ok(transitions)
    }

    /// One full dispatch step: satisfy, assign, advance.
    pub fn step(&mut self) -> DispatchResult<TickReport> {
        let satisfied = self.satisfy_calls();
        let assigned = self.assign_calls();
        let transitions = self.tick_cars()?;
        Ok(TickReport { satisfied, assigned, transitions })
    }

    /// Run `ticks` steps, letting `pacer` set the cadence between them.
    pub fn tick<P: Pacer>(&mut self, ticks: u64, pacer: &mut P) -> DispatchResult<()> {
        for _ in 0..ticks {
            self.step()?;
            pacer.pace();
        }
        Ok(())
    }
}

/// `car` is stopped at the call's floor with doors open, heading its way.
fn answers(car: &Car, call: &Call) -> bool {
    car.doors_open() && car.floor() == call.floor() && car.direction() == call.direction()
}

/// The call matches the car's direction and sits strictly between the car
/// and its next request, so taking it needs no reversal.
fn on_the_way(car: &Car, call: &Call) -> bool {
    let Some(next) = car.next_request() else {
        return false;
    };
    if call.direction() != car.direction() {
        return false;
    }
    let floor = call.floor();
    match car.direction() {
        Direction::Up   => car.floor() < floor && floor < next,
        Direction::Down => next < floor && floor < car.floor(),
        Direction::Idle => false,
    }
}
