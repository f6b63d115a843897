//! Plain data row types written by output backends.

use lift_car::Car;
use lift_core::{Direction, Floor, Tick};

/// One car's state after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSnapshotRow {
    pub car_id:       u32,
    pub tick:         u64,
    pub floor:        Floor,
    pub doors_open:   bool,
    pub direction:    Direction,
    /// Head of the queue, `None` when idle.
    pub next_request: Option<Floor>,
    pub pending:      u32,
}

impl CarSnapshotRow {
    pub fn from_car(tick: Tick, car: &Car) -> Self {
        Self {
            car_id:       car.id().0,
            tick:         tick.0,
            floor:        car.floor(),
            doors_open:   car.doors_open(),
            direction:    car.direction(),
            next_request: car.next_request(),
            pending:      car.requests().len() as u32,
        }
    }
}

/// Call statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub unix_time_secs:    i64,
    pub satisfied_calls:   u32,
    pub assigned_calls:    u32,
    pub outstanding_calls: u32,
}
