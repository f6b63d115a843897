//! The pending-floor queue and its insertion order.
//!
//! # Ordering
//!
//! The queue is not a numeric sort.  It is two concatenated runs relative to
//! the car's current floor `f`:
//!
//! ```text
//! heading up from 3:    [4, 5, 6 | 2, 1, 0]     ascending above f, then descending below
//! heading down from 6:  [5, 4    | 7, 8, 9]     descending below f, then ascending above
//! ```
//!
//! The first run is everything still ahead in the current direction; the
//! second run is what the car visits after it reverses.  The heading comes
//! from the head of the queue alone, so the very first request decides which
//! run later requests fall into.

use std::collections::VecDeque;

use lift_core::{Direction, Floor};

/// Ordered, de-duplicated floors a car still has to visit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestQueue {
    floors: VecDeque<Floor>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take `floors` verbatim, without reordering.
    ///
    /// Used to restore a recorded queue; no ordering or de-duplication is
    /// applied.
    pub fn from_floors(floors: impl IntoIterator<Item = Floor>) -> Self {
        Self { floors: floors.into_iter().collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// The next floor to visit.
    #[inline]
    pub fn head(&self) -> Option<Floor> {
        self.floors.front().copied()
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    pub fn to_vec(&self) -> Vec<Floor> {
        self.floors.iter().copied().collect()
    }

    /// Direction of travel for a car standing at `current`: `Idle` when
    /// empty, `Up` when the head is above `current`, `Down` otherwise.
    pub fn direction_from(&self, current: Floor) -> Direction {
        match self.head() {
            None => Direction::Idle,
            Some(head) => heading(current, head),
        }
    }

    /// Insert `req` for a car standing at `current`.
    ///
    /// Returns `false` without touching the queue when `req == current` or
    /// `req` is already queued anywhere, not only at the computed index.  So
    /// heading up from 3 with `[4, 5, 2]`, inserting 2 leaves `[4, 5, 2]`
    /// rather than appending a second 2 behind the reversal.
    pub fn insert(&mut self, current: Floor, req: Floor) -> bool {
        if req == current || self.contains(req) {
            return false;
        }

        // A head equal to `current` is the stop being serviced right now;
        // order the rest of the queue around it.
        let start = usize::from(self.head() == Some(current));
        let index = match self.floors.get(start) {
            None => self.floors.len(),
            Some(&pivot) => {
                let dir = heading(current, pivot);
                self.floors
                    .iter()
                    .skip(start)
                    .position(|&value| is_insertion_point(dir, current, req, value))
                    .map_or(self.floors.len(), |i| i + start)
            }
        };

        self.floors.insert(index, req);
        true
    }

    /// Pop the head if it equals `current`.  Returns whether a floor was
    /// removed.
    pub fn pop_if_at(&mut self, current: Floor) -> bool {
        if self.head() == Some(current) {
            self.floors.pop_front();
            true
        } else {
            false
        }
    }
}

/// `Up` if `target` is above `current`, `Down` otherwise.
#[inline]
fn heading(current: Floor, target: Floor) -> Direction {
    if target > current { Direction::Up } else { Direction::Down }
}

/// Does `req` belong immediately before `value`?
///
/// Heading up: `req` joins the ascending run before the first larger floor
/// above `current`, or, once the scan reaches the descending run below
/// `current`, before the first floor it is above.  Heading down is the
/// mirror image.
fn is_insertion_point(dir: Direction, current: Floor, req: Floor, value: Floor) -> bool {
    match dir {
        Direction::Up => {
            (req > current && value > current && req <= value)
                || (value < current && req > value)
        }
        Direction::Down => {
            (req < current && value < current && req >= value)
                || (value > current && req < value)
        }
        // `heading` never yields Idle; an empty scan appends.
        Direction::Idle => false,
    }
}
