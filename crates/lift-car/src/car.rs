//! A single elevator car.

use log::trace;

use lift_core::{CarId, Direction, Floor};

use crate::{CarError, CarResult, RequestQueue};

/// What one [`Car::tick`] did.  At most one of these happens per tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Doors were open with more requests pending; they are now closed.
    DoorsClosed,
    /// The car reached its head request: doors opened and the request popped.
    Arrived { floor: Floor },
    /// The car moved one floor toward its head request.
    Moved { from: Floor, to: Floor },
    /// Nothing to do.
    Stayed,
}

/// One elevator cabin: its floor, door state, and pending requests.
///
/// Invariants:
/// - the car never moves while `doors_open` is true;
/// - `new_request` never admits the current floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    id:         CarId,
    floor:      Floor,
    requests:   RequestQueue,
    doors_open: bool,
}

impl Car {
    /// An idle car with closed doors at `floor`.
    pub fn new(id: CarId, floor: Floor) -> Self {
        Self {
            id,
            floor,
            requests:   RequestQueue::new(),
            doors_open: false,
        }
    }

    /// Restore a car from a recorded state.  `requests` is taken verbatim.
    pub fn with_state(
        id:         CarId,
        floor:      Floor,
        requests:   impl IntoIterator<Item = Floor>,
        doors_open: bool,
    ) -> Self {
        Self {
            id,
            floor,
            requests: RequestQueue::from_floors(requests),
            doors_open,
        }
    }

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn doors_open(&self) -> bool {
        self.doors_open
    }

    #[inline]
    pub fn requests(&self) -> &RequestQueue {
        &self.requests
    }

    // ── Doors ─────────────────────────────────────────────────────────────

    pub fn open_doors(&mut self) {
        self.doors_open = true;
    }

    pub fn close_doors(&mut self) {
        self.doors_open = false;
    }

    // ── Queue ─────────────────────────────────────────────────────────────

    /// Current direction, read from the head of the queue only.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.requests.direction_from(self.floor)
    }

    /// The head of the queue, if any.
    #[inline]
    pub fn next_request(&self) -> Option<Floor> {
        self.requests.head()
    }

    /// Queue a visit to `floor`.  Returns `false` if it was the current
    /// floor or already queued.
    pub fn new_request(&mut self, floor: Floor) -> bool {
        self.requests.insert(self.floor, floor)
    }

    /// Pop the head request if the car is standing at it.
    ///
    /// Fails with [`CarError::DoorsClosed`] while the doors are shut.  A head
    /// that doesn't match the current floor is left alone.
    pub fn fulfill_request(&mut self) -> CarResult<()> {
        if !self.doors_open {
            return Err(CarError::DoorsClosed(self.id));
        }
        self.requests.pop_if_at(self.floor);
        Ok(())
    }

    // ── Movement ──────────────────────────────────────────────────────────

    pub fn move_up(&mut self) -> CarResult<()> {
        if self.doors_open {
            return Err(CarError::DoorsOpen(self.id));
        }
        self.floor += 1;
        Ok(())
    }

    pub fn move_down(&mut self) -> CarResult<()> {
        if self.doors_open {
            return Err(CarError::DoorsOpen(self.id));
        }
        self.floor -= 1;
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance this car by one simulation step.
    ///
    /// Errors only if the car was put into an inconsistent state from
    /// outside; the branches below never move with open doors nor fulfill
    /// with closed ones.
    pub fn tick(&mut self) -> CarResult<Transition> {
        let Some(next) = self.next_request() else {
            return Ok(Transition::Stayed);
        };

        let transition = if self.doors_open {
            self.close_doors();
            Transition::DoorsClosed
        } else if next == self.floor {
            self.open_doors();
            self.fulfill_request()?;
            Transition::Arrived { floor: self.floor }
        } else {
            let from = self.floor;
            match self.direction() {
                Direction::Up   => self.move_up()?,
                Direction::Down => self.move_down()?,
                Direction::Idle => return Ok(Transition::Stayed),
            }
            Transition::Moved { from, to: self.floor }
        };

        trace!("{}: {:?} (queue {:?})", self.id, transition, self.requests.to_vec());
        Ok(transition)
    }
}
