//! Hall calls.

use std::fmt;

use crate::{Direction, Floor, LiftError, LiftResult};

/// An outstanding hall request: somebody at `floor` wants to travel
/// `direction`.
///
/// Immutable once created.  Two calls with the same floor and direction are
/// equal but are still tracked independently by the dispatcher — nothing
/// deduplicates them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    floor:     Floor,
    direction: Direction,
}

impl Call {
    /// Build a call, rejecting `Direction::Idle`.
    pub fn new(floor: Floor, direction: Direction) -> LiftResult<Self> {
        match direction {
            Direction::Up | Direction::Down => Ok(Self { floor, direction }),
            Direction::Idle => Err(LiftError::IdleCall(floor)),
        }
    }

    /// An upward call at `floor`.
    #[inline]
    pub fn up(floor: Floor) -> Self {
        Self { floor, direction: Direction::Up }
    }

    /// A downward call at `floor`.
    #[inline]
    pub fn down(floor: Floor) -> Self {
        Self { floor, direction: Direction::Down }
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.direction, self.floor)
    }
}
