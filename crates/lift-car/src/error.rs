use lift_core::CarId;
use thiserror::Error;

/// Precondition violations on a single car.  Both are recovered by fixing
/// the door state first; the tick state machine never triggers either.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarError {
    #[error("{0}: doors are open, can't move")]
    DoorsOpen(CarId),

    #[error("{0}: doors are closed, can't fulfill a request")]
    DoorsClosed(CarId),
}

pub type CarResult<T> = Result<T, CarError>;
