use lift_car::CarError;
use lift_core::{CarId, LiftError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatcher configuration error: {0}")]
    Config(String),

    #[error("{0} appears more than once")]
    DuplicateCar(CarId),

    #[error("{0} is not part of this dispatcher")]
    UnknownCar(CarId),

    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("car error: {0}")]
    Car(#[from] CarError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
