//! Fluent builder for constructing a validated [`Dispatcher`].

use std::collections::HashSet;

use lift_car::Car;
use lift_core::{Call, CarId, Floor};

use crate::{DispatchError, DispatchResult, Dispatcher};

/// Fluent builder for [`Dispatcher`].
///
/// `Dispatcher::add_*` accepts anything; the builder is the validated path.
/// `build` rejects:
///
/// | Problem                                       | Error                          |
/// |-----------------------------------------------|--------------------------------|
/// | no cars                                       | `DispatchError::Config`        |
/// | two cars sharing an id                        | `DispatchError::DuplicateCar`  |
/// | car or call floor outside a non-empty floor set | `DispatchError::Config`      |
/// | `cars_at` ids past `u32::MAX`                  | `DispatchError::Config`        |
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = DispatcherBuilder::new()
///     .floors(0..=9)
///     .cars_at(&[0, 0, 9])
///     .calls([Call::up(3)])
///     .build()?;
/// ```
#[derive(Default)]
pub struct DispatcherBuilder {
    floors: Vec<Floor>,
    cars:   Vec<Car>,
    calls:  Vec<Call>,
    /// First problem seen while chaining, reported by `build`.
    error:  Option<DispatchError>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Floors the bank serves.  Leave empty to skip floor validation.
    pub fn floors(mut self, floors: impl IntoIterator<Item = Floor>) -> Self {
        self.floors.extend(floors);
        self
    }

    /// Add a fully specified car.
    pub fn car(mut self, car: Car) -> Self {
        self.cars.push(car);
        self
    }

    /// Add one idle car per entry, parked at that floor.  Ids continue
    /// after the highest id already added, starting at 0.
    pub fn cars_at(mut self, floors: &[Floor]) -> Self {
        let mut next = match self.cars.iter().map(|c| c.id().0).max() {
            None => Some(0),
            Some(highest) => highest.checked_add(1),
        };
        for &floor in floors {
            let Some(id) = next else {
                if self.error.is_none() {
                    self.error = Some(DispatchError::Config("car ids exhausted".into()));
                }
                break;
            };
            self.cars.push(Car::new(CarId(id), floor));
            next = id.checked_add(1);
        }
        self
    }

    /// Hall calls already waiting at start.
    pub fn calls(mut self, calls: impl IntoIterator<Item = Call>) -> Self {
        self.calls.extend(calls);
        self
    }

    pub fn build(self) -> DispatchResult<Dispatcher> {
        if let Some(e) = self.error {
            return Err(e);
        }
        if self.cars.is_empty() {
            return Err(DispatchError::Config("at least one car is required".into()));
        }

        let mut seen = HashSet::with_capacity(self.cars.len());
        for car in &self.cars {
            if !seen.insert(car.id()) {
                return Err(DispatchError::DuplicateCar(car.id()));
            }
        }

        if !self.floors.is_empty() {
            let served: HashSet<Floor> = self.floors.iter().copied().collect();
            if let Some(car) = self.cars.iter().find(|c| !served.contains(&c.floor())) {
                return Err(DispatchError::Config(format!(
                    "{} starts at floor {}, which is not served",
                    car.id(),
                    car.floor()
                )));
            }
            if let Some(call) = self.calls.iter().find(|c| !served.contains(&c.floor())) {
                return Err(DispatchError::Config(format!("call {call} is at a floor that is not served")));
            }
        }

        let mut dispatcher = Dispatcher::new();
        dispatcher.add_floors(self.floors);
        dispatcher.add_cars(self.cars);
        dispatcher.add_calls(self.calls);
        Ok(dispatcher)
    }
}
