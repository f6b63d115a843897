//! `lift-car` — one elevator car: position, doors, and pending floors.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`queue`]   | `RequestQueue` — direction-then-reversal ordered pending floors   |
//! | [`car`]     | `Car`, `Transition` — door control, movement, per-tick step       |
//! | [`error`]   | `CarError`, `CarResult<T>`                                        |
//!
//! # Tick model
//!
//! Each call to [`Car::tick`] makes at most one transition:
//!
//! ```text
//! doors open,   requests pending         → close doors
//! doors closed, head == current floor    → open doors, pop head (arrival)
//! doors closed, head != current floor    → move one floor toward head
//! no requests                            → stay
//! ```
//!
//! so a stop plays out as: arrive+open → close → move → … → arrive+open.

pub mod car;
pub mod error;
pub mod queue;

#[cfg(test)]
mod tests;

pub use car::{Car, Transition};
pub use error::{CarError, CarResult};
pub use queue::RequestQueue;
