//! `lift-dispatch` — call assignment and the tick loop for a bank of cars.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Demand    — new hall calls and cab requests from the Demand source.
//!   ② Satisfy   — drop every call answered by a car standing at its floor
//!                 with doors open, heading the call's direction.
//!   ③ Assign    — each car, in order, absorbs at most one call that lies
//!                 strictly between its floor and its next request.
//!   ④ Advance   — Car::tick on every car, in order.
//!   ⑤ Pace      — Pacer::pace (sleep, or nothing).
//! ```
//!
//! Ticks are strictly sequential.  Car order matters only in ③: an earlier
//! car gets first refusal on a call both could take.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_dispatch::{DispatcherBuilder, NoPacing, NoopObserver, RandomDemand, Sim};
//!
//! let dispatcher = DispatcherBuilder::new().floors(0..10).cars_at(&[0, 0, 5]).build()?;
//! let demand = RandomDemand::new(config.seed, 0.3, 0.1);
//! let mut sim = Sim::new(config, dispatcher, demand, NoPacing)?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod demand;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod pacer;
pub mod sim;


pub use builder::DispatcherBuilder;
pub use demand::{Arrival, Demand, NoDemand, RandomDemand, ScriptedDemand};
pub use dispatcher::{Dispatcher, TickReport};
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use pacer::{NoPacing, Pacer, SleepPacer};
pub use sim::Sim;
