//! Unit tests for lift-car.

use lift_core::{CarId, Direction, Floor};

use crate::{Car, CarError, Transition};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// An empty car at `floor` with the given requests inserted one by one.
fn car_after_inserts(floor: Floor, inserts: &[Floor]) -> Car {
    let mut car = Car::new(CarId(0), floor);
    for &req in inserts {
        car.new_request(req);
    }
    car
}

fn queue(car: &Car) -> Vec<Floor> {
    car.requests().to_vec()
}

// ── Insertion order ───────────────────────────────────────────────────────────

#[cfg(test)]
mod insertion {
    use super::*;

    /// (name, starting floor, insertion order, expected queue)
    const CASES: &[(&str, Floor, &[Floor], &[Floor])] = &[
        ("upwards mixed order",                0,  &[3, 1, 5, 2, 4],    &[1, 2, 3, 4, 5]),
        ("upwards sorted order",               0,  &[4, 5, 6, 7, 8],    &[4, 5, 6, 7, 8]),
        ("upwards reversed order",             0,  &[9, 8, 7, 6, 5],    &[5, 6, 7, 8, 9]),
        ("upwards mixed order with reverse",   3,  &[4, 2, 1, 5, 0],    &[4, 5, 2, 1, 0]),
        ("downwards mixed order",              6,  &[3, 1, 5, 2, 4],    &[5, 4, 3, 2, 1]),
        ("downwards sorted order",             7,  &[2, 3, 4, 5, 6],    &[6, 5, 4, 3, 2]),
        ("downwards reversed order",           10, &[5, 6, 7, 8, 9],    &[9, 8, 7, 6, 5]),
        ("downwards mixed order with reverse", 6,  &[4, 7, 5, 9, 8],    &[5, 4, 7, 8, 9]),
        ("basement floors ordered",            5,  &[4, 3, 0, -1, -2],  &[4, 3, 0, -1, -2]),
        ("basement floors unordered",          5,  &[4, -1, 3, -2, 0],  &[4, 3, 0, -1, -2]),
    ];

    #[test]
    fn ordering_table() {
        for &(name, floor, inserts, expected) in CASES {
            let car = car_after_inserts(floor, inserts);
            assert_eq!(queue(&car), expected, "{name}");
        }
    }

    #[test]
    fn current_floor_is_never_admitted() {
        let mut car = car_after_inserts(3, &[4, 2, 1, 5, 0]);
        let before = queue(&car);
        assert!(!car.new_request(3));
        assert_eq!(queue(&car), before);

        let mut empty = Car::new(CarId(1), 8);
        assert!(!empty.new_request(8));
        assert!(empty.requests().is_empty());
    }

    #[test]
    fn duplicates_are_not_inserted() {
        let mut car = car_after_inserts(3, &[4, 5, 2]);
        assert!(!car.new_request(5)); // inside the ascending run
        assert!(!car.new_request(2)); // tail of the descending run
        assert_eq!(queue(&car), [4, 5, 2]);
    }

    #[test]
    fn first_request_sets_heading() {
        // Heading down from 5 because 2 came first; 7 and 9 wait for the reversal.
        let car = car_after_inserts(5, &[2, 9, 4, 7]);
        assert_eq!(queue(&car), [4, 2, 7, 9]);
        assert_eq!(car.direction(), Direction::Down);
    }

    #[test]
    fn head_at_current_floor_orders_the_rest() {
        // Standing at 4 with the stop at 4 still queued: the rest heads up.
        let mut car = Car::with_state(CarId(0), 4, [4, 6], true);
        assert!(car.new_request(5));
        assert!(car.new_request(2));
        assert_eq!(queue(&car), [4, 5, 6, 2]);
    }

    #[test]
    fn head_at_current_floor_alone_appends() {
        let mut car = Car::with_state(CarId(0), 4, [4], true);
        assert!(car.new_request(1));
        assert_eq!(queue(&car), [4, 1]);
    }
}

// ── Fulfillment ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod fulfillment {
    use super::*;

    const CASES: &[(&str, Floor, &[Floor], &[Floor])] = &[
        ("upwards ordered",                   1, &[1, 2, 3, 4, 5], &[2, 3, 4, 5]),
        ("upwards sorted change direction",   4, &[4, 5, 6, 3, 2], &[5, 6, 3, 2]),
        ("downwards ordered",                 5, &[5, 4, 3, 2, 1], &[4, 3, 2, 1]),
        ("downwards sorted change direction", 6, &[6, 5, 4, 7, 8], &[5, 4, 7, 8]),
    ];

    #[test]
    fn pops_matching_head() {
        for &(name, floor, input, expected) in CASES {
            let mut car = Car::with_state(CarId(0), floor, input.iter().copied(), true);
            car.fulfill_request().unwrap();
            assert_eq!(queue(&car), expected, "{name}");
        }
    }

    #[test]
    fn mismatched_head_is_a_noop() {
        let mut car = Car::with_state(CarId(0), 1, [3, 4], true);
        assert_eq!(car.fulfill_request(), Ok(()));
        assert_eq!(queue(&car), [3, 4]);
    }

    #[test]
    fn empty_queue_is_a_noop() {
        let mut car = Car::with_state(CarId(0), 1, [], true);
        assert_eq!(car.fulfill_request(), Ok(()));
        assert!(car.requests().is_empty());
    }

    #[test]
    fn blocked_by_closed_doors() {
        let mut car = Car::with_state(CarId(2), 1, [1, 2, 3], false);
        assert_eq!(car.fulfill_request(), Err(CarError::DoorsClosed(CarId(2))));
        assert_eq!(queue(&car), [1, 2, 3]);
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod direction {
    use super::*;

    #[test]
    fn from_head_only() {
        assert_eq!(Car::with_state(CarId(0), 0, [1, 2], true).direction(), Direction::Up);
        assert_eq!(Car::with_state(CarId(0), 7, [6, 3, 2], true).direction(), Direction::Down);
        assert_eq!(Car::with_state(CarId(0), 0, [], true).direction(), Direction::Idle);
        assert_eq!(Car::with_state(CarId(0), -4, [], false).direction(), Direction::Idle);
    }

    #[test]
    fn head_beats_the_rest_of_the_queue() {
        // Head is below even though most of the queue is above.
        let car = Car::with_state(CarId(0), 5, [4, 7, 8, 9], false);
        assert_eq!(car.direction(), Direction::Down);
        assert_eq!(car.next_request(), Some(4));
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::*;

    #[test]
    fn blocked_by_open_doors() {
        let mut car = Car::new(CarId(1), 3);
        car.open_doors();
        assert_eq!(car.move_up(), Err(CarError::DoorsOpen(CarId(1))));
        assert_eq!(car.move_down(), Err(CarError::DoorsOpen(CarId(1))));
        assert_eq!(car.floor(), 3);
    }

    #[test]
    fn one_floor_per_move() {
        let mut car = Car::new(CarId(1), 3);
        car.move_up().unwrap();
        assert_eq!(car.floor(), 4);
        car.move_down().unwrap();
        car.move_down().unwrap();
        assert_eq!(car.floor(), 2);
    }

    #[test]
    fn door_setters_are_unconditional() {
        let mut car = Car::new(CarId(0), 0);
        car.close_doors();
        assert!(!car.doors_open());
        car.open_doors();
        car.open_doors();
        assert!(car.doors_open());
    }
}

// ── Tick state machine ────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn open_doors_with_pending_request_close() {
        let mut car = Car::with_state(CarId(0), 1, [3], true);
        assert_eq!(car.tick(), Ok(Transition::DoorsClosed));
        assert!(!car.doors_open());
        assert_eq!(car.floor(), 1);
        assert_eq!(queue(&car), [3]);
    }

    #[test]
    fn arrival_opens_doors_and_pops() {
        let mut car = Car::with_state(CarId(0), 2, [2, 4], false);
        assert_eq!(car.tick(), Ok(Transition::Arrived { floor: 2 }));
        assert!(car.doors_open());
        assert_eq!(car.floor(), 2);
        assert_eq!(queue(&car), [4]);
    }

    #[test]
    fn closed_doors_move_toward_head() {
        let mut up = Car::with_state(CarId(0), 2, [5], false);
        assert_eq!(up.tick(), Ok(Transition::Moved { from: 2, to: 3 }));
        assert!(!up.doors_open());
        assert_eq!(queue(&up), [5]);

        let mut down = Car::with_state(CarId(0), 2, [0], false);
        assert_eq!(down.tick(), Ok(Transition::Moved { from: 2, to: 1 }));
        assert_eq!(queue(&down), [0]);
    }

    #[test]
    fn no_requests_stays_put() {
        let mut closed = Car::new(CarId(0), 2);
        assert_eq!(closed.tick(), Ok(Transition::Stayed));
        assert_eq!(closed, Car::new(CarId(0), 2));

        let mut open = Car::with_state(CarId(0), 2, [], true);
        assert_eq!(open.tick(), Ok(Transition::Stayed));
        assert!(open.doors_open());
        assert_eq!(open.floor(), 2);
    }

    #[test]
    fn full_journey() {
        let mut car = Car::new(CarId(0), 0);
        car.new_request(2);

        assert_eq!(car.tick(), Ok(Transition::Moved { from: 0, to: 1 }));
        assert_eq!(car.tick(), Ok(Transition::Moved { from: 1, to: 2 }));
        assert_eq!(car.tick(), Ok(Transition::Arrived { floor: 2 }));
        assert_eq!(car.tick(), Ok(Transition::Stayed));
        assert!(car.doors_open());

        car.new_request(1);
        assert_eq!(car.tick(), Ok(Transition::DoorsClosed));
        assert_eq!(car.tick(), Ok(Transition::Moved { from: 2, to: 1 }));
        assert_eq!(car.tick(), Ok(Transition::Arrived { floor: 1 }));
        assert_eq!(car.direction(), Direction::Idle);
    }

    #[test]
    fn intermediate_stops_in_order() {
        let mut car = car_after_inserts(3, &[4, 2, 5]);
        assert_eq!(queue(&car), [4, 5, 2]);

        let mut arrivals = Vec::new();
        for _ in 0..20 {
            if let Ok(Transition::Arrived { floor }) = car.tick() {
                arrivals.push(floor);
            }
        }
        assert_eq!(arrivals, [4, 5, 2]);
        assert!(car.requests().is_empty());
    }
}
