//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use lift_core::Direction;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{CarSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(car_id: u32, tick: u64, next_request: Option<i32>) -> CarSnapshotRow {
        CarSnapshotRow {
            car_id,
            tick,
            floor:        car_id as i32 * 2,
            doors_open:   false,
            direction:    if next_request.is_some() { Direction::Up } else { Direction::Idle },
            next_request,
            pending:      next_request.map_or(0, |_| 1),
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("car_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("car_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("car_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADER);
    }

    #[test]
    fn csv_snapshot_values() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5, Some(3)), snap_row(1, 5, None)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("car_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");    // car_id
        assert_eq!(&rows[0][1], "5");    // tick
        assert_eq!(&rows[0][4], "up");   // direction
        assert_eq!(&rows[0][5], "3");    // next_request
        assert_eq!(&rows[1][2], "2");    // floor
        assert_eq!(&rows[1][4], "idle");
        assert_eq!(&rows[1][5], "");     // idle car has no next request
        assert_eq!(&rows[1][6], "0");
    }

    #[test]
    fn csv_tick_summary_values() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow {
            tick:              3,
            unix_time_secs:    6,
            satisfied_calls:   1,
            assigned_calls:    2,
            outstanding_calls: 4,
        };
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "6");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[0][3], "2");
        assert_eq!(&rows[0][4], "4");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use lift_car::Car;
    use lift_core::{Call, CarId, SimConfig, Tick};
    use lift_dispatch::{Arrival, DispatcherBuilder, NoPacing, ScriptedDemand, Sim};

    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, TraceObserver};
    use crate::row::{CarSnapshotRow, TickSummaryRow};

    fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig {
            start_unix_secs:    100,
            tick_duration_secs: 2,
            total_ticks,
            seed:               1,
            output_interval_ticks,
            pace_ms:            0,
        }
    }

    /// Collects rows in memory; optionally fails every write.
    #[derive(Default)]
    struct MemoryWriter {
        snapshots: Vec<CarSnapshotRow>,
        summaries: Vec<TickSummaryRow>,
        finished:  u32,
        fail:      bool,
    }

    impl OutputWriter for MemoryWriter {
        fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn records_summaries_and_snapshots() {
        let dispatcher = DispatcherBuilder::new()
            .floors(0..=5)
            .car(Car::with_state(CarId(0), 0, [4], false))
            .calls([Call::up(2)])
            .build()
            .unwrap();
        let cfg = config(6, 2);
        let mut sim = Sim::new(cfg.clone(), dispatcher, ScriptedDemand::new(), NoPacing).unwrap();
        let mut obs = TraceObserver::new(MemoryWriter::default(), &cfg);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 6);
        assert_eq!(w.summaries[0].assigned_calls, 1);
        assert_eq!(w.summaries[0].outstanding_calls, 0);
        assert_eq!(w.summaries[3].unix_time_secs, 106);

        // Snapshots at ticks 0, 2, 4: one car each.
        let ticks: Vec<u64> = w.snapshots.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [0, 2, 4]);
        // After tick 0 the car has moved to 1 with 2 then 4 queued.
        assert_eq!(w.snapshots[0].floor, 1);
        assert_eq!(w.snapshots[0].next_request, Some(2));
        assert_eq!(w.snapshots[0].pending, 2);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn keeps_first_error() {
        let dispatcher = DispatcherBuilder::new().floors(0..=3).cars_at(&[0]).build().unwrap();
        let cfg = config(3, 1);
        let mut sim = Sim::new(cfg.clone(), dispatcher, ScriptedDemand::new(), NoPacing).unwrap();
        let writer = MemoryWriter { fail: true, ..MemoryWriter::default() };
        let mut obs = TraceObserver::new(writer, &cfg);
        sim.run(&mut obs).unwrap();

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = DispatcherBuilder::new().floors(0..=9).cars_at(&[0, 9]).build().unwrap();
        let demand = ScriptedDemand::new()
            .at(Tick(0), Arrival::Cab { car: CarId(0), floor: 5 })
            .at(Tick(0), Arrival::Cab { car: CarId(1), floor: 2 })
            .at(Tick(1), Arrival::Hall(Call::up(3)));
        let cfg = config(12, 1);
        let mut sim = Sim::new(cfg.clone(), dispatcher, demand, NoPacing).unwrap();
        let mut obs = TraceObserver::new(CsvWriter::new(dir.path()).unwrap(), &cfg);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("car_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 24); // 2 cars × 12 ticks

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let assigned: u32 = rdr
            .records()
            .map(|r| r.unwrap()[3].parse::<u32>().unwrap())
            .sum();
        assert_eq!(assigned, 1);
    }
}
