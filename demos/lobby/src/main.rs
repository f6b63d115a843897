//! lobby — run a bank of cars under random traffic.
//!
//! Cars start parked at the lowest floor.  Each tick a hall call may appear
//! and every car may get a cab request; the dispatcher hands calls to cars
//! already heading past them.  Pass `--out DIR` to write a CSV trace.
//!
//! ```text
//! RUST_LOG=debug cargo run -p lobby -- --floors 12 --cars 3 --ticks 300 --out ./trace
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use lift_car::Car;
use lift_core::{Floor, SimConfig, Tick};
use lift_dispatch::{
    DispatchObserver, DispatcherBuilder, NoopObserver, RandomDemand, Sim, SleepPacer, TickReport,
};
use lift_output::{CsvWriter, TraceObserver};

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_FLOORS:    i32 = 10;
const DEFAULT_CARS:      u32 = 2;
const DEFAULT_HALL_PROB: f64 = 0.3;
const DEFAULT_CAB_PROB:  f64 = 0.1;

#[derive(Parser, Debug)]
#[command(about = "Simulate elevator dispatch for a bank of cars")]
struct Args {
    /// JSON file with a SimConfig; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of floors above ground, including the lobby (floor 0).
    #[arg(long, default_value_t = DEFAULT_FLOORS)]
    floors: i32,

    /// Number of basement levels below the lobby.
    #[arg(long, default_value_t = 0)]
    basements: i32,

    /// Number of cars, all starting at the lowest floor.
    #[arg(long, default_value_t = DEFAULT_CARS)]
    cars: u32,

    #[arg(long)]
    ticks: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds to sleep between ticks.
    #[arg(long)]
    pace_ms: Option<u64>,

    /// Probability of a new hall call each tick.
    #[arg(long, default_value_t = DEFAULT_HALL_PROB)]
    hall_prob: f64,

    /// Per-car probability of a new cab request each tick.
    #[arg(long, default_value_t = DEFAULT_CAB_PROB)]
    cab_prob: f64,

    /// Directory for `car_snapshots.csv` and `tick_summaries.csv`.
    #[arg(long)]
    out: Option<PathBuf>,
}

// ── Observer wrapper to tally calls ───────────────────────────────────────────

struct Tally<O: DispatchObserver> {
    inner:     O,
    satisfied: usize,
    assigned:  usize,
    peak:      usize,
}

impl<O: DispatchObserver> Tally<O> {
    fn new(inner: O) -> Self {
        Self { inner, satisfied: 0, assigned: 0, peak: 0 }
    }
}

impl<O: DispatchObserver> DispatchObserver for Tally<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, report: &TickReport, outstanding: usize) {
        self.satisfied += report.satisfied.len();
        self.assigned += report.assigned.len();
        self.peak = self.peak.max(outstanding);
        self.inner.on_tick_end(tick, report, outstanding);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &[Car]) {
        self.inner.on_snapshot(tick, cars);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn build_config(args: &Args) -> Result<SimConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(ticks) = args.ticks {
        config.total_ticks = ticks;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(pace_ms) = args.pace_ms {
        config.pace_ms = pace_ms;
    }
    config.validate()?;
    Ok(config)
}

fn check_probability(flag: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        anyhow::bail!("--{flag} must be between 0 and 1, got {p}");
    }
    Ok(())
}

fn run<O: DispatchObserver>(args: &Args, config: SimConfig, observer: O) -> Result<Tally<O>> {
    if args.floors < 1 || args.basements < 0 {
        anyhow::bail!("need at least one floor and a non-negative basement count");
    }
    check_probability("hall-prob", args.hall_prob)?;
    check_probability("cab-prob", args.cab_prob)?;
    let floors: Vec<Floor> = (-args.basements..args.floors).collect();
    let starts = vec![-args.basements; args.cars as usize];

    let dispatcher = DispatcherBuilder::new().floors(floors).cars_at(&starts).build()?;
    let demand = RandomDemand::new(config.seed, args.hall_prob, args.cab_prob);
    let pacer = SleepPacer::from_millis(config.pace_ms);

    let mut sim = Sim::new(config, dispatcher, demand, pacer)?;
    let mut tally = Tally::new(observer);

    let t0 = Instant::now();
    sim.run(&mut tally)?;
    info!("ran {} in {:.2?}", sim.clock, t0.elapsed());

    for car in sim.dispatcher.cars() {
        info!(
            "{}: floor {}, doors {}, heading {}, queue {:?}",
            car.id(),
            car.floor(),
            if car.doors_open() { "open" } else { "closed" },
            car.direction(),
            car.requests().to_vec()
        );
    }
    info!(
        "calls: {} assigned, {} answered at a stop, {} still waiting (peak {})",
        tally.assigned,
        tally.satisfied,
        sim.dispatcher.calls().len(),
        tally.peak
    );
    Ok(tally)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = build_config(&args)?;

    match &args.out {
        None => {
            run(&args, config, NoopObserver)?;
        }
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening trace files in {}", dir.display()))?;
            let observer = TraceObserver::new(writer, &config);
            let mut tally = run(&args, config, observer)?;
            if let Some(e) = tally.inner.take_error() {
                return Err(e).context("writing trace");
            }
            info!("trace written to {}", dir.display());
        }
    }
    Ok(())
}
