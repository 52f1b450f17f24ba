//! crossing — ASCII demo for the rust_xing crossing simulator.
//!
//! Runs a fleet of vehicles across the standard 7×7 crossroads map and
//! redraws the grid once per presented frame.
//!
//! Usage:
//!
//! ```text
//! crossing              # the classic four-way scenario
//! crossing AC,BD,CA,DB  # explicit trip list (origin/destination letters)
//! crossing 12           # N random trips from a fixed seed
//! ```

use std::collections::HashSet;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use xing_core::{Cell, FleetConfig, Terminal};
use xing_map::{MAP_COLS, MAP_ROWS, PathTable, ZoneMap};
use xing_sim::{FleetBuilder, FleetObserver, Trip, VehicleSnapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const FRAME_INTERVAL_MS: u64 = 120; // slow enough to watch
const MAX_RANDOM_TRIPS:  usize = 26; // one display letter per vehicle

// ── ASCII renderer ────────────────────────────────────────────────────────────

/// Draws the map once per frame: roads as `.`, the crossroad interior as
/// `:`, vehicles as letters (`a` for vehicle 0, `b` for 1, …).
struct AsciiRenderer {
    surface:  HashSet<Cell>,
    interior: HashSet<Cell>,
}

impl AsciiRenderer {
    fn new(paths: &PathTable, zones: &ZoneMap) -> Self {
        let surface: HashSet<Cell> = paths.cells().into_iter().collect();
        let interior = surface
            .iter()
            .copied()
            .filter(|&c| zones.in_interior(c))
            .collect();
        AsciiRenderer { surface, interior }
    }

    fn draw(&self, frame: u64, vehicles: &[VehicleSnapshot]) {
        let mut grid = vec![vec![' '; MAP_COLS]; MAP_ROWS];
        for r in 0..MAP_ROWS {
            for c in 0..MAP_COLS {
                let cell = Cell::new(r as i16, c as i16);
                if self.interior.contains(&cell) {
                    grid[r][c] = ':';
                } else if self.surface.contains(&cell) {
                    grid[r][c] = '.';
                }
            }
        }
        for v in vehicles {
            if !v.position.is_off_grid() {
                let label = (b'a' + (v.id.0 % 26) as u8) as char;
                grid[v.position.row as usize][v.position.col as usize] = label;
            }
        }

        let finished = vehicles.iter().filter(|v| v.state.is_terminal()).count();
        println!("frame {frame}  ({finished}/{} finished)", vehicles.len());
        for row in grid {
            println!("  {}", row.into_iter().collect::<String>());
        }
        println!();
    }
}

impl FleetObserver for AsciiRenderer {
    fn on_frame(&mut self, frame: u64, vehicles: &[VehicleSnapshot]) {
        self.draw(frame, vehicles);
    }

    fn on_fleet_end(&mut self, frames: u64) {
        println!("all vehicles finished after {frames} frames");
    }
}

// ── Trip parsing ──────────────────────────────────────────────────────────────

/// Parse either a trip list (`AC,BD`) or a random-trip count (`12`).
fn parse_trips(arg: &str) -> Result<Vec<Trip>> {
    if let Ok(count) = arg.parse::<usize>() {
        if count > MAX_RANDOM_TRIPS {
            bail!("at most {MAX_RANDOM_TRIPS} random trips supported");
        }
        let mut rng = SmallRng::seed_from_u64(SEED);
        return Ok((0..count)
            .map(|_| Trip {
                origin:      Terminal::ALL[rng.gen_range(0..4)],
                destination: Terminal::ALL[rng.gen_range(0..4)],
            })
            .collect());
    }

    arg.split(',')
        .map(|pair| {
            let mut chars = pair.chars();
            let (Some(o), Some(d), None) = (chars.next(), chars.next(), chars.next()) else {
                bail!("trip '{pair}' must be two terminal letters, e.g. AC");
            };
            Ok(Trip {
                origin:      Terminal::from_char(o)?,
                destination: Terminal::from_char(d)?,
            })
        })
        .collect()
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let trips = match std::env::args().nth(1) {
        Some(arg) => parse_trips(&arg)?,
        None => vec![
            Trip { origin: Terminal::A, destination: Terminal::C },
            Trip { origin: Terminal::B, destination: Terminal::D },
            Trip { origin: Terminal::C, destination: Terminal::A },
            Trip { origin: Terminal::D, destination: Terminal::B },
        ],
    };

    let config = FleetConfig {
        frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
        ..FleetConfig::default()
    };

    println!("=== crossing — rust_xing crossing simulator ===");
    println!(
        "Vehicles: {}  |  Gate capacity: {}  |  Frame: {} ms",
        trips.len(),
        config.gate_capacity,
        FRAME_INTERVAL_MS
    );
    for (i, trip) in trips.iter().enumerate() {
        let label = (b'a' + (i % 26) as u8) as char;
        println!("  {label}: {} → {}", trip.origin, trip.destination);
    }
    println!();

    let paths = PathTable::standard();
    let zones = ZoneMap::standard();
    let mut renderer = AsciiRenderer::new(&paths, &zones);

    let started = Instant::now();
    let fleet = FleetBuilder::new().trips(trips).config(config).spawn()?;
    log::info!("fleet spawned, driving frames");
    let frames = fleet.run(&mut renderer)?;
    let elapsed = started.elapsed();

    println!("Simulation complete in {:.3} s ({frames} frames)", elapsed.as_secs_f64());
    Ok(())
}
