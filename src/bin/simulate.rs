//! Monte Carlo run of many seeded simulations.
//! Focus: how often placement degrades, and how energy drains over time.

use bouncer_core::{Bounds, MassModel, SimConfig};
use bouncer_physics::energy;
use bouncer_sim::Simulation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Outcome of one seeded run
struct Run {
    seed: u64,
    bounds: Bounds,
    requested: u32,
    placed: usize,
    degraded: bool,
    initial_gap: Option<f32>,
    energy_start: f64,
    energy_end: f64,
    stalled: usize,
}

impl Run {
    fn energy_kept(&self) -> f64 {
        if self.energy_start > 0.0 { self.energy_end / self.energy_start } else { 0.0 }
    }
}

const SURFACES: [Bounds; 4] = [
    Bounds::new(1920.0, 1080.0),
    Bounds::new(1280.0, 720.0),
    Bounds::new(800.0, 600.0),
    Bounds::new(400.0, 400.0),
];

fn random_config(seed: u64) -> SimConfig {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
    let min_radius = rng.gen_range(15..=60) as f32;
    let max_radius = rng.gen_range(min_radius as u32..=90).max(20) as f32;
    SimConfig {
        particle_count: rng.gen_range(5..=80),
        min_radius,
        max_radius,
        mass_model: if rng.gen_bool(0.5) { MassModel::Unit } else { MassModel::Radius },
        seed,
        ..SimConfig::default()
    }
}

fn main() {
    let num_runs = 100u64;
    let ticks = 900;

    eprintln!("Simulating {} runs x {} ticks...", num_runs, ticks);

    let mut runs: Vec<Run> = Vec::new();
    let mut failed = 0u32;

    for r in 0..num_runs {
        let seed = 1000 + r * 7919;
        let config = random_config(seed);
        let bounds = SURFACES[(r % SURFACES.len() as u64) as usize];
        let requested = config.particle_count;

        let mut sim = match Simulation::configure(config, bounds) {
            Ok(sim) => sim,
            Err(err) => {
                eprintln!("  seed {}: {}", seed, err);
                failed += 1;
                continue;
            }
        };

        let initial_gap = energy::min_gap(sim.bodies());
        let energy_start = energy::kinetic_energy(sim.bodies());
        for _ in 0..ticks {
            sim.tick();
        }

        runs.push(Run {
            seed,
            bounds,
            requested,
            placed: sim.bodies().len(),
            degraded: sim.degradation().is_some(),
            initial_gap,
            energy_start,
            energy_end: energy::kinetic_energy(sim.bodies()),
            stalled: energy::stalled_count(sim.bodies()),
        });

        if (r + 1) % 20 == 0 {
            eprint!("  {}/{}...\r", r + 1, num_runs);
        }
    }
    eprintln!("Done. {} runs completed, {} failed outright.", runs.len(), failed);

    let degraded = runs.iter().filter(|r| r.degraded).count();
    let overlapping = runs
        .iter()
        .filter(|r| r.initial_gap.is_some_and(|g| g < 0.0))
        .count();
    let mean_kept = if runs.is_empty() {
        0.0
    } else {
        runs.iter().map(Run::energy_kept).sum::<f64>() / runs.len() as f64
    };
    let total_stalled: usize = runs.iter().map(|r| r.stalled).sum();
    let total_placed: usize = runs.iter().map(|r| r.placed).sum();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║    BOUNCER: {} SEEDED RUNS, {} TICKS EACH                   ", num_runs, ticks);
    println!("║    {} degraded to the fallback count                        ", degraded);
    println!("║    {} failed to place at all                                ", failed);
    println!("║    {} started with overlapping bodies                       ", overlapping);
    println!("║    {:.1}% kinetic energy kept on average                    ", mean_kept * 100.0);
    println!("║    {}/{} bodies stalled at the end                          ", total_stalled, total_placed);
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    println!("ENERGY KEPT BY SURFACE:");
    for bounds in SURFACES {
        let on_surface: Vec<&Run> = runs.iter().filter(|r| r.bounds == bounds).collect();
        if on_surface.is_empty() {
            continue;
        }
        let kept = on_surface.iter().map(|r| r.energy_kept()).sum::<f64>() / on_surface.len() as f64;
        let bar = "█".repeat((kept * 40.0).clamp(0.0, 40.0) as usize);
        println!(
            "  {:>4}x{:<4} {:>5.1}% {}",
            bounds.width, bounds.height, kept * 100.0, bar
        );
    }
    println!();

    println!("════════════════════════════════════════════════════════════════");
    println!("DEGRADED RUNS");
    println!("════════════════════════════════════════════════════════════════");
    for r in runs.iter().filter(|r| r.degraded) {
        println!(
            "  seed {:>6} | {}x{} | asked {:>3}, placed {}",
            r.seed, r.bounds.width, r.bounds.height, r.requested, r.placed
        );
    }
}
