use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bouncer_core::{Bounds, ConfigForm, DEFAULT_IMPULSE_STRENGTH, SimConfig};
use bouncer_physics::energy;
use bouncer_sim::{
    ConfigSubmitted, FrameSnapshot, PointerCommand, Simulation, SimulationPlugin, SimulationSet,
};

const BOUNDS: Bounds = Bounds::new(1920.0, 1080.0);
const DEFAULT_FRAMES: u64 = 1200;
/// One grab / release / kick cycle
const CYCLE: u64 = 240;
const REPORT_EVERY: u64 = 120;

/// Scripted stand-in for a mouse: orbits the centre of the surface
#[derive(Resource)]
struct PointerScript {
    frame: u64,
    frames: u64,
    orbit: f32,
}

fn main() -> AppExit {
    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let sim = match Simulation::configure(SimConfig::default(), BOUNDS) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("bouncer: {}", err);
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0 / 60.0))),
        )
        .add_plugins(LogPlugin::default())
        .insert_resource(sim)
        .insert_resource(PointerScript {
            frame: 0,
            frames,
            orbit: BOUNDS.shortest_side() * 0.3,
        })
        .add_plugins(SimulationPlugin)
        .add_systems(Startup, announce)
        .add_systems(Update, drive_pointer.before(SimulationSet))
        .add_systems(Update, (report, stop_after_script).chain().after(SimulationSet))
        .run()
}

fn announce(sim: Res<Simulation>, script: Res<PointerScript>) {
    let bounds = sim.bounds();
    info!(
        "Running {} bodies in {}x{} for {} frames",
        sim.bodies().len(),
        bounds.width,
        bounds.height,
        script.frames
    );
    if let Some(err) = sim.degradation() {
        warn!("Started degraded: {}", err);
    }
}

fn drive_pointer(
    mut script: ResMut<PointerScript>,
    mut commands: EventWriter<PointerCommand>,
    mut options: EventWriter<ConfigSubmitted>,
) {
    // Halfway through, submit the options form as a user would
    if script.frame == script.frames / 2 {
        options.send(ConfigSubmitted(ConfigForm {
            particles: Some("24".into()),
            friction: Some("0.995".into()),
            max_radius: Some("70".into()),
            min_radius: Some("25".into()),
        }));
    }

    let center = BOUNDS.center();
    let angle = script.frame as f32 * 0.02;
    commands.send(PointerCommand::Move {
        x: center.x + script.orbit * angle.cos(),
        y: center.y + script.orbit * angle.sin(),
    });

    match script.frame % CYCLE {
        60 => {
            commands.send(PointerCommand::Grab);
        }
        150 => {
            commands.send(PointerCommand::Release);
        }
        200 => {
            commands.send(PointerCommand::Impulse { strength: DEFAULT_IMPULSE_STRENGTH });
        }
        _ => {}
    }
    script.frame += 1;
}

fn report(sim: Res<Simulation>, snapshot: Res<FrameSnapshot>) {
    if snapshot.frame % REPORT_EVERY != 0 {
        return;
    }
    let bodies = sim.bodies();
    let momentum = energy::momentum(bodies);
    let visible = snapshot.bodies.iter().filter(|b| b.opacity > 0.0).count();
    info!(
        "frame {} | KE {:.1} | p ({:.2}, {:.2}) | stalled {}/{} | visible {} | min gap {:.1}",
        snapshot.frame,
        energy::kinetic_energy(bodies),
        momentum.x,
        momentum.y,
        energy::stalled_count(bodies),
        bodies.len(),
        visible,
        energy::min_gap(bodies).unwrap_or(0.0)
    );
}

fn stop_after_script(script: Res<PointerScript>, mut exit: EventWriter<AppExit>) {
    if script.frame >= script.frames {
        info!("Script finished after {} frames", script.frame);
        exit.send(AppExit::Success);
    }
}
