use bevy::prelude::*;
use bouncer_core::{BodySnapshot, Bounds, ConfigForm};

use super::simulation::Simulation;

/// Pointer input forwarded to the simulation, in arrival order
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerCommand {
    Move { x: f32, y: f32 },
    Grab,
    Release,
    Impulse { strength: f32 },
}

/// The drawing surface changed size
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BoundsChanged {
    pub width: f32,
    pub height: f32,
}

/// The options form was submitted
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ConfigSubmitted(pub ConfigForm);

/// What the last tick produced, ready for a renderer to upload
#[derive(Resource, Debug, Default)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub generation: u32,
    pub bodies: Vec<BodySnapshot>,
}

impl FrameSnapshot {
    /// Raw instance buffer, one `BodySnapshot` per body
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.bodies)
    }
}

/// Systems that advance the simulation. Input producers should run before it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Bevy plugin for the simulation pipeline.
///
/// Expects a `Simulation` resource to be inserted by the app.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerCommand>()
            .add_event::<BoundsChanged>()
            .add_event::<ConfigSubmitted>()
            .init_resource::<FrameSnapshot>()
            .add_systems(
                Update,
                (apply_config, apply_resize, apply_pointer, simulation_tick)
                    .chain()
                    .in_set(SimulationSet),
            );
    }
}

/// Parse the latest submitted form and restart with it. A rejected form
/// leaves the running simulation untouched.
fn apply_config(mut sim: ResMut<Simulation>, mut events: EventReader<ConfigSubmitted>) {
    let Some(ConfigSubmitted(form)) = events.read().last() else {
        return;
    };
    let result = form
        .apply(sim.config())
        .and_then(|config| sim.reconfigure(config));
    if let Err(err) = result {
        warn!("Options rejected: {}", err);
    }
}

/// Only the latest resize in a frame matters, since each one re-places everything
fn apply_resize(mut sim: ResMut<Simulation>, mut events: EventReader<BoundsChanged>) {
    let Some(last) = events.read().last() else {
        return;
    };
    if let Err(err) = sim.resize(Bounds::new(last.width, last.height)) {
        warn!("Resize to {}x{} failed: {}", last.width, last.height, err);
    }
}

fn apply_pointer(mut sim: ResMut<Simulation>, mut events: EventReader<PointerCommand>) {
    for command in events.read() {
        match *command {
            PointerCommand::Move { x, y } => sim.pointer_move(x, y),
            PointerCommand::Grab => {
                sim.grab();
            }
            PointerCommand::Release => {
                sim.release();
            }
            PointerCommand::Impulse { strength } => {
                sim.impulse(strength);
            }
        }
    }
}

/// Main simulation tick: advance every body once and publish the snapshot
fn simulation_tick(mut sim: ResMut<Simulation>, mut snapshot: ResMut<FrameSnapshot>) {
    snapshot.bodies = sim.tick();
    snapshot.frame = sim.frame();
    snapshot.generation = sim.generation();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncer_core::{Hold, SimConfig};

    fn app_with(config: SimConfig, bounds: Bounds) -> App {
        let mut app = App::new();
        app.add_plugins(SimulationPlugin)
            .insert_resource(Simulation::configure(config, bounds).unwrap());
        app
    }

    #[test]
    fn test_update_publishes_snapshot() {
        let mut app = app_with(SimConfig::default(), Bounds::new(1280.0, 720.0));
        app.update();
        app.update();

        let snapshot = app.world().resource::<FrameSnapshot>();
        assert_eq!(snapshot.frame, 2);
        assert_eq!(snapshot.bodies.len(), 40);
        assert_eq!(snapshot.as_bytes().len(), 40 * std::mem::size_of::<BodySnapshot>());

        let sim = app.world().resource::<Simulation>();
        let expected: Vec<BodySnapshot> = sim.snapshot();
        assert_eq!(snapshot.bodies, expected);
    }

    #[test]
    fn test_pointer_commands_reach_simulation() {
        let config = SimConfig { particle_count: 3, ..SimConfig::default() };
        let mut app = app_with(config, Bounds::new(1000.0, 1000.0));
        let target = app.world().resource::<Simulation>().bodies()[0].position;

        app.world_mut().send_event(PointerCommand::Move { x: target.x, y: target.y });
        app.world_mut().send_event(PointerCommand::Grab);
        app.update();

        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.pointer(), target);
        assert!(matches!(sim.bodies()[0].hold, Hold::Held { .. }));

        app.world_mut().send_event(PointerCommand::Release);
        app.update();
        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.bodies()[0].hold, Hold::Free);
    }

    #[test]
    fn test_bounds_changed_replaces_bodies() {
        let mut app = app_with(SimConfig::default(), Bounds::new(1280.0, 720.0));
        app.update();
        let generation = app.world().resource::<FrameSnapshot>().generation;

        app.world_mut().send_event(BoundsChanged { width: 800.0, height: 2000.0 });
        app.world_mut().send_event(BoundsChanged { width: 1600.0, height: 900.0 });
        app.update();

        let snapshot = app.world().resource::<FrameSnapshot>();
        assert_eq!(snapshot.generation, generation + 1);
        assert_eq!(snapshot.frame, 1);
        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.bounds(), Bounds::new(1600.0, 900.0));
    }

    #[test]
    fn test_config_submitted_restarts_simulation() {
        let mut app = app_with(SimConfig::default(), Bounds::new(1280.0, 720.0));
        app.update();
        let generation = app.world().resource::<FrameSnapshot>().generation;

        let form = ConfigForm {
            particles: Some("12".into()),
            friction: Some("0.5".into()),
            max_radius: Some("60.9".into()),
            min_radius: Some(String::new()),
        };
        app.world_mut().send_event(ConfigSubmitted(form));
        app.update();

        let snapshot = app.world().resource::<FrameSnapshot>();
        assert_eq!(snapshot.generation, generation + 1);
        assert_eq!(snapshot.bodies.len(), 12);
        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.config().friction, 0.5);
        assert_eq!(sim.config().max_radius, 60.0);
        // Blank field means the built-in default
        assert_eq!(sim.config().min_radius, bouncer_core::DEFAULT_MIN_RADIUS);
    }

    #[test]
    fn test_rejected_config_keeps_running() {
        let mut app = app_with(SimConfig::default(), Bounds::new(1280.0, 720.0));
        app.update();
        let generation = app.world().resource::<FrameSnapshot>().generation;

        let form = ConfigForm { particles: Some("-4".into()), ..ConfigForm::default() };
        app.world_mut().send_event(ConfigSubmitted(form));
        app.update();

        let snapshot = app.world().resource::<FrameSnapshot>();
        assert_eq!(snapshot.generation, generation);
        assert_eq!(snapshot.frame, 2);
        assert_eq!(snapshot.bodies.len(), 40);
    }

    #[test]
    fn test_failed_resize_keeps_running() {
        let mut app = app_with(SimConfig::default(), Bounds::new(1280.0, 720.0));
        app.world_mut().send_event(BoundsChanged { width: 30.0, height: 30.0 });
        app.update();

        let snapshot = app.world().resource::<FrameSnapshot>();
        assert!(snapshot.bodies.is_empty());
        assert!(snapshot.as_bytes().is_empty());
    }
}
