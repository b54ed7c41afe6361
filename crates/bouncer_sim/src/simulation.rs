use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;
use bouncer_core::{Body, BodySnapshot, Bounds, SimConfig, SimError, Vec2};
use bouncer_physics::{TickContext, place_with_fallback, update_body};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::interaction;

/// The simulation: owns every body, the bounds, and the last pointer position
#[derive(Resource)]
pub struct Simulation {
    config: SimConfig,
    bounds: Bounds,
    pointer: Vec2,
    bodies: Vec<Body>,
    rng: ChaCha8Rng,
    /// Set when the last placement fell back to the minimal count
    degraded: Option<SimError>,
    /// Ticks since the last placement
    frame: u64,
    /// Incremented on every re-placement (renderers use this to rebuild)
    generation: u32,
}

impl Simulation {
    /// Validate the config and place the initial bodies.
    ///
    /// Returns `PlacementInfeasible` only if the fallback count cannot be
    /// placed either; a successful fallback is reported by `degradation()`.
    pub fn configure(config: SimConfig, bounds: Bounds) -> Result<Self, SimError> {
        config.validate()?;
        validate_bounds(bounds)?;

        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut sim = Self {
            config,
            bounds,
            pointer: bounds.center(),
            bodies: Vec::new(),
            rng,
            degraded: None,
            frame: 0,
            generation: 0,
        };
        sim.replace()?;
        Ok(sim)
    }

    /// Full reset at new bounds with the current configuration.
    ///
    /// Existing bodies are dropped, never rescaled. If placement fails the
    /// simulation is left empty and the error is returned.
    pub fn resize(&mut self, bounds: Bounds) -> Result<(), SimError> {
        validate_bounds(bounds)?;
        info!(
            "Resize {}x{} -> {}x{}",
            self.bounds.width, self.bounds.height, bounds.width, bounds.height
        );
        self.bounds = bounds;
        self.replace()
    }

    /// Full reset with a new configuration (reseeds the RNG)
    pub fn reconfigure(&mut self, config: SimConfig) -> Result<(), SimError> {
        config.validate()?;
        self.rng = ChaCha8Rng::seed_from_u64(config.seed);
        self.config = config;
        self.replace()
    }

    fn replace(&mut self) -> Result<(), SimError> {
        self.bodies.clear();
        self.degraded = None;
        self.frame = 0;
        self.generation = self.generation.wrapping_add(1);

        let placement = place_with_fallback(self.bounds, &self.config, &mut self.rng)?;
        if let Some(err) = &placement.degraded {
            warn!("{}; placed {} instead", err, placement.bodies.len());
        }
        info!(
            "Placed {} bodies in {}x{} (generation {})",
            placement.bodies.len(),
            self.bounds.width,
            self.bounds.height,
            self.generation
        );
        self.bodies = placement.bodies;
        self.degraded = placement.degraded;
        Ok(())
    }

    /// Advance one frame and return the bodies to draw, in insertion order
    pub fn tick(&mut self) -> Vec<BodySnapshot> {
        let ctx = TickContext::new(&self.config, self.bounds, self.pointer);
        for index in 0..self.bodies.len() {
            update_body(&mut self.bodies, index, &ctx);
        }
        self.frame += 1;
        self.snapshot()
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn grab(&mut self) -> usize {
        let count = interaction::grab(&mut self.bodies, self.pointer);
        if count > 0 {
            debug!("Grabbed {} bodies at ({}, {})", count, self.pointer.x, self.pointer.y);
        }
        count
    }

    pub fn release(&mut self) -> usize {
        let count = interaction::release(&mut self.bodies, self.pointer);
        if count > 0 {
            debug!("Released {} bodies", count);
        }
        count
    }

    pub fn impulse(&mut self, strength: f32) -> usize {
        let count = interaction::impulse(&mut self.bodies, self.pointer, strength);
        if count > 0 {
            debug!("Kicked {} bodies (strength {})", count, strength);
        }
        count
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Why the last placement used fewer bodies than requested, if it did
    pub fn degradation(&self) -> Option<&SimError> {
        self.degraded.as_ref()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

fn validate_bounds(bounds: Bounds) -> Result<(), SimError> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(SimError::invalid("bounds", "width and height must be positive"))
    }
}
