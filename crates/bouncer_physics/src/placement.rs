use bouncer_core::*;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::geometry::distance_between;

/// Bodies produced by `place_with_fallback`
#[derive(Debug, Clone)]
pub struct Placement {
    pub bodies: Vec<Body>,
    /// Set when the requested count could not be placed and the fallback count was used
    pub degraded: Option<SimError>,
}

/// Place `count` non-overlapping bodies fully inside `bounds`.
///
/// Each body draws a radius, then draws centers until one clears every body
/// placed so far (reject-and-retry, full rescan per candidate). Gives up with
/// `PlacementInfeasible` after `MAX_PLACEMENT_REJECTIONS` consecutive rejections.
pub fn place(
    count: u32,
    bounds: Bounds,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Body>, SimError> {
    let infeasible = SimError::PlacementInfeasible {
        requested: count,
        width: bounds.width,
        height: bounds.height,
    };

    // Not even the smallest body fits
    if 2.0 * config.min_radius > bounds.shortest_side() {
        return Err(infeasible);
    }

    let mut bodies: Vec<Body> = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let mut rejections = 0u32;
        let mut radius = draw_radius(config, rng);

        let position = loop {
            if rejections > MAX_PLACEMENT_REJECTIONS {
                return Err(infeasible);
            }

            if 2.0 * radius > bounds.shortest_side() {
                rejections += 1;
                radius = draw_radius(config, rng);
                continue;
            }

            let candidate = draw_center(radius, bounds, rng);
            let overlaps = bodies
                .iter()
                .any(|b| distance_between(b.position, candidate) < b.radius + radius);
            if !overlaps {
                break candidate;
            }
            rejections += 1;
        };

        bodies.push(create_body(position, radius, config, rng));
    }

    Ok(bodies)
}

/// Place the configured count, falling back once to `FALLBACK_PARTICLE_COUNT`.
///
/// The fallback outcome carries the original `PlacementInfeasible` in
/// `degraded`. If the fallback fails too, the original error is returned.
pub fn place_with_fallback(
    bounds: Bounds,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Result<Placement, SimError> {
    match place(config.particle_count, bounds, config, rng) {
        Ok(bodies) => Ok(Placement { bodies, degraded: None }),
        Err(err) => {
            let fallback = FALLBACK_PARTICLE_COUNT.min(config.particle_count);
            let bodies = place(fallback, bounds, config, rng).map_err(|_| err.clone())?;
            Ok(Placement { bodies, degraded: Some(err) })
        }
    }
}

fn draw_radius(config: &SimConfig, rng: &mut impl Rng) -> f32 {
    rng.gen_range(config.min_radius..=config.max_radius)
}

fn draw_center(radius: f32, bounds: Bounds, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(radius..=bounds.width - radius),
        rng.gen_range(radius..=bounds.height - radius),
    )
}

fn create_body(position: Vec2, radius: f32, config: &SimConfig, rng: &mut impl Rng) -> Body {
    let speed = config.initial_speed;
    let velocity = Vec2::new(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed));
    let fallback = Color::from_rgb(0xffffff);
    let color = *config.palette.choose(rng).unwrap_or(&fallback);
    let mass = config.mass_model.mass_for(radius);

    Body::new(position, velocity, radius, mass, color)
}
