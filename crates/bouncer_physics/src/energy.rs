use bouncer_core::{Body, Vec2};

use crate::geometry::distance_between;

/// Total kinetic energy, sum of 1/2 m v^2
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass as f64 * b.velocity.dot(b.velocity) as f64)
        .sum()
}

/// Total linear momentum
pub fn momentum(bodies: &[Body]) -> Vec2 {
    bodies
        .iter()
        .fold(Vec2::ZERO, |acc, b| acc + b.velocity * b.mass)
}

/// Bodies whose velocity is exactly zero
pub fn stalled_count(bodies: &[Body]) -> usize {
    bodies.iter().filter(|b| b.velocity == Vec2::ZERO).count()
}

/// Smallest surface gap over all pairs (negative when overlapping)
pub fn min_gap(bodies: &[Body]) -> Option<f32> {
    let mut best: Option<f32> = None;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let gap = distance_between(a.position, b.position) - a.radius - b.radius;
            best = Some(best.map_or(gap, |g| g.min(gap)));
        }
    }
    best
}
