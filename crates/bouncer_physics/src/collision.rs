use bouncer_core::{Body, Vec2};

use crate::geometry::distance_between;

/// True iff the two circles overlap (strict sum-of-radii test)
pub fn detect(a: &Body, b: &Body) -> bool {
    distance_between(a.position, b.position) < a.radius + b.radius
}

/// Elastic collision along the line of centers, weighted by mass.
///
/// Velocities are split into normal and tangential parts; only the normal
/// parts exchange momentum. Positions are never touched, so overlapping
/// bodies stay overlapped until their velocities carry them apart.
///
/// Pairs already separating along the normal are left alone. The stepper
/// visits every overlapping pair from both sides in one tick, and the second
/// visit would otherwise undo the first.
pub fn resolve(a: &mut Body, b: &mut Body) {
    let delta = b.position - a.position;
    let dist = delta.length();
    if dist == 0.0 {
        // Coincident centers have no line of action
        return;
    }

    let n = Vec2::new(delta.x / dist, delta.y / dist);
    let t = n.perp();

    let a_n = a.velocity.dot(n);
    let b_n = b.velocity.dot(n);
    if a_n - b_n <= 0.0 {
        return;
    }

    let a_t = a.velocity.dot(t);
    let b_t = b.velocity.dot(t);

    let (ma, mb) = (a.mass, b.mass);
    let total = ma + mb;
    let a_n_after = (a_n * (ma - mb) + 2.0 * mb * b_n) / total;
    let b_n_after = (b_n * (mb - ma) + 2.0 * ma * a_n) / total;

    a.velocity = compose(n, t, a_n_after, a_t);
    b.velocity = compose(n, t, b_n_after, b_t);
}

fn compose(n: Vec2, t: Vec2, normal: f32, tangent: f32) -> Vec2 {
    n * normal + t * tangent
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncer_core::Color;

    fn body(x: f32, y: f32, vx: f32, vy: f32, radius: f32, mass: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, mass, Color::from_rgb(0xffffff))
    }

    #[test]
    fn test_detect_uses_sum_of_radii() {
        let a = body(0.0, 0.0, 0.0, 0.0, 10.0, 1.0);
        let b = body(39.0, 0.0, 0.0, 0.0, 30.0, 1.0);
        assert!(detect(&a, &b));

        // Exactly touching is not an overlap
        let c = body(40.0, 0.0, 0.0, 0.0, 30.0, 1.0);
        assert!(!detect(&a, &c));
    }

    #[test]
    fn test_head_on_equal_mass_swaps() {
        let mut a = body(0.0, 0.0, 3.0, 0.0, 25.0, 1.0);
        let mut b = body(50.0, 0.0, -3.0, 0.0, 25.0, 1.0);
        resolve(&mut a, &mut b);
        assert_eq!(a.velocity, Vec2::new(-3.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_equal_mass_conserves_momentum() {
        let mut a = body(100.0, 100.0, 2.5, -1.0, 30.0, 1.0);
        let mut b = body(130.0, 120.0, -1.5, -3.0, 30.0, 1.0);
        let before = a.velocity + b.velocity;
        resolve(&mut a, &mut b);
        let after = a.velocity + b.velocity;
        assert!((before.x - after.x).abs() < 1e-5);
        assert!((before.y - after.y).abs() < 1e-5);
        // Something actually changed
        assert_ne!(a.velocity, Vec2::new(2.5, -1.0));
    }

    #[test]
    fn test_unequal_mass_conserves_momentum_and_energy() {
        let mut a = body(0.0, 0.0, 4.0, 1.0, 20.0, 3.0);
        let mut b = body(30.0, 10.0, -1.0, 0.5, 20.0, 1.0);
        let p_before = a.velocity * a.mass + b.velocity * b.mass;
        let e_before = 0.5 * a.mass * a.velocity.dot(a.velocity)
            + 0.5 * b.mass * b.velocity.dot(b.velocity);

        resolve(&mut a, &mut b);

        let p_after = a.velocity * a.mass + b.velocity * b.mass;
        let e_after = 0.5 * a.mass * a.velocity.dot(a.velocity)
            + 0.5 * b.mass * b.velocity.dot(b.velocity);
        assert!((p_before.x - p_after.x).abs() < 1e-4);
        assert!((p_before.y - p_after.y).abs() < 1e-4);
        assert!((e_before - e_after).abs() < 1e-3);
    }

    #[test]
    fn test_tangential_component_kept() {
        // Line of centers along x; y velocities are purely tangential
        let mut a = body(0.0, 0.0, 2.0, 5.0, 10.0, 1.0);
        let mut b = body(15.0, 0.0, 0.0, -1.0, 10.0, 1.0);
        resolve(&mut a, &mut b);
        assert!((a.velocity.y - 5.0).abs() < 1e-6);
        assert!((b.velocity.y + 1.0).abs() < 1e-6);
        assert!(a.velocity.x.abs() < 1e-6);
        assert!((b.velocity.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_separating_pair_untouched() {
        let mut a = body(0.0, 0.0, -2.0, 0.0, 25.0, 1.0);
        let mut b = body(40.0, 0.0, 2.0, 0.0, 25.0, 1.0);
        resolve(&mut a, &mut b);
        assert_eq!(a.velocity, Vec2::new(-2.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_resolve_does_not_move_bodies() {
        let mut a = body(0.0, 0.0, 1.0, 0.0, 25.0, 1.0);
        let mut b = body(10.0, 0.0, 0.0, 0.0, 25.0, 1.0);
        resolve(&mut a, &mut b);
        assert_eq!(a.position, Vec2::new(0.0, 0.0));
        assert_eq!(b.position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_coincident_centers_noop() {
        let mut a = body(5.0, 5.0, 1.0, 0.0, 25.0, 1.0);
        let mut b = body(5.0, 5.0, -1.0, 0.0, 25.0, 1.0);
        resolve(&mut a, &mut b);
        assert_eq!(a.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(-1.0, 0.0));
    }
}
