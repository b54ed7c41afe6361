//! Pointer commands. Each one touches every body whose circle contains the pointer.

use bouncer_core::{Body, Hold, Vec2};
use bouncer_physics::distance_between;

fn under_pointer(body: &Body, pointer: Vec2) -> bool {
    distance_between(pointer, body.position) <= body.radius
}

/// Stop and pin bodies under the pointer, remembering where they were grabbed.
/// Returns how many bodies were grabbed.
pub fn grab(bodies: &mut [Body], pointer: Vec2) -> usize {
    let mut count = 0;
    for body in bodies.iter_mut().filter(|b| under_pointer(b, pointer)) {
        body.velocity = Vec2::ZERO;
        body.hold = Hold::Held { offset: body.position - pointer };
        count += 1;
    }
    count
}

/// Unpin bodies under the pointer. Velocity is left as is.
pub fn release(bodies: &mut [Body], pointer: Vec2) -> usize {
    let mut count = 0;
    for body in bodies.iter_mut().filter(|b| under_pointer(b, pointer)) {
        body.hold = Hold::Free;
        count += 1;
    }
    count
}

/// Kick bodies under the pointer away from it, proportional to their offset
pub fn impulse(bodies: &mut [Body], pointer: Vec2, strength: f32) -> usize {
    let mut count = 0;
    for body in bodies.iter_mut().filter(|b| under_pointer(b, pointer)) {
        body.velocity = (body.position - pointer) * strength;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncer_core::Color;

    fn bodies() -> Vec<Body> {
        let color = Color::from_rgb(0x7ecefd);
        vec![
            Body::new(Vec2::new(100.0, 100.0), Vec2::new(2.0, 1.0), 30.0, 1.0, color),
            Body::new(Vec2::new(300.0, 100.0), Vec2::new(-1.0, 3.0), 30.0, 1.0, color),
        ]
    }

    #[test]
    fn test_grab_pins_only_bodies_under_pointer() {
        let mut bodies = bodies();
        let pointer = Vec2::new(110.0, 90.0);
        assert_eq!(grab(&mut bodies, pointer), 1);
        assert_eq!(bodies[0].velocity, Vec2::ZERO);
        assert_eq!(bodies[0].hold, Hold::Held { offset: Vec2::new(-10.0, 10.0) });
        assert_eq!(bodies[1].hold, Hold::Free);
        assert_eq!(bodies[1].velocity, Vec2::new(-1.0, 3.0));
    }

    #[test]
    fn test_grab_includes_rim() {
        let mut bodies = bodies();
        assert_eq!(grab(&mut bodies, Vec2::new(130.0, 100.0)), 1);
        assert_eq!(grab(&mut bodies, Vec2::new(130.5, 100.0)), 0);
    }

    #[test]
    fn test_release_keeps_velocity_and_position() {
        let mut bodies = bodies();
        let pointer = Vec2::new(100.0, 100.0);
        grab(&mut bodies, pointer);
        bodies[0].velocity = Vec2::new(0.5, 0.0);
        assert_eq!(release(&mut bodies, pointer), 1);
        assert_eq!(bodies[0].hold, Hold::Free);
        assert_eq!(bodies[0].velocity, Vec2::new(0.5, 0.0));
        assert_eq!(bodies[0].position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_impulse_pushes_away() {
        let mut bodies = bodies();
        assert_eq!(impulse(&mut bodies, Vec2::new(290.0, 110.0), 0.5), 1);
        assert_eq!(bodies[1].velocity, Vec2::new(5.0, -5.0));
        assert_eq!(bodies[0].velocity, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_commands_miss_are_noops() {
        let mut bodies = bodies();
        let before = bodies.clone();
        let far = Vec2::new(-500.0, 5000.0);
        assert_eq!(grab(&mut bodies, far), 0);
        assert_eq!(release(&mut bodies, far), 0);
        assert_eq!(impulse(&mut bodies, far, 0.7), 0);
        assert_eq!(bodies, before);
    }
}
