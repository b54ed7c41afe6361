//! Per-body update rule, run once per body per tick.
//!
//! Phases run in a fixed order: collisions, walls, proximity fade, hold,
//! stagnancy color, integration. Each body sees the whole collection so it
//! can collide with (and mutate) every other body.

use bouncer_core::{Body, Bounds, Color, FADE_CEILING, Hold, SimConfig, Vec2};

use crate::collision::{detect, resolve};
use crate::geometry::distance_between;

/// Per-tick inputs shared by every body update
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    pub pointer: Vec2,
    pub bounds: Bounds,
    pub friction: f32,
    pub fade_radius: f32,
    pub fade_step: f32,
}

impl TickContext {
    pub fn new(config: &SimConfig, bounds: Bounds, pointer: Vec2) -> Self {
        Self {
            pointer,
            bounds,
            friction: config.friction,
            fade_radius: config.fade_radius,
            fade_step: config.fade_step,
        }
    }
}

/// Run every phase for `bodies[index]`
pub fn update_body(bodies: &mut [Body], index: usize, ctx: &TickContext) {
    collide(bodies, index, ctx.friction);

    let body = &mut bodies[index];
    bounce_walls(body, ctx.bounds, ctx.friction);
    fade(body, ctx.pointer, ctx.fade_radius, ctx.fade_step);
    follow_pointer(body, ctx.pointer);
    mark_stagnancy(body);
    integrate(body);
}

/// Collide `bodies[index]` against every other body.
///
/// On contact the body's own velocity is damped before the response. A held
/// body acts as an anchor: it kills the partner's velocity outright. Only the
/// updating body applies these rules, so the pair is treated asymmetrically.
pub fn collide(bodies: &mut [Body], index: usize, friction: f32) {
    for other in 0..bodies.len() {
        if other == index {
            continue;
        }
        let (this, that) = pair_mut(bodies, index, other);
        if !detect(this, that) {
            continue;
        }
        if this.is_held() {
            that.velocity = Vec2::ZERO;
        }
        this.velocity *= friction;
        resolve(this, that);
    }
}

/// Reflect velocity on any axis whose next step would leave the bounds.
/// Touching a wall also drops the pointer hold.
pub fn bounce_walls(body: &mut Body, bounds: Bounds, friction: f32) {
    let next_left = body.position.x - body.radius + body.velocity.x;
    let next_right = body.position.x + body.radius + body.velocity.x;
    if next_left < 0.0 || next_right > bounds.width {
        body.hold = Hold::Free;
        body.velocity.x = -body.velocity.x;
        body.velocity *= friction;
    }

    let next_top = body.position.y - body.radius + body.velocity.y;
    let next_bottom = body.position.y + body.radius + body.velocity.y;
    if next_top < 0.0 || next_bottom > bounds.height {
        body.hold = Hold::Free;
        body.velocity.y = -body.velocity.y;
        body.velocity *= friction;
    }
}

/// Fade in toward `FADE_CEILING` while the pointer is near, otherwise fade out to 0
pub fn fade(body: &mut Body, pointer: Vec2, fade_radius: f32, step: f32) {
    let near = distance_between(pointer, body.position) < fade_radius;
    if near && body.opacity < FADE_CEILING {
        body.opacity += step;
    } else if body.opacity > 0.0 {
        body.opacity = (body.opacity - step).max(0.0);
    }
    body.opacity = body.opacity.clamp(0.0, 1.0);
}

/// Pin a held body to the pointer. A held body never carries velocity,
/// including any it picked up from a contact earlier in the tick.
pub fn follow_pointer(body: &mut Body, pointer: Vec2) {
    if let Hold::Held { offset } = body.hold {
        body.position = pointer + offset;
        body.velocity = Vec2::ZERO;
    }
}

pub fn mark_stagnancy(body: &mut Body) {
    body.color = if body.velocity == Vec2::ZERO { Color::STALLED } else { body.base_color };
}

pub fn integrate(body: &mut Body) {
    body.position += body.velocity;
}

/// Two distinct mutable bodies out of one slice
fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = bodies.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
