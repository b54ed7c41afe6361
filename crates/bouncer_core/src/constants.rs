// Simulation units: 1 unit = 1 screen pixel, 1 tick = 1 frame.
// Velocities are pixels per frame; nothing here is scaled by dt.

/// Opacity a body fades up to while the pointer is near.
/// Bodies fade back down to 0.
pub const FADE_CEILING: f32 = 0.8;

/// Default opacity change per tick
pub const DEFAULT_FADE_STEP: f32 = 0.02;

/// Default pointer distance under which bodies light up
pub const DEFAULT_FADE_RADIUS: f32 = 500.0;

/// Default number of bodies
pub const DEFAULT_PARTICLE_COUNT: u32 = 40;

/// Default friction coefficient (1.0 = no damping)
pub const DEFAULT_FRICTION: f32 = 0.99;

/// Default radius range
pub const DEFAULT_MIN_RADIUS: f32 = 35.0;
pub const DEFAULT_MAX_RADIUS: f32 = 50.0;

/// Each initial velocity axis is drawn from [-speed, speed]
pub const DEFAULT_INITIAL_SPEED: f32 = 4.0;

/// Radius limits accepted from callers
pub const MIN_RADIUS_FLOOR: f32 = 15.0;
pub const MIN_RADIUS_CEIL: f32 = 150.0;
pub const MAX_RADIUS_FLOOR: f32 = 20.0;
pub const MAX_RADIUS_CEIL: f32 = 160.0;

/// Consecutive overlap rejections before placement gives up on a request
pub const MAX_PLACEMENT_REJECTIONS: u32 = 100_000;

/// Body count used for the single retry after placement gives up
pub const FALLBACK_PARTICLE_COUNT: u32 = 2;

/// Default kick strength for a pointer impulse
pub const DEFAULT_IMPULSE_STRENGTH: f32 = 0.7;

/// Default seed for the placement RNG
pub const DEFAULT_SEED: u64 = 42;
