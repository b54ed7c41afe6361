use bouncer_core::Vec2;

/// Euclidean distance between two points
pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = bx - ax;
    let dy = by - ay;
    (dx * dx + dy * dy).sqrt()
}

/// Distance between two positions
pub fn distance_between(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
