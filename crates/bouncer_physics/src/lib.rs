pub mod body;
pub mod collision;
pub mod energy;
pub mod geometry;
pub mod placement;

pub use body::{TickContext, update_body};
pub use collision::{detect, resolve};
pub use geometry::{distance, distance_between};
pub use placement::{Placement, place, place_with_fallback};
