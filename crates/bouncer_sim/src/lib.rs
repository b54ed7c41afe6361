pub mod interaction;
pub mod pipeline;
pub mod simulation;

pub use pipeline::{
    BoundsChanged, ConfigSubmitted, FrameSnapshot, PointerCommand, SimulationPlugin, SimulationSet,
};
pub use simulation::Simulation;
