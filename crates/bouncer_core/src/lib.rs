pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{ConfigForm, MassModel, SimConfig};
pub use constants::*;
pub use error::SimError;
pub use types::*;
