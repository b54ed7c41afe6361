use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::SimError;
use crate::types::Color;

/// How body mass is derived at placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassModel {
    /// Every body has mass 1 (collisions reduce to velocity swaps)
    #[default]
    Unit,
    /// Mass equals radius
    Radius,
}

impl MassModel {
    pub fn mass_for(&self, radius: f32) -> f32 {
        match self {
            Self::Unit => 1.0,
            Self::Radius => radius,
        }
    }
}

/// Default warm palette
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::from_rgb(0xf3c33e),
        Color::from_rgb(0xe5d681),
        Color::from_rgb(0xdaac2f),
        Color::from_rgb(0xffdf85),
    ]
}

/// Simulation configuration, fixed once placement has run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of bodies to place
    pub particle_count: u32,
    /// Velocity multiplier applied on contact and wall bounce (1.0 = no damping)
    pub friction: f32,
    /// Radius range, drawn uniformly per body
    pub min_radius: f32,
    pub max_radius: f32,
    /// Pointer distance under which bodies fade in
    pub fade_radius: f32,
    /// Opacity change per tick
    pub fade_step: f32,
    /// Max initial speed per axis
    pub initial_speed: f32,
    pub mass_model: MassModel,
    /// Colors drawn uniformly per body
    pub palette: Vec<Color>,
    /// Random seed for deterministic placement
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            friction: DEFAULT_FRICTION,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            fade_radius: DEFAULT_FADE_RADIUS,
            fade_step: DEFAULT_FADE_STEP,
            initial_speed: DEFAULT_INITIAL_SPEED,
            mass_model: MassModel::Unit,
            palette: default_palette(),
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.particle_count == 0 {
            return Err(SimError::invalid("particle_count", "must be a positive value"));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(SimError::invalid("friction", "must be between 0 and 1"));
        }
        if !(MIN_RADIUS_FLOOR..=MIN_RADIUS_CEIL).contains(&self.min_radius) {
            return Err(SimError::invalid(
                "min_radius",
                format!("must be between {} and {}", MIN_RADIUS_FLOOR, MIN_RADIUS_CEIL),
            ));
        }
        if !(MAX_RADIUS_FLOOR..=MAX_RADIUS_CEIL).contains(&self.max_radius) {
            return Err(SimError::invalid(
                "max_radius",
                format!("must be between {} and {}", MAX_RADIUS_FLOOR, MAX_RADIUS_CEIL),
            ));
        }
        if self.min_radius > self.max_radius {
            return Err(SimError::invalid("max_radius", "must not be lower than min radius"));
        }
        if !(self.fade_radius > 0.0 && self.fade_radius.is_finite()) {
            return Err(SimError::invalid("fade_radius", "must be positive"));
        }
        if !(self.fade_step > 0.0 && self.fade_step.is_finite()) {
            return Err(SimError::invalid("fade_step", "must be positive"));
        }
        if !(self.initial_speed >= 0.0 && self.initial_speed.is_finite()) {
            return Err(SimError::invalid("initial_speed", "must be zero or positive"));
        }
        if self.palette.is_empty() {
            return Err(SimError::invalid("palette", "must contain at least one color"));
        }
        Ok(())
    }
}

/// Raw text fields of the options panel.
///
/// `None` and blank strings both mean "use the default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigForm {
    pub particles: Option<String>,
    pub friction: Option<String>,
    pub max_radius: Option<String>,
    pub min_radius: Option<String>,
}

impl ConfigForm {
    /// Build a config from the form. Fields the form does not cover are taken from `base`.
    pub fn apply(&self, base: &SimConfig) -> Result<SimConfig, SimError> {
        let mut config = base.clone();

        config.particle_count = match field(&self.particles) {
            None => DEFAULT_PARTICLE_COUNT,
            Some(text) => {
                let value: f64 = text
                    .parse()
                    .map_err(|_| SimError::invalid("particle_count", "wrong amount of particles"))?;
                if value <= 0.0 {
                    return Err(SimError::invalid("particle_count", "must be a positive value"));
                }
                if value.fract() != 0.0 || value > u32::MAX as f64 {
                    return Err(SimError::invalid("particle_count", "wrong amount of particles"));
                }
                value as u32
            }
        };

        config.friction = match field(&self.friction) {
            None => DEFAULT_FRICTION,
            Some(text) => {
                let value: f32 = text
                    .parse()
                    .map_err(|_| SimError::invalid("friction", "wrong friction number"))?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(SimError::invalid("friction", "must be between 0 and 1"));
                }
                value
            }
        };

        config.max_radius = match field(&self.max_radius) {
            None => DEFAULT_MAX_RADIUS,
            Some(text) => {
                let value = parse_radius(text, "max_radius")?;
                if value > MAX_RADIUS_CEIL {
                    return Err(SimError::invalid("max_radius", "cannot be higher than 160"));
                }
                if value < MAX_RADIUS_FLOOR {
                    return Err(SimError::invalid("max_radius", "cannot be lower than 20"));
                }
                value
            }
        };

        config.min_radius = match field(&self.min_radius) {
            None => DEFAULT_MIN_RADIUS,
            Some(text) => {
                let value = parse_radius(text, "min_radius")?;
                if value < MIN_RADIUS_FLOOR {
                    return Err(SimError::invalid("min_radius", "cannot be lower than 15"));
                }
                if value > MIN_RADIUS_CEIL {
                    return Err(SimError::invalid("min_radius", "cannot be higher than 150"));
                }
                value
            }
        };

        if config.min_radius > config.max_radius {
            return Err(SimError::invalid("max_radius", "must be higher than min radius"));
        }

        config.validate()?;
        Ok(config)
    }
}

fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Radii are whole pixels; fractional input is truncated
fn parse_radius(text: &str, name: &'static str) -> Result<f32, SimError> {
    let value: f32 = text
        .parse()
        .map_err(|_| SimError::invalid(name, "wrong radius number"))?;
    if !value.is_finite() {
        return Err(SimError::invalid(name, "wrong radius number"));
    }
    Ok(value.trunc())
}
