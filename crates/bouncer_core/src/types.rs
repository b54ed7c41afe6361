use bytemuck::{Pod, Zeroable};
pub use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangular simulation area with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Both dimensions finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn shortest_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Linear RGBA color [r, g, b, a], each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Shown on bodies whose velocity is exactly zero
    pub const STALLED: Self = Self::from_rgb(0xee3462);

    /// Opaque color from a 0xRRGGBB literal
    pub const fn from_rgb(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self([r, g, b, 1.0])
    }
}

/// Pointer hold state of a body
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Hold {
    #[default]
    Free,
    /// Pinned to the pointer; `offset` is body position minus pointer position at grab time
    Held { offset: Vec2 },
}

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Fixed at creation, always > 0
    pub radius: f32,
    /// Fixed at creation, always > 0; only used by collision response
    pub mass: f32,
    /// Palette color assigned at placement, never changes
    pub base_color: Color,
    /// Color to draw this frame (base color or `Color::STALLED`)
    pub color: Color,
    /// Highlight opacity, clamped to [0, 1]
    pub opacity: f32,
    pub hold: Hold,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, mass: f32, color: Color) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass,
            base_color: color,
            color,
            opacity: 0.0,
            hold: Hold::Free,
        }
    }

    pub fn is_held(&self) -> bool {
        matches!(self.hold, Hold::Held { .. })
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position.to_array(),
            radius: self.radius,
            opacity: self.opacity,
            color: self.color.0,
        }
    }
}

/// Draw-ready body state, laid out for direct GPU/JS buffer upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BodySnapshot {
    pub position: [f32; 2],
    pub radius: f32,
    /// Fill alpha; the outline is always drawn opaque
    pub opacity: f32,
    pub color: [f32; 4],
}
