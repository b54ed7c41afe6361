/// Errors surfaced by configuration and placement.
///
/// Ticking and pointer commands never fail; out-of-range pointers and
/// commands that hit no body are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A caller-supplied value is out of its documented range.
    /// Raised before any placement attempt; nothing is mutated.
    InvalidConfiguration { field: &'static str, reason: String },
    /// Non-overlapping placement of `requested` bodies did not succeed
    /// within the rejection budget.
    PlacementInfeasible { requested: u32, width: f32, height: f32 },
}

impl SimError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { field, reason: reason.into() }
    }
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration ({}): {}", field, reason)
            }
            SimError::PlacementInfeasible { requested, width, height } => write!(
                f,
                "Cannot place {} particles in {}x{} without overlap, decrease the amount",
                requested, width, height
            ),
        }
    }
}

impl std::error::Error for SimError {}
