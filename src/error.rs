use thiserror::Error;

/// Top-level error type for room estimation.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    #[error(transparent)]
    InvalidOptions(#[from] OptionsError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl EstimateError {
    /// Returns `true` if the error was caused by room shape, dimension or opening input.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry(_))
    }

    /// Returns `true` if the error was caused by calculation options.
    #[must_use]
    pub fn is_invalid_options(&self) -> bool {
        matches!(self, Self::InvalidOptions(_))
    }
}

/// Errors related to room shape, dimensions and openings.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("dimension `{field}` is required for this shape")]
    MissingDimension { field: &'static str },

    #[error("dimension `{field}` = {value} must be a positive finite number")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("dimension `{field}` is only valid for L-shaped rooms")]
    UnexpectedDimension { field: &'static str },

    #[error("L-shaped room requires a corner")]
    MissingCorner,

    #[error("extension length {length} equals main length; the room is a rectangle")]
    FlushExtension { length: f64 },

    #[error("wall {wall_id} does not exist (room has {wall_count} walls)")]
    UnknownWall { wall_id: usize, wall_count: usize },

    #[error("invalid opening: {0}")]
    InvalidOpening(String),
}

/// Errors related to calculation options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("`{field}` = {value} must not be negative")]
    NegativeCount { field: &'static str, value: i64 },
}

/// Error returned when parsing an unknown material key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown material `{0}`")]
pub struct UnknownMaterial(pub String);

/// Errors raised while reading external price data.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("price for `{key}` = {value} must not be negative")]
    NegativePrice { key: String, value: f64 },

    #[error("price for `{key}` is not a finite number")]
    NonFinitePrice { key: String },

    #[error("price tier `{0}` is not defined in the catalog")]
    MissingTier(String),

    #[error("malformed price data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`EstimateError`].
pub type Result<T> = std::result::Result<T, EstimateError>;
