use thiserror::Error;

// Rejected configuration. Every fallible setter returns one of these
// and leaves the previous, valid configuration untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("octave count must be at least 1")]
    InvalidOctaveCount,

    #[error("lower bound {lower} must not exceed upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    #[error("cache capacity must be at least 1")]
    InvalidCacheCapacity,

    #[error("duplicate curve control point at input {0}")]
    DuplicateControlPoint(f64),
}
