use thiserror::Error;

/// Errors surfaced by the arrow designer and its input preparation.
#[derive(Debug, Error, PartialEq)]
pub enum DesignError {
    /// Shape parameters violate `0 < alpha < beta <= π/2` or `0 < height1 < height2`.
    #[error("invalid arrow configuration: {0}")]
    InvalidConfiguration(String),

    /// Flat input whose shape is not `[n]`, `[n, 1]`, `[n, 2]` or `[n, 3]`.
    #[error("invalid input shape {shape:?}: {reason}")]
    InvalidInputShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// A length (or `start - end`) that is zero, negative where a magnitude
    /// is expected, or not finite.
    #[error("arrow {index}: length {value} is not usable")]
    InvalidLength { index: usize, value: f64 },

    /// Strand token other than `+`, `-`, `1`, `+1`, `-1`.
    #[error("unrecognized strand {0:?}")]
    InvalidStrand(String),
}

/// Convenience type alias for results using [`DesignError`].
pub type Result<T> = std::result::Result<T, DesignError>;
