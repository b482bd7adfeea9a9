use thiserror::Error;

/// Errors raised while constructing a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The name is not a valid identifier once normalized.
    #[error("not a valid name: \"{0}\"")]
    InvalidName(String),

    /// A spline was given fewer than two points.
    #[error("a spline path needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },
}

/// Convenience type alias for results using [`PathError`].
pub type Result<T> = std::result::Result<T, PathError>;
