/// Convenience result type for the crate.
pub type EaseKitResult<T> = Result<T, EaseKitError>;

/// Error taxonomy for curve selection and the plotting surface.
///
/// The scalar math and the curves themselves never fail: degenerate numeric input yields a
/// non-finite value instead of an error.
#[derive(thiserror::Error, Debug)]
pub enum EaseKitError {
    /// A curve name that is not published by the registry.
    #[error("unknown curve \"{0}\"")]
    UnknownCurve(String),

    /// A curve parameter or plot setting outside its documented domain.
    #[error("validation error: {0}")]
    Validation(String),

    /// A plot description or curve selection that could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped I/O and third-party failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EaseKitError {
    /// Build an [`EaseKitError::UnknownCurve`].
    pub fn unknown_curve(name: impl Into<String>) -> Self {
        Self::UnknownCurve(name.into())
    }

    /// Build an [`EaseKitError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EaseKitError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
