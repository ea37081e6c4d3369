use thiserror::Error;

/// Main error type for meshrender operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A triangle references a missing vertex, or the per-vertex arrays
    /// disagree in length
    #[error("invalid mesh: {detail}")]
    InvalidMesh { detail: String },

    /// A transform parameter is out of range, e.g. a non-positive scale
    #[error("invalid transform: {detail}")]
    InvalidTransform { detail: String },

    /// The camera description cannot produce a view basis
    #[error("invalid camera: {detail}")]
    InvalidCamera { detail: String },

    /// Output dimensions or a supplied background image are unusable
    #[error("invalid image: {detail}")]
    InvalidImage { detail: String },

    /// A stage produced a non-finite coordinate or color
    #[error("non-finite value produced by {stage} at element {index}")]
    NumericOverflow { stage: &'static str, index: usize },
}

impl Error {
    /// Shorthand for [`Error::InvalidMesh`]
    pub fn invalid_mesh(detail: impl Into<String>) -> Self {
        Error::InvalidMesh {
            detail: detail.into(),
        }
    }

    /// Shorthand for [`Error::InvalidTransform`]
    pub fn invalid_transform(detail: impl Into<String>) -> Self {
        Error::InvalidTransform {
            detail: detail.into(),
        }
    }

    /// Shorthand for [`Error::InvalidCamera`]
    pub fn invalid_camera(detail: impl Into<String>) -> Self {
        Error::InvalidCamera {
            detail: detail.into(),
        }
    }

    /// Shorthand for [`Error::InvalidImage`]
    pub fn invalid_image(detail: impl Into<String>) -> Self {
        Error::InvalidImage {
            detail: detail.into(),
        }
    }
}

/// Result type alias for meshrender operations
pub type Result<T> = std::result::Result<T, Error>;
