/// Convenience result type used across postframe.
pub type PostframeResult<T> = Result<T, PostframeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only two variants ever reach a caller of the compositor: `Validation` for
/// malformed inputs and `Background` when the base image is unusable. Every
/// optional layer (frame, preferred font, logo, date) degrades to a logged
/// skip instead of an error.
#[derive(thiserror::Error, Debug)]
pub enum PostframeError {
    /// Invalid caller-provided data (sizes, spec values, buffer lengths).
    #[error("validation error: {0}")]
    Validation(String),

    /// The background image is missing, unreadable, or unusable. Fatal for
    /// the render call that hit it.
    #[error("background error: {0}")]
    Background(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PostframeError {
    /// Build a [`PostframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PostframeError::Background`] value.
    pub fn background(msg: impl Into<String>) -> Self {
        Self::Background(msg.into())
    }
}
