/// Result alias used across the crate.
pub type RevealResult<T> = Result<T, RevealError>;

/// Error type for all fallible revealkit operations.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid caller-provided input (viewport, config, arguments).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization or frame assembly failed.
    #[error("render error: {0}")]
    Render(String),

    /// Contact form transport or response handling failed.
    #[error("form error: {0}")]
    Form(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RevealError::Form`].
    pub fn form(msg: impl Into<String>) -> Self {
        Self::Form(msg.into())
    }

    /// Build a [`RevealError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
