/// Convenience result type used across framescroll.
pub type FramescrollResult<T> = Result<T, FramescrollError>;

/// Top-level error taxonomy used by player APIs.
#[derive(thiserror::Error, Debug)]
pub enum FramescrollError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while parsing or serializing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A single frame resource could not be fetched or decoded.
    #[error("load error: {0}")]
    Load(String),

    /// Errors raised by a drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// The host page is missing something the player cannot run without.
    #[error("page error: {0}")]
    Page(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramescrollError {
    /// Build a [`FramescrollError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramescrollError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FramescrollError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`FramescrollError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FramescrollError::Page`] value.
    pub fn page(msg: impl Into<String>) -> Self {
        Self::Page(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
