use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure of a single dataset. Every error is scoped to the chart fed by
/// that dataset: the section shows the message and the rest of the page
/// keeps rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataError {
    /// The CSV resource could not be fetched or parsed.
    #[error("dataset unavailable: {0}")]
    Unavailable(String),

    /// A cell could not be coerced to its declared column type. The whole
    /// dataset is rejected; no partial-row recovery is attempted.
    #[error("type coercion failed: {0}")]
    Coercion(String),
}

impl DataError {
    /// Wrap any displayable error (typically `anyhow::Error`) as
    /// `Unavailable`, keeping the context chain in the message.
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        DataError::Unavailable(format!("{err:#}"))
    }
}
