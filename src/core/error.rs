use thiserror::Error;

/// Errors that can occur while preparing input for the billing engine.
///
/// The calculations themselves are total: degenerate numbers are clamped,
/// never reported. Only structurally wrong input or configuration fails.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BillingError {
    /// Input had the wrong shape (e.g. items were not a JSON array).
    #[error("invalid input shape: {0}")]
    InvalidInputShape(String),

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// A reporting period was malformed.
    #[error("invalid period: {0}")]
    InvalidPeriod(String),
}

/// A single advisory validation finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the offending field (e.g. "items[2].quantity").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
