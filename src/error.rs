//! The unified error type for all document operations.

use thiserror::Error;
use vellum_backend::BackendError;
use vellum_style::StyleParseError;

#[derive(Error, Debug)]
pub enum DocumentError {
    /// An enumerated style or option value outside the supported set
    /// (orientation, page size, cursor placement). Never retried, never
    /// silently defaulted.
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),

    #[error("Style error: {0}")]
    Style(#[from] StyleParseError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
