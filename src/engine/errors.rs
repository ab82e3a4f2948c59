use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors that can occur while evaluating a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid report: {0}")]
    InvalidReport(String),

    #[error("Unsupported report view: {0}")]
    UnsupportedView(String),

    #[error("Report configuration error: {0}")]
    Configuration(String),

    #[error("Sample source failed: {0}")]
    Source(#[from] SourceError),
}

/// Failures raised by the collaborators that supply samples and definitions.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Definition catalog unavailable: {0}")]
    Catalog(String),

    #[error("Sample fetch failed: {0}")]
    Fetch(String),

    #[error("Filter cannot be resolved: {0}")]
    Filter(String),
}

impl ReportError {
    pub fn log_error(&self) {
        match self {
            ReportError::InvalidReport(e) => {
                warn!("Rejected invalid report: {}", e);
            }
            ReportError::UnsupportedView(e) => {
                warn!("Rejected unsupported report view: {}", e);
            }
            ReportError::Configuration(e) => {
                error!("Report configuration error: {}", e);
            }
            ReportError::Source(e) => {
                error!("Sample source failed: {}", e);
                debug!("Sample source error details: {:?}", e);
            }
        }
    }
}
