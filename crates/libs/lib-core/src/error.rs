//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the asset core.
//!
//! ## Error Categories
//!
//! 1. **Store Errors** - the asset registry refused or could not find something
//!    - [`UpdateRejected`](AppError::UpdateRejected)
//!    - [`NotFound`](AppError::NotFound)
//!
//! 2. **Degradation Signals** - conditions the UI handles by disabling a control
//!    - [`NetworkUnavailable`](AppError::NetworkUnavailable)
//!    - [`Unsupported`](AppError::Unsupported)
//!
//! 3. **Startup Errors**
//!    - [`Config`](AppError::Config)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn explorer(base: Option<&str>) -> Result<&str> {
//!     base.ok_or_else(|| AppError::NetworkUnavailable("no block explorer".to_string()))
//! }
//!
//! assert!(explorer(None).unwrap_err().is_degradation());
//! ```

use thiserror::Error;

use crate::verification::PendingFeature;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type for the asset core.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// The asset store rejected a metadata update (persistence or background failure).
    #[error("Asset update rejected: {0}")]
    UpdateRejected(String),

    /// No block explorer is resolvable for the active network.
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The asset is not present in the store.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The action exists in the UI but is deliberately not implemented yet.
    #[error("Unsupported: {0}")]
    Unsupported(PendingFeature),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the UI should degrade (disable a control) rather than report the error.
    pub fn is_degradation(&self) -> bool {
        matches!(self, AppError::NetworkUnavailable(_) | AppError::Unsupported(_))
    }
}

/// Convert environment read failures to `AppError`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
