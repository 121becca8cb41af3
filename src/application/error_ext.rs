//! Error conversion helpers
//!
//! Provides extension traits for attaching context to lower-level errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::ApiResult;

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read(&chart_file)
    ///     .with_path_context("read chart", &chart_file)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }
}

/// Extension trait for converting `ApiResult` to `ApplicationResult` with context.
pub trait ApiResultExt<T> {
    fn with_api_context(self, context: impl Into<String>) -> ApplicationResult<T>;
}

impl<T> ApiResultExt<T> for ApiResult<T> {
    fn with_api_context(self, context: impl Into<String>) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Api {
            context: context.into(),
            source,
        })
    }
}
