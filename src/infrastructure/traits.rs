//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{ApiMessage, Chart, ChartName, Endpoint};
use crate::infrastructure::{ApiResult, InfraResult};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents as bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Operations offered by a Bazaar chart API.
pub trait BazaarApi: Send + Sync {
    /// Fetch the chart listing.
    fn list_charts(&self) -> ApiResult<Vec<Chart>>;

    /// Upload a chart archive.
    fn save_chart(&self, file_name: &str, content: Vec<u8>) -> ApiResult<ApiMessage>;

    /// Delete a chart by name.
    fn delete_chart(&self, name: &ChartName) -> ApiResult<ApiMessage>;
}

/// Opens a `BazaarApi` for a resolved endpoint.
pub trait ApiConnector: Send + Sync {
    fn connect(&self, endpoint: &Endpoint) -> InfraResult<Arc<dyn BazaarApi>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
