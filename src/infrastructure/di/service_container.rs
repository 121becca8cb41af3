//! Service container for dependency injection
//!
//! Wires up services with their dependencies.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::ChartService;
use crate::config::Settings;
use crate::infrastructure::http::HttpConnector;
use crate::infrastructure::traits::{ApiConnector, FileSystem, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding the shared dependencies of all chart commands.
pub struct ServiceContainer {
    /// Settings from config file and environment
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Bazaar API connector
    pub connector: Arc<dyn ApiConnector>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(HttpConnector))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        connector: Arc<dyn ApiConnector>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
            connector,
        }
    }

    /// Build a chart service; `overrides` (command-line flags) win over stored settings.
    pub fn chart_service(&self, overrides: &Settings) -> InfraResult<ChartService> {
        let effective = self.settings.merge_with(overrides);
        let endpoint = effective.endpoint()?;
        debug!("resolved endpoint: {:?}", endpoint);
        let api = self.connector.connect(&endpoint)?;
        Ok(ChartService::new(self.fs.clone(), api))
    }
}
