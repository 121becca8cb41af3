//! Chart management service
//!
//! Thin orchestration over a `BazaarApi`: local checks happen before any
//! request is sent.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApiResultExt, ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{ApiMessage, Chart, ChartName};
use crate::infrastructure::traits::{BazaarApi, FileSystem};

/// Chart list/save/delete operations.
pub struct ChartService {
    fs: Arc<dyn FileSystem>,
    api: Arc<dyn BazaarApi>,
}

impl ChartService {
    pub fn new(fs: Arc<dyn FileSystem>, api: Arc<dyn BazaarApi>) -> Self {
        Self { fs, api }
    }

    /// Fetch all charts known to the API, in API order.
    #[instrument(skip(self))]
    pub fn list(&self) -> ApplicationResult<Vec<Chart>> {
        let charts = self.api.list_charts().with_api_context("list charts")?;
        debug!("received {} charts", charts.len());
        Ok(charts)
    }

    /// Upload the chart archive at `chart_file`.
    ///
    /// The file must exist locally; its contents are not inspected.
    #[instrument(skip(self))]
    pub fn save(&self, chart_file: &Path) -> ApplicationResult<ApiMessage> {
        if !self.fs.is_file(chart_file) {
            return Err(ApplicationError::ChartFileNotFound(chart_file.to_path_buf()));
        }

        let file_name = chart_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| ApplicationError::ChartFileNotFound(chart_file.to_path_buf()))?;
        let content = self
            .fs
            .read(chart_file)
            .with_path_context("read chart", chart_file)?;

        info!("uploading {} ({} bytes)", file_name, content.len());
        self.api
            .save_chart(&file_name, content)
            .with_api_context(format!("save chart {}", file_name))
    }

    /// Delete the chart called `name`.
    #[instrument(skip(self))]
    pub fn delete(&self, name: &str) -> ApplicationResult<ApiMessage> {
        let name = ChartName::parse(name)?;
        info!("deleting chart {}", name);
        self.api
            .delete_chart(&name)
            .with_api_context(format!("delete chart {}", name))
    }
}
