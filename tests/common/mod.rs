//! Shared fakes for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bazaar::cli::{default_factories, Output, RootCommand};
use bazaar::config::Settings;
use bazaar::domain::{ApiMessage, Chart, ChartName, Endpoint};
use bazaar::infrastructure::di::ServiceContainer;
use bazaar::infrastructure::traits::{ApiConnector, BazaarApi, RealFileSystem};
use bazaar::infrastructure::{ApiError, ApiResult, InfraResult};

/// In-memory Bazaar API that records every call.
#[derive(Default)]
pub struct FakeApi {
    pub charts: Vec<Chart>,
    /// Respond with this HTTP status instead of succeeding
    pub fail_with: Option<u16>,
    calls: Mutex<Vec<String>>,
    uploads: Mutex<Vec<(String, Vec<u8>)>>,
}

impl FakeApi {
    pub fn with_charts(charts: Vec<Chart>) -> Self {
        Self {
            charts,
            ..Self::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<(String, Vec<u8>)> {
        self.uploads.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with {
            Some(status) => Err(ApiError::Status {
                status,
                body: "internal error".into(),
            }),
            None => Ok(()),
        }
    }
}

impl BazaarApi for FakeApi {
    fn list_charts(&self) -> ApiResult<Vec<Chart>> {
        self.record("list".into())?;
        Ok(self.charts.clone())
    }

    fn save_chart(&self, file_name: &str, content: Vec<u8>) -> ApiResult<ApiMessage> {
        self.uploads
            .lock()
            .unwrap()
            .push((file_name.to_string(), content));
        self.record(format!("save {}", file_name))?;
        Ok(ApiMessage {
            message: format!("{} saved", file_name),
        })
    }

    fn delete_chart(&self, name: &ChartName) -> ApiResult<ApiMessage> {
        self.record(format!("delete {}", name))?;
        Ok(ApiMessage {
            message: format!("{} deleted", name),
        })
    }
}

/// Connector handing out one shared `FakeApi`, remembering each endpoint.
pub struct FakeConnector {
    pub api: Arc<FakeApi>,
    endpoints: Mutex<Vec<Endpoint>>,
}

impl FakeConnector {
    pub fn new(api: FakeApi) -> Self {
        Self {
            api: Arc::new(api),
            endpoints: Mutex::new(Vec::new()),
        }
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.endpoints.lock().unwrap().clone()
    }
}

impl ApiConnector for FakeConnector {
    fn connect(&self, endpoint: &Endpoint) -> InfraResult<Arc<dyn BazaarApi>> {
        self.endpoints.lock().unwrap().push(endpoint.clone());
        let api: Arc<dyn BazaarApi> = self.api.clone();
        Ok(api)
    }
}

pub fn settings_with_target(target: &str) -> Settings {
    Settings {
        target: Some(target.to_string()),
        user: Some("admin".into()),
        password: Some("secret".into()),
    }
}

/// Root command wired with the default chart commands on top of fakes.
pub fn root_with(settings: Settings, connector: Arc<FakeConnector>, out: Output) -> RootCommand {
    let container = Arc::new(ServiceContainer::with_deps(
        settings,
        Arc::new(RealFileSystem),
        connector,
    ));
    RootCommand::new(out, &default_factories(container)).unwrap()
}

pub fn chart(name: &str, version: &str, app_version: &str, plans: &[&str]) -> Chart {
    Chart {
        name: name.into(),
        chart_version: version.into(),
        app_version: app_version.into(),
        plans: plans.iter().map(|p| p.to_string()).collect(),
    }
}
