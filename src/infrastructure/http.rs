//! Blocking HTTP client for the Bazaar API
//!
//! Routes:
//! - `GET    /charts/`        chart listing
//! - `POST   /charts/create`  multipart upload, field `chart`
//! - `DELETE /charts/{name}`  remove a chart

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::domain::{ApiMessage, Chart, ChartName, Endpoint};
use crate::infrastructure::traits::{ApiConnector, BazaarApi};
use crate::infrastructure::{ApiError, ApiResult, InfraError, InfraResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const CHART_FIELD: &str = "chart";

/// `BazaarApi` backed by a blocking reqwest client.
#[derive(Debug)]
pub struct HttpBazaarApi {
    client: Client,
    endpoint: Endpoint,
}

impl HttpBazaarApi {
    pub fn new(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.endpoint.user {
            Some(user) => request.basic_auth(user, self.endpoint.password.as_deref()),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self
            .authorize(request)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| ApiError::Connection {
                target: self.endpoint.target.clone(),
                source,
            })?;

        let status = response.status();
        debug!("response status: {}", status);
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }
        Ok(response)
    }

    /// `/charts/{name}` with the name percent-encoded as a single path segment.
    fn chart_url(&self, name: &ChartName) -> ApiResult<Url> {
        let mut url = Url::parse(&self.endpoint.url("/charts/"))
            .map_err(|e| ApiError::Request(format!("invalid target URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Request("target URL cannot carry a path".into()))?
            .pop_if_empty()
            .push(name.as_str());
        Ok(url)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response.json::<T>().map_err(ApiError::Decode)
    }
}

impl BazaarApi for HttpBazaarApi {
    #[instrument(skip(self))]
    fn list_charts(&self) -> ApiResult<Vec<Chart>> {
        let response = self.send(self.client.get(self.endpoint.url("/charts/")))?;
        Self::decode(response)
    }

    #[instrument(skip(self, content), fields(bytes = content.len()))]
    fn save_chart(&self, file_name: &str, content: Vec<u8>) -> ApiResult<ApiMessage> {
        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let form = Form::new().part(CHART_FIELD, part);

        let response = self.send(
            self.client
                .post(self.endpoint.url("/charts/create"))
                .multipart(form),
        )?;
        Self::decode(response)
    }

    #[instrument(skip(self))]
    fn delete_chart(&self, name: &ChartName) -> ApiResult<ApiMessage> {
        let url = self.chart_url(name)?;
        let response = self.send(self.client.delete(url))?;
        Self::decode(response)
    }
}

/// Connects to Bazaar over HTTP.
#[derive(Debug, Default)]
pub struct HttpConnector;

impl ApiConnector for HttpConnector {
    fn connect(&self, endpoint: &Endpoint) -> InfraResult<Arc<dyn BazaarApi>> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("bazaar/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(InfraError::Client)?;
        debug!("connected HTTP client to {:?}", endpoint);
        Ok(Arc::new(HttpBazaarApi::new(client, endpoint.clone())))
    }
}
