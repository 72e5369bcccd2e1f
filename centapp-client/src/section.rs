//! Request dispatch shared by every section handle.

use centapp_types::Params;
use reqwest::Method;
use tracing::{debug, instrument, warn};

use crate::{ApiResponse, CentApp, ClientError};

/// A group of endpoints under one path segment of the base URL.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Section<'a> {
    app: &'a CentApp,
    path: &'static str,
}

impl<'a> Section<'a> {
    pub(crate) fn new(app: &'a CentApp, path: &'static str) -> Self {
        Self { app, path }
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}/{}/{}", self.app.base_url(), self.path, endpoint)
    }

    pub(crate) async fn get(
        &self,
        endpoint: &str,
        params: &Params,
    ) -> Result<ApiResponse, ClientError> {
        self.request(Method::GET, endpoint, params).await
    }

    pub(crate) async fn post(
        &self,
        endpoint: &str,
        params: &Params,
    ) -> Result<ApiResponse, ClientError> {
        self.request(Method::POST, endpoint, params).await
    }

    /// Sends `params` as both the query string and the form body.
    ///
    /// The remote API reads either channel depending on the endpoint, so both
    /// are populated regardless of method. Empty `params` send no body and
    /// no `Content-Type`.
    #[instrument(skip(self, params), fields(section = self.path))]
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url(endpoint);
        debug!("{} {} with {} params", method, url, params.len());

        let mut req = self
            .app
            .http()
            .request(method.clone(), &url)
            .bearer_auth(self.app.token())
            .query(params);
        if !params.is_empty() {
            req = req.form(params);
        }
        if let Some(timeout) = self.app.timeout() {
            req = req.timeout(timeout);
        }
        let resp = req.send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("{} {} failed with HTTP {}", method, url, status);
        }

        let text = resp.text().await?;
        let body = serde_json::from_str(&text).map_err(|source| ClientError::Decode {
            status: status.as_u16(),
            source,
        })?;

        if status.is_success() {
            Ok(ApiResponse::Success(body))
        } else {
            Ok(ApiResponse::Failure {
                status: status.as_u16(),
                body,
            })
        }
    }
}
