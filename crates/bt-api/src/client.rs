//! Signing client for the panel management API.
//!
//! Every call POSTs a form-encoded body to `base_url + path` with the
//! `request_time`/`request_token` signature fields appended, then decodes
//! the JSON response into the caller's expected shape.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::auth::RequestSignature;
use crate::error::ApiError;
use crate::response::{GenericProjectResponse, NodeProjectResponse};

/// Default request timeout.
///
/// The panel API answers lifecycle calls quickly; anything slower than this
/// is treated as a transport failure rather than waited out.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Base URL of the panel API, e.g. `https://panel.example:8888`.
    pub base_url: String,
    /// Shared API key used for request signing.
    pub api_key: String,
    /// Accept any server TLS certificate.
    ///
    /// On by default: the panel is typically reached over a self-signed or
    /// internal certificate. This is an intentional, documented trade-off.
    /// Deployments with a valid certificate chain should turn it off.
    pub allow_insecure_tls: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl PanelConfig {
    /// Create a configuration with the default TLS and timeout settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            allow_insecure_tls: true,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// A project lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    /// Start the project.
    Start,
    /// Stop the project.
    Stop,
    /// Restart the project.
    Restart,
}

impl ProjectAction {
    /// Wire value of the action, as the panel expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for ProjectAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signing HTTP client for the panel API.
///
/// Holds the configuration and a prebuilt HTTP transport. Each operation is
/// independent, synchronous from the caller's point of view, and one-shot:
/// no retries, no shared state between calls.
pub struct PanelClient {
    config: PanelConfig,
    http: reqwest::Client,
}

impl fmt::Debug for PanelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the API key in debug output.
        f.debug_struct("PanelClient")
            .field("base_url", &self.config.base_url)
            .field("allow_insecure_tls", &self.config.allow_insecure_tls)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

impl PanelClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is not `http://` or
    /// `https://`, or if the HTTP transport cannot be constructed.
    pub fn new(config: PanelConfig) -> Result<Self, ApiError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ApiError::Config(format!(
                "invalid panel URL: {}, must start with http:// or https://",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.allow_insecure_tls)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// POST a signed form to `path` and decode the JSON response.
    ///
    /// Appends `request_time` and `request_token` (derived from the same
    /// timestamp) to the caller-supplied fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on connection, TLS, or timeout
    /// failure and [`ApiError::Decode`] if the body is not valid JSON for
    /// the expected shape. Failures are not retried.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<(&'static str, String)>,
    ) -> Result<T, ApiError> {
        let mut form = fields;
        let sig = RequestSignature::now(&self.config.api_key);
        form.push(("request_time", sig.request_time.to_string()));
        form.push(("request_token", sig.request_token));

        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, "dispatching panel request");

        let response = self.http.post(&url).form(&form).send().await?;
        let body = response.text().await?;
        trace!(body = %body, "panel response");

        Ok(serde_json::from_str(&body)?)
    }

    /// Start a generic project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn start_go_project(&self, name: &str) -> Result<GenericProjectResponse, ApiError> {
        self.invoke("/project/go/start_project", vec![("project_name", name.into())])
            .await
    }

    /// Stop a generic project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn stop_go_project(&self, name: &str) -> Result<GenericProjectResponse, ApiError> {
        self.invoke("/project/go/stop_project", vec![("project_name", name.into())])
            .await
    }

    /// Restart a generic project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn restart_go_project(&self, name: &str) -> Result<GenericProjectResponse, ApiError> {
        self.invoke("/project/go/restart_project", vec![("project_name", name.into())])
            .await
    }

    /// Start a Node.js project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn start_node_project(&self, name: &str) -> Result<NodeProjectResponse, ApiError> {
        self.set_node_project_status(name, ProjectAction::Start).await
    }

    /// Stop a Node.js project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn stop_node_project(&self, name: &str) -> Result<NodeProjectResponse, ApiError> {
        self.set_node_project_status(name, ProjectAction::Stop).await
    }

    /// Restart a Node.js project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn restart_node_project(&self, name: &str) -> Result<NodeProjectResponse, ApiError> {
        self.set_node_project_status(name, ProjectAction::Restart).await
    }

    /// Node projects share one status-control endpoint; the action travels
    /// in the `status` field.
    async fn set_node_project_status(
        &self,
        name: &str,
        action: ProjectAction,
    ) -> Result<NodeProjectResponse, ApiError> {
        self.invoke(
            "/mod/nodejs/com/set_project_status",
            vec![
                ("project_name", name.into()),
                ("project_type", "general".into()),
                ("status", action.as_str().into()),
            ],
        )
        .await
    }
}
