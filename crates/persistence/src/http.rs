// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::de::DeserializeOwned;
use setup_sheet::{
    NewTemplate, NewWeeklySetup, PersistenceError, SetupSheetBackend, TemplatePatch,
    WeeklySetupPatch,
};
use setup_sheet_domain::{Employee, Template, WeeklySetup};
use std::time::Duration;
use tracing::debug;

/// Client-side timeout applied to every persistence call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Raw error bodies longer than this are replaced with a generic message.
const MAX_RAW_ERROR_LEN: usize = 256;

/// Configuration for [`HttpBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Service origin, e.g. `https://ops.example.com`.
    pub base_url: String,
    /// Bearer token sourced from the caller's session storage.
    pub bearer_token: String,
    /// Per-request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Duration,
}

impl HttpBackendConfig {
    /// Creates a configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The reqwest-backed implementation of the persistence seam.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl HttpBackend {
    /// Creates a backend from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Network` if the underlying client
    /// cannot be constructed.
    pub fn new(config: HttpBackendConfig) -> Result<Self, PersistenceError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| PersistenceError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            bearer_token: config.bearer_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request with the Bearer header attached and translates
    /// any failure into the persistence taxonomy.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<reqwest::Response, PersistenceError> {
        debug!(request = %context, "Calling setup-sheet service");
        let response: reqwest::Response = request
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: String = response.text().await.unwrap_or_default();
        Err(translate_status(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PersistenceError> {
        response
            .json::<T>()
            .await
            .map_err(|err| PersistenceError::InvalidResponse(err.to_string()))
    }
}

impl SetupSheetBackend for HttpBackend {
    async fn list_templates(&self) -> Result<Vec<Template>, PersistenceError> {
        let response = self
            .send(
                self.client.get(self.url("/api/setup-sheet-templates")),
                "GET /api/setup-sheet-templates",
            )
            .await?;
        Self::decode(response).await
    }

    async fn create_template(&self, request: &NewTemplate) -> Result<Template, PersistenceError> {
        let response = self
            .send(
                self.client
                    .post(self.url("/api/setup-sheet-templates"))
                    .json(request),
                "POST /api/setup-sheet-templates",
            )
            .await?;
        Self::decode(response).await
    }

    async fn update_template(
        &self,
        template_id: &str,
        patch: &TemplatePatch,
    ) -> Result<Template, PersistenceError> {
        let response = self
            .send(
                self.client
                    .put(self.url(&format!("/api/setup-sheet-templates/{template_id}")))
                    .json(patch),
                "PUT /api/setup-sheet-templates/:id",
            )
            .await?;
        Self::decode(response).await
    }

    async fn delete_template(&self, template_id: &str) -> Result<(), PersistenceError> {
        self.send(
            self.client
                .delete(self.url(&format!("/api/setup-sheet-templates/{template_id}"))),
            "DELETE /api/setup-sheet-templates/:id",
        )
        .await?;
        Ok(())
    }

    async fn list_weekly_setups(&self) -> Result<Vec<WeeklySetup>, PersistenceError> {
        let response = self
            .send(
                self.client.get(self.url("/api/weekly-setups")),
                "GET /api/weekly-setups",
            )
            .await?;
        Self::decode(response).await
    }

    async fn create_weekly_setup(
        &self,
        request: &NewWeeklySetup,
    ) -> Result<WeeklySetup, PersistenceError> {
        let response = self
            .send(
                self.client.post(self.url("/api/weekly-setups")).json(request),
                "POST /api/weekly-setups",
            )
            .await?;
        Self::decode(response).await
    }

    async fn update_weekly_setup(
        &self,
        setup_id: &str,
        patch: &WeeklySetupPatch,
    ) -> Result<WeeklySetup, PersistenceError> {
        let response = self
            .send(
                self.client
                    .put(self.url(&format!("/api/weekly-setups/{setup_id}")))
                    .json(patch),
                "PUT /api/weekly-setups/:id",
            )
            .await?;
        Self::decode(response).await
    }

    async fn delete_weekly_setup(&self, setup_id: &str) -> Result<(), PersistenceError> {
        self.send(
            self.client
                .delete(self.url(&format!("/api/weekly-setups/{setup_id}"))),
            "DELETE /api/weekly-setups/:id",
        )
        .await?;
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, PersistenceError> {
        let response = self
            .send(
                self.client.get(self.url("/api/employees")),
                "GET /api/employees",
            )
            .await?;
        Self::decode(response).await
    }
}

fn map_transport_error(err: reqwest::Error) -> PersistenceError {
    if err.is_timeout() {
        PersistenceError::Timeout
    } else {
        PersistenceError::Network(err.to_string())
    }
}

/// Extracts the server's own message from a JSON error body, trying the
/// `message` field first and `error` second.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

fn translate_status(status: u16, body: &str) -> PersistenceError {
    if status == reqwest::StatusCode::PAYLOAD_TOO_LARGE.as_u16() {
        return PersistenceError::PayloadTooLarge;
    }
    let message: String = server_message(body).unwrap_or_else(|| {
        let raw: &str = body.trim();
        if raw.is_empty() || raw.len() > MAX_RAW_ERROR_LEN {
            String::from("The setup-sheet service request failed")
        } else {
            raw.to_owned()
        }
    });
    PersistenceError::Api { status, message }
}
