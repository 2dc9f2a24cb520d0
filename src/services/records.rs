//! Record navigation against the record server

use std::time::Duration;

use crate::{
    config::RecordsConfig,
    error::{AppError, AppResult},
    models::{NavigationMode, RecordFragment},
};

#[derive(Clone)]
pub struct RecordNavigator {
    client: reqwest::Client,
    base_url: String,
}

impl RecordNavigator {
    pub fn new(config: &RecordsConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Move to the next record (or the next one with errors)
    pub async fn next(&self, mode: NavigationMode) -> AppResult<RecordFragment> {
        tracing::debug!("Record navigation: {}", mode.endpoint());

        let html = self.post_form(mode.endpoint(), &[("action", "next")]).await?;
        let fragment = RecordFragment::from_html(html);

        if fragment.is_end_of_file() {
            tracing::info!("Record server reached end of file");
        }
        Ok(fragment)
    }

    /// Validate the edited record; returns the rendered validation fragment
    pub async fn validate(&self, locked_marc: &str, editable_marc: &str) -> AppResult<String> {
        self.post_form(
            "validate",
            &[("locked_marc", locked_marc), ("editable_marc", editable_marc)],
        )
        .await
    }

    /// Current 1-based position in the input file
    pub async fn position(&self) -> AppResult<u32> {
        let response = self
            .client
            .get(self.url("record_number"))
            .send()
            .await
            .map_err(|e| AppError::RecordServer(format!("Request failed: {}", e)))?;

        let body = Self::read_body(response).await?;
        body.trim()
            .parse()
            .map_err(|_| AppError::RecordServer(format!("Unexpected record number {:?}", body.trim())))
    }

    async fn post_form(&self, endpoint: &str, form: &[(&str, &str)]) -> AppResult<String> {
        let response = self
            .client
            .post(self.url(endpoint))
            .form(form)
            .send()
            .await
            .map_err(|e| AppError::RecordServer(format!("{} failed: {}", endpoint, e)))?;

        Self::read_body(response).await
    }

    async fn read_body(response: reqwest::Response) -> AppResult<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RecordServer(format!(
                "{} answered {}",
                response.url().path(),
                status
            )));
        }
        response
            .text()
            .await
            .map_err(|e| AppError::RecordServer(format!("Failed to read response: {}", e)))
    }
}
