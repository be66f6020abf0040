use std::sync::Arc;

use serde::Serialize;

use crate::error::ExplainError;
use super::client::{HttpModelClient, ModelClient};
use super::config::ExplainConfig;
use super::html::markdown_to_html;
use super::prompt::{InvokeBody, build_prompt};
use super::reply::extract_text;
use super::request::ExplainRequest;

/// Rendered explanation returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    #[serde(rename = "explanation")]
    pub html: String,
    pub model: String,
}

/// Turns a question into an expert explanation via the hosted model.
#[derive(Clone)]
pub struct ExplainService {
    client: Arc<dyn ModelClient>,
    config: ExplainConfig,
}

impl ExplainService {
    #[must_use]
    pub fn new(client: Arc<dyn ModelClient>, config: ExplainConfig) -> Self {
        Self { client, config }
    }

    /// Service backed by the HTTP model client described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ExplainError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: ExplainConfig) -> Result<Self, ExplainError> {
        let client = HttpModelClient::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.request_timeout,
        )?;
        Ok(Self::new(Arc::new(client), config))
    }

    #[must_use]
    pub fn config(&self) -> &ExplainConfig {
        &self.config
    }

    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    /// Generate an HTML explanation for `request`.
    ///
    /// # Errors
    ///
    /// Returns `ExplainError` when the model call fails or its reply cannot be read.
    pub async fn explain(&self, request: &ExplainRequest) -> Result<Explanation, ExplainError> {
        let prompt = build_prompt(request, &self.config.domain);
        let body = InvokeBody::user_prompt(prompt, self.config.inference);
        let model_id = self.model_id();

        tracing::info!(model = model_id, "invoking model");
        let reply = self.client.invoke(model_id, &body).await?;
        let text = extract_text(&reply)?;

        Ok(Explanation {
            html: markdown_to_html(text),
            model: model_id.to_owned(),
        })
    }
}
