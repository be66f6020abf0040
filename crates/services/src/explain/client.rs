use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::ExplainError;
use super::prompt::InvokeBody;

/// Seam between the explanation service and the hosted model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Invoke `model_id` with `body` and return the decoded JSON reply.
    ///
    /// # Errors
    ///
    /// Returns `ExplainError` when the call fails or the reply is not JSON.
    async fn invoke(&self, model_id: &str, body: &InvokeBody) -> Result<Value, ExplainError>;
}

/// `ModelClient` that POSTs to `{endpoint}/model/{model_id}/invoke`.
#[derive(Clone, Debug)]
pub struct HttpModelClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpModelClient {
    /// # Errors
    ///
    /// Returns `ExplainError::Http` if the HTTP client cannot be built.
    pub fn new(
        endpoint: Url,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ExplainError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Full invocation URL for `model_id`. The id is percent-encoded as one segment.
    ///
    /// # Errors
    ///
    /// Returns `ExplainError::InvalidEndpoint` if the endpoint cannot take a path.
    pub fn invoke_url(&self, model_id: &str) -> Result<Url, ExplainError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| ExplainError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(["model", model_id, "invoke"]);
        Ok(url)
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn invoke(&self, model_id: &str, body: &InvokeBody) -> Result<Value, ExplainError> {
        let url = self.invoke_url(model_id)?;
        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ExplainError::HttpStatus(response.status()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoke_url_appends_encoded_model_segment() {
        let client = HttpModelClient::new(
            Url::parse("https://models.example.com/runtime/").unwrap(),
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        let url = client.invoke_url("vendor/model v1:0").unwrap();
        assert_eq!(
            url.as_str(),
            "https://models.example.com/runtime/model/vendor%2Fmodel%20v1:0/invoke"
        );
    }
}
