//! DashScope image-edit client.
//!
//! Sends one image plus an instruction to the `qwen-image-edit` model and
//! returns the image reference from the answer. There is no retry: every
//! failure is logged and handed straight back to the caller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use imageshelf_common::{Error, Result};
use reqwest::Client;
use tracing::{debug, error};

use super::data_uri;
use super::notify::{Notifier, TracingNotifier};
use super::protocol::{GenerationRequest, GenerationResponse, GENERATION_PATH};
use super::ImageEditor;
use crate::config::{EditConfig, Environment};

/// Shown to the user when a deployed build tries to edit.
const RESTRICTED_NOTICE: &str =
    "Cross-origin restrictions block image editing in deployed builds. Clone the project and run it locally.";

/// Client for the DashScope multimodal generation endpoint.
pub struct EditClient {
    client: Client,
    base_url: String,
    model: String,
    environment: Environment,
    notifier: Arc<dyn Notifier>,
}

impl EditClient {
    /// Build a client from configuration.
    pub fn new(config: &EditConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            environment: config.environment,
            notifier: Arc::new(TracingNotifier),
        })
    }

    /// Replace the notifier used for user-facing messages.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATION_PATH)
    }

    fn ensure_allowed(&self) -> Result<()> {
        if self.environment.is_production() {
            self.notifier.notify(RESTRICTED_NOTICE);
            return Err(Error::EnvironmentRestricted(
                "remote edits are blocked in production; run a local development build".into(),
            ));
        }
        Ok(())
    }

    async fn send_edit(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
        negative_prompt: &str,
        api_key: &str,
    ) -> Result<String> {
        self.ensure_allowed()?;

        let image_uri = data_uri::encode(mime_type, image);
        let request = GenerationRequest::edit(&self.model, &image_uri, prompt, negative_prompt);

        let url = self.endpoint();
        debug!(url = %url, model = %self.model, image_bytes = image.len(), "Sending image edit request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::read(format!("Image edit request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(status.as_u16(), parse_error_body(body)));
        }

        let body: GenerationResponse = response
            .json()
            .await
            .map_err(|e| Error::decode(format!("Failed to parse generation response: {}", e)))?;

        body.first_image()
            .map(str::to_string)
            .ok_or(Error::NoImageInResponse)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::read(format!("Failed to download {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(status.as_u16(), parse_error_body(body)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::read(format!("Failed to read image bytes from {}: {}", url, e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageEditor for EditClient {
    async fn request_edit(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
        negative_prompt: &str,
        api_key: &str,
    ) -> Result<String> {
        self.send_edit(image, mime_type, prompt, negative_prompt, api_key)
            .await
            .inspect_err(|e| error!(error = %e, "Image edit failed"))
    }

    async fn decode(&self, encoded: &str) -> Result<Vec<u8>> {
        let encoded = encoded.trim();
        let result = if data_uri::is_data_uri(encoded) {
            data_uri::decode(encoded).map(|uri| uri.data)
        } else if encoded.starts_with("http://") || encoded.starts_with("https://") {
            self.fetch(encoded).await
        } else {
            STANDARD
                .decode(encoded)
                .map_err(|e| Error::decode(format!("Unsupported image reference: {}", e)))
        };

        result.inspect_err(|e| error!(error = %e, "Failed to decode edited image"))
    }
}

/// Error bodies are JSON when the service produced them; proxies and load
/// balancers may answer with plain text instead.
fn parse_error_body(body: String) -> serde_json::Value {
    serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
}
