//! Microsoft Translator v3 client.
//!
//! Two provider operations are consumed: batch text translation and the
//! translation-scope language directory. Both authenticate with the
//! subscription key and region headers. Replies are shape-checked here; the
//! gateway only ever sees well-formed values or a `GatewayError`.

use crate::config::Config;
use crate::error::{GatewayError, GatewayResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

const API_VERSION: &str = "3.0";
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// One element of the translate request batch.
#[derive(Debug, Serialize)]
struct BatchText<'a> {
    text: &'a str,
}

/// One element of the translate reply batch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReply {
    #[serde(default)]
    pub detected_language: Option<DetectedLanguage>,
    pub translations: Vec<TranslationVariant>,
}

#[derive(Debug, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct TranslationVariant {
    pub text: String,
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Clone)]
pub struct TranslatorClient {
    client: reqwest::Client,
    endpoint: String,
    key: String,
    region: String,
}

impl TranslatorClient {
    /// Build a client whose outbound calls are bounded by the configured timeout.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(
            client,
            &config.translator_endpoint,
            &config.translator_key,
            &config.translator_region,
        ))
    }

    pub fn with_client(client: reqwest::Client, endpoint: &str, key: &str, region: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
            region: region.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Translate `text` as a single-element batch.
    ///
    /// `from` is sent only when present; omitting it asks the provider to
    /// detect the source language. Returns the first batch element, which is
    /// guaranteed to hold at least one translation.
    pub async fn translate(
        &self,
        text: &str,
        from: Option<&str>,
        to: &str,
    ) -> GatewayResult<BatchReply> {
        let url = format!("{}/translate", self.endpoint);

        let mut query = vec![("api-version", API_VERSION), ("to", to)];
        if let Some(from) = from {
            query.push(("from", from));
        }

        debug!(
            "Translating {} chars: from={} to={}",
            text.chars().count(),
            from.unwrap_or("<detect>"),
            to
        );

        let response = self
            .client
            .post(&url)
            .header(KEY_HEADER, &self.key)
            .header(REGION_HEADER, &self.region)
            .query(&query)
            .json(&[BatchText { text }])
            .send()
            .await?;

        let body = read_success_body(response).await?;

        let batch: Vec<BatchReply> = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Malformed(format!("invalid translate reply: {}", e)))?;

        let first = batch
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::Malformed("translate reply was empty".to_string()))?;

        if first.translations.is_empty() {
            return Err(GatewayError::Malformed(
                "translate reply contained no translations".to_string(),
            ));
        }

        Ok(first)
    }

    /// Fetch the provider's translation-scope language directory.
    pub async fn languages(&self) -> GatewayResult<Value> {
        let url = format!("{}/languages", self.endpoint);

        debug!("Fetching language directory from {}", url);

        let response = self
            .client
            .get(&url)
            .header(KEY_HEADER, &self.key)
            .header(REGION_HEADER, &self.region)
            .query(&[("api-version", API_VERSION), ("scope", "translation")])
            .send()
            .await?;

        let body = read_success_body(response).await?;

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Malformed(format!("invalid languages reply: {}", e)))
    }
}

impl std::fmt::Debug for TranslatorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorClient")
            .field("endpoint", &self.endpoint)
            .field("key", &"***")
            .field("region", &self.region)
            .finish()
    }
}

/// Return the body of a 2xx reply, or the provider's error payload.
async fn read_success_body(response: reqwest::Response) -> GatewayResult<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("Translation provider error ({}): {}", status, body);
        let payload = serde_json::from_str(&body).unwrap_or(Value::String(body));
        return Err(GatewayError::Status {
            status: status.as_u16(),
            body: payload,
        });
    }

    Ok(body)
}
