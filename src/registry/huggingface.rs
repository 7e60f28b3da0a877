//! Hugging Face Hub registry adapter
//!
//! Queries the Hub model API for license and card metadata. Only the fields
//! the merge consumes are parsed; everything else the API returns is ignored.

use crate::error::CardError;
use crate::registry::{LookupOutcome, RegistryLookup};
use crate::types::{MetadataRecord, UNKNOWN};
use async_trait::async_trait;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://huggingface.co";

/// Registry client backed by the Hugging Face Hub API
pub struct HubRegistry {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HubRegistry {
    /// Create a client. The token is passed through opaquely as a bearer
    /// credential; an empty token means anonymous access.
    pub fn new(token: Option<String>) -> Result<Self, CardError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| CardError::Lookup(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Point the client at a different Hub endpoint (mirrors, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl RegistryLookup for HubRegistry {
    async fn lookup(
        &self,
        author: &str,
        model_name: &str,
    ) -> Result<LookupOutcome, CardError> {
        let url = format!("{}/api/models/{}/{}", self.base_url, author, model_name);
        tracing::debug!("Registry lookup: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("User-Agent", concat!("cardrs/", env!("CARGO_PKG_VERSION")));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CardError::Lookup(format!("Request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("No registry entry for {}/{}", author, model_name);
            return Ok(LookupOutcome::NotFound);
        }
        if !response.status().is_success() {
            return Err(CardError::Lookup(format!(
                "API error: {}",
                response.status()
            )));
        }

        let info: HubModelInfo = response
            .json()
            .await
            .map_err(|e| CardError::Lookup(format!("Failed to parse response: {e}")))?;

        Ok(LookupOutcome::Found(record_from_info(
            author, model_name, info,
        )))
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct HubModelInfo {
    #[serde(default)]
    license: Option<String>,
    #[serde(rename = "cardData", default)]
    card_data: Option<HubCardData>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct HubCardData {
    #[serde(default)]
    model_description: Option<Value>,
    #[serde(default)]
    model_parameters: Option<Value>,
    #[serde(default)]
    model_architecture: Option<Value>,
}

/// Map a Hub API response onto a metadata record. Fields the Hub does not
/// report, the artifact's binary format among them, stay at the sentinel so
/// the local value wins the merge.
fn record_from_info(author: &str, model_name: &str, info: HubModelInfo) -> MetadataRecord {
    let card = info.card_data.unwrap_or_default();
    let mut record = MetadataRecord::from_identity(author, model_name);
    record.license = info
        .license
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());
    record.description = value_to_field(card.model_description);
    record.parameters = value_to_field(card.model_parameters);
    record.architecture = value_to_field(card.model_architecture);
    record
}

/// Card data values are free-form YAML, so numbers and strings both occur
fn value_to_field(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => UNKNOWN.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_full_info() {
        let info: HubModelInfo = serde_json::from_str(
            r#"{
                "license": "mit",
                "cardData": {
                    "model_description": "A tiny chat model",
                    "model_parameters": "1.1B",
                    "model_architecture": "llama"
                }
            }"#,
        )
        .unwrap();

        let record = record_from_info("bob", "tinyllama", info);
        assert_eq!(record.author, "bob");
        assert_eq!(record.model_name, "tinyllama");
        assert_eq!(record.license, "mit");
        assert_eq!(record.description, "A tiny chat model");
        assert_eq!(record.parameters, "1.1B");
        assert_eq!(record.architecture, "llama");
        // The Hub does not report the binary format
        assert_eq!(record.format, UNKNOWN);
    }

    #[test]
    fn test_record_from_sparse_info() {
        let info: HubModelInfo = serde_json::from_str(r#"{"license": "apache-2.0"}"#).unwrap();
        let record = record_from_info("bob", "tinyllama", info);
        assert_eq!(record.license, "apache-2.0");
        assert_eq!(record.description, UNKNOWN);
        assert_eq!(record.parameters, UNKNOWN);
        assert_eq!(record.architecture, UNKNOWN);
    }

    #[test]
    fn test_numeric_parameters_stringified() {
        let info: HubModelInfo =
            serde_json::from_str(r#"{"cardData": {"model_parameters": 1100000000}}"#).unwrap();
        let record = record_from_info("bob", "tinyllama", info);
        assert_eq!(record.parameters, "1100000000");
    }

    #[test]
    fn test_unknown_card_keys_ignored() {
        let info: HubModelInfo = serde_json::from_str(
            r#"{"cardData": {"language": "en", "tags": ["chat"]}, "downloads": 12}"#,
        )
        .unwrap();
        let record = record_from_info("bob", "tinyllama", info);
        assert_eq!(record.description, UNKNOWN);
    }
}
