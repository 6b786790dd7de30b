//! Language catalog: the provider's translation directory reshaped for clients.

use crate::error::{GatewayError, GatewayResult};
use crate::i18n::AUTO_DETECT;
use serde::Serialize;
use serde_json::Value;

/// Display name of the synthetic auto-detect entry.
pub const AUTO_DETECT_NAME: &str = "Detect language";

/// A supported language as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    /// Provider-facing language tag
    #[serde(rename = "language")]
    pub code: String,

    /// Human-readable language name
    #[serde(rename = "name")]
    pub display_name: String,
}

impl LanguageDescriptor {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }

    /// The synthetic entry that lets clients request source detection.
    pub fn auto_detect() -> Self {
        Self::new(AUTO_DETECT, AUTO_DETECT_NAME)
    }
}

/// Project a provider directory reply onto an ordered catalog.
///
/// Expects `{"translation": {"<code>": {"name": "...", ...}, ...}}`. Entry
/// order follows the provider's enumeration order.
///
/// # Arguments
/// * `directory` - The parsed reply of the provider's languages operation
///
/// # Returns
/// * `Ok(Vec<LanguageDescriptor>)` with one descriptor per directory entry
/// * `Err(GatewayError::Malformed)` if `translation` is missing or not an
///   object, or any entry lacks a string `name`
pub fn catalog_from_directory(directory: &Value) -> GatewayResult<Vec<LanguageDescriptor>> {
    let entries = directory
        .get("translation")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            GatewayError::Malformed("missing 'translation' language directory".to_string())
        })?;

    entries
        .iter()
        .map(|(code, entry)| {
            entry
                .get("name")
                .and_then(Value::as_str)
                .map(|name| LanguageDescriptor::new(code.as_str(), name))
                .ok_or_else(|| {
                    GatewayError::Malformed(format!("language '{}' has no display name", code))
                })
        })
        .collect()
}

/// Prepend the auto-detect entry to a catalog.
///
/// # Returns
/// The catalog with `{"language": "auto", "name": "Detect language"}` first,
/// one element longer than the input.
pub fn with_auto_detect(catalog: Vec<LanguageDescriptor>) -> Vec<LanguageDescriptor> {
    std::iter::once(LanguageDescriptor::auto_detect())
        .chain(catalog)
        .collect()
}
