//! Translation gateway: public request contract in, provider call, public
//! response contract out.

use crate::error::{GatewayError, GatewayResult};
use crate::i18n::{
    catalog_from_directory, normalize_opt, with_auto_detect, LanguageDescriptor, AUTO_DETECT,
};
use crate::translator::TranslatorClient;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

pub const TEXT_REQUIRED: &str = "Text is required";
pub const TARGET_REQUIRED: &str = "Target language is required";

/// Body of `POST /api/translate`.
#[derive(Debug, Default, Clone)]
pub struct TranslationRequest {
    pub text: Option<String>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
}

impl TranslationRequest {
    /// Read `{text, sourceLang, targetLang}` from a parsed JSON body.
    ///
    /// Fields that are absent or not strings count as missing, so a wrongly
    /// typed language field never hides a missing `text`. A body that is not
    /// an object yields an empty request.
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            text: field("text"),
            source_lang: field("sourceLang"),
            target_lang: field("targetLang"),
        }
    }
}

/// Successful reply of `POST /api/translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translation: String,
    /// Provider tag of the detected source, empty when the source was explicit
    pub detected_language: String,
    pub changed: bool,
}

/// Provider `from` value for a request, or `None` to let the provider detect.
///
/// A missing source and the explicit `"auto"` sentinel are treated alike.
pub fn source_param(source_lang: Option<&str>) -> Option<String> {
    if source_lang == Some(AUTO_DETECT) {
        return None;
    }
    Some(normalize_opt(source_lang)).filter(|code| !code.is_empty())
}

/// Whether the translation differs from the input once case and surrounding
/// whitespace are ignored. Internal whitespace and punctuation still count.
pub fn is_changed(input: &str, translation: &str) -> bool {
    input.trim().to_lowercase() != translation.trim().to_lowercase()
}

pub async fn translate(
    translator: &TranslatorClient,
    request: &TranslationRequest,
) -> GatewayResult<TranslationResult> {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(GatewayError::Validation(TEXT_REQUIRED)),
    };

    let target = normalize_opt(request.target_lang.as_deref());
    if target.is_empty() {
        return Err(GatewayError::Validation(TARGET_REQUIRED));
    }
    let source = source_param(request.source_lang.as_deref());

    let reply = translator.translate(text, source.as_deref(), &target).await?;

    let translation = reply
        .translations
        .into_iter()
        .next()
        .map(|variant| variant.text)
        .ok_or_else(|| GatewayError::Malformed("no translation variant".to_string()))?;

    let detected_language = reply
        .detected_language
        .map(|detected| detected.language)
        .unwrap_or_default();

    let changed = is_changed(text, &translation);

    info!(
        "Translated to {} (source: {}, changed: {})",
        target,
        source.as_deref().unwrap_or(detected_language.as_str()),
        changed
    );

    Ok(TranslationResult {
        translation,
        detected_language,
        changed,
    })
}

pub async fn list_languages(
    translator: &TranslatorClient,
) -> GatewayResult<Vec<LanguageDescriptor>> {
    let directory = translator.languages().await?;
    let catalog = catalog_from_directory(&directory)?;
    debug!("Provider lists {} translation languages", catalog.len());
    Ok(catalog)
}

/// Languages usable as a source, led by the auto-detect entry.
pub async fn list_source_languages(
    translator: &TranslatorClient,
) -> GatewayResult<Vec<LanguageDescriptor>> {
    list_languages(translator).await.map(with_auto_detect)
}

pub async fn list_target_languages(
    translator: &TranslatorClient,
) -> GatewayResult<Vec<LanguageDescriptor>> {
    list_languages(translator).await
}
