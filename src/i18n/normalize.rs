//! Code normalizer: client-facing language tags to provider-facing tags.

use crate::i18n::CodeRegistry;

/// Client sentinel requesting provider-side source-language detection.
pub const AUTO_DETECT: &str = "auto";

/// Map a client-facing language tag to the tag the provider expects.
///
/// - `""` and the sentinel `"auto"` (case-sensitive) map to `""`, which
///   tells the provider to detect the language.
/// - Exact override keys (e.g. `"EN-US"`, `"ZH"`) map to their table value,
///   case preserved.
/// - Provider tags with canonical mixed case (e.g. `"zh-Hant"`) pass through.
/// - Anything else is lowercased.
///
/// Total and pure; no other input yields an empty result. Idempotent on its
/// own outputs except where the first pass lands on `"auto"` (from `"AUTO"`,
/// `"Auto"`, ...), which a second pass reads as the sentinel.
pub fn normalize(code: &str) -> String {
    if code.is_empty() || code == AUTO_DETECT {
        return String::new();
    }

    let registry = CodeRegistry::get();
    if let Some(provider) = registry.override_for(code) {
        return provider.to_string();
    }
    if registry.is_canonical_mixed_case(code) {
        return code.to_string();
    }

    code.to_lowercase()
}

/// Normalize an optional tag; a missing tag behaves like `""`.
pub fn normalize_opt(code: Option<&str>) -> String {
    normalize(code.unwrap_or_default())
}
