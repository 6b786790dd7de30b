//! Code registry: the fixed tables behind language-code normalization.
//!
//! Built once on first access with `OnceLock` and immutable thereafter, so
//! request handlers can read it concurrently without coordination.

use std::collections::HashMap;
use std::sync::OnceLock;

/// A client-facing tag that maps to a specific provider tag.
#[derive(Debug, Clone, Copy)]
struct CodeOverride {
    /// Exact client-facing tag (case-sensitive, e.g. "EN-US")
    client: &'static str,

    /// Provider-facing tag returned verbatim (e.g. "en", "zh-Hans")
    provider: &'static str,
}

/// Global code registry singleton.
///
/// Holds the override table and the provider's mixed-case tags. It's
/// initialized once on first access and remains immutable thereafter.
pub struct CodeRegistry {
    overrides: HashMap<&'static str, &'static str>,
    canonical_mixed_case: Vec<&'static str>,
}

static REGISTRY: OnceLock<CodeRegistry> = OnceLock::new();

impl CodeRegistry {
    /// Get the global code registry instance.
    ///
    /// This method initializes the registry on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn get() -> &'static CodeRegistry {
        REGISTRY.get_or_init(|| CodeRegistry {
            overrides: default_overrides()
                .into_iter()
                .map(|o| (o.client, o.provider))
                .collect(),
            canonical_mixed_case: default_mixed_case_tags(),
        })
    }

    /// Look up the provider tag for an exact client-facing tag.
    ///
    /// # Arguments
    /// * `client` - The client-facing tag, matched case-sensitively (e.g. "EN-US")
    ///
    /// # Returns
    /// * `Some(&str)` with the provider tag, in the provider's casing
    /// * `None` if the tag is not an override key
    pub fn override_for(&self, client: &str) -> Option<&'static str> {
        self.overrides.get(client).copied()
    }

    /// Check if a tag is a provider tag whose canonical form is not lowercase.
    ///
    /// These pass through normalization untouched so the provider's own
    /// directory codes stay stable when fed back in.
    ///
    /// # Arguments
    /// * `tag` - The tag to check, matched case-sensitively (e.g. "zh-Hant")
    ///
    /// # Returns
    /// `true` if `tag` is listed in the provider's exact casing.
    pub fn is_canonical_mixed_case(&self, tag: &str) -> bool {
        self.canonical_mixed_case.contains(&tag)
    }
}

/// Client tags used by editor and config conventions (regional variants and
/// uppercase codes) that the provider spells differently.
fn default_overrides() -> Vec<CodeOverride> {
    vec![
        CodeOverride { client: "EN-US", provider: "en" },
        CodeOverride { client: "EN-GB", provider: "en" },
        CodeOverride { client: "PT-BR", provider: "pt" },
        CodeOverride { client: "PT-PT", provider: "pt" },
        CodeOverride { client: "ZH", provider: "zh-Hans" },
        CodeOverride { client: "ZH-HANS", provider: "zh-Hans" },
        CodeOverride { client: "ZH-HANT", provider: "zh-Hant" },
    ]
}

/// Script-qualified provider tags, in the provider's own casing.
fn default_mixed_case_tags() -> Vec<&'static str> {
    vec![
        "zh-Hans", "zh-Hant", "sr-Cyrl", "sr-Latn", "mn-Cyrl", "mn-Mong", "iu-Latn",
        "tlh-Latn", "tlh-Piqd",
    ]
}
