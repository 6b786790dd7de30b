//! Language-code handling between the public API and the provider.
//!
//! # Architecture
//!
//! - `registry`: fixed override table and provider-cased tags, built once
//! - `normalize`: client-facing tag to provider-facing tag
//! - `catalog`: provider language directory reshaped into `LanguageDescriptor`s
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::normalize;
//!
//! assert_eq!(normalize("EN-US"), "en");
//! assert_eq!(normalize("auto"), "");
//! ```

mod catalog;
mod normalize;
mod registry;

pub use catalog::{
    catalog_from_directory, with_auto_detect, LanguageDescriptor, AUTO_DETECT_NAME,
};
pub use normalize::{normalize, normalize_opt, AUTO_DETECT};
pub use registry::CodeRegistry;
