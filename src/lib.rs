//! Translation proxy: forwards text-translation and language-listing requests
//! to Microsoft Translator, normalizing language codes on the way out and
//! reshaping replies on the way back.

pub mod config;
pub mod error;
pub mod gateway;
pub mod i18n;
pub mod server;
pub mod translator;
