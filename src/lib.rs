//! DeepL Translator - minimal async client for the DeepL JSON-RPC endpoint
//!
//! Submits one sentence per call and returns the candidate translations the
//! service produced, best first.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::{translate, Translator},
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    models::{Beam, JobResult, LanguageCode, RemoteError, ResponseEnvelope, Translation},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
