//! Async translation client for the `LMT_handle_jobs` endpoint

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{
    JobResult, LangPreferences, LanguageCode, RequestEnvelope, RequestParams, ResponseEnvelope,
    RpcOutcome, TranslationJob, JSONRPC_VERSION, METHOD_HANDLE_JOBS,
};

/// Async translation client.
///
/// Cloning is cheap and clones share nothing mutable, so concurrent calls
/// never interact. Each call sends exactly one request and never retries.
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl Translator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;

        // No idle connections are kept, so every call opens its own.
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(0);
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let client = builder
            .build()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env().map_err(|e| TranslationError::ConfigError {
            message: e.to_string(),
        })?;
        Self::new(config)
    }

    /// Active configuration
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a sentence and return the candidate texts, best first
    pub async fn translate(
        &self,
        source: LanguageCode,
        target: LanguageCode,
        sentence: &str,
    ) -> Result<Vec<String>> {
        let result = self.translate_detailed(source, target, sentence).await?;
        extract_candidates(&result)
    }

    /// Translate a sentence and return the whole success payload
    pub async fn translate_detailed(
        &self,
        source: LanguageCode,
        target: LanguageCode,
        sentence: &str,
    ) -> Result<JobResult> {
        let envelope = self.build_request(source, target, sentence);
        self.send_request(&envelope).await
    }

    /// Build the request envelope for one sentence
    pub fn build_request(
        &self,
        source: LanguageCode,
        target: LanguageCode,
        sentence: &str,
    ) -> RequestEnvelope {
        RequestEnvelope {
            jsonrpc: JSONRPC_VERSION,
            method: METHOD_HANDLE_JOBS,
            params: RequestParams {
                jobs: vec![TranslationJob::new(sentence)],
                lang: LangPreferences {
                    user_preferred_langs: self.config.user_preferred_langs.clone(),
                    source_lang_user_selected: source,
                    target_lang: target,
                },
                priority: -1,
                common_job_params: serde_json::Map::new(),
                timestamp: chrono::Utc::now().timestamp_millis(),
            },
            id: self.config.request_id,
        }
    }

    /// Send actual HTTP request
    async fn send_request(&self, envelope: &RequestEnvelope) -> Result<JobResult> {
        let lang = &envelope.params.lang;
        debug!(
            "Sending {} chars {} -> {} to {}",
            envelope.params.jobs[0].raw_en_sentence.chars().count(),
            lang.source_lang_user_selected,
            lang.target_lang,
            self.config.endpoint
        );

        // Raw body, no Content-Type header.
        let body = serde_json::to_vec(envelope)?;

        let response = self
            .client
            .post(&self.config.endpoint)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!("Received {} bytes with status {}", bytes.len(), status);

        match parse_response(&bytes) {
            Err(TranslationError::Parse(_)) if !status.is_success() => {
                Err(TranslationError::HttpStatus {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                })
            }
            other => other,
        }
    }
}

/// Decode a complete response body into the success payload
pub fn parse_response(body: &[u8]) -> Result<JobResult> {
    let envelope: ResponseEnvelope = serde_json::from_slice(body)?;

    match envelope.outcome {
        RpcOutcome::Success(result) => Ok(result),
        RpcOutcome::Failure(err) => {
            warn!("Service returned error {}", err);
            Err(TranslationError::Remote(err))
        }
    }
}

/// Texts of the first translation's beams, in service order
pub fn extract_candidates(result: &JobResult) -> Result<Vec<String>> {
    let translation = result
        .translations
        .first()
        .ok_or(TranslationError::EmptyTranslations)?;

    Ok(translation
        .beams
        .iter()
        .map(|beam| beam.postprocessed_sentence.clone())
        .collect())
}

/// Translate with a default-configured client
pub async fn translate(
    source: LanguageCode,
    target: LanguageCode,
    sentence: &str,
) -> Result<Vec<String>> {
    Translator::new(TranslatorConfig::default())?
        .translate(source, target, sentence)
        .await
}
