//! Wire data models for the `LMT_handle_jobs` JSON-RPC exchange

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// JSON-RPC protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Remote method that runs translation jobs
pub const METHOD_HANDLE_JOBS: &str = "LMT_handle_jobs";

/// Beams requested per job
pub const PREFERRED_NUM_BEAMS: u32 = 4;

/// Quality tier requested per job
pub const QUALITY_FAST: &str = "fast";

/// Language selector accepted by the service.
///
/// The set is closed at the type level only. Whether the service accepts a
/// given pair is decided remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LanguageCode {
    /// Let the service detect the source language
    #[serde(rename = "auto")]
    Auto,
    /// Japanese
    Ja,
    /// English
    En,
    /// German
    De,
    /// French
    Fr,
    /// Spanish
    Es,
    /// Portuguese
    Pt,
    /// Italian
    It,
    /// Dutch
    Nl,
    /// Polish
    Pl,
    /// Russian
    Ru,
    /// Chinese
    Zh,
}

impl LanguageCode {
    /// Every supported selector, `auto` first
    pub const ALL: [LanguageCode; 12] = [
        LanguageCode::Auto,
        LanguageCode::Ja,
        LanguageCode::En,
        LanguageCode::De,
        LanguageCode::Fr,
        LanguageCode::Es,
        LanguageCode::Pt,
        LanguageCode::It,
        LanguageCode::Nl,
        LanguageCode::Pl,
        LanguageCode::Ru,
        LanguageCode::Zh,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Auto => "auto",
            LanguageCode::Ja => "JA",
            LanguageCode::En => "EN",
            LanguageCode::De => "DE",
            LanguageCode::Fr => "FR",
            LanguageCode::Es => "ES",
            LanguageCode::Pt => "PT",
            LanguageCode::It => "IT",
            LanguageCode::Nl => "NL",
            LanguageCode::Pl => "PL",
            LanguageCode::Ru => "RU",
            LanguageCode::Zh => "ZH",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unsupported language code: {}", s))
    }
}

/// One sentence to translate
#[derive(Debug, Clone, Serialize)]
pub struct TranslationJob {
    /// Always `"default"`
    pub kind: &'static str,
    /// Sentence as given by the caller, untouched
    pub raw_en_sentence: String,
    /// Preceding context, always empty
    pub raw_en_context_before: Vec<String>,
    /// Following context, always empty
    pub raw_en_context_after: Vec<String>,
    /// Number of beams to ask for
    pub preferred_num_beams: u32,
    /// Quality tier
    pub quality: &'static str,
}

impl TranslationJob {
    /// Job for one sentence with the fixed beam count and tier
    pub fn new(sentence: impl Into<String>) -> Self {
        Self {
            kind: "default",
            raw_en_sentence: sentence.into(),
            raw_en_context_before: Vec::new(),
            raw_en_context_after: Vec::new(),
            preferred_num_beams: PREFERRED_NUM_BEAMS,
            quality: QUALITY_FAST,
        }
    }
}

/// Language preferences attached to a request
#[derive(Debug, Clone, Serialize)]
pub struct LangPreferences {
    /// Preference hint, `["EN", "JA"]` unless configured
    pub user_preferred_langs: Vec<LanguageCode>,
    /// Source selector, possibly `auto`
    pub source_lang_user_selected: LanguageCode,
    /// Output language
    pub target_lang: LanguageCode,
}

/// `params` member of the request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RequestParams {
    /// Exactly one job per request
    pub jobs: Vec<TranslationJob>,
    /// Language selection
    pub lang: LangPreferences,
    /// Scheduling hint, always -1
    pub priority: i32,
    /// Always empty
    #[serde(rename = "commonJobParams")]
    pub common_job_params: serde_json::Map<String, serde_json::Value>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Outgoing JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize)]
pub struct RequestEnvelope {
    /// Protocol version, `"2.0"`
    pub jsonrpc: &'static str,
    /// Remote method name
    pub method: &'static str,
    /// Method parameters
    pub params: RequestParams,
    /// Request identifier
    pub id: u64,
}

/// One candidate output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Translated text
    pub postprocessed_sentence: String,
    /// Symbol count reported by the service
    #[serde(default)]
    pub num_symbols: u64,
    /// Opaque ranking score
    #[serde(default)]
    pub score: f64,
    /// Opaque log-probability total
    #[serde(rename = "totalLogProb", default)]
    pub total_log_prob: f64,
}

/// Candidate beams for one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    /// Candidates, best first
    pub beams: Vec<Beam>,
    /// Quality label reported by the service
    #[serde(default)]
    pub quality: String,
}

/// Success payload (`result` member)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    /// One entry per job
    pub translations: Vec<Translation>,
    /// Target language echoed back
    #[serde(default)]
    pub target_lang: String,
    /// Detected or selected source language
    #[serde(default)]
    pub source_lang: String,
    /// Whether detection was confident
    #[serde(default)]
    pub source_lang_is_confident: bool,
    /// Service timestamp
    #[serde(default)]
    pub timestamp: i64,
    /// Service date string
    #[serde(default)]
    pub date: String,
}

/// Failure payload (`error` member)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    /// Numeric error code
    pub code: i64,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for RemoteError {}

/// Exactly one of success or failure
#[derive(Debug, Clone, PartialEq)]
pub enum RpcOutcome {
    /// `result` member
    Success(JobResult),
    /// `error` member
    Failure(RemoteError),
}

/// Incoming JSON-RPC reply
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawResponse")]
pub struct ResponseEnvelope {
    /// Protocol version as sent by the service
    pub jsonrpc: String,
    /// Echoed identifier; JSON-RPC allows numbers, strings or null
    pub id: Option<serde_json::Value>,
    /// Success or failure payload
    pub outcome: RpcOutcome,
}

/// Field-presence view of a reply, before the union is checked
#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    jsonrpc: String,
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    result: Option<JobResult>,
    #[serde(default)]
    error: Option<RemoteError>,
}

impl TryFrom<RawResponse> for ResponseEnvelope {
    type Error = String;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        let outcome = match (raw.result, raw.error) {
            (Some(result), None) => RpcOutcome::Success(result),
            (None, Some(error)) => RpcOutcome::Failure(error),
            (Some(_), Some(_)) => {
                return Err("response carries both `result` and `error`".to_string())
            }
            (None, None) => {
                return Err("response carries neither `result` nor `error`".to_string())
            }
        };

        Ok(Self {
            jsonrpc: raw.jsonrpc,
            id: raw.id,
            outcome,
        })
    }
}
