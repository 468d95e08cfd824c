//! CLI argument definitions and handler

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::core::client::Translator;
use crate::core::config::TranslatorConfig;
use crate::core::models::LanguageCode;

/// Options for a single translation
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Sentence to translate
    pub sentence: String,

    /// Source language (`auto` lets the service detect it)
    #[arg(short, long, default_value = "auto")]
    pub source: LanguageCode,

    /// Target language
    #[arg(short, long, default_value = "EN")]
    pub target: LanguageCode,

    /// JSON configuration file (overrides environment)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print candidates as a JSON array
    #[arg(long, conflicts_with = "detailed")]
    pub json: bool,

    /// Print the full service result as JSON
    #[arg(long)]
    pub detailed: bool,
}

impl TranslateArgs {
    /// Resolve configuration: file, else environment, then CLI overrides
    pub fn load_config(&self) -> anyhow::Result<TranslatorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                TranslatorConfig::from_file(path)?
            }
            None => TranslatorConfig::from_env()?,
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }

        Ok(config)
    }
}

/// Handle translate command; returns the text to print
pub async fn handle_translate(args: &TranslateArgs) -> anyhow::Result<String> {
    let config = args.load_config()?;
    let translator = Translator::new(config)?;

    info!(
        "Translating {} -> {} ({} chars)",
        args.source,
        args.target,
        args.sentence.chars().count()
    );

    if args.detailed {
        let result = translator
            .translate_detailed(args.source, args.target, &args.sentence)
            .await?;
        return Ok(serde_json::to_string_pretty(&result)?);
    }

    let candidates = translator
        .translate(args.source, args.target, &args.sentence)
        .await?;

    if args.json {
        Ok(serde_json::to_string(&candidates)?)
    } else {
        Ok(candidates.join("\n"))
    }
}
