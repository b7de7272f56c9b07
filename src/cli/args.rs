use clap::Parser;
use crate::analyzer::llm_client::{LlmConfig, DEFAULT_MODEL};
use crate::error::ReviewError;
use crate::models::review::{InputLimits, DEFAULT_MAX_REVIEWS, DEFAULT_MAX_TEXT_CHARS};
use crate::server::config::{
    ServiceConfig, DEFAULT_CORS_ORIGIN, MAX_TIMEOUT_SECONDS, MIN_TIMEOUT_SECONDS,
};

#[derive(Parser, Debug)]
#[command(name = "review-insight")]
#[command(about = "Classify app reviews and summarize review collections using LLMs")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "REVIEW_INSIGHT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, env = "REVIEW_INSIGHT_PORT", default_value = "5000")]
    pub port: u16,

    /// LLM model to use (gpt-*, claude-*, gemini-*)
    #[arg(short = 'm', long, env = "REVIEW_INSIGHT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API key for the model provider. Falls back to the provider's own
    /// environment variable (OPENAI_API_KEY, ANTHROPIC_API_KEY, GEMINI_API_KEY / GOOGLE_API_KEY)
    #[arg(long, env = "REVIEW_INSIGHT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Maximum time for a single model call in seconds (5-300)
    #[arg(
        short = 't',
        long,
        env = "REVIEW_INSIGHT_TIMEOUT",
        default_value = "60",
        value_parser = validate_timeout
    )]
    pub timeout: u64,

    /// Maximum characters accepted per review
    #[arg(long, env = "REVIEW_INSIGHT_MAX_TEXT_CHARS", default_value_t = DEFAULT_MAX_TEXT_CHARS)]
    pub max_text_chars: usize,

    /// Maximum reviews accepted per aggregation request
    #[arg(long, env = "REVIEW_INSIGHT_MAX_REVIEWS", default_value_t = DEFAULT_MAX_REVIEWS)]
    pub max_reviews: usize,

    /// Origin allowed by CORS, or "*" for any
    #[arg(long, env = "REVIEW_INSIGHT_CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug logging including prompts and completions metadata
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, ReviewError> {
        let cli = Self::try_parse().map_err(|e| ReviewError::Config(e.to_string()))?;
        cli.validate()?;
        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), ReviewError> {
        self.to_config().validate()
    }

    pub fn to_config(&self) -> ServiceConfig {
        let llm = LlmConfig::new(self.model.trim(), self.api_key.clone(), self.timeout);

        ServiceConfig::new(self.host.clone(), self.port, llm)
            .with_cors_origin(self.cors_origin.clone())
            .with_limits(InputLimits::new(self.max_text_chars, self.max_reviews))
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_debug() {
            "review_insight=debug,tower_http=debug,info"
        } else if self.is_verbose() {
            "review_insight=info,tower_http=info,warn"
        } else {
            "review_insight=info,warn"
        }
    }
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse().map_err(|_| "Timeout must be a number")?;

    if (MIN_TIMEOUT_SECONDS..=MAX_TIMEOUT_SECONDS).contains(&timeout) {
        Ok(timeout)
    } else {
        Err(format!(
            "Timeout must be between {} and {} seconds",
            MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS
        ))
    }
}
