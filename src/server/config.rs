use crate::analyzer::LlmConfig;
use crate::error::ReviewError;
use crate::models::InputLimits;

pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const MIN_TIMEOUT_SECONDS: u64 = 5;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub llm: LlmConfig,
    pub limits: InputLimits,
}

impl ServiceConfig {
    pub fn new(host: String, port: u16, llm: LlmConfig) -> Self {
        Self {
            host,
            port,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            llm,
            limits: InputLimits::default(),
        }
    }

    pub fn with_cors_origin(mut self, origin: String) -> Self {
        self.cors_origin = origin;
        self
    }

    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.host.trim().is_empty() {
            return Err(ReviewError::Config("Host cannot be empty".to_string()));
        }

        if self.llm.model_name.trim().is_empty() {
            return Err(ReviewError::Config("Model name cannot be empty".to_string()));
        }

        if !(MIN_TIMEOUT_SECONDS..=MAX_TIMEOUT_SECONDS).contains(&self.llm.timeout_seconds) {
            return Err(ReviewError::Config(format!(
                "Timeout must be between {} and {} seconds",
                MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS
            )));
        }

        if self.cors_origin.trim().is_empty() {
            return Err(ReviewError::Config("CORS origin cannot be empty".to_string()));
        }

        self.limits.validate()
    }
}
