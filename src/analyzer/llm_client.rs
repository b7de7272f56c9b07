use crate::analyzer::prompts::PromptTemplate;
use crate::error::ReviewError;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel};
use rig::providers::{anthropic, gemini, openai};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model_name: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl LlmConfig {
    pub fn new(model_name: impl Into<String>, api_key: Option<String>, timeout_seconds: u64) -> Self {
        Self {
            model_name: model_name.into(),
            api_key,
            timeout_seconds,
            max_tokens: Some(1000),
            temperature: Some(0.3),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// A hosted model that turns a prompt into a raw completion.
pub trait LanguageModelClient: Send + Sync {
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ReviewError>> + Send + 'a>>;
    fn model_name(&self) -> &str;
}

/// Runs one completion under a deadline. Dropping the in-flight request on
/// expiry is best-effort; the provider may still finish it.
pub async fn complete_with_timeout(
    client: &dyn LanguageModelClient,
    prompt: &str,
    timeout: Duration,
) -> Result<String, ReviewError> {
    tokio::time::timeout(timeout, client.complete(prompt))
        .await
        .map_err(|_| ReviewError::ModelTimeout {
            timeout: timeout.as_secs(),
        })?
}

pub struct RigLlmClient {
    config: LlmConfig,
    provider: RigProvider,
}

enum RigProvider {
    OpenAI(openai::Client),
    Anthropic(anthropic::Client),
    Gemini(gemini::Client),
}

impl RigLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, ReviewError> {
        let provider = create_provider(&config)?;
        Ok(Self { config, provider })
    }

    async fn make_api_request(&self, prompt: &str) -> Result<String, ReviewError> {
        let model_name = provider_model_name(&self.config.model_name);
        let preamble = PromptTemplate::build_system_prompt();

        match &self.provider {
            RigProvider::OpenAI(client) => {
                let model = client.completion_model(model_name);
                self.send_completion_request(model, model_name, preamble, prompt).await
            }
            RigProvider::Anthropic(client) => {
                let model = client.completion_model(model_name);
                self.send_completion_request(model, model_name, preamble, prompt).await
            }
            RigProvider::Gemini(client) => {
                let model = client.completion_model(model_name);
                self.send_completion_request(model, model_name, preamble, prompt).await
            }
        }
    }

    async fn send_completion_request<M: CompletionModel>(
        &self,
        model: M,
        model_name: &str,
        preamble: &str,
        prompt: &str,
    ) -> Result<String, ReviewError> {
        let mut builder = model
            .completion_request(prompt)
            .preamble(preamble.to_string());

        if let Some(temp) = self.config.temperature.filter(|_| supports_temperature(model_name)) {
            builder = builder.temperature(temp as f64);
        }

        if let Some(max_tokens) = self.config.max_tokens {
            builder = builder.max_tokens(max_tokens as u64);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ReviewError::ModelInvocation(format!("Request failed: {}", e)))?;

        Ok(response
            .choice
            .iter()
            .filter_map(|content| match content {
                AssistantContent::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect())
    }
}

impl LanguageModelClient for RigLlmClient {
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ReviewError>> + Send + 'a>> {
        Box::pin(async move {
            let start_time = std::time::Instant::now();
            let result = self.make_api_request(prompt).await;
            let duration_ms = start_time.elapsed().as_millis() as u64;

            match &result {
                Ok(text) => tracing::debug!(
                    model = %self.config.model_name,
                    duration_ms,
                    completion_chars = text.len(),
                    "completion received"
                ),
                Err(e) => tracing::warn!(
                    model = %self.config.model_name,
                    duration_ms,
                    error = %e,
                    "completion failed"
                ),
            }

            result
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model_name
    }
}

fn create_provider(config: &LlmConfig) -> Result<RigProvider, ReviewError> {
    let model_name = config.model_name.trim();

    if is_openai_model(model_name) {
        let api_key = resolve_api_key(config, &["OPENAI_API_KEY"])
            .ok_or_else(|| ReviewError::Config("OpenAI API key not found".to_string()))?;
        Ok(RigProvider::OpenAI(openai::Client::new(&api_key)))
    } else if is_claude_model(model_name) {
        let api_key = resolve_api_key(config, &["ANTHROPIC_API_KEY"])
            .ok_or_else(|| ReviewError::Config("Anthropic API key not found".to_string()))?;
        Ok(RigProvider::Anthropic(anthropic::Client::new(&api_key)))
    } else if is_gemini_model(model_name) {
        let api_key = resolve_api_key(config, &["GEMINI_API_KEY", "GOOGLE_API_KEY"])
            .ok_or_else(|| ReviewError::Config("Gemini API key not found".to_string()))?;
        Ok(RigProvider::Gemini(gemini::Client::new(&api_key)))
    } else {
        Err(ReviewError::Config(format!(
            "Unsupported model '{}'. Use OpenAI (gpt-*), Anthropic (claude-*), or Gemini (gemini-*) models",
            model_name
        )))
    }
}

fn resolve_api_key(config: &LlmConfig, env_vars: &[&str]) -> Option<String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            env_vars
                .iter()
                .find_map(|var| std::env::var(var).ok().filter(|key| !key.trim().is_empty()))
        })
}

pub fn create_llm_client(config: LlmConfig) -> Result<Arc<dyn LanguageModelClient>, ReviewError> {
    let client = RigLlmClient::new(config)?;
    Ok(Arc::new(client))
}

/// Model name as the provider expects it, without a routing prefix.
fn provider_model_name(model: &str) -> &str {
    let model = model.trim();
    ["openai/", "anthropic/", "gemini/"]
        .iter()
        .find_map(|prefix| model.strip_prefix(prefix))
        .unwrap_or(model)
}

/// Reasoning models (o1/o3/o4, gpt-5) reject a temperature setting.
fn supports_temperature(model: &str) -> bool {
    let candidate = provider_model_name(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    !["o1", "o3", "o4", "gpt-5"]
        .iter()
        .any(|family| candidate.starts_with(family))
}

fn is_openai_model(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    candidate.starts_with("gpt-")
        || candidate.starts_with("chatgpt-")
        || candidate.starts_with("o1")
        || candidate.starts_with("o3")
        || candidate.starts_with("o4")
}

fn is_claude_model(model: &str) -> bool {
    let candidate = model.strip_prefix("anthropic/").unwrap_or(model);
    candidate.starts_with("claude-")
}

fn is_gemini_model(model: &str) -> bool {
    let candidate = model.strip_prefix("gemini/").unwrap_or(model);
    candidate.starts_with("gemini-")
}
