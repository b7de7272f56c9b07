// Analyzer module - prompt building, model calls, parsing and aggregation

pub mod aggregator;
pub mod llm_client;
pub mod orchestrator;
pub mod parser;
pub mod prompts;

pub use aggregator::AggregationService;
pub use llm_client::{create_llm_client, LanguageModelClient, LlmConfig, RigLlmClient};
pub use orchestrator::ClassificationOrchestrator;
pub use parser::ResponseParser;
pub use prompts::PromptTemplate;
