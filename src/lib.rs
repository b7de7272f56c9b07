pub mod analyzer;
pub mod cli;
pub mod error;
pub mod models;
pub mod server;

pub use error::{MalformedKind, ReviewError};

// Re-export commonly used types
pub use models::{
    AggregateClassification, ClassificationResult, ClassificationTask, DerivedDocument,
    DocumentKind, InputLimits, ReviewCollection, ReviewText,
};

pub use analyzer::{
    AggregationService, ClassificationOrchestrator, LanguageModelClient, PromptTemplate,
    ResponseParser,
};

pub use server::{AppState, ServiceConfig};
