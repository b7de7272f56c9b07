use std::fmt;
use thiserror::Error;

/// Which structural check a model completion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    Syntax,
    MissingField,
    InvalidLabel,
}

impl MalformedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedKind::Syntax => "syntax",
            MalformedKind::MissingField => "missing_field",
            MalformedKind::InvalidLabel => "invalid_label",
        }
    }
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Malformed model output ({kind}): {detail}")]
    MalformedOutput { kind: MalformedKind, detail: String },

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Model call timed out after {timeout} seconds")]
    ModelTimeout { timeout: u64 },

    #[error("{stage} failed: {source}")]
    Orchestration {
        stage: String,
        #[source]
        source: Box<ReviewError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReviewError {
    pub fn malformed(kind: MalformedKind, detail: impl Into<String>) -> Self {
        ReviewError::MalformedOutput {
            kind,
            detail: detail.into(),
        }
    }

    pub fn orchestration(stage: impl Into<String>, source: ReviewError) -> Self {
        ReviewError::Orchestration {
            stage: stage.into(),
            source: Box::new(source),
        }
    }

    /// Innermost error, looking through any orchestration wrappers.
    pub fn root_cause(&self) -> &ReviewError {
        match self {
            ReviewError::Orchestration { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn malformed_kind(&self) -> Option<MalformedKind> {
        match self.root_cause() {
            ReviewError::MalformedOutput { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.root_cause(), ReviewError::Validation(_))
    }
}
