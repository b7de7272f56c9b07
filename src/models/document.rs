use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Insights,
    Trends,
    Summary,
}

impl DocumentKind {
    /// Key the document is returned under in the HTTP response body.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Insights => "insights",
            DocumentKind::Trends => "trends",
            DocumentKind::Summary => "summary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DocumentKind::Insights => "insights generation",
            DocumentKind::Trends => "trend analysis",
            DocumentKind::Summary => "review summary",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form model output derived from a review collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedDocument {
    pub kind: DocumentKind,
    pub content: String,
}

impl DerivedDocument {
    pub fn new(kind: DocumentKind, content: String) -> Self {
        Self { kind, content }
    }

    /// `{"<kind>": content}`, the shape each aggregation endpoint returns.
    pub fn to_response_body(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            self.kind.as_str().to_string(),
            serde_json::Value::String(self.content.clone()),
        );
        serde_json::Value::Object(body)
    }
}
