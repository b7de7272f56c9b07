use crate::error::ReviewError;

pub const DEFAULT_MAX_TEXT_CHARS: usize = 10_000;
pub const DEFAULT_MAX_REVIEWS: usize = 500;

/// Bounds applied to caller input before it is embedded in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_text_chars: usize,
    pub max_reviews: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_reviews: DEFAULT_MAX_REVIEWS,
        }
    }
}

impl InputLimits {
    pub fn new(max_text_chars: usize, max_reviews: usize) -> Self {
        Self {
            max_text_chars,
            max_reviews,
        }
    }

    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.max_text_chars == 0 {
            return Err(ReviewError::Config(
                "Maximum text length must be greater than 0".to_string(),
            ));
        }

        if self.max_reviews == 0 {
            return Err(ReviewError::Config(
                "Maximum review count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Largest request body that can still carry a collection within these
    /// limits: four UTF-8 bytes per character, six for `\uXXXX` escapes,
    /// plus per-review quoting and the JSON envelope.
    pub fn max_body_bytes(&self) -> usize {
        const PER_REVIEW_OVERHEAD: usize = 16;
        const ENVELOPE: usize = 64 * 1024;

        self.max_text_chars
            .saturating_mul(6)
            .saturating_add(PER_REVIEW_OVERHEAD)
            .saturating_mul(self.max_reviews)
            .saturating_add(ENVELOPE)
    }
}

/// A single non-empty, length-bounded review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewText(String);

impl ReviewText {
    pub fn new(raw: impl Into<String>, limits: &InputLimits) -> Result<Self, ReviewError> {
        let text = raw.into();

        if text.trim().is_empty() {
            return Err(ReviewError::Validation(
                "Review text cannot be empty".to_string(),
            ));
        }

        let length = text.chars().count();
        if length > limits.max_text_chars {
            return Err(ReviewError::Validation(format!(
                "Review text is {} characters, limit is {}",
                length, limits.max_text_chars
            )));
        }

        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordered reviews for the aggregation endpoints. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCollection(Vec<ReviewText>);

impl ReviewCollection {
    pub fn new<I, S>(reviews: I, limits: &InputLimits) -> Result<Self, ReviewError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let reviews = reviews
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                ReviewText::new(raw, limits).map_err(|e| match e {
                    ReviewError::Validation(message) => {
                        ReviewError::Validation(format!("Review {}: {}", index + 1, message))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if reviews.is_empty() {
            return Err(ReviewError::Validation(
                "At least one review is required".to_string(),
            ));
        }

        if reviews.len() > limits.max_reviews {
            return Err(ReviewError::Validation(format!(
                "Too many reviews: {} submitted, limit is {}",
                reviews.len(),
                limits.max_reviews
            )));
        }

        Ok(Self(reviews))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reviews joined by a single space, in submission order.
    pub fn combined(&self) -> String {
        self.0
            .iter()
            .map(ReviewText::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
