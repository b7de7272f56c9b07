pub mod review;
pub mod task;
pub mod classification;
pub mod document;

pub use review::{InputLimits, ReviewText, ReviewCollection};
pub use task::ClassificationTask;
pub use classification::{ClassificationResult, AggregateClassification};
pub use document::{DocumentKind, DerivedDocument};
