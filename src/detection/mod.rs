//! Scam detection — keyword scoring and intelligence extraction.

pub mod extractor;
pub mod scorer;

pub use extractor::{IntelExtractor, IntelligenceBundle};
pub use scorer::{ScamAssessment, SCAM_THRESHOLD};
