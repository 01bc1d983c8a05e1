//! Scam scorer — deterministic keyword-count heuristic.
//!
//! Not a classifier. The score is a step function of how many *distinct*
//! keywords from a fixed table appear in the message. Matching is plain
//! substring containment on the lowercased text, deliberately permissive:
//! a false positive only costs the scammer one more engagement turn.

/// Score at or above which a message is treated as a scam.
pub const SCAM_THRESHOLD: f64 = 0.45;

/// Keyword table, scanned in order. The order is part of the contract:
/// `matched_keywords` is reported in scan order so `agent_notes` stays
/// stable and explainable.
const SCAM_KEYWORDS: &[&str] = &[
    "otp",
    "urgent",
    "account blocked",
    "blocked",
    "prize",
    "kyc",
    "refund",
    "bank",
    "verify",
    "link",
    "lottery",
    "winner",
    "password",
    "pin",
    "expire",
    "suspended",
    "verification",
    "credit card",
    "debit card",
    "upi",
    "click here",
];

/// Per-message scoring result.
#[derive(Debug, Clone, PartialEq)]
pub struct ScamAssessment {
    /// Scam confidence in `[0, 1]`.
    pub score: f64,
    /// Distinct keywords that hit, in keyword-table scan order.
    pub matched_keywords: Vec<String>,
}

impl ScamAssessment {
    /// Whether this single message crosses the scam threshold.
    pub fn is_scam(&self) -> bool {
        self.score >= SCAM_THRESHOLD
    }
}

/// Score a message for scam likelihood.
///
/// Absent input scores the low baseline 0.05, not zero — a missing message
/// is not proof of innocence. Distinct-hit count maps to a fixed step
/// function; the breakpoints are load-bearing because the external 0.45
/// threshold depends on them.
pub fn score(text: Option<&str>) -> ScamAssessment {
    let Some(text) = text else {
        return ScamAssessment {
            score: 0.05,
            matched_keywords: Vec::new(),
        };
    };

    let lower = text.to_lowercase();
    let matched_keywords: Vec<String> = SCAM_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .map(|kw| kw.to_string())
        .collect();

    let score = match matched_keywords.len() {
        0 => 0.05,
        1 => 0.45,
        2 => 0.75,
        _ => 0.98,
    };

    ScamAssessment {
        score,
        matched_keywords,
    }
}
