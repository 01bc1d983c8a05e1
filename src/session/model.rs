//! Session record — everything accumulated about one conversation.

use serde::{Deserialize, Serialize};

use crate::detection::{IntelligenceBundle, ScamAssessment};

/// Accumulated state for one session key.
///
/// Invariants:
/// - `turns` increases by exactly 1 per processed request.
/// - `scam_detected` is monotonic: once true, never reset.
/// - `intel` and `suspicious_keywords` only grow, never shrink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Number of request/response exchanges so far.
    pub turns: u64,
    /// True iff any turn scored at or above the scam threshold.
    pub scam_detected: bool,
    /// Cumulative union of extracted artifacts across all turns.
    pub intel: IntelligenceBundle,
    /// Cumulative keyword hits, first-seen order, deduplicated.
    pub suspicious_keywords: Vec<String>,
    /// Human-readable summary, rebuilt from `suspicious_keywords` each turn.
    pub agent_notes: String,
}

impl Session {
    /// Fold one turn's assessment and extraction into the session.
    ///
    /// Bumps the turn counter, latches `scam_detected`, unions keywords
    /// and intel, and rebuilds `agent_notes`.
    pub fn absorb_turn(&mut self, assessment: &ScamAssessment, intel: IntelligenceBundle) {
        self.turns += 1;
        self.scam_detected |= assessment.is_scam();

        for keyword in &assessment.matched_keywords {
            if !self.suspicious_keywords.contains(keyword) {
                self.suspicious_keywords.push(keyword.clone());
            }
        }

        self.intel.merge(intel);
        self.agent_notes = self.render_notes();
    }

    fn render_notes(&self) -> String {
        if self.suspicious_keywords.is_empty() {
            "no suspicious keywords observed".to_string()
        } else {
            format!(
                "suspicious keywords: {}",
                self.suspicious_keywords.join(", ")
            )
        }
    }
}
