//! Shared types for the turn pipeline.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::detection::{IntelligenceBundle, ScamAssessment};
use crate::persona::FALLBACK_REPLY;

/// Which of the two observed wire formats a request arrived in.
///
/// The format also selects the response shape: flat requests get the full
/// flat report, nested requests get `{status, reply}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Flat,
    Nested,
}

/// Normalized inbound turn — the only shape the core operates on.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub format: WireFormat,
    /// Session key, `"default"` when the caller supplied none.
    pub session_key: String,
    /// Current message text, coerced to `""` when absent or non-string.
    pub message: String,
    /// History entry texts, in array order. Non-string entries dropped.
    pub history: Vec<String>,
}

impl TurnRequest {
    /// Current message plus all history entries, space-separated, in
    /// array order. Scoring uses the message alone; extraction uses this.
    pub fn combined_text(&self) -> String {
        let mut combined = self.message.clone();
        for entry in &self.history {
            combined.push(' ');
            combined.push_str(entry);
        }
        combined
    }
}

/// Everything the orchestrator decided for one turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub format: WireFormat,
    pub session_key: String,
    pub assessment: ScamAssessment,
    /// Session turn count after this request.
    pub turns: u64,
    /// Session-latched scam verdict (monotonic).
    pub scam_detected: bool,
    /// Persona reply; exposed on the flat shape only while engaged.
    pub reply: String,
    /// Artifacts extracted from this turn's combined text.
    pub turn_intel: IntelligenceBundle,
    /// Whether an escalation report was dispatched for this turn.
    pub escalated: bool,
}

#[derive(Serialize)]
struct FlatResponse {
    is_scam: bool,
    confidence: f64,
    turns: u64,
    agent_reply: Option<String>,
    extracted: IntelligenceBundle,
    engagement_active: bool,
    timestamp: String,
}

impl TurnOutcome {
    /// Render the outcome in the shape matching the request's wire format.
    pub fn into_response(self) -> Value {
        match self.format {
            WireFormat::Nested => json!({
                "status": "success",
                "reply": self.reply,
            }),
            WireFormat::Flat => {
                let agent_reply = self.scam_detected.then_some(self.reply);
                serde_json::to_value(FlatResponse {
                    is_scam: self.scam_detected,
                    confidence: self.assessment.score,
                    turns: self.turns,
                    agent_reply,
                    extracted: self.turn_intel,
                    engagement_active: self.scam_detected,
                    timestamp: iso_timestamp(),
                })
                .unwrap_or_else(|_| json!({"status": "success"}))
            }
        }
    }
}

/// Safe success-shaped response for unexpected internal failures. The
/// counterpart must never observe an error and disengage.
pub fn fallback_response(format: WireFormat) -> Value {
    match format {
        WireFormat::Nested => json!({
            "status": "success",
            "reply": FALLBACK_REPLY,
        }),
        WireFormat::Flat => json!({
            "is_scam": false,
            "confidence": 0.05,
            "turns": 0,
            "agent_reply": FALLBACK_REPLY,
            "extracted": IntelligenceBundle::default(),
            "engagement_active": false,
            "timestamp": iso_timestamp(),
        }),
    }
}

fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_preserves_order() {
        let request = TurnRequest {
            format: WireFormat::Flat,
            session_key: "s".into(),
            message: "current".into(),
            history: vec!["first".into(), "second".into()],
        };
        assert_eq!(request.combined_text(), "current first second");
    }

    #[test]
    fn flat_response_hides_reply_until_engaged() {
        let outcome = TurnOutcome {
            format: WireFormat::Flat,
            session_key: "s".into(),
            assessment: crate::detection::scorer::score(Some("hello")),
            turns: 1,
            scam_detected: false,
            reply: "Acha, ek minute hold karna sir.".into(),
            turn_intel: IntelligenceBundle::default(),
            escalated: false,
        };
        let value = outcome.into_response();
        assert_eq!(value["agent_reply"], Value::Null);
        assert_eq!(value["engagement_active"], false);
    }

    #[test]
    fn nested_response_always_carries_reply() {
        let outcome = TurnOutcome {
            format: WireFormat::Nested,
            session_key: "s".into(),
            assessment: crate::detection::scorer::score(Some("hello")),
            turns: 1,
            scam_detected: false,
            reply: "Mera net slow hai, thoda rukna.".into(),
            turn_intel: IntelligenceBundle::default(),
            escalated: false,
        };
        let value = outcome.into_response();
        assert_eq!(value["status"], "success");
        assert_eq!(value["reply"], "Mera net slow hai, thoda rukna.");
    }

    #[test]
    fn fallback_is_success_shaped() {
        let nested = fallback_response(WireFormat::Nested);
        assert_eq!(nested["status"], "success");

        let flat = fallback_response(WireFormat::Flat);
        assert_eq!(flat["is_scam"], false);
        assert!(flat["agent_reply"].is_string());
        assert!(flat.get("error").is_none());
    }
}
