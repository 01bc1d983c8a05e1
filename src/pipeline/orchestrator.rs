//! Turn orchestrator — per-request coordination.
//!
//! Flow per request:
//! 1. Normalize the wire shape into a [`TurnRequest`]
//! 2. Score the current message (history never influences the score)
//! 3. Extract intelligence from message + history combined
//! 4. Merge both into the session under the store lock
//! 5. Decide escalation, dispatch fire-and-forget
//! 6. Render the response in the request's wire shape
//!
//! The orchestrator never propagates a failure to the transport: the
//! turn runs on its own task, and a panic there is converted into a
//! success-shaped fallback so the counterpart never sees an error.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::detection::{scorer, IntelExtractor};
use crate::persona::PersonaEngine;
use crate::pipeline::adapter;
use crate::pipeline::types::{fallback_response, TurnOutcome, TurnRequest};
use crate::report::{self, EscalationReport, EscalationSink};
use crate::session::SessionStore;

/// Turn count at which a scam-flagged session escalates.
pub const ESCALATION_MIN_TURNS: u64 = 5;

/// Single-turn score that escalates a scam-flagged session immediately.
pub const ESCALATION_SCORE: f64 = 0.75;

/// Per-request coordinator wiring scorer, extractor, store, persona and
/// the escalation sink together.
pub struct Orchestrator {
    extractor: IntelExtractor,
    persona: PersonaEngine,
    store: Arc<SessionStore>,
    sink: Option<Arc<dyn EscalationSink>>,
}

impl Orchestrator {
    pub fn new(
        store: Arc<SessionStore>,
        persona: PersonaEngine,
        sink: Option<Arc<dyn EscalationSink>>,
    ) -> Self {
        Self {
            extractor: IntelExtractor::new(),
            persona,
            store,
            sink,
        }
    }

    /// Handle one raw request body, returning a response body. Total:
    /// malformed input is coerced and an internal panic becomes the
    /// safe fallback response.
    pub async fn handle(self: &Arc<Self>, raw: serde_json::Value) -> serde_json::Value {
        let request = adapter::normalize(&raw);
        let format = request.format;

        let this = Arc::clone(self);
        match tokio::spawn(async move { this.process(request).await }).await {
            Ok(outcome) => outcome.into_response(),
            Err(e) => {
                error!(error = %e, "Turn processing failed; returning fallback reply");
                fallback_response(format)
            }
        }
    }

    /// Run the turn state machine on a normalized request.
    pub async fn process(&self, request: TurnRequest) -> TurnOutcome {
        let assessment = scorer::score(Some(request.message.as_str()));
        let combined = request.combined_text();
        let turn_intel = self.extractor.extract(Some(combined.as_str()));

        debug!(
            session = %request.session_key,
            score = assessment.score,
            keywords = ?assessment.matched_keywords,
            "Scored inbound message"
        );

        // One critical section per turn: the read-modify-write on the
        // session record is atomic with respect to concurrent requests
        // for the same key.
        let (turns, scam_detected, session_intel, agent_notes) = self
            .store
            .update(&request.session_key, |session| {
                session.absorb_turn(&assessment, turn_intel.clone());
                (
                    session.turns,
                    session.scam_detected,
                    session.intel.clone(),
                    session.agent_notes.clone(),
                )
            })
            .await;

        let escalated = scam_detected
            && (turns >= ESCALATION_MIN_TURNS || assessment.score >= ESCALATION_SCORE);
        if escalated {
            info!(
                session = %request.session_key,
                turns,
                score = assessment.score,
                "Escalating session to reporting endpoint"
            );
            if let Some(sink) = &self.sink {
                report::dispatch(
                    Arc::clone(sink),
                    EscalationReport {
                        session_id: request.session_key.clone(),
                        scam_detected,
                        total_messages_exchanged: turns,
                        extracted_intelligence: session_intel,
                        agent_notes,
                    },
                );
            } else {
                debug!(
                    session = %request.session_key,
                    "No report endpoint configured; escalation logged only"
                );
            }
        }

        let reply = self.persona.reply(&request.message);

        TurnOutcome {
            format: request.format,
            session_key: request.session_key,
            assessment,
            turns,
            scam_detected,
            reply,
            turn_intel,
            escalated,
        }
    }
}
