//! Escalation reporting — fire-and-forget notification of high-risk sessions.
//!
//! A report is dispatched on a spawned task, never awaited on the response
//! path. Failures are logged and dropped; there are no retries and the
//! inbound caller never sees them.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::detection::IntelligenceBundle;
use crate::error::ReportError;

/// Payload sent to the external reporting endpoint. Field names are the
/// collaborator's contract; do not rename.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationReport {
    pub session_id: String,
    pub scam_detected: bool,
    pub total_messages_exchanged: u64,
    pub extracted_intelligence: IntelligenceBundle,
    pub agent_notes: String,
}

/// Destination for escalation reports.
#[async_trait]
pub trait EscalationSink: Send + Sync {
    async fn report(&self, report: EscalationReport) -> Result<(), ReportError>;
}

/// HTTP sink — POSTs the report as JSON to a configured URL.
pub struct HttpEscalationSink {
    client: reqwest::Client,
    url: String,
}

impl HttpEscalationSink {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl EscalationSink for HttpEscalationSink {
    async fn report(&self, report: EscalationReport) -> Result<(), ReportError> {
        let response = self
            .client
            .post(&self.url)
            .json(&report)
            .send()
            .await
            .map_err(|e| ReportError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ReportError::BadStatus {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

/// Dispatch a report without blocking the caller. Errors are logged only.
pub fn dispatch(sink: Arc<dyn EscalationSink>, report: EscalationReport) {
    let session_id = report.session_id.clone();
    tokio::spawn(async move {
        match sink.report(report).await {
            Ok(()) => debug!(session = %session_id, "Escalation report delivered"),
            Err(e) => warn!(session = %session_id, error = %e, "Escalation report dropped"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_contract_field_names() {
        let report = EscalationReport {
            session_id: "s1".into(),
            scam_detected: true,
            total_messages_exchanged: 5,
            extracted_intelligence: IntelligenceBundle::default(),
            agent_notes: "suspicious keywords: otp".into(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sessionId"], "s1");
        assert_eq!(json["scamDetected"], true);
        assert_eq!(json["totalMessagesExchanged"], 5);
        assert_eq!(json["agentNotes"], "suspicious keywords: otp");
        assert!(json["extractedIntelligence"]["upi"].is_array());
    }
}
