//! Intelligence extractor — regex mining of financial/contact artifacts.
//!
//! Patterns are applied independently and non-exclusively: one substring
//! may satisfy several patterns (a 12-digit run is both a plausible bank
//! account and a plausible phone number). Every field is returned as a
//! deduplicated set; ordering within a field is not part of the contract.

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Artifacts mined from one extraction call.
///
/// Also the wire shape of the `extracted` response field and of the
/// `extractedIntelligence` escalation field, hence the short serde names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceBundle {
    /// UPI-style payment handles (`name@bank`).
    #[serde(rename = "upi")]
    pub upi_ids: BTreeSet<String>,
    /// Runs of 9-18 digits. Broad on purpose; dedup is the only mitigation.
    pub bank_accounts: BTreeSet<String>,
    /// IFSC-style routing codes (4 letters, `0`, 6 alphanumerics).
    #[serde(rename = "ifsc")]
    pub ifsc_codes: BTreeSet<String>,
    /// Full http/https URLs including path and query.
    #[serde(rename = "links")]
    pub phishing_links: BTreeSet<String>,
    /// Phone-shaped digit runs, optionally `+`-prefixed.
    #[serde(rename = "phones")]
    pub phone_numbers: BTreeSet<String>,
}

impl IntelligenceBundle {
    /// Whether no artifact of any kind was found.
    pub fn is_empty(&self) -> bool {
        self.upi_ids.is_empty()
            && self.bank_accounts.is_empty()
            && self.ifsc_codes.is_empty()
            && self.phishing_links.is_empty()
            && self.phone_numbers.is_empty()
    }

    /// Union-merge another bundle into this one. Sets only grow.
    pub fn merge(&mut self, other: IntelligenceBundle) {
        self.upi_ids.extend(other.upi_ids);
        self.bank_accounts.extend(other.bank_accounts);
        self.ifsc_codes.extend(other.ifsc_codes);
        self.phishing_links.extend(other.phishing_links);
        self.phone_numbers.extend(other.phone_numbers);
    }
}

/// Intelligence extractor with pre-compiled patterns.
pub struct IntelExtractor {
    upi: Regex,
    bank_account: Regex,
    ifsc: Regex,
    link: Regex,
    phone: Regex,
}

impl IntelExtractor {
    /// Compile the pattern set.
    pub fn new() -> Self {
        Self {
            // Whole-token only: bare emails and payment handles are
            // indistinguishable by shape, an accepted limitation.
            upi: Regex::new(r"\b[A-Za-z0-9._-]{2,256}@[A-Za-z]{2,64}\b").unwrap(),
            bank_account: Regex::new(r"\b\d{9,18}\b").unwrap(),
            ifsc: Regex::new(r"\b[A-Za-z]{4}0[A-Za-z0-9]{6}\b").unwrap(),
            link: Regex::new(
                r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_+.~#?&/=]*)",
            )
            .unwrap(),
            phone: Regex::new(r"\+?\d{10,13}").unwrap(),
        }
    }

    /// Extract all artifact kinds from `text`.
    ///
    /// Absent input yields an empty bundle. Idempotent and insensitive to
    /// the ordering of content within the text.
    pub fn extract(&self, text: Option<&str>) -> IntelligenceBundle {
        let Some(text) = text else {
            return IntelligenceBundle::default();
        };

        IntelligenceBundle {
            upi_ids: collect(&self.upi, text),
            bank_accounts: collect(&self.bank_account, text),
            ifsc_codes: collect(&self.ifsc, text),
            phishing_links: collect(&self.link, text),
            phone_numbers: collect(&self.phone, text),
        }
    }
}

impl Default for IntelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(pattern: &Regex, text: &str) -> BTreeSet<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
