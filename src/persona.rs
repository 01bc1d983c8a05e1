//! Persona reply engine — a confused, low-literacy account holder.
//!
//! The phrasebook is a content asset, not logic. Every line stalls:
//! nothing here ever confirms a claim, denies one, or hands over a real
//! credential. Topic routing is priority-ordered on the *current* message
//! only; the pick within a bucket is uniform random from an injected,
//! seedable RNG so tests can pin the output.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Fallback line used when the pipeline hits an unexpected internal
/// failure. Success-shaped and generic so the counterpart never learns
/// anything went wrong.
pub const FALLBACK_REPLY: &str = "Sir my phone is hanging, one minute please.";

const OTP_REPLIES: &[&str] = &[
    "Sir OTP 452... wait, it disappeared.",
    "Mobile pe OTP nahi aa raha.",
    "OTP share karna safe hai na sir?",
];

const MONEY_REPLIES: &[&str] = &[
    "Payment failed aa raha hai.",
    "Server busy bol raha hai bank.",
    "Kitna amount bhejna hai wapis batao?",
];

const LINK_REPLIES: &[&str] = &[
    "Link open nahi ho raha.",
    "Internet error dikha raha hai link pe.",
    "Ye blue link pe click karna hai?",
];

const UPI_REPLIES: &[&str] = &[
    "UPI id kaunsa daalna hai sir?",
    "Google Pay ya PhonePe, which one sir?",
    "UPI wala app update maang raha hai.",
];

const DEFAULT_REPLIES: &[&str] = &[
    "Hello sir, I am not understanding. Please tell clearly.",
    "Bhaiya, message aaya but I don't know what to do?",
    "Sir, bank server is down I think. Link not opening.",
    "Acha, ek minute hold karna sir.",
    "Mera net slow hai, thoda rukna.",
    "Kaise bheju? Google Pay or PhonePe?",
    "OTP nahi aaya abhi tak sir...",
    "Why my account blocked? I am worried.",
    "Send me number again, I will try.",
    "Sir isme 'Verify' pe click karu kya?",
];

/// Detected conversation topic, in routing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Otp,
    Money,
    Link,
    Upi,
    Default,
}

impl Topic {
    /// Route a message to a phrasebook bucket. First match wins,
    /// case-insensitive substring test.
    pub fn route(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("otp") || lower.contains("code") {
            Topic::Otp
        } else if lower.contains("pay")
            || lower.contains("transfer")
            || lower.contains("rs")
            || lower.contains("rupee")
        {
            Topic::Money
        } else if lower.contains("link") || lower.contains("click") {
            Topic::Link
        } else if lower.contains("upi") {
            Topic::Upi
        } else {
            Topic::Default
        }
    }

    fn bucket(self) -> &'static [&'static str] {
        match self {
            Topic::Otp => OTP_REPLIES,
            Topic::Money => MONEY_REPLIES,
            Topic::Link => LINK_REPLIES,
            Topic::Upi => UPI_REPLIES,
            Topic::Default => DEFAULT_REPLIES,
        }
    }
}

/// Randomized phrasebook reply engine.
pub struct PersonaEngine {
    rng: Mutex<StdRng>,
}

impl PersonaEngine {
    /// Engine with an entropy-seeded RNG (production path).
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Engine with a fixed seed, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick a reply for the current message.
    pub fn reply(&self, message: &str) -> String {
        let bucket = Topic::route(message).bucket();
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        bucket
            .choose(&mut *rng)
            .copied()
            .unwrap_or(FALLBACK_REPLY)
            .to_string()
    }
}

impl Default for PersonaEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_otp_before_everything() {
        // "code" also mentions "pay"-free content; otp has top priority.
        assert_eq!(Topic::route("share the OTP to pay now"), Topic::Otp);
        assert_eq!(Topic::route("enter the code"), Topic::Otp);
    }

    #[test]
    fn routes_money_keywords() {
        assert_eq!(Topic::route("please transfer the amount"), Topic::Money);
        assert_eq!(Topic::route("send Rs 500"), Topic::Money);
        assert_eq!(Topic::route("2000 rupees pending"), Topic::Money);
    }

    #[test]
    fn routes_link_keywords() {
        assert_eq!(Topic::route("open this LINK now"), Topic::Link);
        assert_eq!(Topic::route("just click the button"), Topic::Link);
    }

    #[test]
    fn routes_upi_after_link() {
        assert_eq!(Topic::route("what is your upi id"), Topic::Upi);
        // link outranks upi when both appear
        assert_eq!(Topic::route("click the upi link"), Topic::Link);
    }

    #[test]
    fn falls_through_to_default() {
        assert_eq!(Topic::route("hello there"), Topic::Default);
    }

    #[test]
    fn reply_comes_from_routed_bucket() {
        let engine = PersonaEngine::with_seed(7);
        for _ in 0..20 {
            let reply = engine.reply("send me the otp");
            assert!(OTP_REPLIES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = PersonaEngine::with_seed(42);
        let b = PersonaEngine::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.reply("click this link"), b.reply("click this link"));
        }
    }

    #[test]
    fn replies_never_include_credentials() {
        // Stalling lines must not contain anything digit-heavy enough to
        // look like a real OTP or account number.
        for bucket in [OTP_REPLIES, MONEY_REPLIES, LINK_REPLIES, UPI_REPLIES, DEFAULT_REPLIES] {
            for line in bucket {
                let digits = line.chars().filter(char::is_ascii_digit).count();
                assert!(digits < 4, "line leaks digit run: {line}");
            }
        }
    }
}
