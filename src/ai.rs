//! Capture point for free-text scheduling utterances.
//!
//! Parsing (e.g. "Fri 9:30, 20m, high, alert 1h") belongs to an upstream
//! interpreter; this layer only records the raw text and hands it on.

/// Trims and forwards an utterance. Empty input yields `None`.
pub fn forward_utterance(raw: &str) -> Option<String> {
    let utterance = raw.trim();
    if utterance.is_empty() {
        return None;
    }
    tracing::info!(%utterance, "utterance captured; no interpreter wired");
    Some(utterance.to_string())
}
