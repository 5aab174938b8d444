//! Optional enrichment seam for an external summarization capability.
//!
//! The core pipeline is fully deterministic and never requires a provider;
//! when one is supplied, its output lands in `insight_summary` alongside the
//! rule-based summary, never replacing it.

/// A source of supplementary narrative for a report.
pub trait InsightProvider {
    /// Produce an additional summary for the raw report text, or `None` to
    /// decline (for example on short or low-signal input).
    fn summarize(&self, text: &str) -> Option<String>;
}

/// Provider that always declines. Used where a provider slot must be filled
/// but no capability is configured.
pub struct NoInsight;

impl InsightProvider for NoInsight {
    fn summarize(&self, _text: &str) -> Option<String> {
        None
    }
}
