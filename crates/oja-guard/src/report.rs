//! Scan result presentation
//!
//! Summary strings shown to the sender, and span masking for the redacted
//! rendering of a flagged message.

use oja_common::RiskLevel;

/// Human-readable summary for one scan.
pub fn summary_message(has_violation: bool, risk: RiskLevel, count: usize) -> String {
    if has_violation {
        format!(
            "Contact information detected. Risk level: {}. Found {} violation(s).",
            risk.as_str().to_uppercase(),
            count
        )
    } else {
        "No contact information detected. Message is safe.".to_string()
    }
}

/// Replace every span with a `*` run of the same character length.
///
/// Spans are byte ranges into `text`; overlapping or duplicate spans are
/// merged before masking.
pub fn mask_spans(text: &str, spans: impl IntoIterator<Item = (usize, usize)>) -> String {
    let mut spans: Vec<(usize, usize)> = spans.into_iter().collect();
    if spans.is_empty() {
        return text.to_string();
    }
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => *last_end = (*last_end).max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in merged {
        out.push_str(&text[cursor..start]);
        for _ in text[start..end].chars() {
            out.push('*');
        }
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_violations() {
        assert_eq!(
            summary_message(true, RiskLevel::High, 3),
            "Contact information detected. Risk level: HIGH. Found 3 violation(s)."
        );
        assert_eq!(
            summary_message(true, RiskLevel::Medium, 1),
            "Contact information detected. Risk level: MEDIUM. Found 1 violation(s)."
        );
    }

    #[test]
    fn test_summary_safe() {
        assert_eq!(
            summary_message(false, RiskLevel::Low, 0),
            "No contact information detected. Message is safe."
        );
    }

    #[test]
    fn test_mask_spans_basic() {
        assert_eq!(mask_spans("call 0803 now", [(5, 9)]), "call **** now");
    }

    #[test]
    fn test_mask_spans_merges_overlaps() {
        // Two rules flagging overlapping text mask it once.
        assert_eq!(mask_spans("abcdef", [(0, 4), (2, 6)]), "******");
        assert_eq!(mask_spans("abcdef", [(0, 2), (0, 2), (4, 6)]), "**cd**");
    }

    #[test]
    fn test_mask_spans_counts_characters() {
        // Multi-byte text masks one star per character, not per byte.
        let text = "ß number";
        let masked = mask_spans(text, [(0, 2)]);
        assert_eq!(masked, "* number");
    }

    #[test]
    fn test_mask_spans_empty() {
        assert_eq!(mask_spans("clean text", []), "clean text");
    }
}
