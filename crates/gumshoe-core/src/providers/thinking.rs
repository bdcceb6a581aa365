//! Removal of `<think>` reasoning spans from batch responses.
//!
//! Reasoning-distilled models (e.g. DeepSeek R1 distills) prefix their
//! answer with internal deliberation wrapped in `<think>...</think>`.
//! Batch output removes that span, tags included, before printing.
//! The span is assumed to be at most one contiguous, non-nested pair;
//! an unmatched tag leaves the text untouched.

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Removes one well-formed `<think>...</think>` span (tags included) and
/// trims surrounding whitespace. The span may cover multiple lines.
///
/// Text without a matched pair is returned trimmed but otherwise unchanged.
pub fn strip_reasoning(text: &str) -> String {
    if let Some(open) = text.find(THINK_OPEN)
        && let Some(close_rel) = text[open + THINK_OPEN.len()..].find(THINK_CLOSE)
    {
        let close = open + THINK_OPEN.len() + close_rel + THINK_CLOSE.len();
        let mut cleaned = String::with_capacity(text.len() - (close - open));
        cleaned.push_str(&text[..open]);
        cleaned.push_str(&text[close..]);
        return cleaned.trim().to_string();
    }

    text.trim().to_string()
}

/// Check if text contains a complete reasoning span.
pub fn contains_reasoning(text: &str) -> bool {
    text.find(THINK_OPEN)
        .is_some_and(|open| text[open..].contains(THINK_CLOSE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_single_span() {
        assert_eq!(
            strip_reasoning("<think>internal notes</think>final answer"),
            "final answer"
        );
    }

    #[test]
    fn test_strip_multiline_span() {
        assert_eq!(strip_reasoning("<think>line1\nline2</think>result"), "result");
    }

    #[test]
    fn test_no_span_returns_trimmed_input() {
        assert_eq!(strip_reasoning("final answer"), "final answer");
        assert_eq!(strip_reasoning("  final answer \n"), "final answer");
    }

    #[test]
    fn test_span_with_surrounding_whitespace() {
        assert_eq!(
            strip_reasoning("  <think>hmm</think>\n\nanswer\n"),
            "answer"
        );
    }

    #[test]
    fn test_unmatched_open_tag_is_preserved() {
        assert_eq!(
            strip_reasoning("<think>never closed, answer below"),
            "<think>never closed, answer below"
        );
    }

    #[test]
    fn test_unmatched_close_tag_is_preserved() {
        assert_eq!(strip_reasoning("stray</think> answer"), "stray</think> answer");
    }

    #[test]
    fn test_span_in_the_middle() {
        assert_eq!(
            strip_reasoning("prefix <think>notes</think> suffix"),
            "prefix  suffix"
        );
    }

    #[test]
    fn test_contains_reasoning() {
        assert!(contains_reasoning("<think>x</think>y"));
        assert!(!contains_reasoning("plain"));
        assert!(!contains_reasoning("<think>unclosed"));
        assert!(!contains_reasoning("</think><think>"));
    }
}
