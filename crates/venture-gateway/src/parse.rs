//! Decoding model replies into typed records.
//!
//! A reply must be exactly one JSON document, optionally wrapped in a single
//! markdown code fence. Prose around the JSON is not stripped; it fails the
//! decode like any other malformed reply.

use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// Characters of the raw reply kept for display on a format error.
pub const RAW_EXCERPT_CHARS: usize = 500;

/// Decode `reply` as `T`, failing closed on any missing or mistyped field.
///
/// # Errors
///
/// Returns [`GatewayError::Format`] with the decoder message and a raw excerpt.
pub fn decode_reply<T: DeserializeOwned>(reply: &str) -> Result<T, GatewayError> {
    let trimmed = reply.trim();
    let json = strip_code_fence(trimmed).unwrap_or(trimmed);
    serde_json::from_str(json).map_err(|e| GatewayError::Format {
        reason: e.to_string(),
        raw: excerpt(reply),
    })
}

/// Unwrap a reply that is entirely one fenced block.
///
/// Accepts an optional info string (```` ```json ````). Returns `None` when
/// the text is not fenced or contains more than one fence.
#[must_use]
pub fn strip_code_fence(text: &str) -> Option<&str> {
    const FENCE: &str = "```";

    if text.len() < 2 * FENCE.len() || !text.starts_with(FENCE) || !text.ends_with(FENCE) {
        return None;
    }
    let inner = &text[FENCE.len()..text.len() - FENCE.len()];
    if inner.contains(FENCE) {
        return None;
    }

    let body = match inner.split_once('\n') {
        Some((info, rest)) if info.trim().chars().all(|c| c.is_ascii_alphanumeric()) => rest,
        _ => inner,
    };
    Some(body.trim())
}

/// Leading part of `text`, cut on a char boundary.
#[must_use]
pub fn excerpt(text: &str) -> String {
    match text.char_indices().nth(RAW_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use venture_core::IdeaBatch;

    #[test]
    fn strips_json_fence() {
        let text = "```json\n{\"ideas\": []}\n```";
        assert_eq!(strip_code_fence(text), Some("{\"ideas\": []}"));
    }

    #[test]
    fn strips_bare_fence() {
        let text = "```\n[1, 2]\n```";
        assert_eq!(strip_code_fence(text), Some("[1, 2]"));
    }

    #[test]
    fn fence_on_same_line_as_json() {
        let text = "```{\"a\": 1}```";
        assert_eq!(strip_code_fence(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn unfenced_text_is_left_alone() {
        assert_eq!(strip_code_fence("{\"a\": 1}"), None);
        assert_eq!(strip_code_fence("``````"), Some(""));
        assert_eq!(strip_code_fence("````"), None);
    }

    #[test]
    fn multiple_fences_are_not_unwrapped() {
        let text = "```json\n{}\n```\nand\n```json\n{}\n```";
        assert_eq!(strip_code_fence(text), None);
    }

    #[test]
    fn decode_fenced_reply() {
        let reply = "\n```json\n{\"ideas\": []}\n```\n";
        let batch: IdeaBatch = decode_reply(reply).unwrap();
        assert!(batch.ideas.is_empty());
    }

    #[test]
    fn prose_wrapped_json_is_format_error() {
        let reply = "Here are your ideas:\n{\"ideas\": []}\nGood luck!";
        let err = decode_reply::<IdeaBatch>(reply).unwrap_err();
        assert!(matches!(err, GatewayError::Format { .. }));
        assert_eq!(err.raw_excerpt(), Some(reply));
    }

    #[test]
    fn missing_key_is_format_error() {
        let err = decode_reply::<IdeaBatch>("{\"concepts\": []}").unwrap_err();
        match err {
            GatewayError::Format { reason, .. } => assert!(reason.contains("ideas")),
            other => panic!("expected Format, got {other:?}"),
        }
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let long = "é".repeat(RAW_EXCERPT_CHARS + 10);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), RAW_EXCERPT_CHARS + 3);
        assert_eq!(excerpt("short"), "short");
    }
}
