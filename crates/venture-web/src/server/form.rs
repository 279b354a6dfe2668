//! `application/x-www-form-urlencoded` decoding for the page forms.

use std::collections::HashMap;

/// Decoded form fields. Later duplicates win.
#[derive(Debug, Default)]
pub struct Form {
    fields: HashMap<String, String>,
}

impl Form {
    /// Decode a urlencoded body or query string.
    ///
    /// Pairs that do not decode to UTF-8 are dropped.
    #[must_use]
    pub fn parse(encoded: &str) -> Self {
        let fields = encoded
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                match (decode_component(key), decode_component(value)) {
                    (Some(key), Some(value)) => Some((key, value)),
                    _ => {
                        tracing::debug!(pair, "dropping undecodable form pair");
                        None
                    }
                }
            })
            .collect();
        Self { fields }
    }

    /// Field value with surrounding whitespace removed; empty when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(std::borrow::Cow::into_owned)
}
