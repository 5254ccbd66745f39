use htmlentity::entity::{ICodedDataTrait, decode};
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::TITLE_PATTERN;
use crate::error::ExtractionError;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TITLE_PATTERN).expect("title pattern is a valid regex"));

/// Extract the decoded, whitespace-normalized title from HTML content
pub fn extract_title(html: &str) -> Result<String, ExtractionError> {
    let raw = TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or(ExtractionError::TitleNotFound)?
        .as_str();

    let title = normalize_whitespace(&decode_entities(raw));
    if title.is_empty() {
        return Err(ExtractionError::EmptyTitle);
    }
    Ok(title)
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(raw: &str) -> String {
    match decode(raw.as_bytes()).to_string() {
        Ok(decoded) => decoded,
        Err(_) => {
            tracing::debug!("entity decoding failed, keeping raw title text");
            raw.to_string()
        }
    }
}
