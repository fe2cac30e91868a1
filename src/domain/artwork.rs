//! Artwork record model and normalization from the raw catalog response.

use serde::{Deserialize, Serialize};

use crate::domain::constants::table::{MISSING_TEXT_PLACEHOLDER, TEXT_WORD_LIMIT};

/// One catalog item as surfaced to the table.
///
/// Immutable once fetched; built entirely from the remote catalog response
/// with placeholders substituted for missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: i64,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: i64,
    pub date_end: i64,
}

/// Raw catalog item as returned by the listing endpoint.
///
/// Every field except `id` may be absent or null.
#[derive(Debug, Clone, Deserialize)]
pub struct RawArtwork {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Normalize a raw catalog item: missing or empty text fields become
    /// the placeholder, missing dates become 0, and the long descriptive
    /// fields are truncated to [`TEXT_WORD_LIMIT`] words.
    pub fn from_raw(raw: RawArtwork) -> Self {
        Self {
            id: raw.id,
            title: text_or_placeholder(raw.title),
            place_of_origin: truncate_words(&text_or_placeholder(raw.place_of_origin), TEXT_WORD_LIMIT),
            artist_display: truncate_words(&text_or_placeholder(raw.artist_display), TEXT_WORD_LIMIT),
            inscriptions: truncate_words(&text_or_placeholder(raw.inscriptions), TEXT_WORD_LIMIT),
            date_start: raw.date_start.unwrap_or(0),
            date_end: raw.date_end.unwrap_or(0),
        }
    }
}

/// Empty strings count as missing, same as absent fields.
fn text_or_placeholder(value: Option<String>) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => MISSING_TEXT_PLACEHOLDER.to_string(),
    }
}

/// Truncate `text` to the first `word_limit` space-separated words,
/// appending "..." when anything was cut.
pub fn truncate_words(text: &str, word_limit: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > word_limit {
        format!("{}...", words[..word_limit].join(" "))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: i64) -> RawArtwork {
        RawArtwork {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    #[test]
    fn test_truncate_below_limit_is_untouched() {
        assert_eq!(truncate_words("Oil on canvas", 8), "Oil on canvas");
    }

    #[test]
    fn test_truncate_at_limit_has_no_ellipsis() {
        let text = "one two three four five six seven eight";
        assert_eq!(truncate_words(text, 8), text);
    }

    #[test]
    fn test_truncate_above_limit_keeps_eight_words() {
        let text = "one two three four five six seven eight nine ten";
        assert_eq!(
            truncate_words(text, 8),
            "one two three four five six seven eight..."
        );
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let artwork = Artwork::from_raw(raw(42));
        assert_eq!(artwork.id, 42);
        assert_eq!(artwork.title, "N/A");
        assert_eq!(artwork.place_of_origin, "N/A");
        assert_eq!(artwork.artist_display, "N/A");
        assert_eq!(artwork.inscriptions, "N/A");
        assert_eq!(artwork.date_start, 0);
        assert_eq!(artwork.date_end, 0);
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut item = raw(7);
        item.place_of_origin = Some(String::new());
        let artwork = Artwork::from_raw(item);
        assert_eq!(artwork.place_of_origin, "N/A");
    }

    #[test]
    fn test_long_artist_display_is_truncated() {
        let mut item = raw(7);
        item.artist_display = Some(
            "Vincent van Gogh Dutch painter active in France until his death".to_string(),
        );
        let artwork = Artwork::from_raw(item);
        assert_eq!(
            artwork.artist_display,
            "Vincent van Gogh Dutch painter active in France..."
        );
    }

    #[test]
    fn test_title_is_not_truncated() {
        let mut item = raw(7);
        let long_title = "a very long title that runs well past the eight word budget".to_string();
        item.title = Some(long_title.clone());
        let artwork = Artwork::from_raw(item);
        assert_eq!(artwork.title, long_title);
    }
}
