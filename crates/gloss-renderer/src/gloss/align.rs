//! Tokenizing body lines and zipping them into aligned columns.

use super::block::BodyGroup;

/// One word position's aggregated material.
///
/// Any of the three roles may be absent: either its line is missing
/// from the body, or the line has fewer tokens than this position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Source-language word.
    pub text: Option<String>,
    /// Transliteration of the word.
    pub transliteration: Option<String>,
    /// Gloss of the word.
    pub gloss: Option<String>,
}

/// Split a line into whitespace-separated tokens, discarding empties.
///
/// No normalization of token content is performed.
pub(crate) fn tokenize(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

/// Zip the body's lines into per-word columns.
///
/// The longest line determines the column count; a shorter or absent
/// line contributes nothing at out-of-range positions. Token-count
/// mismatch is not an error.
pub fn align(body: &BodyGroup) -> Vec<Column> {
    let text = body.text.as_deref().map(tokenize).unwrap_or_default();
    let transliteration = body
        .transliteration
        .as_deref()
        .map(tokenize)
        .unwrap_or_default();
    let gloss = body.gloss.as_deref().map(tokenize).unwrap_or_default();

    let count = text.len().max(transliteration.len()).max(gloss.len());
    (0..count)
        .map(|i| Column {
            text: text.get(i).map(|t| (*t).to_owned()),
            transliteration: transliteration.get(i).map(|t| (*t).to_owned()),
            gloss: gloss.get(i).map(|t| (*t).to_owned()),
        })
        .collect()
}
