//! Grouping the lines of one gloss block by role.

use super::line::{Role, classify};

/// The up to three parallel body lines of a gloss block.
///
/// Each line is independently optional, but a `BodyGroup` only exists in
/// a [`GlossBlock`] once at least one of them is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyGroup {
    /// Source-language word line.
    pub text: Option<String>,
    /// Transliteration line (`/`).
    pub transliteration: Option<String>,
    /// Word-by-word gloss line (`=`).
    pub gloss: Option<String>,
}

impl BodyGroup {
    fn is_empty(&self) -> bool {
        self.text.is_none() && self.transliteration.is_none() && self.gloss.is_none()
    }
}

/// Parsed representation of one gloss directive's content.
///
/// Headers always precede the body, footers always follow it. A block
/// with no body and no annotation lines is a valid empty gloss.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlossBlock {
    /// Annotation lines seen before the body, in source order.
    pub headers: Vec<String>,
    /// The word/transliteration/gloss triple, if any of it is present.
    pub body: Option<BodyGroup>,
    /// Annotation lines seen after the body started, in source order.
    pub footers: Vec<String>,
}

/// Group the raw lines of one gloss block by role.
///
/// Annotation lines are headers until the body starts (the first word,
/// transliteration, or gloss line) and footers afterwards. The body
/// lines may appear in any order; the first occurrence of each role
/// wins and any repeat of an already-seen role is ignored. A block
/// containing only annotation lines is all headers: telling footers
/// apart from headers requires having seen a body first.
///
/// Blank lines carry no marker and no tokens; they are skipped rather
/// than allowed to claim the word-line slot.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> GlossBlock {
    let mut block = GlossBlock::default();
    // Doubles as the "body started?" flag for footer detection.
    let mut body = BodyGroup::default();

    for raw in lines {
        let line = classify(raw.as_ref());
        if line.role == Role::Word && line.content.is_empty() {
            continue;
        }

        let slot = match line.role {
            Role::Annotation => {
                if body.is_empty() {
                    block.headers.push(line.content);
                } else {
                    block.footers.push(line.content);
                }
                continue;
            }
            Role::Word => &mut body.text,
            Role::Transliteration => &mut body.transliteration,
            Role::Gloss => &mut body.gloss,
        };
        if slot.is_none() {
            *slot = Some(line.content);
        }
    }

    if !body.is_empty() {
        block.body = Some(body);
    }
    block
}
