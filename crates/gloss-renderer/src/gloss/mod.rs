//! Interlinear gloss block parsing and rendering.
//!
//! Data flow for one directive's content: each raw line is classified
//! by its leading marker ([`line`]), the classified lines are grouped
//! into headers, body, and footers ([`block`]), the body lines are
//! tokenized and zipped into per-word columns ([`align`]), and the
//! result is assembled into the output tree ([`tree`]) that renders to
//! HTML ([`html`]).

mod align;
mod block;
mod html;
mod line;
mod tree;

pub use align::{Column, align};
pub use block::{BodyGroup, GlossBlock, segment};
pub use tree::{GlossTree, NodeKind, build};

/// Directive name recognized by [`transform`].
pub const GLOSS_DIRECTIVE: &str = "gloss";

/// Transform one recognized directive's content into a gloss tree.
///
/// This is the plugin entry point: the host hands over the directive's
/// name and its raw inner lines (fence markers already stripped), and
/// splices the returned tree in place of the directive. Any directive
/// other than `gloss` returns `None` and must be left untouched by the
/// caller.
///
/// Every input is valid: empty content, missing lines, uneven token
/// counts, and marker-only blocks all produce a defined tree.
///
/// # Example
///
/// ```
/// use gloss_renderer::transform;
///
/// let tree = transform("gloss", &["mi sona", "= 1 understand"]).unwrap();
/// assert_eq!(tree.columns.len(), 2);
///
/// assert!(transform("other", &["foo"]).is_none());
/// ```
#[must_use]
pub fn transform<S: AsRef<str>>(directive_name: &str, lines: &[S]) -> Option<GlossTree> {
    if directive_name != GLOSS_DIRECTIVE {
        return None;
    }
    Some(build(segment(lines)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_non_gloss_directive_is_none() {
        assert_eq!(transform("other", &["foo"]), None);
        assert_eq!(transform("", &["foo"]), None);
        assert_eq!(transform("glossary", &["foo"]), None);
    }

    #[test]
    fn test_gloss_directive_always_produces_tree() {
        let tree = transform::<&str>("gloss", &[]).expect("empty gloss is valid");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_full_pipeline() {
        let tree = transform("gloss", &["| H", "wan tu luka", "= one two", "| F"])
            .expect("gloss directive");
        assert_eq!(tree.headers, vec!["H"]);
        assert_eq!(tree.footers, vec!["F"]);
        assert_eq!(tree.columns.len(), 3);
        assert_eq!(tree.columns[2].gloss, None);
    }
}
