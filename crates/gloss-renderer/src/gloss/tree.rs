//! The output tree handed back to the host.

use super::align::{Column, align};
use super::block::GlossBlock;

/// Stable identifying label for each node kind in the output tree.
///
/// Downstream renderers and stylesheets key off these labels, so they
/// are the compatibility surface of the output and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// The container for one whole gloss block.
    Block,
    /// Header annotation section.
    Header,
    /// Body section holding the aligned columns.
    Body,
    /// One aligned word position.
    Column,
    /// Source-language word within a column.
    WordText,
    /// Transliteration within a column.
    WordTransliteration,
    /// Gloss within a column.
    WordGloss,
    /// Footer annotation section.
    Footer,
}

impl NodeKind {
    /// CSS class emitted for this node kind.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Block => "gloss",
            Self::Header => "gloss-header",
            Self::Body => "gloss-body",
            Self::Column => "gloss-column",
            Self::WordText => "gloss-word-text",
            Self::WordTransliteration => "gloss-word-transliteration",
            Self::WordGloss => "gloss-word-gloss",
            Self::Footer => "gloss-footer",
        }
    }
}

/// Rendered gloss tree: a container owning optional header, body, and
/// footer sections.
///
/// Header and footer lines hold raw markdown text; their inline
/// formatting is re-parsed when the tree is rendered to HTML. The tree
/// is immutable once built. An empty tree is valid output and still
/// renders as a labeled container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlossTree {
    /// Header annotation lines, in source order.
    pub headers: Vec<String>,
    /// One column per aligned word position.
    pub columns: Vec<Column>,
    /// Footer annotation lines, in source order.
    pub footers: Vec<String>,
}

impl GlossTree {
    /// Whether the tree has no header, body, or footer content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.columns.is_empty() && self.footers.is_empty()
    }
}

/// Build the output tree for one segmented block.
#[must_use]
pub fn build(block: GlossBlock) -> GlossTree {
    let columns = block.body.as_ref().map(align).unwrap_or_default();
    GlossTree {
        headers: block.headers,
        columns,
        footers: block.footers,
    }
}
