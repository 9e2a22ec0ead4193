//! Interlinear gloss block renderer for CommonMark gloss directives.
//!
//! An interlinear gloss aligns a source-language line, an optional
//! transliteration, and a word-by-word gloss into per-word columns,
//! optionally framed by header and footer annotation lines:
//!
//! ```text
//! :::gloss
//! | Toki Pona Example
//! mi sona
//! = 1 understand
//! | 'I understand.'
//! :::
//! ```
//!
//! # Architecture
//!
//! The core is a pure function over one directive's content:
//! [`transform`] takes the directive name and its raw inner lines and
//! returns a [`GlossTree`] — or `None` for any non-gloss directive,
//! which the caller must leave untouched. Inside, lines are classified
//! by leading marker (`|` annotation, `/` transliteration, `=` gloss,
//! none = word line), grouped into headers/body/footers, tokenized,
//! and zipped into [`Column`]s; the longest line determines the column
//! count and missing positions are simply omitted.
//!
//! [`GlossPreprocessor`] is the host adapter: it walks a markdown
//! document line by line, replaces `:::gloss` blocks with the tree's
//! HTML rendering, and passes everything else through byte-identical.
//! The class labels on the rendered nodes ([`NodeKind::as_class`]) are
//! the compatibility surface for downstream styling.
//!
//! # Example
//!
//! ```
//! use gloss_renderer::{GlossPreprocessor, transform};
//!
//! let tree = transform("gloss", &["mi sona", "= 1 understand"]).unwrap();
//! assert_eq!(tree.columns.len(), 2);
//!
//! let mut preprocessor = GlossPreprocessor::new();
//! let html = preprocessor.process(":::gloss\njan\n= person\n:::");
//! assert!(html.contains(r#"class="gloss-column""#));
//! ```

mod directive;
mod gloss;
mod util;

pub use directive::GlossPreprocessor;
pub use gloss::{
    BodyGroup, Column, GLOSS_DIRECTIVE, GlossBlock, GlossTree, NodeKind, align, build, segment,
    transform,
};
pub use util::escape_html;
