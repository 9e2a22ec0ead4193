//! HTML rendering of the gloss tree.
//!
//! Word tokens are emitted as escaped literal text. Header and footer
//! lines are markdown: their inline formatting (emphasis, strong,
//! inline code, strikethrough, links) is re-parsed via pulldown-cmark
//! rather than treated literally.

use std::fmt::Write;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use super::align::Column;
use super::tree::{GlossTree, NodeKind};
use crate::util::escape_html;

impl GlossTree {
    /// Render the tree to HTML.
    ///
    /// The output carries the stable class label of every node kind
    /// (see [`NodeKind::as_class`]); an empty tree still renders as a
    /// labeled container.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_html(&mut out);
        out
    }

    /// Render the tree to HTML, appending to `out`.
    pub fn write_html(&self, out: &mut String) {
        let _ = write!(out, r#"<div class="{}">"#, NodeKind::Block.as_class());

        if !self.headers.is_empty() {
            write_annotation(NodeKind::Header, &self.headers, out);
        }
        if !self.columns.is_empty() {
            let _ = write!(out, r#"<div class="{}">"#, NodeKind::Body.as_class());
            for column in &self.columns {
                write_column(column, out);
            }
            out.push_str("</div>");
        }
        if !self.footers.is_empty() {
            write_annotation(NodeKind::Footer, &self.footers, out);
        }

        out.push_str("</div>");
    }
}

/// Write a header or footer section: each line inline-parsed, lines
/// joined by explicit `<br>` nodes.
fn write_annotation(kind: NodeKind, lines: &[String], out: &mut String) {
    let _ = write!(out, r#"<div class="{}">"#, kind.as_class());
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push_str("<br>");
        }
        render_inline(line, out);
    }
    out.push_str("</div>");
}

/// Write one column: sub-nodes in fixed text, transliteration, gloss
/// order, absent roles omitted entirely.
fn write_column(column: &Column, out: &mut String) {
    let _ = write!(out, r#"<div class="{}">"#, NodeKind::Column.as_class());

    let parts = [
        (NodeKind::WordText, column.text.as_deref()),
        (NodeKind::WordTransliteration, column.transliteration.as_deref()),
        (NodeKind::WordGloss, column.gloss.as_deref()),
    ];
    for (kind, value) in parts {
        if let Some(value) = value {
            let _ = write!(
                out,
                r#"<span class="{}">{}</span>"#,
                kind.as_class(),
                escape_html(value)
            );
        }
    }

    out.push_str("</div>");
}

/// Render one line of annotation text, delegating inline markdown to
/// pulldown-cmark. Block structure cannot occur in a single line beyond
/// the implicit paragraph, which is dropped.
fn render_inline(text: &str, out: &mut String) {
    for event in Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Emphasis => out.push_str("<em>"),
                Tag::Strong => out.push_str("<strong>"),
                Tag::Strikethrough => out.push_str("<s>"),
                Tag::Link { dest_url, .. } => {
                    let _ = write!(out, r#"<a href="{}">"#, escape_html(&dest_url));
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Emphasis => out.push_str("</em>"),
                TagEnd::Strong => out.push_str("</strong>"),
                TagEnd::Strikethrough => out.push_str("</s>"),
                TagEnd::Link => out.push_str("</a>"),
                _ => {}
            },
            Event::Text(text) => out.push_str(&escape_html(&text)),
            Event::Code(code) => {
                let _ = write!(out, "<code>{}</code>", escape_html(&code));
            }
            Event::Html(html) | Event::InlineHtml(html) => out.push_str(&html),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            _ => {}
        }
    }
}
