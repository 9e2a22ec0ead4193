//! Host-side plumbing for gloss directives.
//!
//! The gloss core ([`crate::gloss`]) is a pure transformation over a
//! directive's lines. This module is the thin seam to a markdown
//! pipeline: it finds `:::gloss` fences (skipping fenced code), hands
//! the inner lines to the core, and splices the rendered HTML in place
//! while leaving all other content byte-identical.

mod fence;
mod parser;
mod processor;

pub use processor::GlossPreprocessor;
