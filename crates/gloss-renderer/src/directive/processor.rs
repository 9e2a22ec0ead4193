//! Markdown preprocessing for gloss directives.
//!
//! Walks the input line by line, replaces each `:::gloss` block with
//! rendered HTML (which passes through a CommonMark renderer
//! unchanged), and leaves every other line byte-identical — unknown
//! directives and their bodies included.

use crate::gloss::{GLOSS_DIRECTIVE, transform};

use super::fence::FenceTracker;
use super::parser::{DirectiveLine, parse_fence_line};

/// Preprocessor that renders `:::gloss` blocks in place.
///
/// Processing is synchronous and stateless across blocks: each block is
/// parsed and rendered to completion before the walk continues, and the
/// only state carried between lines is the fence tracker and the
/// currently collecting block.
///
/// # Example
///
/// ```
/// use gloss_renderer::GlossPreprocessor;
///
/// let mut preprocessor = GlossPreprocessor::new();
/// let output = preprocessor.process(":::gloss\njan\n= person\n:::");
/// assert!(output.contains(r#"class="gloss""#));
/// ```
#[derive(Debug)]
pub struct GlossPreprocessor {
    fence: FenceTracker,
    warnings: Vec<String>,
}

impl Default for GlossPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// A `:::gloss` block being collected, from its opening line until the
/// closing `:::`.
struct OpenBlock {
    /// Line number of the opening fence (1-indexed), for warnings.
    start_line: usize,
    lines: Vec<String>,
}

impl GlossPreprocessor {
    /// Create a new preprocessor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fence: FenceTracker::new(),
            warnings: Vec::new(),
        }
    }

    /// Preprocess markdown, rendering gloss directives in place.
    ///
    /// Rendered output contains no gloss fences, so running the
    /// preprocessor over its own output is a no-op.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut open_block: Option<OpenBlock> = None;

        let lines: Vec<&str> = input.lines().collect();
        let line_count = lines.len();

        for (idx, line) in lines.iter().enumerate() {
            if let Some(mut block) = open_block.take() {
                if matches!(parse_fence_line(line), Some(DirectiveLine::Close)) {
                    render_block(&block.lines, &mut output);
                } else {
                    // Nested directives are not supported inside a
                    // gloss block; everything up to the closing fence
                    // is content.
                    block.lines.push((*line).to_owned());
                    open_block = Some(block);
                    continue;
                }
            } else {
                self.fence.update(line);
                let is_gloss_open = !self.fence.in_fence()
                    && matches!(
                        parse_fence_line(line),
                        Some(DirectiveLine::Open { ref name }) if name == GLOSS_DIRECTIVE
                    );
                if is_gloss_open {
                    open_block = Some(OpenBlock {
                        start_line: idx + 1,
                        lines: Vec::new(),
                    });
                    continue;
                }
                // Strict pass-through for everything else: plain lines,
                // fenced code, and non-gloss directives with their
                // bodies come out byte-identical.
                output.push_str(line);
            }

            if idx < line_count - 1 || input.ends_with('\n') {
                output.push('\n');
            }
        }

        if let Some(block) = open_block {
            self.warnings.push(format!(
                "line {}: unclosed :::gloss (missing closing :::)",
                block.start_line
            ));
            render_block(&block.lines, &mut output);
            if input.ends_with('\n') {
                output.push('\n');
            }
        }

        output
    }

    /// Warnings generated during processing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn render_block(lines: &[String], output: &mut String) {
    if let Some(tree) = transform(GLOSS_DIRECTIVE, lines) {
        tree.write_html(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn process(input: &str) -> String {
        GlossPreprocessor::new().process(input)
    }

    #[test]
    fn test_non_gloss_directive_passes_through() {
        let input = ":::other\nfoo\n:::";
        assert_eq!(process(input), input);
    }

    #[test]
    fn test_non_gloss_directive_with_attributes_passes_through() {
        let input = ":::note[Important]{#id .highlight}\nBody\n:::\n";
        assert_eq!(process(input), input);
    }

    #[test]
    fn test_simple_gloss() {
        let output = process(":::gloss\njan\n= person\n:::");
        assert!(output.contains(r#"class="gloss""#));
        assert!(output.contains(r#"class="gloss-body""#));
        assert!(output.contains("jan"));
        assert!(output.contains("person"));
    }

    #[test]
    fn test_aligns_words_into_columns() {
        let output = process(":::gloss\nmi sona\n= 1 understand\n:::");
        assert_eq!(output.matches("gloss-column").count(), 2);
    }

    #[test]
    fn test_header_lines() {
        let output = process(":::gloss\n| Toki Pona Example\nni o lon\n= DEM OPT exist\n:::");
        assert!(output.contains(r#"class="gloss-header""#));
        assert!(output.contains("Toki Pona Example"));
    }

    #[test]
    fn test_footer_lines() {
        let output = process(":::gloss\nsuno o lon\n= light OPT exist\n| 'Let there be light.'\n:::");
        assert!(output.contains(r#"class="gloss-footer""#));
        assert!(output.contains("'Let there be light.'"));
    }

    #[test]
    fn test_transliteration_lines() {
        let output = process(":::gloss\n你\n/ nǐ\n= 2SG\n:::");
        assert!(output.contains("gloss-word-transliteration"));
        assert!(output.contains("nǐ"));
    }

    #[test]
    fn test_multiple_header_lines_joined_by_break() {
        let output =
            process(":::gloss\n| this is a header\n| this is another header\npona\n= good\n:::");
        assert!(output.contains("this is a header<br>this is another header"));
    }

    #[test]
    fn test_multiple_footer_lines_joined_by_break() {
        let output = process(
            ":::gloss\npan lipu\n= bread sheet\n| \"pancakes\"\n| (lit. sheet-like staple food)\n:::",
        );
        assert!(output.contains("&quot;pancakes&quot;<br>(lit. sheet-like staple food)"));
    }

    #[test]
    fn test_markdown_formatting_preserved_in_headers() {
        let output = process(":::gloss\n| *Important* example\nwe\n= 1PL\n:::");
        assert!(output.contains("<em>Important</em> example"));
    }

    #[test]
    fn test_empty_gloss_block() {
        let output = process(":::gloss\n:::");
        assert_eq!(output, r#"<div class="gloss"></div>"#);
    }

    #[test]
    fn test_gloss_with_only_headers() {
        let output = process(":::gloss\n| Just a header\n:::");
        assert!(output.contains(r#"class="gloss-header""#));
        assert!(!output.contains(r#"class="gloss-body""#));
    }

    #[test]
    fn test_uneven_column_counts() {
        let output = process(":::gloss\nwan tu luka\n= one two\n:::");
        assert_eq!(output.matches("gloss-column").count(), 3);
    }

    #[test]
    fn test_three_lines() {
        let output = process(":::gloss\nhey\n/ hey\n= hey\n:::");
        assert!(output.contains("gloss-word-text"));
        assert!(output.contains("gloss-word-transliteration"));
        assert!(output.contains("gloss-word-gloss"));
    }

    #[test]
    fn test_gloss_fence_inside_code_block_ignored() {
        let input = "```\n:::gloss\njan\n:::\n```";
        assert_eq!(process(input), input);
    }

    #[test]
    fn test_surrounding_document_preserved() {
        let output = process("before\n\n:::gloss\njan\n= person\n:::\n\nafter\n");
        assert!(output.starts_with("before\n\n<div class=\"gloss\">"));
        assert!(output.ends_with("</div>\n\nafter\n"));
    }

    #[test]
    fn test_multiple_blocks_are_independent() {
        let output = process(":::gloss\njan\n= person\n:::\n\n:::gloss\nmi sona\n= 1 understand\n:::");
        assert_eq!(output.matches(r#"<div class="gloss">"#).count(), 2);
        assert_eq!(output.matches("gloss-column").count(), 3);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = process(":::gloss\nmi sona\n= 1 understand\n:::\n\nplain text\n");
        let twice = process(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stray_close_passes_through() {
        let input = "text\n:::\nmore";
        let mut preprocessor = GlossPreprocessor::new();
        assert_eq!(preprocessor.process(input), input);
        // The close may belong to an untracked non-gloss directive.
        assert!(preprocessor.warnings().is_empty());
    }

    #[test]
    fn test_unclosed_gloss_renders_and_warns() {
        let mut preprocessor = GlossPreprocessor::new();
        let output = preprocessor.process(":::gloss\njan\n= person");
        assert!(output.contains(r#"class="gloss""#));
        assert!(output.contains("person"));
        let warnings = preprocessor.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unclosed"));
        assert!(warnings[0].contains("line 1"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(process(""), "");
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(process("plain\n"), "plain\n");
        assert_eq!(process("plain"), "plain");
    }
}
