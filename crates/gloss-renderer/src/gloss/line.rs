//! Line classification for gloss block content.
//!
//! Each line inside a `:::gloss` block carries a leading marker that
//! identifies its role: `|` for annotation, `/` for transliteration,
//! `=` for gloss text. A line with no marker is a word line.

/// Role assigned to one raw line inside a gloss block.
///
/// Annotation lines become headers or footers depending on whether they
/// occur before or after the body. That distinction is positional, so it
/// is resolved by the segmenter, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    /// `|` marker: header or footer annotation.
    Annotation,
    /// `/` marker: transliteration of the source text.
    Transliteration,
    /// `=` marker: word-by-word gloss.
    Gloss,
    /// No marker: the source-language word line.
    Word,
}

/// A line tagged with its role, marker stripped and content trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ClassifiedLine {
    pub(crate) role: Role,
    pub(crate) content: String,
}

/// Classify one line of gloss block content.
///
/// Total over all inputs: a line matching no marker is a word line, so
/// there are no error cases.
pub(crate) fn classify(line: &str) -> ClassifiedLine {
    let trimmed = line.trim_start();
    let (role, rest) = match trimmed.chars().next() {
        Some('|') => (Role::Annotation, &trimmed[1..]),
        Some('/') => (Role::Transliteration, &trimmed[1..]),
        Some('=') => (Role::Gloss, &trimmed[1..]),
        _ => (Role::Word, trimmed),
    };

    ClassifiedLine {
        role,
        content: rest.trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_annotation_marker() {
        let line = classify("| Toki Pona Example");
        assert_eq!(line.role, Role::Annotation);
        assert_eq!(line.content, "Toki Pona Example");
    }

    #[test]
    fn test_transliteration_marker() {
        let line = classify("/ nǐ");
        assert_eq!(line.role, Role::Transliteration);
        assert_eq!(line.content, "nǐ");
    }

    #[test]
    fn test_gloss_marker() {
        let line = classify("= 1 understand");
        assert_eq!(line.role, Role::Gloss);
        assert_eq!(line.content, "1 understand");
    }

    #[test]
    fn test_no_marker_is_word_line() {
        let line = classify("mi sona");
        assert_eq!(line.role, Role::Word);
        assert_eq!(line.content, "mi sona");
    }

    #[test]
    fn test_marker_without_space() {
        let line = classify("=person");
        assert_eq!(line.role, Role::Gloss);
        assert_eq!(line.content, "person");
    }

    #[test]
    fn test_bare_marker() {
        let line = classify("|");
        assert_eq!(line.role, Role::Annotation);
        assert_eq!(line.content, "");
    }

    #[test]
    fn test_leading_whitespace_before_marker() {
        let line = classify("  | header");
        assert_eq!(line.role, Role::Annotation);
        assert_eq!(line.content, "header");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let line = classify("jan sona   ");
        assert_eq!(line.role, Role::Word);
        assert_eq!(line.content, "jan sona");
    }

    #[test]
    fn test_empty_line() {
        let line = classify("");
        assert_eq!(line.role, Role::Word);
        assert_eq!(line.content, "");
    }

    #[test]
    fn test_marker_only_in_leading_position() {
        // A marker character mid-line is ordinary content.
        let line = classify("a = b");
        assert_eq!(line.role, Role::Word);
        assert_eq!(line.content, "a = b");
    }
}
