//! Container directive fence recognition.
//!
//! Recognizes the `:::name` / `:::` lines that delimit CommonMark
//! container directives. Only the fence lines are parsed here; what
//! happens to the lines between them is up to the processor.

/// A line that opens or closes a container directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DirectiveLine {
    /// `:::name` — three or more colons followed by a directive name.
    /// Anything after the name (arguments, attributes) is not parsed.
    Open { name: String },
    /// `:::` — colons only, optionally padded with whitespace.
    Close,
}

/// Parse a line as a container directive fence.
///
/// Returns `None` for anything that is not a directive fence, including
/// `:::` runs followed by an invalid name.
pub(crate) fn parse_fence_line(line: &str) -> Option<DirectiveLine> {
    let trimmed = line.trim();
    if !trimmed.starts_with(":::") {
        return None;
    }

    let colon_count = trimmed.chars().take_while(|&c| c == ':').count();
    let after = trimmed[colon_count..].trim();
    if after.is_empty() {
        return Some(DirectiveLine::Close);
    }

    // The name ends at arguments (`[`, `{`) or whitespace.
    let name_end = after
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(after.len());
    let name = &after[..name_end];
    if !is_valid_directive_name(name) {
        return None;
    }

    Some(DirectiveLine::Open {
        name: name.to_owned(),
    })
}

/// Valid names contain only alphanumerics, hyphens, and underscores.
fn is_valid_directive_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
