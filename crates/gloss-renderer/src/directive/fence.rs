//! Code fence tracking.
//!
//! Directive fences inside ``` or ~~~ code blocks are literal content
//! and must not open or close a gloss block. Closing fences must use
//! the opening character and be at least as long as the opening fence.

#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Character and length of the currently open fence, if any.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether we are currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line. Returns `true` if the line is a fence delimiter.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self.open {
            Some((ch, len)) => {
                if closes_fence(trimmed, ch, len) {
                    self.open = None;
                    true
                } else {
                    false
                }
            }
            None => {
                if let Some(opened) = opens_fence(trimmed) {
                    self.open = Some(opened);
                    true
                } else {
                    false
                }
            }
        }
    }
}

fn opens_fence(trimmed: &str) -> Option<(char, usize)> {
    let ch = trimmed.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }
    let len = trimmed.chars().take_while(|&c| c == ch).count();
    (len >= 3).then_some((ch, len))
}

fn closes_fence(trimmed: &str, ch: char, min_len: usize) -> bool {
    let len = trimmed.chars().take_while(|&c| c == ch).count();
    // Fence chars are ASCII, so the char count is also a byte offset.
    len >= min_len && trimmed[len..].chars().all(char::is_whitespace)
}
