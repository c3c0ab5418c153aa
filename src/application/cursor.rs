// src/application/cursor.rs

/// Position inside an ordered list of questions.
///
/// Invariant: `index < len` whenever `len > 0`, and `index == 0` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionCursor {
    index: usize,
    len: usize,
}

impl QuestionCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_next(&self) -> bool {
        self.len > 0 && self.index < self.len - 1
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a zero-based position; out-of-range positions are ignored
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Follow a change in list length, keeping the index in range
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// "Question N of M", or "No questions" for an empty list
    pub fn label(&self) -> String {
        if self.is_empty() {
            "No questions".to_string()
        } else {
            format!("Question {} of {}", self.index + 1, self.len)
        }
    }
}
