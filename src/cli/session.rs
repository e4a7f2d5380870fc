//! Edit Session Module
//!
//! The mutable state of one field edit: the text, the cursor, and the
//! selection. Offsets count characters, not bytes, so values holding
//! non-ASCII text are edited without splitting code points.
//!
//! Invariants held after every operation:
//! - `cursor <= len` and `sel_start <= sel_end <= len`
//! - an empty selection sits at the cursor
//! - a non-empty selection has the cursor on one of its ends

/// Text, cursor, and selection for one field
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    text: Vec<char>,
    cursor: usize,
    sel_start: usize,
    sel_end: usize,
    /// Set by Ctrl-V, consumed by the next key
    pub verbatim: bool,
}

impl EditSession {
    /// Start a session on `initial` with the cursor at 0
    pub fn new(initial: &str) -> Self {
        Self {
            text: initial.chars().collect(),
            ..Self::default()
        }
    }

    /// The current value
    pub fn value(&self) -> String {
        self.text.iter().collect()
    }

    /// The text as characters; offsets index this slice
    pub fn chars(&self) -> &[char] {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Caret offset, `0..=len`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selection as `(start, end)`
    pub fn selection(&self) -> (usize, usize) {
        (self.sel_start, self.sel_end)
    }

    /// Whether any text is selected
    pub fn has_selection(&self) -> bool {
        self.sel_start != self.sel_end
    }

    /// Whether the caret sits after the last character
    pub fn is_at_end(&self) -> bool {
        self.cursor == self.text.len()
    }

    /// Replace the selection (or insert at the cursor) with `text`
    pub fn insert(&mut self, text: &str) {
        let tail = self.text.split_off(self.sel_end);
        self.text.truncate(self.sel_start);
        self.text.extend(text.chars());
        let at = self.text.len();
        self.text.extend(tail);
        self.collapse(at);
    }

    /// Backspace: remove the selection, else the character before the cursor
    pub fn delete_selection_or_backward(&mut self) {
        if self.has_selection() {
            self.delete_selection();
        } else if self.cursor > 0 {
            self.text.remove(self.cursor - 1);
            self.collapse(self.cursor - 1);
        }
    }

    /// Delete: remove the selection, else the character under the cursor
    pub fn delete_selection_or_forward(&mut self) {
        if self.has_selection() {
            self.delete_selection();
        } else if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            self.collapse(self.cursor);
        }
    }

    fn delete_selection(&mut self) {
        self.text.drain(self.sel_start..self.sel_end);
        self.collapse(self.sel_start);
    }

    /// Move the cursor to `target`, clamped to the text.
    ///
    /// With `extend` the selection stretches from its anchor (the end the
    /// cursor is not on) to the target. Crossing the anchor flips which end
    /// moves; landing on it empties the selection.
    pub fn move_cursor(&mut self, target: usize, extend: bool) {
        let target = target.min(self.text.len());
        if !extend {
            self.collapse(target);
            return;
        }
        let anchor = if self.cursor == self.sel_start {
            self.sel_end
        } else {
            self.sel_start
        };
        self.cursor = target;
        self.sel_start = anchor.min(target);
        self.sel_end = anchor.max(target);
    }

    /// Select `start..end` with the cursor at `start`, so the selected tail
    /// is what a following keystroke replaces.
    pub fn select(&mut self, start: usize, end: usize) {
        let end = end.min(self.text.len());
        let start = start.min(end);
        self.sel_start = start;
        self.sel_end = end;
        self.cursor = start;
    }

    /// Ctrl-K: drop everything from the cursor on
    pub fn truncate_at_cursor(&mut self) {
        self.text.truncate(self.cursor);
        self.collapse(self.cursor);
    }

    /// Remove `start..end`, leaving the cursor at `start`
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let end = end.min(self.text.len());
        let start = start.min(end);
        self.text.drain(start..end);
        self.collapse(start);
    }

    /// Ctrl-U: empty the buffer
    pub fn clear(&mut self) {
        self.text.clear();
        self.collapse(0);
    }

    /// Replace the whole value, keeping offsets in range
    pub fn set_value(&mut self, value: &str) {
        self.text = value.chars().collect();
        let cursor = self.cursor.min(self.text.len());
        self.collapse(cursor);
    }

    /// Split the value into the text before, inside, and after the selection
    pub fn split_on_selection(&self) -> (String, String, String) {
        let pre = self.text[..self.sel_start].iter().collect();
        let sel = self.text[self.sel_start..self.sel_end].iter().collect();
        let post = self.text[self.sel_end..].iter().collect();
        (pre, sel, post)
    }

    fn collapse(&mut self, at: usize) {
        self.cursor = at;
        self.sel_start = at;
        self.sel_end = at;
    }
}
