//! Help Overlay
//!
//! Key-binding reference painted over the edit area until a key is pressed.

use super::screen::{ColorClass, ScreenBuffer};
use super::terminal::Terminal;
use crate::error::EditError;

const KEY_COLUMN: usize = 22;

/// Key bindings and what they do, in display order
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "Next / previous field"),
    ("Enter", "Accept field (new line in multi-line fields)"),
    ("Esc", "Finish editing the form"),
    ("Ctrl-V Enter", "Insert a literal new line"),
    ("Home / Ctrl-A", "Start of line"),
    ("End / Ctrl-E", "End of line"),
    ("Left / Ctrl-B", "Back one character"),
    ("Right / Ctrl-F", "Forward one character"),
    ("Ctrl-Left / Ctrl-Right", "Back / forward one word"),
    ("Shift + movement", "Extend the selection"),
    ("Backspace", "Delete selection or previous character"),
    ("Delete / Ctrl-D", "Delete selection or next character"),
    ("Ctrl-K", "Delete to end of line"),
    ("Ctrl-U", "Clear the field"),
    ("Ctrl-L", "Redraw"),
    ("Ctrl-C", "Abort"),
];

/// Help rows as composed screen buffers, `width` cells wide
pub fn help_rows(width: usize) -> Vec<ScreenBuffer> {
    let mut rows = Vec::with_capacity(KEY_BINDINGS.len() + 1);
    for (keys, action) in KEY_BINDINGS {
        let mut buf = ScreenBuffer::new_row(width);
        buf.write_at(0, ColorClass::Label, keys);
        buf.write_at(KEY_COLUMN, ColorClass::Hint, action);
        rows.push(buf);
    }
    let mut footer = ScreenBuffer::new_row(width);
    footer.write_at(0, ColorClass::Hint, "Press any key to continue...");
    rows.push(footer);
    rows
}

/// Paint the help overlay and wait for a key. The edit area is wiped again
/// before returning so the mode can redraw from scratch.
pub fn show_help<T: Terminal + ?Sized>(term: &mut T) -> Result<(), EditError> {
    let rows = help_rows(term.width().saturating_sub(1));
    term.reserve_rows(rows.len())?;
    term.move_to(0, 0)?;
    term.clear_to_end_of_screen()?;
    for (i, row) in rows.iter().enumerate() {
        term.paint(i, row)?;
    }
    term.move_to(0, rows.len() - 1)?;

    let key = term.read_key().map_err(EditError::InputUnreadable);

    term.move_to(0, 0)?;
    term.clear_to_end_of_screen()?;
    key.map(|_| ())
}
