//! Multi-line Edit Mode
//!
//! Shows the value as rows of the entry box, split at newlines and wrapped
//! at the box width. Editing works on the same session as single-line mode;
//! once the value fits on one row again the single-line mode takes over.

use tracing::trace;

use super::editor::{EditResult, FieldEditor, Mode, ModeStep};
use super::help;
use super::keys::Key;
use super::screen::{ColorClass, ScreenBuffer};
use super::terminal::Terminal;
use super::words::{next_word_boundary, previous_word_boundary};
use crate::error::EditError;

/// Visual rows of `text` as `(start, end)` offsets. A row ends at a newline
/// (which belongs to no row) or after `width` characters.
pub fn layout_rows(text: &[char], width: usize) -> Vec<(usize, usize)> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut start = 0;
    for (i, &ch) in text.iter().enumerate() {
        if ch == '\n' {
            rows.push((start, i));
            start = i + 1;
        } else if i - start == width {
            rows.push((start, i));
            start = i;
        }
    }
    rows.push((start, text.len()));
    rows
}

/// Row and column of `offset`. An offset on a wrap point belongs to the
/// later row.
pub fn caret_position(rows: &[(usize, usize)], offset: usize) -> (usize, usize) {
    let row = rows
        .iter()
        .rposition(|&(start, _)| start <= offset)
        .unwrap_or(0);
    let (start, end) = rows[row];
    (row, offset.min(end) - start)
}

/// Offset at `col` on `row`, clamped to the row's end
pub fn offset_at(rows: &[(usize, usize)], row: usize, col: usize) -> usize {
    let (start, end) = rows[row.min(rows.len() - 1)];
    start + col.min(end - start)
}

impl<'a, T: Terminal> FieldEditor<'a, T> {
    /// Edit the field across several rows
    pub fn multiline_mode(&mut self) -> Result<ModeStep, EditError> {
        self.term.clear_to_end_of_screen()?;
        let step = self.multiline_loop();
        let restored = self.restore_screen();
        let step = step?;
        restored?;
        Ok(step)
    }

    fn multiline_loop(&mut self) -> Result<ModeStep, EditError> {
        let entry_x = self.entry_x();
        let field_width = self.field_width();

        loop {
            let rows = layout_rows(self.session.chars(), field_width);
            self.draw_multiline(&rows, entry_x, field_width)?;
            let (row, col) = caret_position(&rows, self.session.cursor());
            self.term.move_to(entry_x + col, row)?;

            let key = self.read_key()?;
            trace!(?key, "multi-line key");

            let cursor = self.session.cursor();
            let (row_start, row_end) = rows[row];
            let mut edited = false;
            match key {
                Key::Home | Key::Ctrl('a') => self.session.move_cursor(row_start, false),
                Key::ShiftHome => self.session.move_cursor(row_start, true),
                Key::End | Key::Ctrl('e') => self.session.move_cursor(row_end, false),
                Key::ShiftEnd => self.session.move_cursor(row_end, true),
                Key::Left | Key::Ctrl('b') => {
                    self.session.move_cursor(cursor.saturating_sub(1), false)
                }
                Key::ShiftLeft => self.session.move_cursor(cursor.saturating_sub(1), true),
                Key::Right | Key::Ctrl('f') => self.session.move_cursor(cursor + 1, false),
                Key::ShiftRight => self.session.move_cursor(cursor + 1, true),
                Key::CtrlLeft | Key::CtrlShiftLeft => {
                    let target = previous_word_boundary(self.session.chars(), cursor);
                    self.session.move_cursor(target, key == Key::CtrlShiftLeft);
                }
                Key::CtrlRight | Key::CtrlShiftRight => {
                    let target = next_word_boundary(self.session.chars(), cursor);
                    self.session.move_cursor(target, key == Key::CtrlShiftRight);
                }
                Key::Up if row > 0 => {
                    self.session.move_cursor(offset_at(&rows, row - 1, col), false)
                }
                Key::Down if row + 1 < rows.len() => {
                    self.session.move_cursor(offset_at(&rows, row + 1, col), false)
                }
                Key::Backspace => {
                    self.session.delete_selection_or_backward();
                    edited = true;
                }
                Key::Delete | Key::Ctrl('d') => {
                    self.session.delete_selection_or_forward();
                    edited = true;
                }
                Key::Ctrl('k') => {
                    // At the end of a row this joins the next line.
                    let end = if cursor == row_end { cursor + 1 } else { row_end };
                    self.session.delete_range(cursor, end);
                    edited = true;
                }
                Key::Ctrl('u') => {
                    self.session.clear();
                    edited = true;
                }
                Key::Enter => self.session.insert("\n"),
                Key::Tab => return Ok(ModeStep::Finish(EditResult::Next)),
                Key::BackTab => return Ok(ModeStep::Finish(EditResult::Previous)),
                Key::Escape => return Ok(ModeStep::Finish(EditResult::Done)),
                Key::Ctrl('l') => return Ok(ModeStep::Enter(Mode::MultiLine)),
                Key::Ctrl('c') => return Err(EditError::Interrupted),
                Key::F1 => {
                    help::show_help(&mut *self.term)?;
                    return Ok(ModeStep::Enter(Mode::MultiLine));
                }
                other => {
                    if let Some(ch) = other.printable() {
                        let mut buf = [0u8; 4];
                        self.session.insert(ch.encode_utf8(&mut buf));
                    }
                }
            }

            if edited && self.fits_one_row(field_width) {
                return Ok(ModeStep::Enter(Mode::SingleLine));
            }
        }
    }

    fn fits_one_row(&self, field_width: usize) -> bool {
        self.session.len() <= field_width && !self.session.chars().contains(&'\n')
    }

    fn draw_multiline(
        &mut self,
        rows: &[(usize, usize)],
        entry_x: usize,
        field_width: usize,
    ) -> Result<(), EditError> {
        let row_width = self.term.width().saturating_sub(1);
        let (sel_start, sel_end) = self.session.selection();
        self.term.reserve_rows(rows.len())?;

        for (i, &(start, end)) in rows.iter().enumerate() {
            let mut buf = ScreenBuffer::new_row(row_width);
            if i == 0 {
                buf.write_at(0, ColorClass::Label, &self.field.label);
            }
            buf.fill(entry_x, field_width, ColorClass::Entry);
            buf.write_at(entry_x, ColorClass::Entry, "");
            for offset in start..end {
                let class = if (sel_start..sel_end).contains(&offset) {
                    ColorClass::Selected
                } else {
                    ColorClass::Entry
                };
                let mut utf8 = [0u8; 4];
                buf.append(class, self.session.chars()[offset].encode_utf8(&mut utf8));
            }
            self.term.paint(i, &buf)?;
        }

        // Rows left over from a longer value
        self.term.move_to(0, rows.len())?;
        self.term.clear_to_end_of_screen()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::field::FieldDescriptor;
    use crate::cli::keys::keys_from_bytes;
    use crate::cli::terminal::scripted::ScriptedTerminal;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_layout_splits_on_newline_and_width() {
        assert_eq!(layout_rows(&chars(""), 4), vec![(0, 0)]);
        assert_eq!(layout_rows(&chars("ab\ncd"), 4), vec![(0, 2), (3, 5)]);
        assert_eq!(layout_rows(&chars("abcdefghij"), 4), vec![(0, 4), (4, 8), (8, 10)]);
        assert_eq!(layout_rows(&chars("abcd\n"), 4), vec![(0, 4), (5, 5)]);
    }

    #[test]
    fn test_caret_position_and_offset() {
        let rows = layout_rows(&chars("abcdefgh\nxy"), 4);
        assert_eq!(rows, vec![(0, 4), (4, 8), (9, 11)]);
        assert_eq!(caret_position(&rows, 0), (0, 0));
        assert_eq!(caret_position(&rows, 4), (1, 0));
        assert_eq!(caret_position(&rows, 8), (1, 4));
        assert_eq!(caret_position(&rows, 10), (2, 1));
        assert_eq!(offset_at(&rows, 2, 3), 11);
        assert_eq!(offset_at(&rows, 0, 2), 2);
    }

    fn run_multiline(
        field: &FieldDescriptor,
        initial: &str,
        keys: Vec<Key>,
    ) -> (Result<ModeStep, EditError>, String, usize) {
        let mut term = ScriptedTerminal::new(40, keys);
        let mut editor = FieldEditor::new(&mut term, field, 0, initial);
        let step = editor.multiline_mode();
        (step, editor.value(), editor.session().cursor())
    }

    #[test]
    fn test_enter_and_typing_build_lines() {
        let field = FieldDescriptor::new("Msg").with_multiline(true);
        let mut keys = vec![Key::Down, Key::End];
        keys.extend(keys_from_bytes(b"\rthree"));
        keys.push(Key::Tab);
        let (step, value, _) = run_multiline(&field, "one\ntwo", keys);
        assert_eq!(step.unwrap(), ModeStep::Finish(EditResult::Next));
        assert_eq!(value, "one\ntwo\nthree");
    }

    #[test]
    fn test_up_down_keep_column() {
        let field = FieldDescriptor::new("Msg");
        let keys = vec![Key::Right, Key::Right, Key::Down, Key::Up, Key::Down, Key::Tab];
        let (_, _, cursor) = run_multiline(&field, "abcd\nxy", keys);
        assert_eq!(cursor, 7);
    }

    #[test]
    fn test_deleting_newline_returns_to_single_line() {
        let field = FieldDescriptor::new("Msg");
        let keys = vec![Key::Down, Key::Backspace];
        let (step, value, cursor) = run_multiline(&field, "ab\ncd", keys);
        assert_eq!(step.unwrap(), ModeStep::Enter(Mode::SingleLine));
        assert_eq!(value, "abcd");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_ctrl_k_joins_lines_at_row_end() {
        let field = FieldDescriptor::new("Msg");
        let keys = vec![Key::Right, Key::Ctrl('k'), Key::Ctrl('k'), Key::Tab];
        let (step, value, _) = run_multiline(&field, "abc\nde\nf", keys);
        assert_eq!(step.unwrap(), ModeStep::Finish(EditResult::Next));
        assert_eq!(value, "ade\nf");
    }

    #[test]
    fn test_fatal_and_terminal_keys() {
        let field = FieldDescriptor::new("Msg");
        let (step, ..) = run_multiline(&field, "a\nb", vec![Key::Ctrl('c')]);
        assert!(matches!(step, Err(EditError::Interrupted)));
        let (step, ..) = run_multiline(&field, "a\nb", vec![Key::Escape]);
        assert_eq!(step.unwrap(), ModeStep::Finish(EditResult::Done));
        let (step, ..) = run_multiline(&field, "a\nb", vec![Key::BackTab]);
        assert_eq!(step.unwrap(), ModeStep::Finish(EditResult::Previous));
        let (step, ..) = run_multiline(&field, "a\nb", vec![Key::Ctrl('l')]);
        assert_eq!(step.unwrap(), ModeStep::Enter(Mode::MultiLine));
        let (step, ..) = run_multiline(&field, "a\nb", vec![]);
        assert!(matches!(step, Err(EditError::InputUnreadable(_))));
    }

    #[test]
    fn test_caret_tracks_wrapped_rows() {
        let field = FieldDescriptor::new("Msg").with_width(4);
        let mut keys = vec![Key::Right; 5];
        keys.push(Key::Tab);
        let mut term = ScriptedTerminal::new(40, keys);
        let mut editor = FieldEditor::new(&mut term, &field, 8, "abcdef\ng");
        editor.multiline_mode().unwrap();
        drop(editor);

        // Offset 5 is the second character of the wrapped second row.
        let n = term.carets.len();
        assert_eq!(term.carets[n - 2], (11, 1));
        assert_eq!(term.carets[n - 1], (0, 0));
        assert!(term.carets.contains(&(10, 1)));
        assert_eq!(term.row_text(1), "");
    }

    #[test]
    fn test_draws_each_row() {
        let field = FieldDescriptor::new("Msg").with_width(4);
        let mut term = ScriptedTerminal::new(20, vec![Key::Tab]);
        let mut editor = FieldEditor::new(&mut term, &field, 0, "abcdef\ng");
        editor.multiline_mode().unwrap();
        drop(editor);

        assert_eq!(term.last_painted(0).unwrap().text(), "Msg  abcd          ");
        assert_eq!(term.last_painted(1).unwrap().text(), "     ef            ");
        assert_eq!(term.last_painted(2).unwrap().text(), "     g             ");
        assert_eq!(
            term.last_painted(1).unwrap().cell(7).map(|c| c.class),
            Some(ColorClass::Entry)
        );
        assert!(term.rows.is_empty());
    }
}
