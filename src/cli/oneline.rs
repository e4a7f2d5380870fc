//! Single-line Edit Mode
//!
//! The default mode for a field: label, entry box, and hint on one row,
//! with the value drawn over the box and the selection highlighted.

use tracing::trace;

use super::autocomplete;
use super::editor::{EditResult, FieldEditor, Mode, ModeStep};
use super::help;
use super::keys::Key;
use super::screen::{ColorClass, ScreenBuffer};
use super::terminal::Terminal;
use super::words::{next_word_boundary, previous_word_boundary};
use crate::error::EditError;

impl<'a, T: Terminal> FieldEditor<'a, T> {
    /// Edit the field on a single row until a key ends the edit or calls
    /// for another mode.
    pub fn oneline_mode(&mut self) -> Result<ModeStep, EditError> {
        self.term.clear_to_end_of_screen()?;
        let step = self.oneline_loop();
        let restored = self.restore_screen();
        let step = step?;
        restored?;
        Ok(step)
    }

    fn oneline_loop(&mut self) -> Result<ModeStep, EditError> {
        let entry_x = self.entry_x();
        let field_width = self.field_width();

        loop {
            self.draw_oneline(entry_x, field_width)?;
            self.term.move_to(entry_x + self.session.cursor(), 0)?;

            let key = self.read_key()?;
            let verbatim = std::mem::take(&mut self.session.verbatim);
            trace!(?key, verbatim, "single-line key");

            let cursor = self.session.cursor();
            match key {
                Key::Home | Key::Ctrl('a') => self.session.move_cursor(0, false),
                Key::ShiftHome => self.session.move_cursor(0, true),
                Key::Left | Key::Ctrl('b') => {
                    self.session.move_cursor(cursor.saturating_sub(1), false)
                }
                Key::ShiftLeft => self.session.move_cursor(cursor.saturating_sub(1), true),
                Key::CtrlLeft | Key::CtrlShiftLeft => {
                    let target = previous_word_boundary(self.session.chars(), cursor);
                    self.session.move_cursor(target, key == Key::CtrlShiftLeft);
                }
                Key::End | Key::Ctrl('e') => self.session.move_cursor(self.session.len(), false),
                Key::ShiftEnd => self.session.move_cursor(self.session.len(), true),
                Key::Right | Key::Ctrl('f') => self.session.move_cursor(cursor + 1, false),
                Key::ShiftRight => self.session.move_cursor(cursor + 1, true),
                Key::CtrlRight | Key::CtrlShiftRight => {
                    let target = next_word_boundary(self.session.chars(), cursor);
                    self.session.move_cursor(target, key == Key::CtrlShiftRight);
                }
                Key::Delete | Key::Ctrl('d') => self.session.delete_selection_or_forward(),
                Key::Backspace => self.session.delete_selection_or_backward(),
                Key::Ctrl('k') => self.session.truncate_at_cursor(),
                Key::Ctrl('u') => self.session.clear(),
                Key::Ctrl('v') => self.session.verbatim = true,
                Key::Tab => return Ok(ModeStep::Finish(EditResult::Next)),
                Key::BackTab => return Ok(ModeStep::Finish(EditResult::Previous)),
                Key::Escape => return Ok(ModeStep::Finish(EditResult::Done)),
                Key::Enter => {
                    if verbatim || (cursor != 0 && self.field.multiline) {
                        self.session.insert("\n");
                        return Ok(ModeStep::Enter(Mode::MultiLine));
                    }
                    return Ok(ModeStep::Finish(EditResult::Next));
                }
                Key::Ctrl('l') => return Ok(ModeStep::Enter(Mode::SingleLine)),
                Key::Ctrl('c') => return Err(EditError::Interrupted),
                Key::F1 => {
                    help::show_help(&mut *self.term)?;
                    return Ok(ModeStep::Enter(Mode::SingleLine));
                }
                other => {
                    if let Some(ch) = other.printable() {
                        if let Some(step) = self.type_char(ch, field_width) {
                            return Ok(step);
                        }
                    }
                }
            }
        }
    }

    /// Insert a typed character, offer a completion when typing at the end,
    /// and switch to multi-line mode once the value outgrows the box.
    fn type_char(&mut self, ch: char, field_width: usize) -> Option<ModeStep> {
        let mut buf = [0u8; 4];
        self.session.insert(ch.encode_utf8(&mut buf));

        if self.session.is_at_end() {
            let typed = self.session.value();
            let typed_len = self.session.len();
            if let Some(suggestion) = autocomplete::suggest(&typed, &self.field.choices) {
                let suggested_len = suggestion.chars().count();
                if suggested_len > typed_len {
                    self.session.set_value(&suggestion);
                    self.session.select(typed_len, suggested_len);
                }
            }
        }

        if self.session.len() > field_width {
            return Some(ModeStep::Enter(Mode::MultiLine));
        }
        None
    }

    fn draw_oneline(&mut self, entry_x: usize, field_width: usize) -> Result<(), EditError> {
        let term_width = self.term.width();
        let mut buf = ScreenBuffer::new_row(term_width.saturating_sub(1));

        buf.write_at(0, ColorClass::Label, &self.field.label);
        buf.fill(entry_x, field_width, ColorClass::Entry);
        if let Some(hint) = self.field.hint.as_deref().filter(|h| !h.is_empty()) {
            let hint_x = entry_x + field_width + 2;
            if self.session.len() < field_width && hint_x + hint.chars().count() < term_width {
                buf.write_at(hint_x, ColorClass::Hint, hint);
            }
        }

        let (pre, sel, post) = self.session.split_on_selection();
        buf.write_at(entry_x, ColorClass::Entry, &pre);
        buf.append(ColorClass::Selected, &sel);
        buf.append(ColorClass::Entry, &post);

        self.term.paint(0, &buf)?;
        Ok(())
    }
}
