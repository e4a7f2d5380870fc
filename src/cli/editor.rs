//! Field Editor Module
//!
//! Drives the edit modes for one field. Each mode runs its own key loop and
//! hands back a [`ModeStep`]: either the mode to run next or the result that
//! ends the edit. The loop that interprets those steps lives here, so the
//! modes never call each other directly.

use tracing::{debug, info, warn};

use super::field::FieldDescriptor;
use super::session::EditSession;
use super::terminal::Terminal;
use crate::error::EditError;

/// Default margin between the label column and the entry box
pub const LABEL_MARGIN: usize = 2;

/// The edit modes a field can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SingleLine,
    MultiLine,
}

/// How an edit ended, telling the form which field to go to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    Next,
    Previous,
    Done,
}

/// What a mode asks its driver to do once its loop exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeStep {
    Enter(Mode),
    Finish(EditResult),
}

/// Editor for one field on one terminal
pub struct FieldEditor<'a, T: Terminal> {
    pub(crate) term: &'a mut T,
    pub(crate) field: &'a FieldDescriptor,
    label_width: usize,
    label_margin: usize,
    pub(crate) session: EditSession,
}

impl<'a, T: Terminal> FieldEditor<'a, T> {
    /// `label_width` is the label column width shared by the whole form so
    /// entry boxes line up. It never drops below this field's own label.
    pub fn new(
        term: &'a mut T,
        field: &'a FieldDescriptor,
        label_width: usize,
        initial: &str,
    ) -> Self {
        Self {
            term,
            field,
            label_width: label_width.max(field.label_width()),
            label_margin: LABEL_MARGIN,
            session: EditSession::new(initial),
        }
    }

    /// Set the gap between the label column and the entry box
    pub fn with_label_margin(mut self, margin: usize) -> Self {
        self.label_margin = margin;
        self
    }

    /// The session holding the text, cursor, and selection
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// The value as edited so far
    pub fn value(&self) -> String {
        self.session.value()
    }

    /// Column where the entry box starts
    pub fn entry_x(&self) -> usize {
        self.label_width + self.label_margin
    }

    /// Width of the entry box: the field's fixed width when it fits on the
    /// terminal, otherwise the rest of the row.
    pub fn field_width(&self) -> usize {
        let entry_x = self.entry_x();
        let term_width = self.term.width();
        match self.field.width {
            Some(width) if width != 0 && entry_x + width < term_width => width,
            _ => term_width.saturating_sub(entry_x + 1).max(1),
        }
    }

    /// Multi-line when the value cannot be shown on one row
    pub fn initial_mode(&self) -> Mode {
        if self.session.chars().contains(&'\n') || self.session.len() > self.field_width() {
            Mode::MultiLine
        } else {
            Mode::SingleLine
        }
    }

    /// Run modes until the edit finishes, returning the final value
    pub fn run(&mut self) -> Result<(String, EditResult), EditError> {
        let mut mode = self.initial_mode();
        loop {
            debug!(field = %self.field.label, ?mode, "entering mode");
            let step = match mode {
                Mode::SingleLine => self.oneline_mode(),
                Mode::MultiLine => self.multiline_mode(),
            };
            match step {
                Ok(ModeStep::Enter(next)) => mode = next,
                Ok(ModeStep::Finish(result)) => {
                    info!(field = %self.field.label, ?result, "field edit finished");
                    return Ok((self.session.value(), result));
                }
                Err(err) => {
                    warn!(field = %self.field.label, error = %err, "field edit aborted");
                    return Err(err);
                }
            }
        }
    }

    /// Put the caret back at the top left of the edit area and wipe
    /// everything below it. Every mode does this on every exit path.
    pub(crate) fn restore_screen(&mut self) -> Result<(), EditError> {
        self.term.move_to(0, 0)?;
        self.term.clear_to_end_of_screen()?;
        Ok(())
    }

    pub(crate) fn read_key(&mut self) -> Result<super::keys::Key, EditError> {
        self.term.read_key().map_err(EditError::InputUnreadable)
    }
}
