//! Form Module
//!
//! Walks a list of fields, editing one at a time and moving between them
//! according to how each edit ended.

use tracing::{debug, info};

use super::editor::{EditResult, FieldEditor, LABEL_MARGIN};
use super::field::FieldDescriptor;
use super::terminal::Terminal;
use crate::error::EditError;

/// An ordered set of fields and their current values
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FieldDescriptor>,
    values: Vec<String>,
    label_margin: usize,
}

impl Form {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let values = vec![String::new(); fields.len()];
        Self {
            fields,
            values,
            label_margin: LABEL_MARGIN,
        }
    }

    /// Gap between the label column and every entry box
    pub fn with_label_margin(mut self, margin: usize) -> Self {
        self.label_margin = margin;
        self
    }

    /// Preset the value of the field at `index`
    pub fn with_value(mut self, index: usize, value: impl Into<String>) -> Self {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
        }
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Width of the widest label, shared by every field so boxes line up
    pub fn label_width(&self) -> usize {
        self.fields
            .iter()
            .map(FieldDescriptor::label_width)
            .max()
            .unwrap_or(0)
    }

    /// Edit fields until the user finishes the form or moves past the last
    /// field. Values edited before a fatal error are kept.
    pub fn run<T: Terminal>(&mut self, term: &mut T) -> Result<(), EditError> {
        let label_width = self.label_width();
        let mut index = 0;

        while index < self.fields.len() {
            debug!(index, field = %self.fields[index].label, "editing field");
            let mut editor =
                FieldEditor::new(term, &self.fields[index], label_width, &self.values[index])
                    .with_label_margin(self.label_margin);
            let outcome = editor.run();
            // Keep whatever was typed, even when the edit was aborted.
            self.values[index] = editor.value();
            let (_, result) = outcome?;

            match result {
                EditResult::Next => index += 1,
                EditResult::Previous => index = index.saturating_sub(1),
                EditResult::Done => break,
            }
        }

        info!(fields = self.fields.len(), "form complete");
        Ok(())
    }

    /// Field labels paired with values, shown for a person or a script
    /// depending on the terminal's output mode
    pub fn summary<T: Terminal>(&self, term: &T) -> Vec<(String, String)> {
        let human = term.is_human_output();
        self.fields
            .iter()
            .zip(&self.values)
            .map(|(field, value)| {
                (field.label.clone(), field.display_value(value, human).to_string())
            })
            .collect()
    }
}
