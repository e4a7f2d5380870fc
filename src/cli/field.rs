//! Field Descriptor Module
//!
//! Caller-supplied description of one form field. The editor only reads it.

use serde::{Deserialize, Serialize};

/// One labeled unit of user input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    pub label: String,
    /// Fixed display width. `None` or 0 uses the rest of the terminal row.
    pub width: Option<usize>,
    pub hint: Option<String>,
    pub multiline: bool,
    /// Autocomplete candidates, in order
    pub choices: Vec<String>,
    /// Identifier whose `<id>_` prefix is hidden from human-readable output
    pub id: Option<String>,
}

impl FieldDescriptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Label width in display columns
    pub fn label_width(&self) -> usize {
        self.label.chars().count()
    }

    /// The value as shown to a person: in human output mode a leading
    /// `<id>_` is dropped.
    pub fn display_value<'a>(&self, value: &'a str, human: bool) -> &'a str {
        if !human {
            return value;
        }
        match &self.id {
            Some(id) => value
                .strip_prefix(id.as_str())
                .and_then(|rest| rest.strip_prefix('_'))
                .unwrap_or(value),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let field = FieldDescriptor::new("Handling")
            .with_width(10)
            .with_hint("I, P, or R")
            .with_choices(["IMMEDIATE", "PRIORITY", "ROUTINE"]);
        assert_eq!(field.label_width(), 8);
        assert_eq!(field.width, Some(10));
        assert_eq!(field.choices.len(), 3);
        assert!(!field.multiline);
    }

    #[test]
    fn test_display_value_strips_id_prefix() {
        let field = FieldDescriptor::new("Subject").with_id("XND-101P");
        assert_eq!(field.display_value("XND-101P_R_Shelter", true), "R_Shelter");
        assert_eq!(field.display_value("XND-101P_R_Shelter", false), "XND-101P_R_Shelter");
        assert_eq!(field.display_value("XND-101PR", true), "XND-101PR");
        assert_eq!(FieldDescriptor::new("To").display_value("a_b", true), "a_b");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{ "label": "Message", "multiline": true }"#).unwrap();
        assert_eq!(field.label, "Message");
        assert!(field.multiline);
        assert!(field.width.is_none());
        assert!(field.choices.is_empty());
    }
}
