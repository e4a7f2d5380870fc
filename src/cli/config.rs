//! Editor Configuration and Theme Management
//!
//! This module handles configuration settings, theme management, and the
//! color scheme used when painting field rows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::editor::LABEL_MARGIN;
use super::screen::ColorClass;

/// Errors from reading or writing a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O: {0}")]
    Io(#[from] io::Error),

    #[error("config file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the field editor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub label_color: String,
    pub entry_text_color: String,
    pub entry_background: String,
    pub selected_text_color: String,
    pub selected_background: String,
    pub hint_color: String,
    pub theme_name: String,
    /// Columns between the label column and the entry box
    pub label_margin: usize,
    /// Strip a leading `<id>_` from displayed values
    pub human_output: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            label_color: "White".to_string(),
            entry_text_color: "White".to_string(),
            entry_background: "DarkBlue".to_string(),
            selected_text_color: "Black".to_string(),
            selected_background: "Cyan".to_string(),
            hint_color: "Gray".to_string(),
            theme_name: "default".to_string(),
            label_margin: LABEL_MARGIN,
            human_output: true,
            log_file: None,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from a JSON file. The file's `theme_name`
    /// picks the base colors, color keys in the file override them, and
    /// anything missing takes its default.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let file: serde_json::Value = serde_json::from_str(&content)?;
        let Some(keys) = file.as_object() else {
            return Ok(serde_json::from_value(file)?);
        };

        let mut base = Self::default();
        if let Some(theme) = keys.get("theme_name").and_then(|t| t.as_str()) {
            base.apply_theme(theme);
        }
        let mut merged = serde_json::to_value(&base)?;
        if let Some(fields) = merged.as_object_mut() {
            for (key, value) in keys {
                fields.insert(key.clone(), value.clone());
            }
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply a theme by name
    pub fn apply_theme(&mut self, theme_name: &str) {
        let (label, entry_bg, selected_bg) = match theme_name {
            "dark" => ("Green", "Black", "Green"),
            "light" => ("Black", "Gray", "Blue"),
            "ocean" => ("Cyan", "DarkBlue", "Cyan"),
            _ => ("White", "DarkBlue", "Cyan"),
        };
        self.label_color = label.to_string();
        self.entry_background = entry_bg.to_string();
        self.selected_background = selected_bg.to_string();
        self.entry_text_color = match theme_name {
            "dark" => "Green",
            "light" => "Black",
            _ => "White",
        }
        .to_string();
        self.selected_text_color = "Black".to_string();
        self.theme_name = theme_name.to_string();
    }

    /// Foreground and background for a color class. `None` leaves the
    /// terminal's own color in place.
    pub fn colors_for(&self, class: ColorClass) -> (Option<Color>, Option<Color>) {
        match class {
            ColorClass::Blank => (None, None),
            ColorClass::Label => (Some(parse_color(&self.label_color)), None),
            ColorClass::Hint => (Some(parse_color(&self.hint_color)), None),
            ColorClass::Entry => (
                Some(parse_color(&self.entry_text_color)),
                Some(parse_color(&self.entry_background)),
            ),
            ColorClass::Selected => (
                Some(parse_color(&self.selected_text_color)),
                Some(parse_color(&self.selected_background)),
            ),
        }
    }

    /// Get available themes
    pub fn get_available_themes() -> Vec<String> {
        vec![
            "default - White labels, blue entry box".to_string(),
            "dark - Green text on black".to_string(),
            "light - Black text on gray".to_string(),
            "ocean - Cyan labels and selection".to_string(),
        ]
    }
}

/// Map a color name to a crossterm color
pub fn parse_color(name: &str) -> Color {
    match name {
        "Black" => Color::Black,
        "White" => Color::White,
        "DarkBlue" => Color::DarkBlue,
        "Blue" => Color::Blue,
        "Cyan" => Color::Cyan,
        "DarkCyan" => Color::DarkCyan,
        "Gray" | "Grey" => Color::Grey,
        "DarkGray" | "DarkGrey" => Color::DarkGrey,
        "Magenta" => Color::Magenta,
        "Green" => Color::Green,
        "Red" => Color::Red,
        "Yellow" => Color::Yellow,
        _ => Color::Reset,
    }
}
