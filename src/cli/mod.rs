//! Field Editing Module
//!
//! Interactive editing of labeled form fields on a raw-mode terminal, with
//! selection, word navigation, and prefix autocompletion.
//!
//! ## Module Structure
//!
//! - `config` - Color theme and output settings
//! - `screen` - Off-screen row composition
//! - `words` - Word-boundary navigation
//! - `autocomplete` - Completion against a field's choices
//! - `session` - Text, cursor, and selection state
//! - `keys` - Key codes and decoding
//! - `terminal` - Terminal capabilities and the crossterm transport
//! - `field` - Field descriptors
//! - `editor` - Mode driver for one field
//! - `oneline` / `multiline` - The edit modes
//! - `help` - Key-binding overlay
//! - `form` - Field sequencing

pub mod autocomplete;
pub mod config;
pub mod editor;
pub mod field;
pub mod form;
pub mod help;
pub mod keys;
pub mod multiline;
pub mod oneline;
pub mod screen;
pub mod session;
pub mod terminal;
pub mod words;

// Re-export main types for convenience
pub use config::{ConfigError, EditorConfig};
pub use editor::{EditResult, FieldEditor, Mode, ModeStep};
pub use field::FieldDescriptor;
pub use form::Form;
pub use keys::Key;
pub use screen::{ColorClass, ScreenBuffer};
pub use session::EditSession;
pub use terminal::{CrosstermTerminal, Terminal};
