//! fieldline - interactive form-field editing for terminal applications
//!
//! This library edits the value of one labeled field at a time on a raw-mode
//! terminal: typing, cursor and selection movement, word navigation, prefix
//! autocompletion from a list of choices, and a switch to multi-line editing
//! when the value outgrows its box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fieldline::cli::{CrosstermTerminal, EditorConfig, FieldDescriptor, FieldEditor};
//!
//! let field = FieldDescriptor::new("Handling")
//!     .with_width(10)
//!     .with_choices(["IMMEDIATE", "PRIORITY", "ROUTINE"]);
//! let mut term = CrosstermTerminal::new(EditorConfig::default())?;
//! let (value, result) = FieldEditor::new(&mut term, &field, 0, "").run()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Keys
//!
//! Tab and Shift-Tab move between fields, Enter accepts (or starts a new
//! line in multi-line fields), Esc finishes the form, Ctrl-C aborts, and F1
//! shows the full list of bindings.

pub mod cli;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use cli::{EditResult, FieldDescriptor, FieldEditor, Form, Terminal};
pub use error::EditError;
