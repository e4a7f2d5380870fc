//! Error types for field editing.

use std::io;

use thiserror::Error;

/// Fatal outcomes of an edit session.
///
/// Only these abort a mode loop. Everything else (offsets drifting out of
/// range after a computed move) is clamped inside the session and never
/// surfaces.
#[derive(Debug, Error)]
pub enum EditError {
    /// The user pressed Ctrl-C.
    #[error("interrupted")]
    Interrupted,

    /// The key source returned an error.
    #[error("error reading stdin: {0}")]
    InputUnreadable(#[source] io::Error),

    /// Writing to the terminal failed.
    #[error("terminal write failed: {0}")]
    Terminal(#[from] io::Error),
}
