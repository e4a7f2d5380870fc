//! Tracing setup
//!
//! The terminal belongs to the editor while it runs, so log output goes to a
//! file. Without a file nothing is installed and the tracing macros are
//! no-ops.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter, e.g. `fieldline=trace`
pub const LOG_FILTER_ENV: &str = "FIELDLINE_LOG";

/// Append tracing output to `path`. Fails when the file cannot be opened or
/// a global subscriber is already installed.
pub fn init_tracing(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("fieldline=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_second_init_is_reported() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("fieldline.log");
        // Whichever call installs the subscriber, the next one must fail.
        let _ = init_tracing(&path);
        let err = init_tracing(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(path.exists());
    }

    #[test]
    fn test_unopenable_file_is_reported() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("fieldline.log");
        let err = init_tracing(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
