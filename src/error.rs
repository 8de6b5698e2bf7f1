//! Error types for the drum-map model and codec.
//!
//! All failures cross the model/codec boundary as explicit values; the
//! caller (dialog/controller) decides any user-visible messaging.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrumsetError {
    /// Pitch argument outside the MIDI range. A precondition violation by
    /// the caller, not a user-recoverable condition.
    #[error("pitch {0} out of range 0-127")]
    OutOfRange(i32),

    /// The target file could not be opened or read/written. Carries the
    /// underlying OS error for the user-facing message.
    #[error("failed to open '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not well-formed drumset XML.
    #[error("drumset parse error: {0}")]
    Parse(String),
}
