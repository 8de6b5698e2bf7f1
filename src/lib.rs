//! drumlib — drum-kit mapping model and .drm file persistence.
//!
//! Associates percussion MIDI pitches with their notated representation
//! (name, noteheads, staff line, voice, stem direction, keyboard shortcut),
//! round-trips the mapping through a versioned tagged-text format, and
//! provides the transactional edit-session discipline used while a user
//! edits one pitch row at a time.
//!
//! # Example
//! ```
//! use drumlib::Drumset;
//!
//! let mut set = Drumset::new();
//! let snare = set.drum_mut(38).unwrap();
//! snare.name = "Acoustic Snare".to_string();
//! snare.line = 2;
//! set.set_shortcut(38, Some('A')).unwrap();
//!
//! let text = drumlib::write_drm(&set);
//! assert!(text.contains("Acoustic Snare"));
//! ```

pub mod error;
pub mod model;
pub mod notehead;
pub mod parser;
pub mod session;
pub mod writer;

use std::path::Path;

pub use error::DrumsetError;
pub use model::{pitch_name, DrumEntry, Drumset, StemDirection, DRUM_INSTRUMENTS};
pub use notehead::{
    preset_head, preset_heads, NoteheadGroup, NoteheadType, SymId, ALL_GROUPS,
};
pub use parser::{
    parse_drm, IgnoreOldVersions, LoadOutcome, VersionDecision, VersionGate, FORMAT_VERSION,
};
pub use session::{DocumentSink, EditSession, FieldValues, InstrumentKey};
pub use writer::write_drm;

/// Load a .drm file into `drumset`, replacing its previous contents.
///
/// The file is read in full before any mutation, so an open/read failure
/// leaves the drumset untouched. A version-gate Cancel returns
/// [`LoadOutcome::Cancelled`] with the drumset cleared (see [`parse_drm`]).
pub fn load_file<P: AsRef<Path>>(
    path: P,
    drumset: &mut Drumset,
    gate: &mut dyn VersionGate,
) -> Result<LoadOutcome, DrumsetError> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path).map_err(|source| DrumsetError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    parse_drm(&xml, drumset, gate)
}

/// Save a drum map as a .drm file.
pub fn save_file<P: AsRef<Path>>(path: P, drumset: &Drumset) -> Result<(), DrumsetError> {
    let path = path.as_ref();
    std::fs::write(path, write_drm(drumset)).map_err(|source| DrumsetError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert a drum map to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn drumset_to_json(drumset: &Drumset) -> Result<String, DrumsetError> {
    serde_json::to_string_pretty(drumset).map_err(|e| DrumsetError::Parse(e.to_string()))
}
