//! Data model for a percussion drum map.
//!
//! A [`Drumset`] is a fixed table of 128 MIDI-pitch slots, each holding the
//! notated attributes of one percussion voice. A slot is "in use" iff its
//! name is non-empty; unused slots keep whatever field values they last had
//! (display visibility is gated on [`Drumset::is_valid`], the stored fields
//! are never wiped eagerly).

use serde::{Deserialize, Serialize};

use crate::error::DrumsetError;
use crate::notehead::{preset_head, NoteheadGroup, NoteheadType, SymId};

/// Number of pitch slots in a drum map (the MIDI pitch range).
pub const DRUM_INSTRUMENTS: usize = 128;

/// Stem direction of a notated drum voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StemDirection {
    Up,
    Down,
    Auto,
}

impl StemDirection {
    /// Value written to / read from the `<stem>` element of a .drm file.
    pub fn name(self) -> &'static str {
        match self {
            StemDirection::Up => "up",
            StemDirection::Down => "down",
            StemDirection::Auto => "auto",
        }
    }

    pub fn from_name(name: &str) -> Option<StemDirection> {
        match name {
            "up" => Some(StemDirection::Up),
            "down" => Some(StemDirection::Down),
            "auto" => Some(StemDirection::Auto),
            _ => None,
        }
    }
}

/// One percussion voice's notated attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrumEntry {
    /// Display name; empty means "slot unused".
    pub name: String,
    /// Preset glyph family, or `Custom` when `noteheads` applies.
    pub notehead: NoteheadGroup,
    /// Explicit per-duration glyphs, ordered whole / half / quarter /
    /// brevis. Meaningful only under `NoteheadGroup::Custom`; stale values
    /// are retained (and inert) after switching back to a preset.
    pub noteheads: [SymId; 4],
    /// Signed staff line position within the percussion staff.
    pub line: i32,
    /// Voice index (0-3) within the staff's track group.
    pub voice: i32,
    pub stem_direction: StemDirection,
    /// Fast-entry key, a single letter A-G, or `None`.
    pub shortcut: Option<char>,
}

impl Default for DrumEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            notehead: NoteheadGroup::Normal,
            noteheads: [
                SymId::NoteheadWhole,
                SymId::NoteheadHalf,
                SymId::NoteheadBlack,
                SymId::NoteheadDoubleWhole,
            ],
            line: 0,
            voice: 0,
            stem_direction: StemDirection::Auto,
            shortcut: None,
        }
    }
}

/// The full 128-slot pitch → entry mapping for one percussion instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drumset {
    // Always exactly DRUM_INSTRUMENTS entries; unused slots hold the
    // default entry with an empty name.
    drums: Vec<DrumEntry>,
}

impl Drumset {
    /// Create an empty drum map (all 128 slots unused).
    pub fn new() -> Self {
        Self {
            drums: vec![DrumEntry::default(); DRUM_INSTRUMENTS],
        }
    }

    fn check_pitch(pitch: i32) -> Result<usize, DrumsetError> {
        if (0..DRUM_INSTRUMENTS as i32).contains(&pitch) {
            Ok(pitch as usize)
        } else {
            Err(DrumsetError::OutOfRange(pitch))
        }
    }

    /// The entry for a pitch. Unused slots return the default ("unused
    /// sentinel") entry.
    pub fn drum(&self, pitch: i32) -> Result<&DrumEntry, DrumsetError> {
        Ok(&self.drums[Self::check_pitch(pitch)?])
    }

    pub fn drum_mut(&mut self, pitch: i32) -> Result<&mut DrumEntry, DrumsetError> {
        Ok(&mut self.drums[Self::check_pitch(pitch)?])
    }

    /// True iff the slot is in use (non-empty name).
    pub fn is_valid(&self, pitch: i32) -> bool {
        match self.drum(pitch) {
            Ok(entry) => !entry.name.is_empty(),
            Err(_) => false,
        }
    }

    pub fn name(&self, pitch: i32) -> &str {
        self.drum(pitch).map(|e| e.name.as_str()).unwrap_or("")
    }

    pub fn line(&self, pitch: i32) -> i32 {
        self.drum(pitch).map(|e| e.line).unwrap_or(0)
    }

    pub fn voice(&self, pitch: i32) -> i32 {
        self.drum(pitch).map(|e| e.voice).unwrap_or(0)
    }

    pub fn stem_direction(&self, pitch: i32) -> StemDirection {
        self.drum(pitch)
            .map(|e| e.stem_direction)
            .unwrap_or(StemDirection::Auto)
    }

    pub fn notehead(&self, pitch: i32) -> NoteheadGroup {
        self.drum(pitch)
            .map(|e| e.notehead)
            .unwrap_or(NoteheadGroup::Normal)
    }

    pub fn shortcut(&self, pitch: i32) -> Option<char> {
        self.drum(pitch).ok().and_then(|e| e.shortcut)
    }

    /// Resolve the notehead glyph for a pitch and duration class.
    ///
    /// Custom entries return their stored glyph verbatim; preset entries go
    /// through the static group table.
    pub fn notehead_sym(&self, pitch: i32, head_type: NoteheadType) -> Result<SymId, DrumsetError> {
        let entry = self.drum(pitch)?;
        Ok(match entry.notehead {
            NoteheadGroup::Custom => entry.noteheads[head_type.index()],
            group => {
                // Total over non-custom groups, so the fallback never fires.
                preset_head(group, head_type).unwrap_or(SymId::NoteheadBlack)
            }
        })
    }

    /// Assign a fast-entry shortcut letter (A-G) or clear it with `None`.
    ///
    /// Uniqueness is enforced by eviction: any other pitch currently holding
    /// the same letter silently loses it (last writer wins). The UI presents
    /// shortcuts as an exhaustive fixed choice list, so conflicts are
    /// resolved here rather than rejected.
    pub fn set_shortcut(&mut self, pitch: i32, shortcut: Option<char>) -> Result<(), DrumsetError> {
        let idx = Self::check_pitch(pitch)?;
        debug_assert!(
            shortcut.map_or(true, |c| ('A'..='G').contains(&c)),
            "shortcut must be a letter A-G, got {shortcut:?}"
        );
        if shortcut.is_some() {
            for (i, entry) in self.drums.iter_mut().enumerate() {
                if i != idx && entry.shortcut == shortcut {
                    entry.shortcut = None;
                }
            }
        }
        self.drums[idx].shortcut = shortcut;
        Ok(())
    }

    /// Reset all 128 slots to unused. Called before a bulk load so a
    /// partially-populated file does not leave stale entries behind.
    pub fn clear(&mut self) {
        for entry in &mut self.drums {
            *entry = DrumEntry::default();
        }
    }

    /// Pitches whose slot is in use, ascending.
    pub fn used_pitches(&self) -> impl Iterator<Item = i32> + '_ {
        self.drums
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.name.is_empty())
            .map(|(i, _)| i as i32)
    }
}

impl Default for Drumset {
    fn default() -> Self {
        Self::new()
    }
}

/// MIDI pitch → note name (e.g. 60 → "C4"), for pitch-list displays.
pub fn pitch_name(pitch: i32) -> String {
    const STEPS: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    let step = STEPS[pitch.rem_euclid(12) as usize];
    let octave = pitch.div_euclid(12) - 1;
    format!("{step}{octave}")
}
