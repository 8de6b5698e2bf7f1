//! Edit session — mediates interactive, one-row-at-a-time editing of a
//! drum map.
//!
//! The session owns the in-progress [`Drumset`] and a mirror of the field
//! widgets' pending values. The presentation layer never holds authoritative
//! state: it reads [`EditSession::fields`] to populate its controls and
//! routes every change through the setters here. Edits become durable in
//! the drumset on every field change and again when the selection moves
//! (commit is idempotent, so the redundancy is safe), and the committed
//! drumset is pushed to the owning document after every commit — the dialog
//! behaves as a live editor, not an apply-on-OK form.

use crate::error::DrumsetError;
use crate::model::{Drumset, StemDirection};
use crate::notehead::{preset_head, preset_heads, NoteheadGroup, NoteheadType, SymId};

/// Identifies the instrument a drum map belongs to inside the owning
/// notation document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstrumentKey {
    pub instrument_id: String,
    pub part_id: String,
    pub tick: i32,
}

/// External collaborator receiving the committed drumset. Implemented by
/// the notation-document integration; tests use a recording stub.
pub trait DocumentSink {
    fn replace_drumset(&mut self, key: &InstrumentKey, drumset: &Drumset);
}

/// Pending values of the editing controls for the selected row.
///
/// `custom_syms` mirrors the four per-duration glyph choices; in preset
/// mode it tracks the preset resolution so the displayed example does not
/// jump when custom mode is toggled on.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValues {
    pub name: String,
    /// The preset group choice. Stays on the last preset while custom mode
    /// is active so that leaving custom mode restores it.
    pub notehead: NoteheadGroup,
    pub custom_syms: [SymId; 4],
    pub custom_enabled: bool,
    pub line: i32,
    pub voice: i32,
    pub stem_direction: StemDirection,
    pub shortcut: Option<char>,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            notehead: NoteheadGroup::Normal,
            custom_syms: preset_heads(NoteheadGroup::Normal).unwrap_or([SymId::NoteheadBlack; 4]),
            custom_enabled: false,
            line: 0,
            voice: 0,
            stem_direction: StemDirection::Auto,
            shortcut: None,
        }
    }
}

/// State machine over "which pitch row is selected".
pub struct EditSession<S: DocumentSink> {
    drumset: Drumset,
    key: InstrumentKey,
    sink: S,
    selected: Option<i32>,
    fields: FieldValues,
}

impl<S: DocumentSink> EditSession<S> {
    /// Start a session from an instrument's assigned drum map, or from an
    /// empty map when no context instrument exists.
    pub fn new(initial: Option<Drumset>, key: InstrumentKey, sink: S) -> Self {
        Self {
            drumset: initial.unwrap_or_default(),
            key,
            sink,
            selected: None,
            fields: FieldValues::default(),
        }
    }

    pub fn drumset(&self) -> &Drumset {
        &self.drumset
    }

    pub fn selected(&self) -> Option<i32> {
        self.selected
    }

    /// Pending field values, for populating the editing controls.
    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    /// Replace the session's drumset wholesale (after a file load) and drop
    /// the selection; the caller re-selects and repopulates its list.
    pub fn replace(&mut self, drumset: Drumset) {
        self.drumset = drumset;
        self.selected = None;
        self.push();
    }

    // ─── Selection ──────────────────────────────────────────────────────

    /// Move the selection. Commits the previously selected row's pending
    /// values first (the authoritative commit point for navigation), then
    /// populates the fields from the new row without re-triggering commit
    /// logic. `None` leaves the session with no selection.
    pub fn select(&mut self, pitch: Option<i32>) -> Result<(), DrumsetError> {
        if self.selected.is_some() {
            self.commit();
            self.push();
        }
        self.selected = None;
        if let Some(p) = pitch {
            self.populate(p)?;
            self.selected = Some(p);
        }
        Ok(())
    }

    /// Programmatic population of the pending fields; bypasses the setters
    /// so no commit fires.
    fn populate(&mut self, pitch: i32) -> Result<(), DrumsetError> {
        let entry = self.drumset.drum(pitch)?;
        let is_custom = entry.notehead == NoteheadGroup::Custom;
        self.fields = FieldValues {
            name: entry.name.clone(),
            notehead: if is_custom {
                NoteheadGroup::Normal
            } else {
                entry.notehead
            },
            custom_syms: if is_custom {
                entry.noteheads
            } else {
                preset_heads(entry.notehead).unwrap_or(entry.noteheads)
            },
            custom_enabled: is_custom,
            line: entry.line,
            voice: entry.voice,
            stem_direction: entry.stem_direction,
            shortcut: entry.shortcut,
        };
        Ok(())
    }

    // ─── Field changes ──────────────────────────────────────────────────
    //
    // Each setter is a no-op with no selected row; change events fire
    // during initial population and must not be errors.

    pub fn set_name(&mut self, name: &str) {
        if self.selected.is_none() {
            return;
        }
        self.fields.name = name.to_string();
        self.apply();
    }

    /// Choose a preset group. Choosing `Custom` is equivalent to enabling
    /// custom mode.
    pub fn set_notehead_group(&mut self, group: NoteheadGroup) {
        if self.selected.is_none() {
            return;
        }
        if group == NoteheadGroup::Custom {
            self.set_custom(true);
            return;
        }
        self.fields.notehead = group;
        if !self.fields.custom_enabled {
            // Keep the glyph choices tracking the preset resolution.
            if let Some(heads) = preset_heads(group) {
                self.fields.custom_syms = heads;
            }
        }
        self.apply();
    }

    /// Toggle custom per-duration glyphs.
    ///
    /// Entering custom mode snapshots the preset-resolved glyphs as the
    /// initial custom values. Leaving restores the preset group's
    /// resolution; the entry's stored custom glyphs are retained but inert.
    pub fn set_custom(&mut self, enabled: bool) {
        if self.selected.is_none() || enabled == self.fields.custom_enabled {
            return;
        }
        self.fields.custom_enabled = enabled;
        if !enabled {
            if let Some(heads) = preset_heads(self.fields.notehead) {
                self.fields.custom_syms = heads;
            }
        }
        self.apply();
    }

    /// Change one custom per-duration glyph. Implies custom mode.
    pub fn set_custom_sym(&mut self, head_type: NoteheadType, sym: SymId) {
        if self.selected.is_none() {
            return;
        }
        self.fields.custom_enabled = true;
        self.fields.custom_syms[head_type.index()] = sym;
        self.apply();
    }

    pub fn set_line(&mut self, line: i32) {
        if self.selected.is_none() {
            return;
        }
        self.fields.line = line;
        self.apply();
    }

    pub fn set_voice(&mut self, voice: i32) {
        if self.selected.is_none() {
            return;
        }
        self.fields.voice = voice;
        self.apply();
    }

    pub fn set_stem_direction(&mut self, dir: StemDirection) {
        if self.selected.is_none() {
            return;
        }
        self.fields.stem_direction = dir;
        self.apply();
    }

    pub fn set_shortcut(&mut self, shortcut: Option<char>) {
        if self.selected.is_none() {
            return;
        }
        self.fields.shortcut = shortcut;
        self.apply();
    }

    // ─── Preview ────────────────────────────────────────────────────────

    /// Resolve the example glyph for the selected row and a duration class.
    /// `None` with no selection or when the pending name is empty (invalid
    /// rows need no resolution).
    pub fn preview(&self, head_type: NoteheadType) -> Option<SymId> {
        self.selected?;
        if self.fields.name.is_empty() {
            return None;
        }
        if self.fields.custom_enabled {
            Some(self.fields.custom_syms[head_type.index()])
        } else {
            preset_head(self.fields.notehead, head_type)
        }
    }

    // ─── Commit ─────────────────────────────────────────────────────────

    fn apply(&mut self) {
        self.commit();
        self.push();
    }

    /// Write the pending fields into the selected entry. Idempotent; safe
    /// to call redundantly from both field changes and navigation.
    fn commit(&mut self) {
        let Some(pitch) = self.selected else {
            return;
        };
        // The pitch was range-checked at selection time.
        let Ok(entry) = self.drumset.drum_mut(pitch) else {
            return;
        };
        entry.name = self.fields.name.clone();
        if self.fields.custom_enabled {
            entry.notehead = NoteheadGroup::Custom;
            entry.noteheads = self.fields.custom_syms;
        } else {
            entry.notehead = self.fields.notehead;
        }
        entry.line = self.fields.line;
        entry.voice = self.fields.voice;
        entry.stem_direction = self.fields.stem_direction;
        let _ = self.drumset.set_shortcut(pitch, self.fields.shortcut);
    }

    fn push(&mut self) {
        self.sink.replace_drumset(&self.key, &self.drumset);
    }
}
