//! Edit-session state machine tests — commit-on-navigation, custom/preset
//! mode switching, and the live push to the owning document.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use drumlib::{
    DocumentSink, Drumset, EditSession, InstrumentKey, NoteheadGroup, NoteheadType,
    StemDirection, SymId,
};

/// Records every pushed drumset so tests can inspect the live-editor flow.
#[derive(Clone, Default)]
struct RecordingSink {
    pushes: Rc<RefCell<Vec<Drumset>>>,
}

impl DocumentSink for RecordingSink {
    fn replace_drumset(&mut self, _key: &InstrumentKey, drumset: &Drumset) {
        self.pushes.borrow_mut().push(drumset.clone());
    }
}

fn session() -> (EditSession<RecordingSink>, Rc<RefCell<Vec<Drumset>>>) {
    let sink = RecordingSink::default();
    let pushes = sink.pushes.clone();
    let session = EditSession::new(None, InstrumentKey::default(), sink);
    (session, pushes)
}

fn session_with(initial: Drumset) -> (EditSession<RecordingSink>, Rc<RefCell<Vec<Drumset>>>) {
    let sink = RecordingSink::default();
    let pushes = sink.pushes.clone();
    let session = EditSession::new(Some(initial), InstrumentKey::default(), sink);
    (session, pushes)
}

// ─── Field commits ──────────────────────────────────────────────────

#[test]
fn field_edits_commit_immediately_and_push() {
    let (mut session, pushes) = session();
    session.select(Some(38)).unwrap();

    session.set_name("Acoustic Snare");
    session.set_line(2);
    session.set_stem_direction(StemDirection::Up);

    assert_eq!(session.drumset().name(38), "Acoustic Snare");
    assert_eq!(session.drumset().line(38), 2);
    assert_eq!(session.drumset().stem_direction(38), StemDirection::Up);
    // One push per field change — the dialog is a live editor.
    assert_eq!(pushes.borrow().len(), 3);
    assert_eq!(pushes.borrow().last().unwrap().name(38), "Acoustic Snare");
}

#[test]
fn navigation_commits_the_previous_row() {
    let mut initial = Drumset::new();
    initial.drum_mut(38).unwrap().name = "Acoustic Snare".to_string();
    let (mut session, _) = session_with(initial);

    session.select(Some(38)).unwrap();
    session.set_voice(1);
    session.select(Some(36)).unwrap();

    assert_eq!(session.drumset().voice(38), 1);
    assert_eq!(session.selected(), Some(36));
    // The new row's stored values populate the fields.
    assert_eq!(session.fields().name, "");
    assert_eq!(session.fields().voice, 0);
}

#[test]
fn changes_with_no_selection_are_a_no_op() {
    // Value-changed events fire during initial population; they must not
    // touch the model.
    let (mut session, pushes) = session();
    session.set_name("Ghost");
    session.set_line(5);
    session.set_shortcut(Some('A'));

    assert_eq!(session.drumset().used_pitches().count(), 0);
    assert!(pushes.borrow().is_empty());
}

#[test]
fn deselecting_commits_and_clears_the_selection() {
    let (mut session, pushes) = session();
    session.select(Some(38)).unwrap();
    session.set_name("Acoustic Snare");
    session.select(None).unwrap();

    assert_eq!(session.selected(), None);
    assert_eq!(session.drumset().name(38), "Acoustic Snare");
    assert!(!pushes.borrow().is_empty());
}

#[test]
fn selecting_an_out_of_range_pitch_fails() {
    let (mut session, _) = session();
    assert!(session.select(Some(128)).is_err());
    assert_eq!(session.selected(), None);
}

// ─── Validity ───────────────────────────────────────────────────────

#[test]
fn emptying_the_name_invalidates_but_keeps_fields() {
    let (mut session, _) = session();
    session.select(Some(38)).unwrap();
    session.set_name("Acoustic Snare");
    session.set_line(2);

    session.set_name("");
    assert!(!session.drumset().is_valid(38));
    // Leftover state: the line survives, display is gated on is_valid.
    assert_eq!(session.drumset().line(38), 2);
    assert_eq!(session.preview(NoteheadType::Quarter), None);
}

// ─── Custom / preset mode ───────────────────────────────────────────

#[test]
fn toggling_custom_and_back_keeps_the_preview() {
    let (mut session, _) = session();
    session.select(Some(42)).unwrap();
    session.set_name("Closed Hi-Hat");
    session.set_notehead_group(NoteheadGroup::Cross);

    let before: Vec<Option<SymId>> = NoteheadType::ALL
        .iter()
        .map(|&t| session.preview(t))
        .collect();
    assert_eq!(before[2], Some(SymId::NoteheadXBlack));

    session.set_custom(true);
    // Entering custom snapshots the preset resolution, so nothing jumps.
    let during: Vec<Option<SymId>> = NoteheadType::ALL
        .iter()
        .map(|&t| session.preview(t))
        .collect();
    assert_eq!(during, before);
    assert_eq!(session.drumset().notehead(42), NoteheadGroup::Custom);

    session.set_custom(false);
    let after: Vec<Option<SymId>> = NoteheadType::ALL
        .iter()
        .map(|&t| session.preview(t))
        .collect();
    assert_eq!(after, before);
    assert_eq!(session.drumset().notehead(42), NoteheadGroup::Cross);
}

#[test]
fn custom_glyphs_are_retained_but_inert_after_leaving_custom_mode() {
    let (mut session, _) = session();
    session.select(Some(56)).unwrap();
    session.set_name("Cowbell");
    session.set_notehead_group(NoteheadGroup::Diamond);

    session.set_custom(true);
    session.set_custom_sym(NoteheadType::Quarter, SymId::NoteheadXOrnate);
    assert_eq!(
        session.preview(NoteheadType::Quarter),
        Some(SymId::NoteheadXOrnate)
    );

    session.set_custom(false);
    // Resolution reverts to the preset…
    assert_eq!(
        session.preview(NoteheadType::Quarter),
        Some(SymId::NoteheadDiamondBlack)
    );
    assert_eq!(session.drumset().notehead(56), NoteheadGroup::Diamond);
    // …while the stored custom glyph stays behind, unused.
    let entry = session.drumset().drum(56).unwrap();
    assert_eq!(
        entry.noteheads[NoteheadType::Quarter.index()],
        SymId::NoteheadXOrnate
    );
}

#[test]
fn choosing_the_custom_group_enables_custom_mode() {
    let (mut session, _) = session();
    session.select(Some(38)).unwrap();
    session.set_name("Acoustic Snare");
    session.set_notehead_group(NoteheadGroup::Custom);

    assert!(session.fields().custom_enabled);
    assert_eq!(session.drumset().notehead(38), NoteheadGroup::Custom);
}

#[test]
fn populating_a_custom_row_restores_its_glyphs() {
    let mut initial = Drumset::new();
    {
        let entry = initial.drum_mut(56).unwrap();
        entry.name = "Cowbell".to_string();
        entry.notehead = NoteheadGroup::Custom;
        entry.noteheads[NoteheadType::Half.index()] = SymId::NoteheadMoonBlack;
    }
    let (mut session, _) = session_with(initial);
    session.select(Some(56)).unwrap();

    assert!(session.fields().custom_enabled);
    assert_eq!(
        session.preview(NoteheadType::Half),
        Some(SymId::NoteheadMoonBlack)
    );
}

// ─── Shortcuts through the session ──────────────────────────────────

#[test]
fn shortcut_eviction_applies_across_rows() {
    let (mut session, _) = session();
    session.select(Some(38)).unwrap();
    session.set_name("Acoustic Snare");
    session.set_shortcut(Some('A'));

    session.select(Some(36)).unwrap();
    session.set_name("Bass Drum 1");
    session.set_shortcut(Some('A'));

    assert_eq!(session.drumset().shortcut(36), Some('A'));
    assert_eq!(session.drumset().shortcut(38), None);
}

// ─── Wholesale replacement ──────────────────────────────────────────

#[test]
fn replace_drops_the_selection_and_pushes() {
    let (mut session, pushes) = session();
    session.select(Some(38)).unwrap();
    session.set_name("Acoustic Snare");

    let mut loaded = Drumset::new();
    loaded.drum_mut(60).unwrap().name = "High Bongo".to_string();
    session.replace(loaded);

    assert_eq!(session.selected(), None);
    assert_eq!(session.drumset().name(60), "High Bongo");
    assert!(!session.drumset().is_valid(38));
    assert_eq!(pushes.borrow().last().unwrap().name(60), "High Bongo");
}
