//! Model invariants — shortcut uniqueness, validity gating, clearing.

use drumlib::{pitch_name, Drumset, DrumsetError, NoteheadGroup, StemDirection};

fn named(set: &mut Drumset, pitch: i32, name: &str) {
    set.drum_mut(pitch).unwrap().name = name.to_string();
}

/// At most one pitch holds any given letter after every assignment.
fn assert_shortcuts_unique(set: &Drumset) {
    for letter in 'A'..='G' {
        let holders: Vec<i32> = (0..128)
            .filter(|&p| set.shortcut(p) == Some(letter))
            .collect();
        assert!(
            holders.len() <= 1,
            "letter {letter} held by multiple pitches: {holders:?}"
        );
    }
}

// ─── Shortcut uniqueness ────────────────────────────────────────────

#[test]
fn shortcut_assignment_evicts_previous_holder() {
    let mut set = Drumset::new();
    named(&mut set, 38, "Acoustic Snare");
    named(&mut set, 36, "Bass Drum 1");

    set.set_shortcut(38, Some('A')).unwrap();
    assert_eq!(set.shortcut(38), Some('A'));

    // Last writer wins; the previous holder is silently bumped.
    set.set_shortcut(36, Some('A')).unwrap();
    assert_eq!(set.shortcut(36), Some('A'));
    assert_eq!(set.shortcut(38), None);
    assert_shortcuts_unique(&set);
}

#[test]
fn shortcut_uniqueness_under_arbitrary_sequences() {
    let mut set = Drumset::new();
    let sequence: &[(i32, Option<char>)] = &[
        (38, Some('A')),
        (36, Some('B')),
        (42, Some('A')),
        (42, Some('B')),
        (36, Some('B')),
        (38, None),
        (51, Some('G')),
        (36, Some('G')),
        (51, Some('G')),
    ];
    for &(pitch, shortcut) in sequence {
        set.set_shortcut(pitch, shortcut).unwrap();
        assert_shortcuts_unique(&set);
        assert_eq!(set.shortcut(pitch), shortcut);
    }
}

#[test]
fn clearing_a_shortcut_does_not_evict_others() {
    let mut set = Drumset::new();
    set.set_shortcut(38, Some('C')).unwrap();
    set.set_shortcut(36, None).unwrap();
    assert_eq!(set.shortcut(38), Some('C'));
    assert_eq!(set.shortcut(36), None);
}

#[test]
fn reassigning_the_same_pitch_keeps_its_shortcut() {
    let mut set = Drumset::new();
    set.set_shortcut(38, Some('D')).unwrap();
    set.set_shortcut(38, Some('D')).unwrap();
    assert_eq!(set.shortcut(38), Some('D'));
}

// ─── Validity gating ────────────────────────────────────────────────

#[test]
fn entry_is_valid_iff_name_non_empty() {
    let mut set = Drumset::new();
    assert!(!set.is_valid(38));

    named(&mut set, 38, "Acoustic Snare");
    assert!(set.is_valid(38));

    // Emptying the name invalidates the slot but the stored fields stay
    // behind as leftover state.
    {
        let entry = set.drum_mut(38).unwrap();
        entry.line = 2;
        entry.voice = 1;
        entry.name.clear();
    }
    assert!(!set.is_valid(38));
    assert_eq!(set.line(38), 2);
    assert_eq!(set.voice(38), 1);
}

#[test]
fn out_of_range_pitches_are_never_valid() {
    let set = Drumset::new();
    assert!(!set.is_valid(-1));
    assert!(!set.is_valid(128));
    assert!(matches!(
        set.drum(300),
        Err(DrumsetError::OutOfRange(300))
    ));
}

// ─── Clear & iteration ──────────────────────────────────────────────

#[test]
fn clear_resets_every_slot() {
    let mut set = Drumset::new();
    named(&mut set, 36, "Bass Drum 1");
    named(&mut set, 38, "Acoustic Snare");
    set.set_shortcut(38, Some('A')).unwrap();
    set.drum_mut(36).unwrap().notehead = NoteheadGroup::Cross;

    set.clear();
    assert_eq!(set.used_pitches().count(), 0);
    assert_eq!(set.shortcut(38), None);
    assert_eq!(set.notehead(36), NoteheadGroup::Normal);
    assert_eq!(set.stem_direction(36), StemDirection::Auto);
}

#[test]
fn used_pitches_ascending() {
    let mut set = Drumset::new();
    named(&mut set, 51, "Ride Cymbal 1");
    named(&mut set, 36, "Bass Drum 1");
    named(&mut set, 42, "Closed Hi-Hat");
    let pitches: Vec<i32> = set.used_pitches().collect();
    assert_eq!(pitches, vec![36, 42, 51]);
}

// ─── JSON export ────────────────────────────────────────────────────

#[test]
fn drumset_exports_to_json() {
    let mut set = Drumset::new();
    named(&mut set, 38, "Acoustic Snare");
    let json = drumlib::drumset_to_json(&set).unwrap();
    assert!(json.contains("Acoustic Snare"));
}

#[test]
fn pitch_names_for_common_drums() {
    assert_eq!(pitch_name(35), "B1");
    assert_eq!(pitch_name(42), "F#2");
}
