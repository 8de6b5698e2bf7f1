//! Notehead resolution — maps a notehead-group preset, or a per-duration
//! custom symbol set, to concrete glyph identifiers.
//!
//! Glyphs are identified by a strongly-typed [`SymId`] enumeration instead
//! of raw symbol-name strings; the names only appear at the file-format
//! boundary (see [`SymId::name`] / [`SymId::from_name`]).

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// Duration classes
// ═══════════════════════════════════════════════════════════════════════

/// The four notated note-duration shapes that select a distinct notehead
/// glyph. Double-whole (breve) notation has no dedicated duration code of
/// its own, so custom glyphs for it are stored under `Brevis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteheadType {
    Whole,
    Half,
    Quarter,
    Brevis,
}

impl NoteheadType {
    pub const ALL: [NoteheadType; 4] = [
        NoteheadType::Whole,
        NoteheadType::Half,
        NoteheadType::Quarter,
        NoteheadType::Brevis,
    ];

    /// Index into a per-duration glyph array.
    pub fn index(self) -> usize {
        match self {
            NoteheadType::Whole => 0,
            NoteheadType::Half => 1,
            NoteheadType::Quarter => 2,
            NoteheadType::Brevis => 3,
        }
    }

    /// Element name used in the `<noteheads>` record of a .drm file.
    pub fn tag(self) -> &'static str {
        match self {
            NoteheadType::Whole => "whole",
            NoteheadType::Half => "half",
            NoteheadType::Quarter => "quarter",
            NoteheadType::Brevis => "breve",
        }
    }

    pub fn from_tag(tag: &str) -> Option<NoteheadType> {
        match tag {
            "whole" => Some(NoteheadType::Whole),
            "half" => Some(NoteheadType::Half),
            "quarter" => Some(NoteheadType::Quarter),
            "breve" => Some(NoteheadType::Brevis),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Notehead groups
// ═══════════════════════════════════════════════════════════════════════

/// A preset family of notehead glyphs across duration classes.
///
/// `Custom` is the sentinel for entries that carry an explicit
/// per-duration glyph set instead of a preset family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteheadGroup {
    Normal,
    Cross,
    Plus,
    XCircle,
    WithX,
    TriangleUp,
    TriangleDown,
    Slash,
    Slashed1,
    Slashed2,
    Diamond,
    DiamondOld,
    Circled,
    CircledLarge,
    LargeArrow,
    Do,
    Re,
    Mi,
    Fa,
    La,
    Ti,
    Custom,
}

impl NoteheadGroup {
    /// Name written to / read from the `<head>` element of a .drm file.
    pub fn name(self) -> &'static str {
        match self {
            NoteheadGroup::Normal => "normal",
            NoteheadGroup::Cross => "cross",
            NoteheadGroup::Plus => "plus",
            NoteheadGroup::XCircle => "xcircle",
            NoteheadGroup::WithX => "withx",
            NoteheadGroup::TriangleUp => "triangle-up",
            NoteheadGroup::TriangleDown => "triangle-down",
            NoteheadGroup::Slash => "slash",
            NoteheadGroup::Slashed1 => "slashed1",
            NoteheadGroup::Slashed2 => "slashed2",
            NoteheadGroup::Diamond => "diamond",
            NoteheadGroup::DiamondOld => "diamond-old",
            NoteheadGroup::Circled => "circled",
            NoteheadGroup::CircledLarge => "circled-large",
            NoteheadGroup::LargeArrow => "large-arrow",
            NoteheadGroup::Do => "do",
            NoteheadGroup::Re => "re",
            NoteheadGroup::Mi => "mi",
            NoteheadGroup::Fa => "fa",
            NoteheadGroup::La => "la",
            NoteheadGroup::Ti => "ti",
            NoteheadGroup::Custom => "custom",
        }
    }

    pub fn from_name(name: &str) -> Option<NoteheadGroup> {
        ALL_GROUPS.iter().copied().find(|g| g.name() == name)
    }
}

/// Every group, `Custom` last. Useful for populating choice lists.
pub const ALL_GROUPS: [NoteheadGroup; 22] = [
    NoteheadGroup::Normal,
    NoteheadGroup::Cross,
    NoteheadGroup::Plus,
    NoteheadGroup::XCircle,
    NoteheadGroup::WithX,
    NoteheadGroup::TriangleUp,
    NoteheadGroup::TriangleDown,
    NoteheadGroup::Slash,
    NoteheadGroup::Slashed1,
    NoteheadGroup::Slashed2,
    NoteheadGroup::Diamond,
    NoteheadGroup::DiamondOld,
    NoteheadGroup::Circled,
    NoteheadGroup::CircledLarge,
    NoteheadGroup::LargeArrow,
    NoteheadGroup::Do,
    NoteheadGroup::Re,
    NoteheadGroup::Mi,
    NoteheadGroup::Fa,
    NoteheadGroup::La,
    NoteheadGroup::Ti,
    NoteheadGroup::Custom,
];

// ═══════════════════════════════════════════════════════════════════════
// Glyph identifiers
// ═══════════════════════════════════════════════════════════════════════

/// A notehead glyph, identified by its SMuFL canonical name.
///
/// Covers every glyph the preset table references plus the primary
/// alternatives offered for custom per-duration selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymId {
    NoteheadWhole,
    NoteheadHalf,
    NoteheadBlack,
    NoteheadDoubleWhole,
    NoteheadXWhole,
    NoteheadXHalf,
    NoteheadXBlack,
    NoteheadXDoubleWhole,
    NoteheadXOrnate,
    NoteheadPlusWhole,
    NoteheadPlusHalf,
    NoteheadPlusBlack,
    NoteheadPlusDoubleWhole,
    NoteheadCircleXWhole,
    NoteheadCircleXHalf,
    NoteheadCircleX,
    NoteheadCircleXDoubleWhole,
    NoteheadWholeWithX,
    NoteheadHalfWithX,
    NoteheadVoidWithX,
    NoteheadDoubleWholeWithX,
    NoteheadTriangleUpWhole,
    NoteheadTriangleUpHalf,
    NoteheadTriangleUpBlack,
    NoteheadTriangleUpDoubleWhole,
    NoteheadTriangleUpRightBlack,
    NoteheadTriangleDownWhole,
    NoteheadTriangleDownHalf,
    NoteheadTriangleDownBlack,
    NoteheadTriangleDownDoubleWhole,
    NoteheadTriangleLeftBlack,
    NoteheadTriangleRoundDownBlack,
    NoteheadSlashWhiteWhole,
    NoteheadSlashWhiteHalf,
    NoteheadSlashHorizontalEnds,
    NoteheadSlashWhiteDoubleWhole,
    NoteheadSlashedWhole1,
    NoteheadSlashedHalf1,
    NoteheadSlashedBlack1,
    NoteheadSlashedDoubleWhole1,
    NoteheadSlashedWhole2,
    NoteheadSlashedHalf2,
    NoteheadSlashedBlack2,
    NoteheadSlashedDoubleWhole2,
    NoteheadDiamondWhole,
    NoteheadDiamondHalf,
    NoteheadDiamondBlack,
    NoteheadDiamondDoubleWhole,
    NoteheadDiamondWholeOld,
    NoteheadDiamondHalfOld,
    NoteheadDiamondBlackOld,
    NoteheadDiamondDoubleWholeOld,
    NoteheadCircledWhole,
    NoteheadCircledHalf,
    NoteheadCircledBlack,
    NoteheadCircledDoubleWhole,
    NoteheadCircledWholeLarge,
    NoteheadCircledHalfLarge,
    NoteheadCircledBlackLarge,
    NoteheadCircledDoubleWholeLarge,
    NoteheadLargeArrowUpWhole,
    NoteheadLargeArrowUpHalf,
    NoteheadLargeArrowUpBlack,
    NoteheadLargeArrowUpDoubleWhole,
    NoteheadSquareBlack,
    NoteheadMoonBlack,
    NoteheadRoundWhiteWithDot,
    NoteShapeTriangleUpWhite,
    NoteShapeTriangleUpBlack,
    NoteShapeTriangleUpDoubleWhole,
    NoteShapeMoonWhite,
    NoteShapeMoonBlack,
    NoteShapeMoonDoubleWhole,
    NoteShapeDiamondWhite,
    NoteShapeDiamondBlack,
    NoteShapeDiamondDoubleWhole,
    NoteShapeTriangleRightWhite,
    NoteShapeTriangleRightBlack,
    NoteShapeTriangleRightDoubleWhole,
    NoteShapeSquareWhite,
    NoteShapeSquareBlack,
    NoteShapeSquareDoubleWhole,
    NoteShapeTriangleRoundWhite,
    NoteShapeTriangleRoundBlack,
    NoteShapeTriangleRoundDoubleWhole,
}

/// SymId ↔ canonical SMuFL name, resolved once at compile time.
const SYM_NAMES: &[(SymId, &str)] = &[
    (SymId::NoteheadWhole, "noteheadWhole"),
    (SymId::NoteheadHalf, "noteheadHalf"),
    (SymId::NoteheadBlack, "noteheadBlack"),
    (SymId::NoteheadDoubleWhole, "noteheadDoubleWhole"),
    (SymId::NoteheadXWhole, "noteheadXWhole"),
    (SymId::NoteheadXHalf, "noteheadXHalf"),
    (SymId::NoteheadXBlack, "noteheadXBlack"),
    (SymId::NoteheadXDoubleWhole, "noteheadXDoubleWhole"),
    (SymId::NoteheadXOrnate, "noteheadXOrnate"),
    (SymId::NoteheadPlusWhole, "noteheadPlusWhole"),
    (SymId::NoteheadPlusHalf, "noteheadPlusHalf"),
    (SymId::NoteheadPlusBlack, "noteheadPlusBlack"),
    (SymId::NoteheadPlusDoubleWhole, "noteheadPlusDoubleWhole"),
    (SymId::NoteheadCircleXWhole, "noteheadCircleXWhole"),
    (SymId::NoteheadCircleXHalf, "noteheadCircleXHalf"),
    (SymId::NoteheadCircleX, "noteheadCircleX"),
    (SymId::NoteheadCircleXDoubleWhole, "noteheadCircleXDoubleWhole"),
    (SymId::NoteheadWholeWithX, "noteheadWholeWithX"),
    (SymId::NoteheadHalfWithX, "noteheadHalfWithX"),
    (SymId::NoteheadVoidWithX, "noteheadVoidWithX"),
    (SymId::NoteheadDoubleWholeWithX, "noteheadDoubleWholeWithX"),
    (SymId::NoteheadTriangleUpWhole, "noteheadTriangleUpWhole"),
    (SymId::NoteheadTriangleUpHalf, "noteheadTriangleUpHalf"),
    (SymId::NoteheadTriangleUpBlack, "noteheadTriangleUpBlack"),
    (SymId::NoteheadTriangleUpDoubleWhole, "noteheadTriangleUpDoubleWhole"),
    (SymId::NoteheadTriangleUpRightBlack, "noteheadTriangleUpRightBlack"),
    (SymId::NoteheadTriangleDownWhole, "noteheadTriangleDownWhole"),
    (SymId::NoteheadTriangleDownHalf, "noteheadTriangleDownHalf"),
    (SymId::NoteheadTriangleDownBlack, "noteheadTriangleDownBlack"),
    (SymId::NoteheadTriangleDownDoubleWhole, "noteheadTriangleDownDoubleWhole"),
    (SymId::NoteheadTriangleLeftBlack, "noteheadTriangleLeftBlack"),
    (SymId::NoteheadTriangleRoundDownBlack, "noteheadTriangleRoundDownBlack"),
    (SymId::NoteheadSlashWhiteWhole, "noteheadSlashWhiteWhole"),
    (SymId::NoteheadSlashWhiteHalf, "noteheadSlashWhiteHalf"),
    (SymId::NoteheadSlashHorizontalEnds, "noteheadSlashHorizontalEnds"),
    (SymId::NoteheadSlashWhiteDoubleWhole, "noteheadSlashWhiteDoubleWhole"),
    (SymId::NoteheadSlashedWhole1, "noteheadSlashedWhole1"),
    (SymId::NoteheadSlashedHalf1, "noteheadSlashedHalf1"),
    (SymId::NoteheadSlashedBlack1, "noteheadSlashedBlack1"),
    (SymId::NoteheadSlashedDoubleWhole1, "noteheadSlashedDoubleWhole1"),
    (SymId::NoteheadSlashedWhole2, "noteheadSlashedWhole2"),
    (SymId::NoteheadSlashedHalf2, "noteheadSlashedHalf2"),
    (SymId::NoteheadSlashedBlack2, "noteheadSlashedBlack2"),
    (SymId::NoteheadSlashedDoubleWhole2, "noteheadSlashedDoubleWhole2"),
    (SymId::NoteheadDiamondWhole, "noteheadDiamondWhole"),
    (SymId::NoteheadDiamondHalf, "noteheadDiamondHalf"),
    (SymId::NoteheadDiamondBlack, "noteheadDiamondBlack"),
    (SymId::NoteheadDiamondDoubleWhole, "noteheadDiamondDoubleWhole"),
    (SymId::NoteheadDiamondWholeOld, "noteheadDiamondWholeOld"),
    (SymId::NoteheadDiamondHalfOld, "noteheadDiamondHalfOld"),
    (SymId::NoteheadDiamondBlackOld, "noteheadDiamondBlackOld"),
    (SymId::NoteheadDiamondDoubleWholeOld, "noteheadDiamondDoubleWholeOld"),
    (SymId::NoteheadCircledWhole, "noteheadCircledWhole"),
    (SymId::NoteheadCircledHalf, "noteheadCircledHalf"),
    (SymId::NoteheadCircledBlack, "noteheadCircledBlack"),
    (SymId::NoteheadCircledDoubleWhole, "noteheadCircledDoubleWhole"),
    (SymId::NoteheadCircledWholeLarge, "noteheadCircledWholeLarge"),
    (SymId::NoteheadCircledHalfLarge, "noteheadCircledHalfLarge"),
    (SymId::NoteheadCircledBlackLarge, "noteheadCircledBlackLarge"),
    (SymId::NoteheadCircledDoubleWholeLarge, "noteheadCircledDoubleWholeLarge"),
    (SymId::NoteheadLargeArrowUpWhole, "noteheadLargeArrowUpWhole"),
    (SymId::NoteheadLargeArrowUpHalf, "noteheadLargeArrowUpHalf"),
    (SymId::NoteheadLargeArrowUpBlack, "noteheadLargeArrowUpBlack"),
    (SymId::NoteheadLargeArrowUpDoubleWhole, "noteheadLargeArrowUpDoubleWhole"),
    (SymId::NoteheadSquareBlack, "noteheadSquareBlack"),
    (SymId::NoteheadMoonBlack, "noteheadMoonBlack"),
    (SymId::NoteheadRoundWhiteWithDot, "noteheadRoundWhiteWithDot"),
    (SymId::NoteShapeTriangleUpWhite, "noteShapeTriangleUpWhite"),
    (SymId::NoteShapeTriangleUpBlack, "noteShapeTriangleUpBlack"),
    (SymId::NoteShapeTriangleUpDoubleWhole, "noteShapeTriangleUpDoubleWhole"),
    (SymId::NoteShapeMoonWhite, "noteShapeMoonWhite"),
    (SymId::NoteShapeMoonBlack, "noteShapeMoonBlack"),
    (SymId::NoteShapeMoonDoubleWhole, "noteShapeMoonDoubleWhole"),
    (SymId::NoteShapeDiamondWhite, "noteShapeDiamondWhite"),
    (SymId::NoteShapeDiamondBlack, "noteShapeDiamondBlack"),
    (SymId::NoteShapeDiamondDoubleWhole, "noteShapeDiamondDoubleWhole"),
    (SymId::NoteShapeTriangleRightWhite, "noteShapeTriangleRightWhite"),
    (SymId::NoteShapeTriangleRightBlack, "noteShapeTriangleRightBlack"),
    (SymId::NoteShapeTriangleRightDoubleWhole, "noteShapeTriangleRightDoubleWhole"),
    (SymId::NoteShapeSquareWhite, "noteShapeSquareWhite"),
    (SymId::NoteShapeSquareBlack, "noteShapeSquareBlack"),
    (SymId::NoteShapeSquareDoubleWhole, "noteShapeSquareDoubleWhole"),
    (SymId::NoteShapeTriangleRoundWhite, "noteShapeTriangleRoundWhite"),
    (SymId::NoteShapeTriangleRoundBlack, "noteShapeTriangleRoundBlack"),
    (SymId::NoteShapeTriangleRoundDoubleWhole, "noteShapeTriangleRoundDoubleWhole"),
];

impl SymId {
    /// Canonical SMuFL glyph name, as serialized in .drm files.
    pub fn name(self) -> &'static str {
        SYM_NAMES
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
            .unwrap_or("noteheadBlack")
    }

    pub fn from_name(name: &str) -> Option<SymId> {
        SYM_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(id, _)| *id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Preset resolution
// ═══════════════════════════════════════════════════════════════════════

/// Glyphs for a preset group, ordered whole / half / quarter / brevis.
/// Returns `None` for [`NoteheadGroup::Custom`], which has no preset
/// resolution — the entry's own glyph set applies instead.
pub fn preset_heads(group: NoteheadGroup) -> Option<[SymId; 4]> {
    use SymId::*;
    let heads = match group {
        NoteheadGroup::Normal => [NoteheadWhole, NoteheadHalf, NoteheadBlack, NoteheadDoubleWhole],
        NoteheadGroup::Cross => [NoteheadXWhole, NoteheadXHalf, NoteheadXBlack, NoteheadXDoubleWhole],
        NoteheadGroup::Plus => [NoteheadPlusWhole, NoteheadPlusHalf, NoteheadPlusBlack, NoteheadPlusDoubleWhole],
        NoteheadGroup::XCircle => [NoteheadCircleXWhole, NoteheadCircleXHalf, NoteheadCircleX, NoteheadCircleXDoubleWhole],
        NoteheadGroup::WithX => [NoteheadWholeWithX, NoteheadHalfWithX, NoteheadVoidWithX, NoteheadDoubleWholeWithX],
        NoteheadGroup::TriangleUp => [NoteheadTriangleUpWhole, NoteheadTriangleUpHalf, NoteheadTriangleUpBlack, NoteheadTriangleUpDoubleWhole],
        NoteheadGroup::TriangleDown => [NoteheadTriangleDownWhole, NoteheadTriangleDownHalf, NoteheadTriangleDownBlack, NoteheadTriangleDownDoubleWhole],
        NoteheadGroup::Slash => [NoteheadSlashWhiteWhole, NoteheadSlashWhiteHalf, NoteheadSlashHorizontalEnds, NoteheadSlashWhiteDoubleWhole],
        NoteheadGroup::Slashed1 => [NoteheadSlashedWhole1, NoteheadSlashedHalf1, NoteheadSlashedBlack1, NoteheadSlashedDoubleWhole1],
        NoteheadGroup::Slashed2 => [NoteheadSlashedWhole2, NoteheadSlashedHalf2, NoteheadSlashedBlack2, NoteheadSlashedDoubleWhole2],
        NoteheadGroup::Diamond => [NoteheadDiamondWhole, NoteheadDiamondHalf, NoteheadDiamondBlack, NoteheadDiamondDoubleWhole],
        NoteheadGroup::DiamondOld => [NoteheadDiamondWholeOld, NoteheadDiamondHalfOld, NoteheadDiamondBlackOld, NoteheadDiamondDoubleWholeOld],
        NoteheadGroup::Circled => [NoteheadCircledWhole, NoteheadCircledHalf, NoteheadCircledBlack, NoteheadCircledDoubleWhole],
        NoteheadGroup::CircledLarge => [NoteheadCircledWholeLarge, NoteheadCircledHalfLarge, NoteheadCircledBlackLarge, NoteheadCircledDoubleWholeLarge],
        NoteheadGroup::LargeArrow => [NoteheadLargeArrowUpWhole, NoteheadLargeArrowUpHalf, NoteheadLargeArrowUpBlack, NoteheadLargeArrowUpDoubleWhole],
        // Shape notes only distinguish white/black heads, plus a
        // double-whole variant.
        NoteheadGroup::Do => [NoteShapeTriangleUpWhite, NoteShapeTriangleUpWhite, NoteShapeTriangleUpBlack, NoteShapeTriangleUpDoubleWhole],
        NoteheadGroup::Re => [NoteShapeMoonWhite, NoteShapeMoonWhite, NoteShapeMoonBlack, NoteShapeMoonDoubleWhole],
        NoteheadGroup::Mi => [NoteShapeDiamondWhite, NoteShapeDiamondWhite, NoteShapeDiamondBlack, NoteShapeDiamondDoubleWhole],
        NoteheadGroup::Fa => [NoteShapeTriangleRightWhite, NoteShapeTriangleRightWhite, NoteShapeTriangleRightBlack, NoteShapeTriangleRightDoubleWhole],
        NoteheadGroup::La => [NoteShapeSquareWhite, NoteShapeSquareWhite, NoteShapeSquareBlack, NoteShapeSquareDoubleWhole],
        NoteheadGroup::Ti => [NoteShapeTriangleRoundWhite, NoteShapeTriangleRoundWhite, NoteShapeTriangleRoundBlack, NoteShapeTriangleRoundDoubleWhole],
        NoteheadGroup::Custom => return None,
    };
    Some(heads)
}

/// Resolve one preset glyph.
pub fn preset_head(group: NoteheadGroup, head_type: NoteheadType) -> Option<SymId> {
    preset_heads(group).map(|heads| heads[head_type.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_table_total_over_non_custom_groups() {
        for group in ALL_GROUPS {
            if group == NoteheadGroup::Custom {
                assert!(preset_heads(group).is_none());
                continue;
            }
            let heads = preset_heads(group)
                .unwrap_or_else(|| panic!("group {group:?} has no preset glyphs"));
            for head_type in NoteheadType::ALL {
                // Every resolved glyph must have a serializable name.
                let sym = heads[head_type.index()];
                assert!(SymId::from_name(sym.name()) == Some(sym));
            }
        }
    }

    #[test]
    fn group_names_round_trip() {
        for group in ALL_GROUPS {
            assert_eq!(NoteheadGroup::from_name(group.name()), Some(group));
        }
    }

    #[test]
    fn sym_names_round_trip() {
        assert_eq!(SymId::from_name("noteheadXBlack"), Some(SymId::NoteheadXBlack));
        assert_eq!(SymId::from_name("no-such-glyph"), None);
        assert_eq!(SymId::NoteheadDoubleWhole.name(), "noteheadDoubleWhole");
    }
}
