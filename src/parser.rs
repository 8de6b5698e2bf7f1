//! .drm parser — reads a drum map from its versioned tagged-text format.
//!
//! The format is a single `<drumset version="..">` container wrapping one
//! `<drum pitch="..">` record per used pitch. Unknown elements are skipped
//! so newer files still load (forward-compatible ignore-unknown policy).

use log::{debug, warn};
use roxmltree::{Document, Node};

use crate::error::DrumsetError;
use crate::model::{Drumset, StemDirection};
use crate::notehead::{NoteheadGroup, NoteheadType, SymId};

/// Format version written by this library and expected on load.
pub const FORMAT_VERSION: &str = "1.1";

/// What the user chose when warned about an old file version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionDecision {
    /// Proceed with the load anyway.
    Ignore,
    /// Abandon the load. Also what any other dismissal maps to.
    Cancel,
}

/// External collaborator consulted when a file declares an older format
/// version than [`FORMAT_VERSION`]. The presentation layer typically shows
/// a warning prompt with Cancel/Ignore buttons.
pub trait VersionGate {
    fn old_version(&mut self, file_version: &str, expected: &str) -> VersionDecision;
}

/// A gate that always proceeds; for callers with no user to ask.
pub struct IgnoreOldVersions;

impl VersionGate for IgnoreOldVersions {
    fn old_version(&mut self, _file_version: &str, _expected: &str) -> VersionDecision {
        VersionDecision::Ignore
    }
}

/// How a load ended. `Cancelled` means the version gate aborted it — the
/// target drumset is left cleared, not reverted (documented one-way
/// behavior of the load operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Cancelled,
}

/// Parse .drm XML into `drumset`, replacing its previous contents.
///
/// The target is cleared as soon as the document text is confirmed
/// well-formed, before any record is read; a syntactically broken file
/// therefore leaves the drumset untouched, but a version-gate Cancel does
/// not restore it.
pub fn parse_drm(
    xml: &str,
    drumset: &mut Drumset,
    gate: &mut dyn VersionGate,
) -> Result<LoadOutcome, DrumsetError> {
    let doc = Document::parse(xml).map_err(|e| DrumsetError::Parse(format!("XML error: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() != "drumset" {
        return Err(DrumsetError::Parse(format!(
            "unsupported root element: '{}'",
            root.tag_name().name()
        )));
    }

    // Full replace, not merge: stale entries from a previous map must not
    // survive a partially-populated file.
    drumset.clear();

    let version = root.attribute("version").unwrap_or("");
    if version_is_older(version, FORMAT_VERSION) {
        if gate.old_version(version, FORMAT_VERSION) != VersionDecision::Ignore {
            debug!("drumset load cancelled (file version '{version}')");
            return Ok(LoadOutcome::Cancelled);
        }
    }

    let mut loaded = 0usize;
    for child in root.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "drum" => {
                if parse_drum(&child, drumset) {
                    loaded += 1;
                }
            }
            other => warn!("skipping unknown element <{other}> in drumset file"),
        }
    }

    debug!("loaded {loaded} drum records (file version '{version}')");
    Ok(LoadOutcome::Loaded)
}

/// One `<drum>` record. Returns false when the record has no usable pitch
/// and was skipped.
fn parse_drum(node: &Node, drumset: &mut Drumset) -> bool {
    let pitch = match node.attribute("pitch").and_then(|p| p.parse::<i32>().ok()) {
        Some(p) => p,
        None => {
            warn!("skipping <drum> record without a valid pitch attribute");
            return false;
        }
    };
    let entry = match drumset.drum_mut(pitch) {
        Ok(entry) => entry,
        Err(_) => {
            warn!("skipping <drum> record with out-of-range pitch {pitch}");
            return false;
        }
    };

    for child in node.children().filter(|n| n.is_element()) {
        let text = child.text().unwrap_or("").trim();
        match child.tag_name().name() {
            "name" => entry.name = text.to_string(),
            "head" => match NoteheadGroup::from_name(text) {
                Some(group) => entry.notehead = group,
                None => warn!("pitch {pitch}: unknown notehead group '{text}'"),
            },
            "noteheads" => {
                entry.notehead = NoteheadGroup::Custom;
                parse_custom_heads(&child, &mut entry.noteheads, pitch);
            }
            "line" => entry.line = text.parse().unwrap_or(0),
            "voice" => entry.voice = text.parse().unwrap_or(0),
            "stem" => match StemDirection::from_name(text) {
                Some(dir) => entry.stem_direction = dir,
                None => warn!("pitch {pitch}: unknown stem direction '{text}'"),
            },
            "shortcut" => {
                entry.shortcut = text.chars().next().filter(|c| ('A'..='G').contains(c));
            }
            other => warn!("pitch {pitch}: skipping unknown element <{other}>"),
        }
    }
    true
}

/// The four per-duration glyphs of a `<noteheads>` block. Missing or
/// unknown glyph names leave the default for that duration in place.
fn parse_custom_heads(node: &Node, heads: &mut [SymId; 4], pitch: i32) {
    for child in node.children().filter(|n| n.is_element()) {
        let tag = child.tag_name().name();
        let head_type = match NoteheadType::from_tag(tag) {
            Some(t) => t,
            None => {
                warn!("pitch {pitch}: skipping unknown element <{tag}> in <noteheads>");
                continue;
            }
        };
        let text = child.text().unwrap_or("").trim();
        match SymId::from_name(text) {
            Some(sym) => heads[head_type.index()] = sym,
            None => warn!("pitch {pitch}: unknown glyph name '{text}' for <{tag}>"),
        }
    }
}

/// Strictly-older comparison over "major.minor" version strings. Anything
/// unparseable counts as older, so it still goes through the version gate.
fn version_is_older(version: &str, expected: &str) -> bool {
    match (parse_version(version), parse_version(expected)) {
        (Some(v), Some(e)) => v < e,
        _ => true,
    }
}

fn parse_version(s: &str) -> Option<(u32, u32)> {
    let (major, minor) = s.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}
