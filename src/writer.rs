//! .drm writer — accumulates tagged-text elements and produces the final
//! file content.
//!
//! Only valid (named) entries are written, keeping files compact and
//! order-independent on reload; unused slots never round-trip.

use crate::model::Drumset;
use crate::notehead::{NoteheadGroup, NoteheadType};
use crate::parser::FORMAT_VERSION;

/// Serialize a drum map to .drm text.
pub fn write_drm(drumset: &Drumset) -> String {
    let mut xml = XmlBuilder::new();
    xml.header();
    xml.stag(&format!(r#"drumset version="{FORMAT_VERSION}""#));

    for pitch in drumset.used_pitches() {
        // used_pitches only yields in-range pitches
        let entry = match drumset.drum(pitch) {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        xml.stag(&format!(r#"drum pitch="{pitch}""#));
        xml.tag("name", &entry.name);
        if entry.notehead == NoteheadGroup::Custom {
            xml.stag("noteheads");
            for head_type in NoteheadType::ALL {
                xml.tag(head_type.tag(), entry.noteheads[head_type.index()].name());
            }
            xml.etag("noteheads");
        } else {
            xml.tag("head", entry.notehead.name());
        }
        xml.tag("line", &entry.line.to_string());
        xml.tag("voice", &entry.voice.to_string());
        xml.tag("stem", entry.stem_direction.name());
        if let Some(shortcut) = entry.shortcut {
            xml.tag("shortcut", &shortcut.to_string());
        }
        xml.etag("drum");
    }

    xml.etag("drumset");
    xml.build()
}

// ═══════════════════════════════════════════════════════════════════════
// XmlBuilder
// ═══════════════════════════════════════════════════════════════════════

struct XmlBuilder {
    out: String,
    indent: usize,
}

impl XmlBuilder {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn build(self) -> String {
        self.out
    }

    fn header(&mut self) {
        self.out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
    }

    /// Open tag. `tag` may carry attributes, only the first word is the
    /// element name used by the matching `etag`.
    fn stag(&mut self, tag: &str) {
        self.push_indent();
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(">\n");
        self.indent += 1;
    }

    fn etag(&mut self, name: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.push_indent();
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push_str(">\n");
    }

    /// One-line element with escaped text content.
    fn tag(&mut self, name: &str, text: &str) {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.push_indent();
        self.out
            .push_str(&format!("<{name}>{escaped}</{name}>\n"));
    }
}
