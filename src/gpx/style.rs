//! Track styling: the `<extensions>` blocks injected above each track segment
//!
//! A track's style is chosen from category markers in its first `<name>` line.
//! The markers are checked in a fixed priority order and the first one present
//! wins, so `Route (TRO) / (Temp TRO)` resolves to [`TrackStyle::Tro`].

use std::fmt;

use super::tags::{Document, LineTag};

const EXT_TRO: &str = "<extensions>
  <gpxx:TrackExtension>
    <gpxx:DisplayColor>Red</gpxx:DisplayColor>
  </gpxx:TrackExtension>
  <gpx_style:line>
    <gpx_style:color>FF0000</gpx_style:color>
  </gpx_style:line>
</extensions>";

const EXT_TEMP_TRO: &str = "<extensions>
  <gpxx:TrackExtension>
    <gpxx:DisplayColor>Blue</gpxx:DisplayColor>
  </gpxx:TrackExtension>
  <gpx_style:line>
    <gpx_style:color>0000FF</gpx_style:color>
  </gpx_style:line>
</extensions>";

const EXT_PA: &str = "<extensions>
  <gpxx:TrackExtension>
    <gpxx:DisplayColor>Orange</gpxx:DisplayColor>
  </gpxx:TrackExtension>
  <gpx_style:line>
    <gpx_style:color>FFA500</gpx_style:color>
  </gpx_style:line>
</extensions>";

const EXT_LR: &str = "<extensions>
  <gpxx:TrackExtension>
    <gpxx:DisplayColor>DarkGray</gpxx:DisplayColor>
  </gpxx:TrackExtension>
  <gpx_style:line>
    <gpx_style:color>444444</gpx_style:color>
  </gpx_style:line>
</extensions>";

const EXT_DEFAULT_GREEN: &str = "<extensions>
  <gpxx:TrackExtension>
    <gpxx:DisplayColor>Green</gpxx:DisplayColor>
  </gpxx:TrackExtension>
  <gpx_style:line>
    <gpx_style:color>00FF00</gpx_style:color>
  </gpx_style:line>
</extensions>";

/// Route category, each mapped to one fixed extension block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackStyle {
    /// `(TRO)`: red
    Tro,
    /// `(Temp TRO)`: blue
    TempTro,
    /// `(PA)`: orange
    Pa,
    /// `(LR)`: dark gray
    Lr,
    /// No marker: green
    Default,
}

impl TrackStyle {
    /// Marker styles in priority order. [`TrackStyle::Default`] is the fallback.
    pub const PRIORITY: [TrackStyle; 4] = [
        TrackStyle::Tro,
        TrackStyle::TempTro,
        TrackStyle::Pa,
        TrackStyle::Lr,
    ];

    /// The substring in a `<name>` line that selects this style.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            TrackStyle::Tro => Some("(TRO)"),
            TrackStyle::TempTro => Some("(Temp TRO)"),
            TrackStyle::Pa => Some("(PA)"),
            TrackStyle::Lr => Some("(LR)"),
            TrackStyle::Default => None,
        }
    }

    /// The full `<extensions>` template.
    pub fn block(self) -> &'static str {
        match self {
            TrackStyle::Tro => EXT_TRO,
            TrackStyle::TempTro => EXT_TEMP_TRO,
            TrackStyle::Pa => EXT_PA,
            TrackStyle::Lr => EXT_LR,
            TrackStyle::Default => EXT_DEFAULT_GREEN,
        }
    }

    /// Template split into lines, ready for insertion.
    pub fn block_lines(self) -> impl Iterator<Item = String> {
        self.block().lines().map(str::to_string)
    }

    pub fn label(self) -> &'static str {
        match self {
            TrackStyle::Tro => "TRO",
            TrackStyle::TempTro => "Temp TRO",
            TrackStyle::Pa => "PA",
            TrackStyle::Lr => "LR",
            TrackStyle::Default => "Default",
        }
    }

    /// Garmin `DisplayColor` value.
    pub fn display_color(self) -> &'static str {
        match self {
            TrackStyle::Tro => "Red",
            TrackStyle::TempTro => "Blue",
            TrackStyle::Pa => "Orange",
            TrackStyle::Lr => "DarkGray",
            TrackStyle::Default => "Green",
        }
    }

    /// `gpx_style:color` RGB hex value.
    pub fn hex_color(self) -> &'static str {
        match self {
            TrackStyle::Tro => "FF0000",
            TrackStyle::TempTro => "0000FF",
            TrackStyle::Pa => "FFA500",
            TrackStyle::Lr => "444444",
            TrackStyle::Default => "00FF00",
        }
    }

    /// Resolve the style for a raw `<name>` line (first marker wins).
    pub fn from_name_line(line: &str) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|style| style.marker().is_some_and(|m| line.contains(m)))
            .unwrap_or(TrackStyle::Default)
    }
}

impl fmt::Display for TrackStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.display_color())
    }
}

/// Pick the style for a document from its first `<name>` line.
pub fn pick_style(doc: &Document) -> TrackStyle {
    doc.first_line(LineTag::Name)
        .map(TrackStyle::from_name_line)
        .unwrap_or(TrackStyle::Default)
}

/// Extract the text between `<name>` and `</name>` of the first name line.
pub fn track_name(doc: &Document) -> Option<String> {
    let line = doc.first_line(LineTag::Name)?.trim();
    let inner = line.strip_prefix("<name>").unwrap_or(line);
    let inner = inner.strip_suffix("</name>").unwrap_or(inner);
    Some(inner.trim().to_string())
}
