//! Line classification for GPX text documents
//!
//! GPX files are rewritten line by line without an XML parser. Every line is
//! classified once into a [`LineTag`] and the classification travels with the
//! line through every rewrite step, so the pipeline never re-parses text.

pub const NAME_PREFIX: &str = "<name>";
pub const DESC_PREFIX: &str = "<desc>";
pub const TRKSEG_PREFIX: &str = "<trkseg>";
pub const TRK_PREFIX: &str = "<trk>";
pub const GPX_CLOSE: &str = "</gpx>";

/// The kind of tag a line starts with, ignoring leading whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineTag {
    /// `<name>...`
    Name,
    /// `<desc>...`
    Desc,
    /// `<trkseg>...`
    TrkSeg,
    /// `<trk>...`
    Trk,
    /// Any other line containing `</gpx>`
    GpxClose,
    Other,
}

impl LineTag {
    /// Classify a single line.
    ///
    /// Prefix matches are case-sensitive and ignore leading whitespace only.
    /// Prefix tags win over `</gpx>`, so `<trk></gpx>` classifies as [`LineTag::Trk`].
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim_start();
        if trimmed.starts_with(NAME_PREFIX) {
            LineTag::Name
        } else if trimmed.starts_with(DESC_PREFIX) {
            LineTag::Desc
        } else if trimmed.starts_with(TRKSEG_PREFIX) {
            LineTag::TrkSeg
        } else if trimmed.starts_with(TRK_PREFIX) {
            LineTag::Trk
        } else if line.contains(GPX_CLOSE) {
            LineTag::GpxClose
        } else {
            LineTag::Other
        }
    }
}

/// Split text into lines on `\n`, `\r\n` or a bare `\r`.
///
/// A trailing terminator does not produce an empty final line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + width..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// True when `</gpx>` appears anywhere in the line.
pub fn closes_gpx(line: &str) -> bool {
    line.contains(GPX_CLOSE)
}

/// An ordered list of lines with their tags kept in step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    tags: Vec<LineTag>,
}

impl Document {
    /// Split raw file content into classified lines.
    pub fn parse(content: &str) -> Self {
        split_lines(content).into_iter().collect()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn tags(&self) -> &[LineTag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first line carrying `tag`.
    pub fn first(&self, tag: LineTag) -> Option<usize> {
        self.tags.iter().position(|t| *t == tag)
    }

    /// Text of the first line carrying `tag`.
    pub fn first_line(&self, tag: LineTag) -> Option<&str> {
        self.first(tag).map(|idx| self.lines[idx].as_str())
    }

    pub fn tag_at(&self, idx: usize) -> Option<LineTag> {
        self.tags.get(idx).copied()
    }

    /// Insert one line before `idx`.
    pub fn insert(&mut self, idx: usize, line: String) {
        self.tags.insert(idx, LineTag::classify(&line));
        self.lines.insert(idx, line);
    }

    /// Insert a run of lines before `idx`, preserving their order.
    pub fn insert_lines<I>(&mut self, idx: usize, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        let lines: Vec<String> = lines.into_iter().collect();
        let tags: Vec<LineTag> = lines.iter().map(|l| LineTag::classify(l)).collect();
        self.tags.splice(idx..idx, tags);
        self.lines.splice(idx..idx, lines);
    }

    /// Drop every line before `idx`.
    pub fn discard_before(&mut self, idx: usize) {
        self.lines.drain(..idx);
        self.tags.drain(..idx);
    }

    /// Keep only the lines for which `keep` returns true.
    pub fn retain_lines<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        let (lines, tags): (Vec<String>, Vec<LineTag>) = std::mem::take(&mut self.lines)
            .into_iter()
            .zip(std::mem::take(&mut self.tags))
            .filter(|(line, _)| keep(line))
            .unzip();
        self.lines = lines;
        self.tags = tags;
    }

    /// Join with `\n` and strip surrounding whitespace.
    pub fn to_text(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}

impl FromIterator<String> for Document {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let lines: Vec<String> = iter.into_iter().collect();
        let tags = lines.iter().map(|l| LineTag::classify(l)).collect();
        Self { lines, tags }
    }
}

impl<'a> FromIterator<&'a str> for Document {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(LineTag::classify("<name>A</name>"), LineTag::Name);
        assert_eq!(LineTag::classify("<desc>d</desc>"), LineTag::Desc);
        assert_eq!(LineTag::classify("<trkseg>"), LineTag::TrkSeg);
        assert_eq!(LineTag::classify("<trk>"), LineTag::Trk);
        assert_eq!(LineTag::classify("</gpx>"), LineTag::GpxClose);
        assert_eq!(LineTag::classify("<trkpt lat=\"1\"/>"), LineTag::Other);
    }

    #[test]
    fn test_classify_ignores_leading_whitespace_only() {
        assert_eq!(LineTag::classify("    <trkseg>"), LineTag::TrkSeg);
        assert_eq!(LineTag::classify("\t<name>x</name>"), LineTag::Name);
        assert_eq!(LineTag::classify("x <trk>"), LineTag::Other);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(LineTag::classify("<TRK>"), LineTag::Other);
        assert_eq!(LineTag::classify("<Name>a</Name>"), LineTag::Other);
    }

    #[test]
    fn test_trkseg_is_not_trk() {
        assert_ne!(LineTag::classify("<trkseg>"), LineTag::Trk);
        assert_eq!(LineTag::classify("</trk>"), LineTag::Other);
    }

    #[test]
    fn test_prefix_tag_wins_over_gpx_close() {
        let line = "<trk></trk></gpx>";
        assert_eq!(LineTag::classify(line), LineTag::Trk);
        assert!(closes_gpx(line));
    }

    #[test]
    fn test_insert_keeps_tags_in_step() {
        let mut doc: Document = ["<trk>", "<trkseg>"].into_iter().collect();
        doc.insert(1, "<desc>d</desc>".to_string());
        assert_eq!(doc.tags(), &[LineTag::Trk, LineTag::Desc, LineTag::TrkSeg]);
        assert_eq!(doc.first(LineTag::TrkSeg), Some(2));
    }

    #[test]
    fn test_insert_lines_preserves_order() {
        let mut doc: Document = ["a", "<trkseg>"].into_iter().collect();
        doc.insert_lines(1, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(doc.lines(), &["a", "x", "y", "<trkseg>"]);
        assert_eq!(doc.tags().len(), doc.len());
    }

    #[test]
    fn test_parse_handles_crlf() {
        let doc = Document::parse("<trk>\r\n<trkseg>\r\n");
        assert_eq!(doc.lines(), &["<trk>", "<trkseg>"]);
        assert_eq!(doc.first(LineTag::TrkSeg), Some(1));
    }

    #[test]
    fn test_parse_handles_bare_cr() {
        let doc = Document::parse("<gpx>\r<trk>\r<name>A (PA)</name>\r<trkseg>\r</trkseg>\r</gpx>\r");
        assert_eq!(doc.len(), 6);
        assert_eq!(doc.first(LineTag::Trk), Some(1));
        assert_eq!(doc.first(LineTag::TrkSeg), Some(3));
    }

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\rb\r\nc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\r\r"), vec!["a", "", "b", ""]);
        assert_eq!(split_lines("\r\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_retain_and_discard() {
        let mut doc: Document = ["<gpx>", "<trk>", "</trk>", "</gpx>"].into_iter().collect();
        doc.discard_before(1);
        doc.retain_lines(|l| !closes_gpx(l));
        assert_eq!(doc.lines(), &["<trk>", "</trk>"]);
        assert_eq!(doc.tags(), &[LineTag::Trk, LineTag::Other]);
    }
}
