//! The four-step line rewrite applied to every input file
//!
//! 1. Copy the first `<desc>` line directly above the first `<trkseg>`.
//! 2. Insert the styled `<extensions>` block above that `<trkseg>`.
//! 3. Discard everything above the first `<trk>`.
//! 4. Drop every line containing `</gpx>`.

use log::debug;

use super::error::TransformError;
use super::style::{pick_style, track_name, TrackStyle};
use super::tags::{closes_gpx, Document, LineTag};

/// Facts gathered while normalizing one document, used for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Text of the first `<name>` element, if any
    pub track_name: Option<String>,
    /// Style of the inserted block; `None` when there was no `<trkseg>`
    pub style: Option<TrackStyle>,
    /// Whether a `<desc>` copy was placed above the segment
    pub desc_copied: bool,
    /// Lines in the processed output
    pub line_count: usize,
}

/// A normalized document and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDocument {
    pub text: String,
    pub info: DocumentInfo,
}

/// Copy the first `<desc>` line to just above the first `<trkseg>` line.
///
/// Returns the index of the first `<trkseg>` after the edit, or `None` if the
/// document has none. Nothing is inserted when either tag is missing or when a
/// `<desc>` line already sits directly above the segment, which makes the step
/// idempotent.
pub fn copy_desc_above_trkseg(doc: &mut Document) -> Option<usize> {
    let trkseg_idx = doc.first(LineTag::TrkSeg);
    let (Some(desc_idx), Some(trkseg_idx)) = (doc.first(LineTag::Desc), trkseg_idx) else {
        return trkseg_idx;
    };

    if trkseg_idx > 0 && doc.tag_at(trkseg_idx - 1) == Some(LineTag::Desc) {
        return Some(trkseg_idx);
    }

    let desc_line = doc.lines()[desc_idx].clone();
    doc.insert(trkseg_idx, desc_line);
    Some(trkseg_idx + 1)
}

/// Insert the chosen `<extensions>` block directly above `<trkseg>`.
///
/// `trkseg_idx` is rescanned when absent. Returns the style inserted, or
/// `None` if the document has no `<trkseg>` line.
pub fn insert_extensions_above_trkseg(
    doc: &mut Document,
    trkseg_idx: Option<usize>,
) -> Option<TrackStyle> {
    let trkseg_idx = trkseg_idx.or_else(|| doc.first(LineTag::TrkSeg))?;
    let style = pick_style(doc);
    doc.insert_lines(trkseg_idx, style.block_lines());
    Some(style)
}

/// Normalize one file's content into its mergeable body.
pub fn process_document(content: &str) -> Result<ProcessedDocument, TransformError> {
    let mut doc = Document::parse(content);
    let original_len = doc.len();

    let trkseg_idx = copy_desc_above_trkseg(&mut doc);
    let desc_copied = doc.len() > original_len;
    let style = insert_extensions_above_trkseg(&mut doc, trkseg_idx);
    let name = track_name(&doc);

    let trk_idx = doc
        .first(LineTag::Trk)
        .ok_or(TransformError::MissingTrackTag)?;
    doc.discard_before(trk_idx);
    doc.retain_lines(|line| !closes_gpx(line));

    let text = doc.to_text();
    debug!(
        "Processed document: name={:?}, style={:?}, desc_copied={}, trimmed {} leading line(s)",
        name, style, desc_copied, trk_idx
    );

    Ok(ProcessedDocument {
        info: DocumentInfo {
            track_name: name,
            style,
            desc_copied,
            line_count: if text.is_empty() { 0 } else { text.lines().count() },
        },
        text,
    })
}

/// Normalize one file's content, returning only the text.
pub fn process_gpx_content(content: &str) -> Result<String, TransformError> {
    process_document(content).map(|doc| doc.text)
}
