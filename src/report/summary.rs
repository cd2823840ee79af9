//! Merge summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::gpx::TrackStyle;
use crate::pipeline::MergeReport;

/// Summary of one merge, ready for display.
#[derive(Debug, Default)]
pub struct MergeSummary {
    pub rows: Vec<SummaryRow>,
    pub output: String,
    pub bytes_written: usize,
}

/// One input file's line in the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub file: String,
    pub track: String,
    pub style: Option<TrackStyle>,
    pub desc_copied: bool,
    pub lines: usize,
}

impl MergeSummary {
    pub fn from_report(report: &MergeReport) -> Self {
        let rows = report
            .documents
            .iter()
            .map(|doc| SummaryRow {
                file: doc
                    .source
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| doc.source.display().to_string()),
                track: doc.info.track_name.clone().unwrap_or_else(|| "-".to_string()),
                style: doc.info.style,
                desc_copied: doc.info.desc_copied,
                lines: doc.info.line_count,
            })
            .collect();

        Self {
            rows,
            output: report.output.display().to_string(),
            bytes_written: report.bytes_written,
        }
    }

    /// Total lines across all merged documents, excluding separators.
    pub fn total_lines(&self) -> usize {
        self.rows.iter().map(|r| r.lines).sum()
    }

    /// Number of documents that received a style block.
    pub fn styled_count(&self) -> usize {
        self.rows.iter().filter(|r| r.style.is_some()).count()
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Track").add_attribute(Attribute::Bold),
            Cell::new("Style").add_attribute(Attribute::Bold),
            Cell::new("Desc").add_attribute(Attribute::Bold),
            Cell::new("Lines").add_attribute(Attribute::Bold),
        ]);

        for (idx, row) in self.rows.iter().enumerate() {
            let style_cell = match row.style {
                Some(s) => Cell::new(s.to_string()).fg(style_color(s)),
                None => Cell::new("none").fg(Color::DarkGrey),
            };
            table.add_row(vec![
                Cell::new(idx + 1),
                Cell::new(&row.file),
                Cell::new(&row.track),
                style_cell,
                Cell::new(if row.desc_copied { "copied" } else { "-" }),
                Cell::new(row.lines),
            ]);
        }

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("MERGE SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }

        println!();
        println!(
            "      {} file(s), {} styled, {} line(s), {} byte(s)",
            style(self.rows.len()).yellow().bold(),
            style(self.styled_count()).yellow(),
            style(self.total_lines()).yellow(),
            style(self.bytes_written).yellow()
        );
        println!("      Output: {}", style(&self.output).green());
    }
}

fn style_color(track_style: TrackStyle) -> Color {
    match track_style {
        TrackStyle::Tro => Color::Red,
        TrackStyle::TempTro => Color::Blue,
        TrackStyle::Pa => Color::Yellow,
        TrackStyle::Lr => Color::DarkGrey,
        TrackStyle::Default => Color::Green,
    }
}
