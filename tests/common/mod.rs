//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a small but complete GPX file with one track.
///
/// This file includes:
/// - XML prolog and `<gpx>` header (dropped by the merge)
/// - a metadata `<desc>` before the track
/// - one `<trk>` with the given `<name>` and a single segment
/// - a closing `</gpx>` (dropped by the merge)
pub fn gpx_file(track_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <metadata>
    <desc>Exported route</desc>
  </metadata>
  <trk>
    <name>{}</name>
    <trkseg>
      <trkpt lat="51.5000" lon="-0.1200"></trkpt>
      <trkpt lat="51.5010" lon="-0.1210"></trkpt>
    </trkseg>
  </trk>
</gpx>
"#,
        track_name
    )
}

/// The example document used throughout the docs, one tag per line
pub fn scenario_lines() -> Vec<&'static str> {
    vec![
        "<gpx>",
        "<trk>",
        "<name>Route A (PA)</name>",
        "<desc>hi</desc>",
        "<trkseg>",
        "<trkpt/>",
        "</trkseg>",
        "</trk>",
        "</gpx>",
    ]
}

/// Create a temporary directory and write the given `(name, contents)` files into it
pub fn create_temp_gpx_files(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().unwrap();
    let paths = files
        .iter()
        .map(|(name, contents)| {
            let path = temp_dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        })
        .collect();
    (temp_dir, paths)
}

/// Read a file to a string, panicking with the path on failure
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e))
}

/// Assert that no line of `text` contains `</gpx>`
pub fn assert_no_gpx_close(text: &str) {
    for line in text.lines() {
        assert!(
            !line.contains("</gpx>"),
            "Unexpected </gpx> in line: '{}'",
            line
        );
    }
}

/// Count lines that are exactly empty
pub fn blank_line_count(text: &str) -> usize {
    text.split('\n').filter(|l| l.is_empty()).count()
}
