//! Whole-collection curve files.
//!
//! One curve per line, in collection order. Loading skips malformed lines
//! and reports them instead of failing the whole file.

use super::{record, Curve, PlotCollection};
use crate::error::{PlotError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A line that could not be loaded.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// Why the line was rejected.
    pub reason: String,
}

/// Result of loading a curve file.
#[derive(Debug)]
pub struct LoadReport {
    /// Curves read, in file order.
    pub curves: Vec<Curve>,
    /// Lines that were skipped.
    pub skipped: Vec<SkippedLine>,
}

/// Curve file reader and writer.
#[derive(Debug)]
pub struct CurveStore;

impl CurveStore {
    /// Write every curve in `collection` to `path`, replacing the file.
    pub fn save(path: &Path, collection: &PlotCollection) -> Result<usize> {
        let file = File::create(path).map_err(|e| PlotError::unavailable(path.to_path_buf(), e))?;
        let mut writer = BufWriter::new(file);

        for curve in collection.curves() {
            writeln!(writer, "{}", record::serialize(curve))?;
        }
        writer.flush()?;

        tracing::info!("Saved {} curves to {}", collection.len(), path.display());
        Ok(collection.len())
    }

    /// Read curves from `path`. Blank lines are ignored.
    pub fn load(path: &Path) -> Result<LoadReport> {
        let file = File::open(path).map_err(|e| PlotError::unavailable(path.to_path_buf(), e))?;
        Self::read(BufReader::new(file))
    }

    /// Read curves from any buffered source.
    pub fn read<R: BufRead>(reader: R) -> Result<LoadReport> {
        let mut curves = Vec::new();
        let mut skipped = Vec::new();

        for (idx, raw) in reader.split(b'\n').enumerate() {
            let mut raw = raw?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }

            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(_) => {
                    tracing::warn!("Skipping line {}: not valid UTF-8", idx + 1);
                    skipped.push(SkippedLine {
                        line: idx + 1,
                        reason: "not valid UTF-8".to_string(),
                    });
                    continue;
                },
            };
            if line.trim().is_empty() {
                continue;
            }

            match record::deserialize(&line) {
                Ok(points) => curves.push(Curve::from_points(points)),
                Err(e) => {
                    tracing::warn!("Skipping line {}: {}", idx + 1, e);
                    skipped.push(SkippedLine {
                        line: idx + 1,
                        reason: e.to_string(),
                    });
                },
            }
        }

        tracing::info!(
            "Loaded {} curves ({} lines skipped)",
            curves.len(),
            skipped.len()
        );
        Ok(LoadReport { curves, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Point;
    use std::io::Cursor;

    #[test]
    fn skips_corrupt_lines() {
        let input = "1,2 3,4\nthis is not a curve\n\n5,6\n";
        let report = CurveStore::read(Cursor::new(input)).unwrap();

        assert_eq!(report.curves.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
        assert_eq!(report.curves[1].points(), &[Point::new(5.0, 6.0)]);
        assert!(!report.curves[0].is_evaluable());
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"1,2 3,4\n\xff\xfe,1\n5,6\r\n";
        let report = CurveStore::read(Cursor::new(input)).unwrap();

        assert_eq!(report.curves.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
        assert_eq!(report.skipped[0].reason, "not valid UTF-8");
        assert_eq!(report.curves[1].points(), &[Point::new(5.0, 6.0)]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = CurveStore::load(Path::new("/definitely/not/here.curves")).unwrap_err();
        assert!(matches!(err, PlotError::ResourceUnavailable { .. }));
    }
}
