use std::path::Path;

use crate::error::DataError;

use super::model::{PointCloud, SamplePoint};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an `x y z` table from a file.
///
/// Every data line must hold exactly three whitespace-separated floats.
/// Blank lines and lines starting with `#` are skipped.
pub fn load_file(path: &Path) -> Result<PointCloud, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let points = parse_table(&text)?;
    log::debug!("parsed {} rows from {}", points.len(), path.display());

    Ok(PointCloud::from_points(points).with_source(path))
}

/// Parse the contents of a data file. Fails on the first malformed row.
pub fn parse_table(text: &str) -> Result<Vec<SamplePoint>, DataError> {
    let mut points = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        points.push(parse_row(trimmed, line_no)?);
    }

    if points.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(points)
}

/// Fail with [`DataError::RowCount`] unless `cloud` has exactly `expected` rows.
pub fn check_row_count(cloud: &PointCloud, expected: usize) -> Result<(), DataError> {
    if cloud.len() != expected {
        return Err(DataError::RowCount {
            expected,
            found: cloud.len(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_row(line: &str, line_no: usize) -> Result<SamplePoint, DataError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(DataError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let mut values = [0.0_f64; 3];
    for (slot, tok) in values.iter_mut().zip(&fields) {
        *slot = tok.parse::<f64>().map_err(|_| DataError::NotNumeric {
            line: line_no,
            token: tok.to_string(),
        })?;
    }

    let [x, y, z] = values;
    Ok(SamplePoint::new(x, y, z))
}
