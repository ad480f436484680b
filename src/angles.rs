//! Angle vectors stored as headerless CSV.
//!
//! Optimizer checkpoints keep the current angle vector on disk; every field
//! of every record is one angle, read in row-major order.

use crate::error::AngleError;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Reads every field of every record as an angle in radians.
pub fn read_angles<R: Read>(reader: R) -> Result<Vec<f64>, AngleError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut thetas = Vec::new();
    for (record_idx, record) in rdr.records().enumerate() {
        let record = record?;
        // A lone empty field is what an empty angle vector writes.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        for (field_idx, field) in record.iter().enumerate() {
            let theta = field.parse::<f64>().map_err(|_| AngleError::InvalidAngle {
                record: record_idx,
                field: field_idx,
                value: field.to_string(),
            })?;
            thetas.push(theta);
        }
    }
    Ok(thetas)
}

pub fn read_angles_from_path(path: impl AsRef<Path>) -> Result<Vec<f64>, AngleError> {
    let path = path.as_ref();
    let thetas = read_angles(File::open(path)?)?;
    debug!(path = %path.display(), angles = thetas.len(), "read angle vector");
    Ok(thetas)
}

/// Writes `thetas` as a single CSV record.
pub fn write_angles<W: Write>(writer: W, thetas: &[f64]) -> Result<(), AngleError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(thetas.iter().map(|theta| theta.to_string()))?;
    wtr.flush()?;
    Ok(())
}
