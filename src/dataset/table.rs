//! CSV encoding of an [`EnergyDataset`].
//!
//! One header line, then one row per batch size. Floats are written in
//! shortest round-trip form so identical datasets give identical bytes.

use super::{BatchSweepPoint, EnergyDataset, PrecisionSample};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tempfile::NamedTempFile;

/// Required columns, in the order they are written.
pub const COLUMNS: [&str; 7] = [
    "batch_size",
    "fp32_energy",
    "fp32_efficiency",
    "fp16_energy",
    "fp16_efficiency",
    "int8_energy",
    "int8_efficiency",
];

/// Flat row layout; field names match [`COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Row {
    batch_size: u32,
    fp32_energy: f64,
    fp32_efficiency: f64,
    fp16_energy: f64,
    fp16_efficiency: f64,
    int8_energy: f64,
    int8_efficiency: f64,
}

impl From<&BatchSweepPoint> for Row {
    fn from(p: &BatchSweepPoint) -> Self {
        Self {
            batch_size: p.batch_size,
            fp32_energy: p.fp32.energy,
            fp32_efficiency: p.fp32.efficiency,
            fp16_energy: p.fp16.energy,
            fp16_efficiency: p.fp16.efficiency,
            int8_energy: p.int8.energy,
            int8_efficiency: p.int8.efficiency,
        }
    }
}

impl From<Row> for BatchSweepPoint {
    fn from(r: Row) -> Self {
        Self {
            batch_size: r.batch_size,
            fp32: PrecisionSample { energy: r.fp32_energy, efficiency: r.fp32_efficiency },
            fp16: PrecisionSample { energy: r.fp16_energy, efficiency: r.fp16_efficiency },
            int8: PrecisionSample { energy: r.int8_energy, efficiency: r.int8_efficiency },
        }
    }
}

impl Row {
    fn values(&self) -> [f64; 6] {
        [
            self.fp32_energy,
            self.fp32_efficiency,
            self.fp16_energy,
            self.fp16_efficiency,
            self.int8_energy,
            self.int8_efficiency,
        ]
    }
}

/// Write `dataset` to `path`, replacing any existing file.
///
/// Rows go to a temporary file in the destination directory which is renamed
/// over `path` only after a successful flush and sync.
pub fn write_csv<P: AsRef<Path>>(dataset: &EnergyDataset, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::persistence(path, e))?;

    let tmp = NamedTempFile::new_in(dir).map_err(|e| Error::persistence(path, e))?;
    {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(tmp.as_file());
        writer.write_record(COLUMNS).map_err(|e| Error::persistence(path, e.into()))?;
        for point in dataset.points() {
            writer.serialize(Row::from(point)).map_err(|e| Error::persistence(path, e.into()))?;
        }
        writer.flush().map_err(|e| Error::persistence(path, e))?;
    }
    tmp.as_file().sync_all().map_err(|e| Error::persistence(path, e))?;
    tmp.persist(path).map_err(|e| Error::persistence(path, e.error))?;

    tracing::debug!(path = %path.display(), rows = dataset.len(), "dataset written");
    Ok(())
}

/// Read a dataset previously written by [`write_csv`].
///
/// Column order does not matter and extra columns are ignored; every column
/// in [`COLUMNS`] must be present.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<EnergyDataset> {
    let path = path.as_ref();

    let mut reader = match csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            return Err(match e.kind() {
                csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound => {
                    Error::DataNotFound { path: path.to_path_buf() }
                }
                _ => Error::data_format(path, format!("cannot open: {e}")),
            });
        }
    };

    let headers = reader
        .headers()
        .map_err(|e| Error::data_format(path, format!("cannot read header: {e}")))?
        .clone();
    let missing: Vec<&str> =
        COLUMNS.iter().copied().filter(|c| !headers.iter().any(|h| h == *c)).collect();
    if !missing.is_empty() {
        return Err(Error::data_format(
            path,
            format!(
                "missing columns: {}; found: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        ));
    }

    let mut points: Vec<BatchSweepPoint> = Vec::new();
    for (i, record) in reader.deserialize::<Row>().enumerate() {
        // header is line 1
        let line = i + 2;
        let row = record.map_err(|e| Error::data_format(path, format!("line {line}: {e}")))?;

        if row.batch_size == 0 {
            return Err(Error::data_format(path, format!("line {line}: batch_size must be >= 1")));
        }
        if let Some(prev) = points.last() {
            if row.batch_size <= prev.batch_size {
                return Err(Error::data_format(
                    path,
                    format!(
                        "line {line}: batch_size {} does not follow {} in increasing order",
                        row.batch_size, prev.batch_size
                    ),
                ));
            }
        }
        if row.values().iter().any(|v| !v.is_finite()) {
            return Err(Error::data_format(path, format!("line {line}: non-finite value")));
        }
        points.push(row.into());
    }

    if points.is_empty() {
        return Err(Error::data_format(path, "no data rows"));
    }

    tracing::debug!(path = %path.display(), rows = points.len(), "dataset loaded");
    Ok(EnergyDataset::from_points(points))
}
