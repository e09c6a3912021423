use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use csv::StringRecord;

use super::model::{CropDataset, CropRecord, DataSource};
use super::synthetic::{self, SyntheticConfig};
use crate::error::DataError;

/// Default dataset file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "crop_production.csv";

// ---------------------------------------------------------------------------
// Memoized provider
// ---------------------------------------------------------------------------

/// Produces the working dataset at most once per process.
///
/// The first successful load is stored and every later call hands out the
/// same `Arc`. A failed load leaves the slot empty so a retry reads again.
#[derive(Debug)]
pub struct DataProvider {
    path: PathBuf,
    synthetic: SyntheticConfig,
    dataset: OnceLock<Arc<CropDataset>>,
}

impl DataProvider {
    pub fn new(path: impl Into<PathBuf>, synthetic: SyntheticConfig) -> Self {
        Self {
            path: path.into(),
            synthetic,
            dataset: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the dataset, loading or generating it on first use.
    pub fn dataset(&self) -> Result<Arc<CropDataset>, DataError> {
        if let Some(ds) = self.dataset.get() {
            return Ok(Arc::clone(ds));
        }
        let loaded = Arc::new(load_data(&self.path, &self.synthetic)?);
        Ok(Arc::clone(self.dataset.get_or_init(|| loaded)))
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load `path` as CSV, falling back to synthetic records if it does not exist.
///
/// Every error other than "file not found" is returned to the caller.
pub fn load_data(path: &Path, synthetic: &SyntheticConfig) -> Result<CropDataset, DataError> {
    match File::open(path) {
        Ok(file) => {
            let records = read_csv(file).map_err(|source| DataError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("Loaded {} records from {}", records.len(), path.display());
            Ok(CropDataset::from_records(
                records,
                DataSource::File {
                    path: path.to_path_buf(),
                },
            ))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "{} not found, generating {} synthetic records",
                path.display(),
                synthetic.records
            );
            let records = synthetic::generate(synthetic);
            Ok(CropDataset::from_records(
                records,
                DataSource::Synthetic {
                    missing: path.to_path_buf(),
                },
            ))
        }
        Err(source) => Err(DataError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ---------------------------------------------------------------------------
// CSV reading / writing
// ---------------------------------------------------------------------------

/// Trim a header name and replace its spaces with underscores.
pub fn normalize_header(name: &str) -> String {
    name.trim().replace(' ', "_")
}

/// Parse CSV records after normalizing the header row.
///
/// Columns beyond the six record fields are ignored; a missing field or an
/// unparsable number is an error.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<CropRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: StringRecord = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    reader.set_headers(headers);

    reader.deserialize().collect()
}

/// Write records with the normalized header row.
pub fn write_csv<W: Write>(output: W, records: &[CropRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    for rec in records {
        writer.serialize(rec)?;
    }
    writer.flush()?;
    Ok(())
}
