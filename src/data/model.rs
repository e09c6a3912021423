use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// CropRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single crop production record.
///
/// Field names follow the normalized CSV header, so the same type is used
/// for reading `crop_production.csv` and writing generated samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    #[serde(rename = "State_Name")]
    pub state: String,
    #[serde(rename = "Crop_Year", deserialize_with = "cell::trimmed")]
    pub year: i32,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Crop")]
    pub crop: String,
    /// Cultivated area in hectares.
    #[serde(rename = "Area", deserialize_with = "cell::trimmed")]
    pub area: f64,
    /// Production in tonnes. Real datasets leave some cells empty or mark
    /// them `NA`/`NaN`; all of those load as `None`.
    #[serde(rename = "Production", default, deserialize_with = "cell::measurement")]
    pub production: Option<f64>,
}

impl CropRecord {
    /// Production with missing values counted as zero, as group sums do.
    pub fn production_or_zero(&self) -> f64 {
        self.production.unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Cell parsing for numeric columns
// ---------------------------------------------------------------------------

mod cell {
    use std::fmt::Display;
    use std::str::FromStr;

    use super::*;

    /// Spellings of a missing value found in exported spreadsheets.
    const MISSING: [&str; 19] = [
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
        "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ];

    /// Parse a number, tolerating padding around it.
    pub fn trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw = String::deserialize(deserializer)?;
        raw.trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("'{raw}': {e}")))
    }

    /// Parse an optional number; missing markers and non-finite values are `None`.
    pub fn measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let value = raw.trim();
        if MISSING.contains(&value) {
            return Ok(None);
        }
        let parsed: f64 = value
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("'{raw}': {e}")))?;
        Ok(parsed.is_finite().then_some(parsed))
    }
}

// ---------------------------------------------------------------------------
// DataSource – where the records came from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Parsed from a CSV file.
    File { path: PathBuf },
    /// Generated because the CSV file was not found.
    Synthetic { missing: PathBuf },
}

impl DataSource {
    /// Non-fatal warning to surface in the UI, if any.
    pub fn warning(&self) -> Option<String> {
        match self {
            DataSource::File { .. } => None,
            DataSource::Synthetic { missing } => Some(format!(
                "⚠ CSV file not found ({}). Using synthetic data.",
                missing.display()
            )),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File { path } => write!(f, "{}", path.display()),
            DataSource::Synthetic { .. } => write!(f, "synthetic data"),
        }
    }
}

// ---------------------------------------------------------------------------
// CropDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full record set with pre-computed category indices.
///
/// Built once per process and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CropDataset {
    pub records: Vec<CropRecord>,
    /// Sorted unique crop years.
    pub years: BTreeSet<i32>,
    /// Sorted unique state names.
    pub states: BTreeSet<String>,
    /// Sorted unique crop names.
    pub crops: BTreeSet<String>,
    pub source: DataSource,
}

impl CropDataset {
    /// Build category indices from the loaded records.
    pub fn from_records(records: Vec<CropRecord>, source: DataSource) -> Self {
        let mut years = BTreeSet::new();
        let mut states = BTreeSet::new();
        let mut crops = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year);
            states.insert(rec.state.clone());
            crops.insert(rec.crop.clone());
        }

        CropDataset {
            records,
            years,
            states,
            crops,
            source,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records at the given indices, in index order.
    pub fn select<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a CropRecord> + 'a {
        indices.iter().filter_map(move |&i| self.records.get(i))
    }
}

#[cfg(test)]
pub(crate) fn record(state: &str, year: i32, crop: &str, area: f64, production: f64) -> CropRecord {
    CropRecord {
        state: state.to_string(),
        year,
        season: "Kharif".to_string(),
        crop: crop.to_string(),
        area,
        production: Some(production),
    }
}
