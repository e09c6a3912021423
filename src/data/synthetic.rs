use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use super::model::CropRecord;

pub const STATES: [&str; 6] = [
    "Karnataka",
    "Maharashtra",
    "Punjab",
    "Uttar Pradesh",
    "Tamil Nadu",
    "Bihar",
];

pub const SEASONS: [&str; 3] = ["Kharif", "Rabi", "Whole Year"];

/// Crops with their yield factor (tonnes per hectare).
pub const CROP_YIELD_FACTORS: [(&str, f64); 6] = [
    ("Rice", 3.0),
    ("Maize", 4.0),
    ("Wheat", 3.5),
    ("Sugarcane", 60.0),
    ("Cotton", 0.5),
    ("Groundnut", 1.5),
];

pub const FIRST_YEAR: i32 = 2015;
pub const LAST_YEAR: i32 = 2023;

const MIN_AREA: u32 = 100;
const MAX_AREA: u32 = 10_000;

/// Settings for the fallback generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of records to generate.
    pub records: usize,
    /// Fixed seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            records: 1000,
            seed: None,
        }
    }
}

/// Generate a synthetic dataset where production roughly tracks area.
pub fn generate(config: &SyntheticConfig) -> Vec<CropRecord> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_with(&mut rng, config.records)
}

/// Generate `count` records from the given random source.
pub fn generate_with<R: Rng>(rng: &mut R, count: usize) -> Vec<CropRecord> {
    let years: Vec<i32> = (FIRST_YEAR..=LAST_YEAR).collect();

    (0..count)
        .map(|_| {
            let state = STATES.choose(rng).copied().unwrap_or(STATES[0]);
            let (crop, yield_factor) = CROP_YIELD_FACTORS
                .choose(rng)
                .copied()
                .unwrap_or(CROP_YIELD_FACTORS[0]);
            let year = years.choose(rng).copied().unwrap_or(FIRST_YEAR);
            let season = SEASONS.choose(rng).copied().unwrap_or(SEASONS[0]);
            let area = f64::from(rng.random_range(MIN_AREA..MAX_AREA));

            let production = area * yield_factor * rng.random_range(0.8..1.2);

            CropRecord {
                state: state.to_string(),
                year,
                season: season.to_string(),
                crop: crop.to_string(),
                area,
                production: Some(round2(production)),
            }
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
