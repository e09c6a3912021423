//! Write a synthetic crop production dataset as CSV.
//!
//! Usage: `generate_sample [OUTPUT] [SEED]` (defaults: `crop_production.csv`, 42).

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crop_dashboard::data::loader::{write_csv, DEFAULT_DATA_FILE};
use crop_dashboard::data::synthetic::{self, SyntheticConfig};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid seed '{s}'"))?,
        None => 42,
    };

    let config = SyntheticConfig {
        seed: Some(seed),
        ..SyntheticConfig::default()
    };
    let records = synthetic::generate(&config);

    let file = File::create(&output)
        .with_context(|| format!("creating {}", output.display()))?;
    write_csv(BufWriter::new(file), &records)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "Wrote {} records (seed {seed}) to {}",
        records.len(),
        output.display()
    );
    Ok(())
}
