//! Explicit group-by reductions feeding the charts.
//!
//! Chart primitives only ever receive pre-aggregated values from here.

use std::collections::BTreeMap;

use super::model::CropRecord;

/// Sum production per crop, sorted by crop name.
pub fn production_by_crop<'a>(records: impl IntoIterator<Item = &'a CropRecord>) -> Vec<(String, f64)> {
    production_by(records, |rec| &rec.crop)
}

/// Sum production per state, sorted by state name.
pub fn production_by_state<'a>(records: impl IntoIterator<Item = &'a CropRecord>) -> Vec<(String, f64)> {
    production_by(records, |rec| &rec.state)
}

fn production_by<'a>(
    records: impl IntoIterator<Item = &'a CropRecord>,
    key: impl Fn(&CropRecord) -> &String,
) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for rec in records {
        *sums.entry(key(rec).clone()).or_default() += rec.production_or_zero();
    }
    sums.into_iter().collect()
}

/// Sum production per (state, year): one series per state with points in
/// ascending year order.
pub fn yearly_production_by_state<'a>(
    records: impl IntoIterator<Item = &'a CropRecord>,
) -> BTreeMap<String, Vec<(i32, f64)>> {
    let mut sums: BTreeMap<String, BTreeMap<i32, f64>> = BTreeMap::new();
    for rec in records {
        *sums
            .entry(rec.state.clone())
            .or_default()
            .entry(rec.year)
            .or_default() += rec.production_or_zero();
    }
    sums.into_iter()
        .map(|(state, years)| (state, years.into_iter().collect()))
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub area: f64,
    pub production: f64,
    pub crop: String,
    pub state: String,
}

/// One point per record with a known production value.
pub fn scatter_points<'a>(records: impl IntoIterator<Item = &'a CropRecord>) -> Vec<ScatterPoint> {
    records
        .into_iter()
        .filter_map(|rec| {
            Some(ScatterPoint {
                area: rec.area,
                production: rec.production?,
                crop: rec.crop.clone(),
                state: rec.state.clone(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Donut slices
// ---------------------------------------------------------------------------

/// An angular slice of a donut chart, angles in radians from 12 o'clock,
/// running clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the total in `[0, 1]`.
    pub share: f64,
    pub start: f64,
    pub sweep: f64,
}

/// Convert grouped totals into donut slices. Non-positive totals are dropped
/// since they have no meaningful share.
pub fn share_slices(groups: &[(String, f64)]) -> Vec<ShareSlice> {
    let total: f64 = groups.iter().map(|(_, v)| *v).filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    groups
        .iter()
        .filter(|(_, v)| *v > 0.0)
        .map(|(label, value)| {
            let share = value / total;
            let sweep = share * std::f64::consts::TAU;
            let slice = ShareSlice {
                label: label.clone(),
                value: *value,
                share,
                start,
                sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn sample() -> Vec<CropRecord> {
        vec![
            record("Punjab", 2020, "Wheat", 10.0, 35.0),
            record("Bihar", 2020, "Rice", 10.0, 30.0),
            record("Bihar", 2020, "Wheat", 20.0, 70.0),
            record("Bihar", 2018, "Rice", 5.0, 15.0),
            record("Punjab", 2018, "Rice", 5.0, 10.0),
        ]
    }

    #[test]
    fn test_production_by_crop() {
        let by_crop = production_by_crop(&sample());
        assert_eq!(
            by_crop,
            vec![("Rice".to_string(), 55.0), ("Wheat".to_string(), 105.0)]
        );
    }

    #[test]
    fn test_production_by_state() {
        let by_state = production_by_state(&sample());
        assert_eq!(
            by_state,
            vec![("Bihar".to_string(), 115.0), ("Punjab".to_string(), 45.0)]
        );
    }

    #[test]
    fn test_yearly_series_are_sorted_per_state() {
        let trend = yearly_production_by_state(&sample());
        assert_eq!(trend.len(), 2);
        assert_eq!(trend["Bihar"], vec![(2018, 15.0), (2020, 100.0)]);
        assert_eq!(trend["Punjab"], vec![(2018, 10.0), (2020, 35.0)]);
    }

    #[test]
    fn test_empty_input_gives_empty_groups() {
        let none: Vec<CropRecord> = Vec::new();
        assert!(production_by_crop(&none).is_empty());
        assert!(yearly_production_by_state(&none).is_empty());
        assert!(scatter_points(&none).is_empty());
        assert!(share_slices(&[]).is_empty());
    }

    #[test]
    fn test_scatter_skips_missing_production() {
        let mut recs = sample();
        recs[0].production = None;
        let points = scatter_points(&recs);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].state, "Bihar");
        assert_eq!(points[0].area, 10.0);
    }

    #[test]
    fn test_share_slices_cover_full_circle() {
        let slices = share_slices(&production_by_state(&sample()));
        assert_eq!(slices.len(), 2);
        let total_share: f64 = slices.iter().map(|s| s.share).sum();
        assert!((total_share - 1.0).abs() < 1e-12);

        let last = slices.last().unwrap();
        assert!((last.start + last.sweep - std::f64::consts::TAU).abs() < 1e-9);
        assert_eq!(slices[1].start, slices[0].sweep);
    }

    #[test]
    fn test_share_slices_drop_zero_groups() {
        let groups = vec![("A".to_string(), 0.0), ("B".to_string(), 10.0)];
        let slices = share_slices(&groups);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "B");
        assert_eq!(slices[0].share, 1.0);
    }
}
