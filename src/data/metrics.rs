use super::model::CropRecord;

/// Scalar summaries shown above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    /// Tonnes.
    pub total_production: f64,
    /// Hectares.
    pub total_area: f64,
    /// Tonnes per hectare, 0 when there is no area.
    pub avg_yield: f64,
}

impl Metrics {
    /// Sum production and area; missing production values are skipped.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a CropRecord>) -> Self {
        let (total_production, total_area) = records
            .into_iter()
            .fold((0.0, 0.0), |(prod, area), rec| {
                (prod + rec.production_or_zero(), area + rec.area)
            });

        let avg_yield = if total_area > 0.0 {
            total_production / total_area
        } else {
            0.0
        };

        Metrics {
            total_production,
            total_area,
            avg_yield,
        }
    }
}
