use std::collections::BTreeMap;

use crate::color::ColorMap;
use crate::data::aggregate::{
    self, production_by_crop, production_by_state, yearly_production_by_state, ScatterPoint,
    ShareSlice,
};
use crate::data::filter::{filtered_indices, history_indices, FilterSelection};
use crate::data::metrics::Metrics;
use crate::data::model::CropDataset;

// ---------------------------------------------------------------------------
// Derived view: everything one render pass draws
// ---------------------------------------------------------------------------

/// Values derived from the dataset and the current selection.
///
/// Recomputed from scratch whenever the selection changes; nothing in here
/// outlives the selection that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    /// Records matching year, state and crop.
    pub visible_indices: Vec<usize>,
    /// Records matching state and crop in any year.
    pub history_indices: Vec<usize>,
    pub metrics: Metrics,
    pub production_by_crop: Vec<(String, f64)>,
    pub state_shares: Vec<ShareSlice>,
    pub yearly_trend: BTreeMap<String, Vec<(i32, f64)>>,
    pub scatter: Vec<ScatterPoint>,
}

impl DashboardView {
    pub fn compute(dataset: &CropDataset, selection: &FilterSelection) -> Self {
        let visible_indices = filtered_indices(dataset, selection);
        let history_indices = history_indices(dataset, selection);

        let visible = || dataset.select(&visible_indices);

        let metrics = Metrics::from_records(visible());
        let production_by_crop = production_by_crop(visible());
        let state_shares = aggregate::share_slices(&production_by_state(visible()));
        let scatter = aggregate::scatter_points(visible());
        let yearly_trend = yearly_production_by_state(dataset.select(&history_indices));

        DashboardView {
            visible_indices,
            history_indices,
            metrics,
            production_by_crop,
            state_shares,
            yearly_trend,
            scatter,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state for one loaded dataset, independent of rendering.
pub struct AppState {
    pub selection: FilterSelection,
    pub view: DashboardView,
    /// Shared by the bar and scatter charts.
    pub crop_colors: ColorMap,
    /// Shared by the donut and line charts.
    pub state_colors: ColorMap,
}

impl AppState {
    /// Initialise default filters and colours for a dataset.
    pub fn new(dataset: &CropDataset) -> Self {
        let selection = FilterSelection::defaults(dataset);
        let view = DashboardView::compute(dataset, &selection);
        Self {
            selection,
            view,
            crop_colors: ColorMap::new(&dataset.crops),
            state_colors: ColorMap::new(&dataset.states),
        }
    }

    /// Recompute the derived view after the user changed a filter.
    pub fn on_selection_changed(&mut self, dataset: &CropDataset) {
        self.view = DashboardView::compute(dataset, &self.selection);
        log::debug!(
            "Selection {:?}/{:?}/{:?}: {} matching, {} in history",
            self.selection.year,
            self.selection.states,
            self.selection.crops,
            self.view.visible_indices.len(),
            self.view.history_indices.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::filter::FilterField;
    use crate::data::model::{record, CropRecord, DataSource};

    fn dataset(records: Vec<CropRecord>) -> CropDataset {
        CropDataset::from_records(
            records,
            DataSource::File {
                path: PathBuf::from("test.csv"),
            },
        )
    }

    #[test]
    fn test_single_record_scenario() {
        let ds = dataset(vec![record("Karnataka", 2020, "Rice", 100.0, 300.0)]);
        let mut state = AppState::new(&ds);

        state.selection = FilterSelection {
            year: Some(2020),
            states: ["Karnataka".to_string()].into(),
            crops: ["Rice".to_string()].into(),
        };
        state.on_selection_changed(&ds);

        let m = state.view.metrics;
        assert_eq!(m.total_production, 300.0);
        assert_eq!(m.total_area, 100.0);
        assert_eq!(m.avg_yield, 3.0);
        assert_eq!(state.view.production_by_crop, vec![("Rice".to_string(), 300.0)]);
        assert_eq!(state.view.state_shares.len(), 1);
        assert_eq!(state.view.scatter.len(), 1);
    }

    #[test]
    fn test_no_matching_rows_degrades_to_empty() {
        let ds = dataset(vec![
            record("Karnataka", 2020, "Rice", 100.0, 300.0),
            record("Punjab", 2020, "Wheat", 50.0, 175.0),
        ]);
        let mut state = AppState::new(&ds);
        state.selection.states = ["Karnataka".to_string()].into();
        state.selection.crops = ["Wheat".to_string()].into();
        state.on_selection_changed(&ds);

        let view = &state.view;
        assert_eq!(view.metrics, Metrics::default());
        assert!(view.visible_indices.is_empty());
        assert!(view.production_by_crop.is_empty());
        assert!(view.state_shares.is_empty());
        assert!(view.scatter.is_empty());
        assert!(view.yearly_trend.is_empty());
    }

    #[test]
    fn test_trend_spans_all_years_regardless_of_selected_year() {
        let ds = dataset(vec![
            record("Bihar", 2015, "Rice", 10.0, 30.0),
            record("Bihar", 2017, "Rice", 10.0, 31.0),
            record("Bihar", 2023, "Rice", 10.0, 32.0),
            record("Punjab", 2016, "Rice", 10.0, 40.0),
            record("Punjab", 2023, "Cotton", 10.0, 5.0),
        ]);
        let mut state = AppState::new(&ds);
        state.selection.year = Some(2017);
        state.selection.select_all(FilterField::State, &ds);
        state.selection.crops = ["Rice".to_string()].into();
        state.on_selection_changed(&ds);

        assert_eq!(state.view.visible_indices, vec![1]);
        assert_eq!(
            state.view.yearly_trend["Bihar"],
            vec![(2015, 30.0), (2017, 31.0), (2023, 32.0)]
        );
        assert_eq!(state.view.yearly_trend["Punjab"], vec![(2016, 40.0)]);
    }

    #[test]
    fn test_synthetic_dataset_defaults() {
        use crate::data::synthetic::{generate, SyntheticConfig};

        let records = generate(&SyntheticConfig {
            records: 1000,
            seed: Some(11),
        });
        let ds = dataset(records);
        let state = AppState::new(&ds);

        assert_eq!(state.selection.year, Some(2023));
        assert_eq!(
            state.selection.states.iter().cloned().collect::<Vec<_>>(),
            vec!["Bihar", "Karnataka"]
        );
        assert_eq!(
            state.selection.crops.iter().cloned().collect::<Vec<_>>(),
            vec!["Cotton", "Groundnut", "Maize"]
        );
        let subset_sum: f64 = ds
            .select(&state.view.visible_indices)
            .map(|r| r.production_or_zero())
            .sum();
        assert!((state.view.metrics.total_production - subset_sum).abs() < 1e-6);
    }
}
