use std::collections::BTreeSet;

use super::model::{CropDataset, CropRecord};

// ---------------------------------------------------------------------------
// Filter selection: the user's current choices
// ---------------------------------------------------------------------------

/// Which multi-choice column a selection edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    State,
    Crop,
}

impl FilterField {
    pub fn label(self) -> &'static str {
        match self {
            FilterField::State => "State(s)",
            FilterField::Crop => "Crop(s)",
        }
    }

    /// All values of this field present in the dataset.
    pub fn options(self, dataset: &CropDataset) -> &BTreeSet<String> {
        match self {
            FilterField::State => &dataset.states,
            FilterField::Crop => &dataset.crops,
        }
    }
}

/// Active year/state/crop selections.
///
/// An empty state or crop set selects nothing rather than everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    /// `None` only when the dataset has no years at all.
    pub year: Option<i32>,
    pub states: BTreeSet<String>,
    pub crops: BTreeSet<String>,
}

impl FilterSelection {
    /// Latest year, first two states and first three crops.
    pub fn defaults(dataset: &CropDataset) -> Self {
        Self {
            year: dataset.years.last().copied(),
            states: dataset.states.iter().take(2).cloned().collect(),
            crops: dataset.crops.iter().take(3).cloned().collect(),
        }
    }

    pub fn values(&self, field: FilterField) -> &BTreeSet<String> {
        match field {
            FilterField::State => &self.states,
            FilterField::Crop => &self.crops,
        }
    }

    fn values_mut(&mut self, field: FilterField) -> &mut BTreeSet<String> {
        match field {
            FilterField::State => &mut self.states,
            FilterField::Crop => &mut self.crops,
        }
    }

    pub fn set(&mut self, field: FilterField, value: &str, on: bool) {
        let selected = self.values_mut(field);
        if on {
            selected.insert(value.to_string());
        } else {
            selected.remove(value);
        }
    }

    pub fn select_all(&mut self, field: FilterField, dataset: &CropDataset) {
        *self.values_mut(field) = field.options(dataset).clone();
    }

    pub fn select_none(&mut self, field: FilterField) {
        self.values_mut(field).clear();
    }

    /// State and crop predicates only.
    pub fn matches_categories(&self, rec: &CropRecord) -> bool {
        self.states.contains(&rec.state) && self.crops.contains(&rec.crop)
    }

    /// Year, state and crop predicates.
    pub fn matches(&self, rec: &CropRecord) -> bool {
        self.year == Some(rec.year) && self.matches_categories(rec)
    }
}

// ---------------------------------------------------------------------------
// Subset extraction
// ---------------------------------------------------------------------------

/// Indices of records matching the selected year, states and crops.
pub fn filtered_indices(dataset: &CropDataset, selection: &FilterSelection) -> Vec<usize> {
    indices_where(dataset, |rec| selection.matches(rec))
}

/// Indices of records matching the selected states and crops in any year.
pub fn history_indices(dataset: &CropDataset, selection: &FilterSelection) -> Vec<usize> {
    indices_where(dataset, |rec| selection.matches_categories(rec))
}

fn indices_where(dataset: &CropDataset, keep: impl Fn(&CropRecord) -> bool) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| keep(rec))
        .map(|(i, _)| i)
        .collect()
}
