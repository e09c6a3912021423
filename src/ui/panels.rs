use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::ColorMap;
use crate::data::filter::{FilterField, FilterSelection};
use crate::data::model::CropDataset;
use crate::state::DashboardView;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel. Returns `true` if the selection changed.
pub fn side_panel(
    ui: &mut Ui,
    dataset: &CropDataset,
    selection: &mut FilterSelection,
    crop_colors: &ColorMap,
    state_colors: &ColorMap,
) -> bool {
    ui.heading("Filter Options");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year (single choice) ----
            ui.strong("Select Year");
            let year_text = selection
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "–".to_string());
            egui::ComboBox::from_id_salt("year_select")
                .selected_text(year_text)
                .show_ui(ui, |ui: &mut Ui| {
                    for &year in dataset.years.iter().rev() {
                        if ui
                            .selectable_value(&mut selection.year, Some(year), year.to_string())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
            ui.separator();

            // ---- States / crops (multi choice) ----
            changed |= multi_select(ui, dataset, selection, FilterField::State, state_colors);
            changed |= multi_select(ui, dataset, selection, FilterField::Crop, crop_colors);
        });

    changed
}

/// Collapsible checkbox list for one multi-choice field.
fn multi_select(
    ui: &mut Ui,
    dataset: &CropDataset,
    selection: &mut FilterSelection,
    field: FilterField,
    colors: &ColorMap,
) -> bool {
    let options = field.options(dataset);
    let n_selected = selection.values(field).len();
    let header_text = format!("Select {}  ({n_selected}/{})", field.label(), options.len());

    let mut changed = false;
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(field.label())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    selection.select_all(field, dataset);
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    selection.select_none(field);
                    changed = true;
                }
            });

            for value in options {
                let mut checked = selection.values(field).contains(value);
                let text = RichText::new(value).color(colors.color_for(value));
                if ui.checkbox(&mut checked, text).changed() {
                    selection.set(field, value, checked);
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar: record counts, data source and fallback warning.
pub fn top_bar(ui: &mut Ui, dataset: &CropDataset, view: &DashboardView) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("🌾 Agri-Crop Production Dashboard");
        ui.separator();
        ui.label(format!(
            "{} records loaded, {} matching",
            dataset.len(),
            view.visible_indices.len()
        ));
        ui.separator();
        ui.label(format!("Source: {}", dataset.source));

        if let Some(warning) = dataset.source.warning() {
            ui.separator();
            ui.label(RichText::new(warning).color(Color32::from_rgb(230, 160, 0)));
        }
    });
}

/// Render a fatal load error in place of the dashboard. Returns `true` when
/// the user asks to retry.
pub fn load_error(ui: &mut Ui, message: &str) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.heading("Failed to load crop production data");
        ui.add_space(8.0);
        ui.label(RichText::new(message).color(Color32::RED));
        ui.add_space(8.0);
        retry = ui.button("Retry").clicked();
    });
    retry
}
