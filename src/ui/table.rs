use eframe::egui::{self, Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::CropDataset;

const HEADERS: [&str; 6] = ["State_Name", "Crop_Year", "Season", "Crop", "Area", "Production"];

/// Raw records of the filtered subset inside a collapsible section.
pub fn detail_table(ui: &mut Ui, dataset: &CropDataset, indices: &[usize]) {
    egui::CollapsingHeader::new("📄 View Detailed Data")
        .id_salt("detail_table")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label(format!("{} rows", indices.len()));

            let row_height = 18.0;
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .columns(Column::initial(110.0).resizable(true).clip(true), HEADERS.len())
                .max_scroll_height(400.0)
                .header(22.0, |mut header| {
                    for name in HEADERS {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(row_height, indices.len(), |mut row| {
                        let Some(rec) = indices
                            .get(row.index())
                            .and_then(|&i| dataset.records.get(i))
                        else {
                            return;
                        };

                        row.col(|ui| {
                            ui.label(&rec.state);
                        });
                        row.col(|ui| {
                            ui.label(rec.year.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&rec.season);
                        });
                        row.col(|ui| {
                            ui.label(&rec.crop);
                        });
                        row.col(|ui| {
                            ui.label(format!("{}", rec.area));
                        });
                        row.col(|ui| {
                            ui.label(rec.production.map(|p| p.to_string()).unwrap_or_default());
                        });
                    });
                });
        });
}
