use std::sync::Arc;

use eframe::egui::{self, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::data::loader::DataProvider;
use crate::data::model::CropDataset;
use crate::state::AppState;
use crate::ui::{charts, metrics, panels, table};

// ---------------------------------------------------------------------------
// Loaded dashboard: dataset plus its UI state
// ---------------------------------------------------------------------------

struct Dashboard {
    dataset: Arc<CropDataset>,
    state: AppState,
}

impl Dashboard {
    fn new(dataset: Arc<CropDataset>) -> Self {
        let state = AppState::new(&dataset);
        Self { dataset, state }
    }
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CropDashboardApp {
    provider: DataProvider,
    dashboard: Result<Dashboard, String>,
}

impl CropDashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        let provider = DataProvider::new(config.data_path, config.synthetic);
        let dashboard = Self::open(&provider);
        Self { provider, dashboard }
    }

    fn open(provider: &DataProvider) -> Result<Dashboard, String> {
        match provider.dataset() {
            Ok(dataset) => {
                log::info!("Dashboard ready: {} records from {}", dataset.len(), dataset.source);
                Ok(Dashboard::new(dataset))
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", provider.path().display());
                Err(e.to_string())
            }
        }
    }
}

impl eframe::App for CropDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dashboard = match &mut self.dashboard {
            Ok(dashboard) => dashboard,
            Err(message) => {
                let mut retry = false;
                egui::CentralPanel::default().show(ctx, |ui| {
                    retry = panels::load_error(ui, message);
                });
                if retry {
                    self.dashboard = Self::open(&self.provider);
                }
                return;
            }
        };
        let dataset = Arc::clone(&dashboard.dataset);
        let state = &mut dashboard.state;

        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &dataset, &state.view);
        });

        // ---- Left side panel: filters ----
        let changed = egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(
                    ui,
                    &dataset,
                    &mut state.selection,
                    &state.crop_colors,
                    &state.state_colors,
                )
            })
            .inner;
        if changed {
            state.on_selection_changed(&dataset);
        }

        // ---- Central panel: metrics, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard_body(ui, &dataset, state));
        });
    }
}

fn dashboard_body(ui: &mut Ui, dataset: &CropDataset, state: &AppState) {
    let view = &state.view;
    let year = state.selection.year;

    ui.heading("🌾 Agricultural Crop Production Analysis");
    ui.label("Analyze crop trends, production yields, and agricultural distribution.");
    ui.add_space(8.0);

    metrics::metrics_row(ui, &view.metrics);
    ui.separator();

    ui.columns(2, |cols| {
        charts::production_by_crop(&mut cols[0], &view.production_by_crop, year, &state.crop_colors);
        charts::state_share(&mut cols[1], &view.state_shares, year, &state.state_colors);
    });
    ui.add_space(12.0);
    ui.columns(2, |cols| {
        charts::trend(&mut cols[0], &view.yearly_trend, &state.state_colors);
        charts::area_vs_production(&mut cols[1], &view.scatter, &state.crop_colors);
    });
    ui.add_space(12.0);

    table::detail_table(ui, dataset, &view.visible_indices);
}
