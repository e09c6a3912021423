use eframe::egui::{self, RichText, Ui};

use crate::data::metrics::Metrics;

/// Render the three summary metrics side by side.
pub fn metrics_row(ui: &mut Ui, metrics: &Metrics) {
    ui.columns(3, |cols| {
        metric(
            &mut cols[0],
            "Total Production (Tonnes)",
            &format_thousands(metrics.total_production),
        );
        metric(
            &mut cols[1],
            "Total Cultivated Area (Hectares)",
            &format_thousands(metrics.total_area),
        );
        metric(
            &mut cols[2],
            "Avg Yield (Tonnes/Hectare)",
            &format!("{:.2}", metrics.avg_yield),
        );
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(label);
        ui.label(RichText::new(value).size(26.0).strong());
    });
}

/// Round to a whole number and group digits with commas: `1234567.8` →
/// `"1,234,568"`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
