use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points,
    Polygon, Text,
};

use crate::color::ColorMap;
use crate::data::aggregate::{ScatterPoint, ShareSlice};

const CHART_HEIGHT: f32 = 320.0;
const DONUT_HOLE: f64 = 0.4;

fn chart_header(ui: &mut Ui, heading: &str, title: &str, empty: bool) {
    ui.heading(heading);
    ui.label(RichText::new(title).weak());
    if empty {
        ui.label(RichText::new("No data for the current selection").italics());
    }
}

/// Axis labels for categorical or integer axes: only whole marks get text.
fn integer_mark(mark: &GridMark) -> Option<i64> {
    let rounded = mark.value.round();
    ((mark.value - rounded).abs() < 1e-6).then_some(rounded as i64)
}

// ---------------------------------------------------------------------------
// Production by crop (bar)
// ---------------------------------------------------------------------------

/// One bar per crop, coloured by crop.
pub fn production_by_crop(ui: &mut Ui, groups: &[(String, f64)], year: Option<i32>, colors: &ColorMap) {
    let title = match year {
        Some(y) => format!("Total Production in {y}"),
        None => "Total Production".to_string(),
    };
    chart_header(ui, "📊 Production by Crop", &title, groups.is_empty());

    let labels: Vec<String> = groups.iter().map(|(crop, _)| crop.clone()).collect();

    Plot::new("production_by_crop")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Crop")
        .y_axis_label("Production (t)")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            integer_mark(&mark)
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| labels.get(i).cloned())
                .unwrap_or_default()
        })
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, (crop, production)) in groups.iter().enumerate() {
                let color = colors.color_for(crop);
                let bar = Bar::new(i as f64, *production)
                    .width(0.7)
                    .fill(color)
                    .name(crop);
                plot_ui.bar_chart(BarChart::new(vec![bar]).color(color).name(crop));
            }
        });
}

// ---------------------------------------------------------------------------
// State-wise share (donut)
// ---------------------------------------------------------------------------

/// Donut chart with one slice per state and a percentage label on each.
pub fn state_share(ui: &mut Ui, slices: &[ShareSlice], year: Option<i32>, colors: &ColorMap) {
    let title = match year {
        Some(y) => format!("Production Share by State in {y}"),
        None => "Production Share by State".to_string(),
    };
    chart_header(ui, "🌍 State-wise Contribution", &title, slices.is_empty());

    let hover: Vec<(String, f64, f64)> = slices
        .iter()
        .map(|s| (s.label.clone(), s.value, s.share))
        .collect();

    Plot::new("state_share")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .label_formatter(move |name, _value| {
            hover
                .iter()
                .find(|(label, _, _)| label == name)
                .map(|(label, value, share)| {
                    format!("{label}\n{value:.2} t ({:.1}%)", share * 100.0)
                })
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for slice in slices {
                let color = colors.color_for(&slice.label);
                let outline = donut_segment(slice.start, slice.sweep, 1.0, DONUT_HOLE);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(outline))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(&slice.label),
                );

                let mid = slice.start + slice.sweep / 2.0;
                let r = (1.0 + DONUT_HOLE) / 2.0;
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(r * mid.sin(), r * mid.cos()),
                        RichText::new(format!("{:.1}%", slice.share * 100.0)).strong(),
                    )
                    .color(Color32::WHITE)
                    .anchor(Align2::CENTER_CENTER),
                );
            }
        });
}

/// Closed outline of a ring segment. Angles run clockwise from 12 o'clock.
fn donut_segment(start: f64, sweep: f64, outer: f64, inner: f64) -> Vec<[f64; 2]> {
    // Roughly one vertex per degree keeps large slices smooth.
    let steps = ((sweep.to_degrees()).ceil() as usize).max(2);
    let at = |radius: f64, i: usize| {
        let angle = start + sweep * i as f64 / steps as f64;
        [radius * angle.sin(), radius * angle.cos()]
    };

    let mut points: Vec<[f64; 2]> = (0..=steps).map(|i| at(outer, i)).collect();
    points.extend((0..=steps).rev().map(|i| at(inner, i)));
    points
}

// ---------------------------------------------------------------------------
// Trend over time (line)
// ---------------------------------------------------------------------------

/// One line per state across every year in the history subset.
pub fn trend(ui: &mut Ui, series: &BTreeMap<String, Vec<(i32, f64)>>, colors: &ColorMap) {
    chart_header(
        ui,
        "📈 Trend Over Time",
        "Production Trend (All Years)",
        series.is_empty(),
    );

    Plot::new("production_trend")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Crop Year")
        .y_axis_label("Production (t)")
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            integer_mark(&mark).map(|y| y.to_string()).unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (state, points) in series {
                let color = colors.color_for(state);
                let xy: Vec<[f64; 2]> = points
                    .iter()
                    .map(|&(year, production)| [f64::from(year), production])
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::new(xy.clone()))
                        .color(color)
                        .width(2.0)
                        .name(state),
                );
                plot_ui.points(
                    Points::new(PlotPoints::new(xy))
                        .color(color)
                        .radius(4.0)
                        .filled(true)
                        .shape(MarkerShape::Circle)
                        .name(state),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Area vs production (scatter)
// ---------------------------------------------------------------------------

/// Marker radius in points for a given area, scaled against the largest.
fn marker_radius(area: f64, max_area: f64) -> f32 {
    if max_area <= 0.0 || area <= 0.0 {
        return 2.0;
    }
    (2.0 + 10.0 * (area / max_area).sqrt()) as f32
}

/// Area against production, coloured by crop and sized by area. Hovering a
/// point shows its state.
pub fn area_vs_production(ui: &mut Ui, points: &[ScatterPoint], colors: &ColorMap) {
    chart_header(
        ui,
        "📉 Area vs Production",
        "Area vs Production Relationship",
        points.is_empty(),
    );

    let max_area = points.iter().map(|p| p.area).fold(0.0, f64::max);
    let hover: Vec<ScatterPoint> = points.to_vec();

    Plot::new("area_vs_production")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Area (ha)")
        .y_axis_label("Production (t)")
        .label_formatter(move |name, value| {
            let nearest = hover
                .iter()
                .filter(|p| p.crop == name)
                .min_by(|a, b| {
                    let da = (a.area - value.x).powi(2) + (a.production - value.y).powi(2);
                    let db = (b.area - value.x).powi(2) + (b.production - value.y).powi(2);
                    da.total_cmp(&db)
                });
            match nearest {
                Some(p) => format!(
                    "{}\nState: {}\nArea: {:.0} ha\nProduction: {:.2} t",
                    p.crop, p.state, p.area, p.production
                ),
                None => format!("Area: {:.0}\nProduction: {:.2}", value.x, value.y),
            }
        })
        .show(ui, |plot_ui| {
            for p in points {
                plot_ui.points(
                    Points::new(PlotPoints::new(vec![[p.area, p.production]]))
                        .color(colors.color_for(&p.crop).gamma_multiply(0.8))
                        .radius(marker_radius(p.area, max_area))
                        .filled(true)
                        .name(&p.crop),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donut_segment_is_closed_ring_slice() {
        let quarter = std::f64::consts::FRAC_PI_2;
        let outline = donut_segment(0.0, quarter, 1.0, 0.4);

        // Starts at 12 o'clock on the outer ring, ends there on the inner ring.
        let first = outline[0];
        let last = outline[outline.len() - 1];
        assert!((first[0] - 0.0).abs() < 1e-9 && (first[1] - 1.0).abs() < 1e-9);
        assert!((last[0] - 0.0).abs() < 1e-9 && (last[1] - 0.4).abs() < 1e-9);

        // Clockwise: the outer arc ends at 3 o'clock.
        let half = outline.len() / 2;
        let outer_end = outline[half - 1];
        assert!((outer_end[0] - 1.0).abs() < 1e-9 && outer_end[1].abs() < 1e-9);
    }

    #[test]
    fn test_marker_radius_scales_with_area() {
        assert_eq!(marker_radius(0.0, 100.0), 2.0);
        assert_eq!(marker_radius(100.0, 0.0), 2.0);
        assert_eq!(marker_radius(100.0, 100.0), 12.0);
        assert!(marker_radius(25.0, 100.0) < marker_radius(50.0, 100.0));
    }

    #[test]
    fn test_integer_mark() {
        let mark = |value| GridMark {
            value,
            step_size: 1.0,
        };
        assert_eq!(integer_mark(&mark(2020.0)), Some(2020));
        assert_eq!(integer_mark(&mark(2020.5)), None);
    }
}
