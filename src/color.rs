use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{FromColor, Hsl, Srgb};

/// Hue of the first category, so the leading crop is not pure red.
const HUE_OFFSET: f32 = 25.0;

/// Colour of the `index`-th of `count` categories.
///
/// Hues are spread evenly around the wheel; neighbours alternate between a
/// darker and a lighter shade so adjacent bars and slices stay apart.
fn category_color(index: usize, count: usize) -> Color32 {
    let hue = HUE_OFFSET + index as f32 * 360.0 / count.max(1) as f32;
    let lightness = if index % 2 == 0 { 0.45 } else { 0.58 };
    let hsl: Hsl = Hsl::new(hue, 0.65, lightness);
    let rgb: Srgb<u8> = Srgb::<f32>::from_color(hsl).into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Color mapping: category → Color32
// ---------------------------------------------------------------------------

/// Maps the categories of one column (crops or states) to distinct colours,
/// so every chart colours the same category the same way.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map from the column's sorted unique values.
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let count = categories.len();
        let mapping = categories
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), category_color(i, count)))
            .collect();

        ColorMap { mapping }
    }

    /// Look up the colour for a category; unknown ones are grey.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors_are_distinct() {
        let colors: Vec<Color32> = (0..6).map(|i| category_color(i, 6)).collect();
        let unique: BTreeSet<[u8; 4]> = colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 6);
        assert!(colors.iter().all(|c| c.a() == 255));
    }

    #[test]
    fn test_neighbouring_categories_differ_in_lightness() {
        let brightness = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        let dark = category_color(0, 2);
        let light = category_color(1, 2);
        assert!(brightness(light) > brightness(dark));
    }

    #[test]
    fn test_empty_categories_give_empty_map() {
        let map = ColorMap::new(&BTreeSet::new());
        assert_eq!(map.color_for("Rice"), Color32::GRAY);
    }

    #[test]
    fn test_color_for_is_stable_and_defaults_to_grey() {
        let cats: BTreeSet<String> = ["Rice", "Wheat"].iter().map(|s| s.to_string()).collect();
        let map = ColorMap::new(&cats);
        assert_eq!(map.color_for("Rice"), map.color_for("Rice"));
        assert_ne!(map.color_for("Rice"), map.color_for("Wheat"));
        assert_eq!(map.color_for("Cotton"), Color32::GRAY);
    }
}
