use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Qualitative palette
// ---------------------------------------------------------------------------

/// Number of hues in the fixed qualitative palette. Categories beyond this
/// wrap around (index modulo the palette length).
pub const PALETTE_LEN: usize = 10;

/// The fixed qualitative palette: `PALETTE_LEN` evenly spaced hues.
pub fn qualitative_palette() -> Vec<Color32> {
    (0..PALETTE_LEN)
        .map(|i| {
            let hue = (i as f32 / PALETTE_LEN as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sector colour mapping
// ---------------------------------------------------------------------------

/// Maps each Industry Sector to a stable colour.
///
/// Built once from the sorted sector set of the full unfiltered dataset, so
/// a sector keeps its colour no matter how the year filter changes. Sectors
/// are ordered lexicographically rather than by first appearance, which
/// also keeps the assignment independent of CSV row order.
#[derive(Debug, Clone, Default)]
pub struct SectorColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl SectorColorMap {
    /// Assign palette colours to the given sectors by index modulo
    /// [`PALETTE_LEN`].
    pub fn new(sectors: &BTreeSet<String>) -> Self {
        let palette = qualitative_palette();
        let mapping = sectors
            .iter()
            .enumerate()
            .map(|(i, sector)| (sector.clone(), palette[i % PALETTE_LEN]))
            .collect();
        SectorColorMap { mapping }
    }

    /// Look up the colour for a sector. Unknown sectors render grey.
    pub fn color_for(&self, sector: &str) -> Color32 {
        self.mapping.get(sector).copied().unwrap_or(Color32::GRAY)
    }

    /// Legend entries (sector label → colour), in sorted sector order.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping.iter().map(|(s, c)| (s.clone(), *c)).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
