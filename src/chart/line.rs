use eframe::egui::Color32;

use crate::data::model::EmploymentDataset;

// ---------------------------------------------------------------------------
// Line chart spec
// ---------------------------------------------------------------------------

pub const MALE_COLOR: Color32 = Color32::LIGHT_BLUE;
pub const FEMALE_COLOR: Color32 = Color32::from_rgb(255, 192, 203); // pink

#[derive(Debug, Clone)]
pub struct LineSeries {
    pub name: String,
    pub color: Color32,
    /// `[x, y]` pairs in row order.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone)]
pub struct LineChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub series: Vec<LineSeries>,
}

/// Populations by gender over time, one series per gender. This chart has
/// no selectors; it always shows the full table.
pub fn employment_line_spec(data: &EmploymentDataset) -> LineChartSpec {
    let male = LineSeries {
        name: "Male Population".to_string(),
        color: MALE_COLOR,
        points: data
            .rows
            .iter()
            .map(|r| [f64::from(r.year), r.male_population])
            .collect(),
    };
    let female = LineSeries {
        name: "Female Population".to_string(),
        color: FEMALE_COLOR,
        points: data
            .rows
            .iter()
            .map(|r| [f64::from(r.year), r.female_population])
            .collect(),
    };

    LineChartSpec {
        title: "Populations by Gender Over Time".to_string(),
        x_label: "Year".to_string(),
        y_label: "Population".to_string(),
        legend_title: "Gender".to_string(),
        series: vec![male, female],
    }
}
