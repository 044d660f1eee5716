use eframe::egui::Color32;

use crate::data::filter;
use crate::data::model::GenderDataset;

// ---------------------------------------------------------------------------
// Stacked bar spec
// ---------------------------------------------------------------------------

const FULL_TIME_MALE_COLOR: Color32 = Color32::from_rgb(0, 0, 128); // navy
const PART_TIME_MALE_COLOR: Color32 = Color32::from_rgb(173, 216, 230); // lightblue
const FULL_TIME_FEMALE_COLOR: Color32 = Color32::from_rgb(139, 0, 0); // darkred
const PART_TIME_FEMALE_COLOR: Color32 = Color32::from_rgb(255, 192, 203); // pink

/// One stacked segment: `series` names the legend entry, `category` the bar
/// it stacks onto.
#[derive(Debug, Clone)]
pub struct BarSegment {
    pub series: String,
    pub category: String,
    pub value: f64,
    pub color: Color32,
}

#[derive(Debug, Clone)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    /// Bar categories in display order.
    pub categories: Vec<String>,
    pub segments: Vec<BarSegment>,
}

impl BarChartSpec {
    /// Total stacked height of one category's bar.
    pub fn category_total(&self, category: &str) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.value)
            .sum()
    }
}

/// Workforce by gender and employment type for one year: two bars (Male,
/// Female), each stacking full-time and part-time counts.
pub fn gender_bar_spec(data: &GenderDataset, year: i32) -> BarChartSpec {
    let mut segments = Vec::new();
    for i in filter::rows_for_year(&data.rows, year) {
        let row = &data.rows[i];
        segments.push(segment("Full-Time Male", "Male", row.full_time_male, FULL_TIME_MALE_COLOR));
        segments.push(segment("Part-Time Male", "Male", row.part_time_male, PART_TIME_MALE_COLOR));
        segments.push(segment(
            "Full-Time Female",
            "Female",
            row.full_time_female,
            FULL_TIME_FEMALE_COLOR,
        ));
        segments.push(segment(
            "Part-Time Female",
            "Female",
            row.part_time_female,
            PART_TIME_FEMALE_COLOR,
        ));
    }

    BarChartSpec {
        title: format!("Workforce Distribution by Gender and Employment Type ({year})"),
        x_label: "Gender".to_string(),
        y_label: "Workforce Population".to_string(),
        legend_title: "Employment Type and Gender".to_string(),
        categories: vec!["Male".to_string(), "Female".to_string()],
        segments,
    }
}

fn segment(series: &str, category: &str, value: i64, color: Color32) -> BarSegment {
    BarSegment {
        series: series.to_string(),
        category: category.to_string(),
        value: value as f64,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::GenderRow;

    #[test]
    fn stacked_totals_sum_full_and_part_time() {
        let data = GenderDataset {
            rows: vec![GenderRow {
                year: 2020,
                full_time_male: 500,
                part_time_male: 100,
                full_time_female: 200,
                part_time_female: 150,
            }],
        };
        let spec = gender_bar_spec(&data, 2020);
        assert_eq!(spec.category_total("Male"), 600.0);
        assert_eq!(spec.category_total("Female"), 350.0);
        assert_eq!(spec.segments.len(), 4);
    }

    #[test]
    fn year_without_rows_yields_an_empty_spec() {
        let data = GenderDataset {
            rows: vec![GenderRow {
                year: 2020,
                full_time_male: 1,
                part_time_male: 1,
                full_time_female: 1,
                part_time_female: 1,
            }],
        };
        let spec = gender_bar_spec(&data, 1999);
        assert!(spec.segments.is_empty());
        assert_eq!(spec.category_total("Male"), 0.0);
        // categories still present so the renderer can draw empty axes
        assert_eq!(spec.categories, vec!["Male", "Female"]);
    }
}
