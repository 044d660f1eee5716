use eframe::egui::Color32;

use super::tooltip;
use crate::color::SectorColorMap;
use crate::data::filter;
use crate::data::model::IndustryDataset;

// ---------------------------------------------------------------------------
// Treemap spec
// ---------------------------------------------------------------------------

const TOOLTIP_TEMPLATE: &str =
    "{Industry Group}\nTotal Population: {Total Population}\nAverage Wage: ${Average Wage}";

/// One Sector → Group leaf rectangle.
#[derive(Debug, Clone)]
pub struct TreemapNode {
    pub sector: String,
    pub group: String,
    /// Rectangle area weight (Total Population).
    pub value: f64,
    pub color: Color32,
    pub tooltip: String,
}

#[derive(Debug, Clone)]
pub struct TreemapSpec {
    pub title: String,
    pub nodes: Vec<TreemapNode>,
}

/// Industries by total population for one year. Node colours come from the
/// session-stable [`SectorColorMap`] built over the full dataset, never
/// from the filtered subset.
pub fn industry_treemap_spec(
    data: &IndustryDataset,
    year: i32,
    colors: &SectorColorMap,
) -> TreemapSpec {
    let nodes = filter::rows_for_year(&data.rows, year)
        .into_iter()
        .map(|i| {
            let row = &data.rows[i];
            TreemapNode {
                sector: row.sector.clone(),
                group: row.group.clone(),
                value: row.total_population as f64,
                color: colors.color_for(&row.sector),
                tooltip: tooltip::render_template(
                    TOOLTIP_TEMPLATE,
                    &[
                        ("Industry Group", row.group.clone()),
                        ("Total Population", row.total_population.to_string()),
                        ("Average Wage", format!("{:.2}", row.average_wage)),
                    ],
                ),
            }
        })
        .collect();

    TreemapSpec {
        title: format!("Treemap of Industries by Total Population ({year})"),
        nodes,
    }
}
