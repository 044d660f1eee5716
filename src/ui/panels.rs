use eframe::egui::{Color32, ComboBox, RichText, Slider, Ui};

use super::plot;
use crate::chart::{bar, line, map, treemap};
use crate::data::filter::{self, StateFilter};
use crate::error::DataError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Cooks in the U.S. Workforce");
        ui.separator();
        ui.label("Trends, Challenges, and Opportunities");
        ui.separator();
        ui.label(format!("{}/4 datasets loaded", state.loaded_count()));
    });
}

// ---------------------------------------------------------------------------
// Chart sections
// ---------------------------------------------------------------------------

// Each section owns its selectors and renders its own error; a failing
// dataset never affects the sections around it.

pub fn employment_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Employment Over Time");
    match &state.employment {
        Ok(data) => {
            let spec = line::employment_line_spec(data);
            plot::line_chart(ui, &spec);
            narrative(ui, "employment_narrative", EMPLOYMENT_NARRATIVE);
        }
        Err(err) => dataset_error(ui, err),
    }
}

pub fn location_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Employment by Location");
    let (years, states) = match &state.locations {
        Ok(data) => (
            filter::year_domain(&data.rows),
            filter::state_domain(&data.rows),
        ),
        Err(err) => {
            dataset_error(ui, err);
            return;
        }
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Year:");
        ComboBox::from_id_salt("map_year")
            .selected_text(state.map_year.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for &year in &years {
                    ui.selectable_value(&mut state.map_year, year, year.to_string());
                }
            });

        ui.label("State:");
        ComboBox::from_id_salt("map_state")
            .selected_text(state.map_state.label().to_string())
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(&mut state.map_state, StateFilter::All, "All");
                for s in &states {
                    ui.selectable_value(&mut state.map_state, StateFilter::Only(s.clone()), s);
                }
            });
    });

    if let Ok(data) = &state.locations {
        let spec = map::location_map_spec(data, state.map_year, &state.map_state);
        ui.label(format!("{} markers — larger means a higher average wage", spec.markers.len()));
        plot::location_map(ui, &spec);
    }
    narrative(ui, "location_narrative", LOCATION_NARRATIVE);
}

pub fn gender_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Workforce by Gender and Employment Type");
    let bounds = match &state.gender {
        Ok(data) => filter::year_bounds(&data.rows),
        Err(err) => {
            dataset_error(ui, err);
            return;
        }
    };

    if let Some((min_year, max_year)) = bounds {
        ui.add(Slider::new(&mut state.bar_year, min_year..=max_year).text("Year"));
    }

    if let Ok(data) = &state.gender {
        let spec = bar::gender_bar_spec(data, state.bar_year);
        plot::stacked_bar(ui, &spec);
    }
    narrative(ui, "gender_narrative", GENDER_NARRATIVE);
}

pub fn industry_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Occupations by Industry Group");
    let bounds = match &state.industry {
        Ok(data) => filter::year_bounds(&data.rows),
        Err(err) => {
            dataset_error(ui, err);
            return;
        }
    };

    if let Some((min_year, max_year)) = bounds {
        ui.add(Slider::new(&mut state.treemap_year, min_year..=max_year).text("Year"));
    }

    if let Ok(data) = &state.industry {
        let spec = treemap::industry_treemap_spec(data, state.treemap_year, &state.sector_colors);
        plot::treemap(ui, &spec);
    }

    // sector legend, stable across years
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (sector, color) in state.sector_colors.legend_entries() {
            ui.label(RichText::new(format!("■ {sector}")).color(color));
        }
    });
    narrative(ui, "industry_narrative", INDUSTRY_NARRATIVE);
}

// ---------------------------------------------------------------------------
// Shared widgets
// ---------------------------------------------------------------------------

fn dataset_error(ui: &mut Ui, err: &DataError) {
    ui.label(RichText::new(err.to_string()).color(Color32::RED));
    ui.label("The other charts on this page are unaffected.");
}

fn narrative(ui: &mut Ui, id: &str, text: &str) {
    eframe::egui::CollapsingHeader::new("About this chart")
        .id_salt(id)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label(text);
        });
}

const EMPLOYMENT_NARRATIVE: &str = "Both male and female workforces grew steadily until peaking \
around 2018, then declined through 2022. The male workforce stays consistently larger, though \
the gap narrows slightly in recent years as it shrinks faster.";

const LOCATION_NARRATIVE: &str = "Higher wages concentrate in states with higher costs of living \
(Hawaii, District of Columbia, Massachusetts), which also see strong demand from tourism and \
dense restaurant markets. Lower wages appear in rural and less urbanized states.";

const GENDER_NARRATIVE: &str = "Male cooks dominate the total workforce in both full-time and \
part-time roles, despite cooking being traditionally viewed as a female role in domestic \
settings. Women remain underrepresented across employment types.";

const INDUSTRY_NARRATIVE: &str = "Restaurants and other food services employ the large majority \
of cooks, with smaller groups spread across education, health care, and accommodation. Sector \
colours stay fixed as the year changes, so blocks can be tracked over time.";
