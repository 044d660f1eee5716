use eframe::egui::Color32;

use super::tooltip;
use crate::data::filter::{self, StateFilter};
use crate::data::model::LocationDataset;

// ---------------------------------------------------------------------------
// Geospatial scatter spec
// ---------------------------------------------------------------------------

/// Marker radius per dollar of average wage.
pub const WAGE_RADIUS_SCALE: f64 = 5.0;

/// Initial viewpoint: the continental U.S. centroid.
pub const INITIAL_VIEWPOINT: MapViewpoint = MapViewpoint {
    latitude: 39.8283,
    longitude: -98.5795,
    zoom: 4.0,
};

const TOOLTIP_TEMPLATE: &str = "State: {State}\nAverage Wage: ${Average Wage}";

#[derive(Debug, Clone, Copy)]
pub struct MapViewpoint {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f32,
}

#[derive(Debug, Clone)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    /// Derived marker radius: `average_wage * WAGE_RADIUS_SCALE`.
    pub radius: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone)]
pub struct MapSpec {
    pub title: String,
    pub viewpoint: MapViewpoint,
    pub marker_color: Color32,
    pub markers: Vec<MapMarker>,
}

/// Average wages by location for one year, optionally narrowed to a state.
/// Marker size encodes the wage; an empty filter result yields a markerless
/// (still valid) spec.
pub fn location_map_spec(data: &LocationDataset, year: i32, state: &StateFilter) -> MapSpec {
    let markers = filter::rows_for_year_and_state(&data.rows, year, state)
        .into_iter()
        .map(|i| {
            let row = &data.rows[i];
            MapMarker {
                latitude: row.latitude,
                longitude: row.longitude,
                radius: row.average_wage * WAGE_RADIUS_SCALE,
                tooltip: tooltip::render_template(
                    TOOLTIP_TEMPLATE,
                    &[
                        ("State", row.state.clone()),
                        ("Average Wage", format!("{:.2}", row.average_wage)),
                    ],
                ),
            }
        })
        .collect();

    MapSpec {
        title: format!("Employment by Location ({year})"),
        viewpoint: INITIAL_VIEWPOINT,
        marker_color: Color32::from_rgba_unmultiplied(200, 30, 0, 160),
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LocationRow;

    fn row(year: i32, state: &str, wage: f64) -> LocationRow {
        LocationRow {
            year,
            state: state.to_string(),
            latitude: 40.0,
            longitude: -100.0,
            average_wage: wage,
        }
    }

    #[test]
    fn radius_scales_with_wage_and_is_zero_at_zero() {
        let data = LocationDataset {
            rows: vec![
                row(2020, "Texas", 0.0),
                row(2020, "Ohio", 25000.0),
                row(2020, "Hawaii", 45000.0),
            ],
        };
        let spec = location_map_spec(&data, 2020, &StateFilter::All);
        let radii: Vec<f64> = spec.markers.iter().map(|m| m.radius).collect();
        assert_eq!(radii[0], 0.0);
        assert_eq!(radii[1], 125000.0);
        // monotonic in wage
        assert!(radii.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn state_selector_narrows_markers() {
        let data = LocationDataset {
            rows: vec![row(2020, "Texas", 100.0), row(2020, "Ohio", 200.0)],
        };
        let spec = location_map_spec(&data, 2020, &StateFilter::Only("Ohio".into()));
        assert_eq!(spec.markers.len(), 1);
        assert!(spec.markers[0].tooltip.contains("State: Ohio"));
        assert!(spec.markers[0].tooltip.contains("$200.00"));
    }

    #[test]
    fn empty_filter_result_yields_an_empty_spec() {
        let data = LocationDataset {
            rows: vec![row(2020, "Texas", 100.0)],
        };
        let spec = location_map_spec(&data, 1999, &StateFilter::All);
        assert!(spec.markers.is_empty());
        assert_eq!(spec.viewpoint.latitude, INITIAL_VIEWPOINT.latitude);
    }
}
