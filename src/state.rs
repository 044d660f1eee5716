use crate::color::SectorColorMap;
use crate::data::fetch::{Fetch, SourceCache};
use crate::data::filter::{self, StateFilter};
use crate::data::model::{EmploymentDataset, GenderDataset, IndustryDataset, LocationDataset};
use crate::data::{loader, sources};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the UI needs, independent of rendering: the four loaded
/// datasets (each its own `Result`, so one bad resource never takes down
/// the others) and the current selector values. Datasets are loaded once;
/// selectors are the only thing that changes afterwards.
pub struct AppState {
    pub employment: Result<EmploymentDataset, DataError>,
    pub locations: Result<LocationDataset, DataError>,
    pub gender: Result<GenderDataset, DataError>,
    pub industry: Result<IndustryDataset, DataError>,

    /// Stable sector colours, built from the full industry table.
    pub sector_colors: SectorColorMap,

    // Selector values (year defaults: earliest option, as in the selectors'
    // published counterparts).
    pub map_year: i32,
    pub map_state: StateFilter,
    pub bar_year: i32,
    pub treemap_year: i32,
}

impl AppState {
    /// Load all four datasets through the cache and derive selector
    /// defaults and the sector colour map.
    pub fn load<F: Fetch>(cache: &mut SourceCache<F>) -> Self {
        let employment = cache
            .get(sources::EMPLOYMENT_OVER_TIME)
            .and_then(|text| loader::parse_employment(&text));
        let locations = cache
            .get(sources::EMPLOYMENT_BY_LOCATION)
            .and_then(|text| loader::parse_locations(&text));
        let gender = cache
            .get(sources::WORKFORCE_BY_GENDER)
            .and_then(|text| loader::parse_gender(&text));
        let industry = cache
            .get(sources::OCCUPATIONS_BY_INDUSTRY)
            .and_then(|text| loader::parse_industry(&text));

        for (name, err) in [
            ("employment", employment.as_ref().err()),
            ("locations", locations.as_ref().err()),
            ("gender", gender.as_ref().err()),
            ("industry", industry.as_ref().err()),
        ] {
            if let Some(err) = err {
                log::error!("loading {name} dataset failed: {err}");
            }
        }

        let sector_colors = industry
            .as_ref()
            .map(|ds| SectorColorMap::new(&ds.sectors()))
            .unwrap_or_default();

        let map_year = first_year(locations.as_ref().map(|ds| filter::year_domain(&ds.rows)));
        let bar_year = first_year(gender.as_ref().map(|ds| filter::year_domain(&ds.rows)));
        let treemap_year = first_year(industry.as_ref().map(|ds| filter::year_domain(&ds.rows)));

        AppState {
            employment,
            locations,
            gender,
            industry,
            sector_colors,
            map_year,
            map_state: StateFilter::All,
            bar_year,
            treemap_year,
        }
    }

    /// State used when no fetcher could even be constructed: every chart
    /// reports the same unavailable error.
    pub fn failed(err: impl std::fmt::Display) -> Self {
        let err = DataError::unavailable(err);
        AppState {
            employment: Err(err.clone()),
            locations: Err(err.clone()),
            gender: Err(err.clone()),
            industry: Err(err),
            sector_colors: SectorColorMap::default(),
            map_year: 0,
            map_state: StateFilter::All,
            bar_year: 0,
            treemap_year: 0,
        }
    }

    /// Number of datasets that loaded successfully (shown in the top bar).
    pub fn loaded_count(&self) -> usize {
        [
            self.employment.is_ok(),
            self.locations.is_ok(),
            self.gender.is_ok(),
            self.industry.is_ok(),
        ]
        .iter()
        .filter(|ok| **ok)
        .count()
    }
}

fn first_year(domain: Result<Vec<i32>, &DataError>) -> i32 {
    domain
        .ok()
        .and_then(|years| years.first().copied())
        .unwrap_or(0)
}
