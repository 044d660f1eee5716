//! End-to-end pipeline tests: CSV text → loader → filter → derive → chart
//! spec, exactly the path the UI drives, with no UI involved.

use workforce_dash::chart::{bar, map, treemap};
use workforce_dash::color::SectorColorMap;
use workforce_dash::data::fetch::{Fetch, SourceCache};
use workforce_dash::data::filter::{self, StateFilter};
use workforce_dash::data::{loader, sources};
use workforce_dash::error::DataError;
use workforce_dash::state::AppState;

const GENDER_CSV: &str = "\
Year,fmale,pmale,ffemale,pfemale
2019,480,90,190,140
2020,500,100,200,150
";

const LOCATION_CSV: &str = "\
Year,State,Latitude,Longitude,Average Wage
2014,Ohio,40.42,-82.91,24500.00
2016,Texas,31.00,-100.00,26000.00
2020,Hawaii,21.31,-157.80,41000.00
2020,Texas,31.00,-100.00,28750.555
2020,Guam,,,21000.00
";

const INDUSTRY_CSV: &str = "\
Year,Industry Sector,Industry Group,Total Population,Average Wage
2014,Accommodation & Food Services,Restaurants,1800000,23000.00
2014,Educational Services,Schools,90000,25000.00
2020,Accommodation & Food Services,Restaurants,1650000,25500.00
2020,Retail Trade,Grocery Stores,60000,22000.00
";

#[test]
fn gender_csv_to_stacked_bar_totals() {
    let data = loader::parse_gender(GENDER_CSV).unwrap();
    let spec = bar::gender_bar_spec(&data, 2020);

    assert_eq!(spec.category_total("Male"), 600.0);
    assert_eq!(spec.category_total("Female"), 350.0);

    // the other year is untouched by the selector
    let spec_2019 = bar::gender_bar_spec(&data, 2019);
    assert_eq!(spec_2019.category_total("Male"), 570.0);
}

#[test]
fn location_csv_to_map_spec() {
    let data = loader::parse_locations(LOCATION_CSV).unwrap();

    // the row without coordinates is gone before filtering
    assert_eq!(data.rows.len(), 4);
    assert!(data
        .rows
        .iter()
        .all(|r| (-90.0..=90.0).contains(&r.latitude) && (-180.0..=180.0).contains(&r.longitude)));

    // selector domains come from the unfiltered table
    assert_eq!(filter::year_domain(&data.rows), vec![2014, 2016, 2020]);
    assert_eq!(filter::state_domain(&data.rows), vec!["Hawaii", "Ohio", "Texas"]);

    let all = map::location_map_spec(&data, 2020, &StateFilter::All);
    assert_eq!(all.markers.len(), 2);

    let texas = map::location_map_spec(&data, 2020, &StateFilter::Only("Texas".into()));
    assert_eq!(texas.markers.len(), 1);
    // wage rounded at load, scaled by the fixed factor
    assert_eq!(texas.markers[0].radius, 28750.56 * 5.0);
    assert!(texas.markers[0].tooltip.contains("State: Texas"));
}

#[test]
fn industry_csv_to_treemap_with_stable_colors() {
    let data = loader::parse_industry(INDUSTRY_CSV).unwrap();
    let colors = SectorColorMap::new(&data.sectors());

    let spec_2014 = treemap::industry_treemap_spec(&data, 2014, &colors);
    let spec_2020 = treemap::industry_treemap_spec(&data, 2020, &colors);
    assert_eq!(spec_2014.nodes.len(), 2);
    assert_eq!(spec_2020.nodes.len(), 2);

    let food = |spec: &treemap::TreemapSpec| {
        spec.nodes
            .iter()
            .find(|n| n.sector == "Accommodation & Food Services")
            .unwrap()
            .color
    };
    assert_eq!(food(&spec_2014), food(&spec_2020));

    // a year with no rows still yields a valid (empty) spec
    let empty = treemap::industry_treemap_spec(&data, 1999, &colors);
    assert!(empty.nodes.is_empty());
}

/// Serves every dataset from inline CSVs, counting fetches through a
/// handle the test keeps.
struct InlineFetcher {
    calls: std::rc::Rc<std::cell::Cell<usize>>,
}

impl Fetch for InlineFetcher {
    fn fetch(&self, resource: &str) -> anyhow::Result<String> {
        self.calls.set(self.calls.get() + 1);
        if resource == sources::EMPLOYMENT_OVER_TIME {
            Ok("Year,Male Population,Female Population\n2014,1900000,1050000\n".into())
        } else if resource == sources::EMPLOYMENT_BY_LOCATION {
            Ok(LOCATION_CSV.into())
        } else if resource == sources::WORKFORCE_BY_GENDER {
            Ok(GENDER_CSV.into())
        } else if resource == sources::OCCUPATIONS_BY_INDUSTRY {
            Ok(INDUSTRY_CSV.into())
        } else {
            anyhow::bail!("unknown resource {resource}")
        }
    }
}

#[test]
fn app_state_loads_all_datasets_once() {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut cache = SourceCache::new(InlineFetcher {
        calls: calls.clone(),
    });
    let state = AppState::load(&mut cache);

    assert_eq!(state.loaded_count(), 4);
    assert_eq!(state.map_year, 2014);
    assert_eq!(state.bar_year, 2019);
    assert_eq!(state.treemap_year, 2014);
    assert_eq!(calls.get(), 4);

    // repeated reads hit the cache, not the fetcher
    cache.get(sources::WORKFORCE_BY_GENDER).unwrap();
    cache.get(sources::WORKFORCE_BY_GENDER).unwrap();
    assert_eq!(calls.get(), 4);
}

#[test]
fn coercion_failure_is_scoped_to_its_dataset() {
    struct BadGenderFetcher;
    impl Fetch for BadGenderFetcher {
        fn fetch(&self, resource: &str) -> anyhow::Result<String> {
            if resource == sources::WORKFORCE_BY_GENDER {
                Ok("Year,fmale,pmale,ffemale,pfemale\n2020,many,1,2,3\n".into())
            } else if resource == sources::EMPLOYMENT_OVER_TIME {
                Ok("Year,Male Population,Female Population\n2014,1,2\n".into())
            } else if resource == sources::EMPLOYMENT_BY_LOCATION {
                Ok(LOCATION_CSV.into())
            } else {
                Ok(INDUSTRY_CSV.into())
            }
        }
    }

    let mut cache = SourceCache::new(BadGenderFetcher);
    let state = AppState::load(&mut cache);
    assert!(matches!(state.gender, Err(DataError::Coercion(_))));
    assert_eq!(state.loaded_count(), 3);
}
