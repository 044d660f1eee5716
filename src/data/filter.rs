use std::collections::BTreeSet;

use super::model::{LocationRow, Yearly};

// ---------------------------------------------------------------------------
// Selector values
// ---------------------------------------------------------------------------

/// State selector value: the "All" wildcard or one exact state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    All,
    Only(String),
}

impl StateFilter {
    pub fn matches(&self, state: &str) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(s) => s == state,
        }
    }

    /// Label shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            StateFilter::All => "All",
            StateFilter::Only(s) => s,
        }
    }
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

// Filtering returns indices into the immutable dataset, never copies of it.
// An empty result is a valid outcome and renders as an empty chart.

/// Indices of rows matching the selected year.
pub fn rows_for_year<R: Yearly>(rows: &[R], year: i32) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, r)| r.year() == year)
        .map(|(i, _)| i)
        .collect()
}

/// Indices of location rows matching both the year and state selectors.
pub fn rows_for_year_and_state(
    rows: &[LocationRow],
    year: i32,
    state: &StateFilter,
) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, r)| r.year == year && state.matches(&r.state))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Selector domains
// ---------------------------------------------------------------------------

// Domains always come from the full unfiltered table, so the options a user
// sees never depend on what is currently selected.

/// Sorted distinct years (dropdown options).
pub fn year_domain<R: Yearly>(rows: &[R]) -> Vec<i32> {
    let years: BTreeSet<i32> = rows.iter().map(Yearly::year).collect();
    years.into_iter().collect()
}

/// Inclusive year bounds for slider selectors; `None` when the table is empty.
pub fn year_bounds<R: Yearly>(rows: &[R]) -> Option<(i32, i32)> {
    let years = year_domain(rows);
    Some((*years.first()?, *years.last()?))
}

/// Sorted distinct states. The UI prepends the "All" wildcard.
pub fn state_domain(rows: &[LocationRow]) -> Vec<String> {
    let states: BTreeSet<String> = rows.iter().map(|r| r.state.clone()).collect();
    states.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn location(year: i32, state: &str) -> LocationRow {
        LocationRow {
            year,
            state: state.to_string(),
            latitude: 40.0,
            longitude: -100.0,
            average_wage: 30000.0,
        }
    }

    #[test]
    fn year_and_state_selectors_both_apply() {
        let rows = vec![
            location(2014, "Texas"),
            location(2014, "Ohio"),
            location(2016, "Texas"),
        ];

        let texas_2014 =
            rows_for_year_and_state(&rows, 2014, &StateFilter::Only("Texas".into()));
        assert_eq!(texas_2014, vec![0]);
        for &i in &texas_2014 {
            assert_eq!(rows[i].year, 2014);
            assert_eq!(rows[i].state, "Texas");
        }

        let all_2014 = rows_for_year_and_state(&rows, 2014, &StateFilter::All);
        assert_eq!(all_2014, vec![0, 1]);
        for &i in &all_2014 {
            assert_eq!(rows[i].year, 2014);
        }
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let rows = vec![location(2014, "Texas")];
        let none = rows_for_year_and_state(&rows, 1999, &StateFilter::All);
        assert!(none.is_empty());
    }

    #[test]
    fn domains_come_from_the_unfiltered_table() {
        let rows = vec![
            location(2020, "Texas"),
            location(2014, "Ohio"),
            location(2016, "Texas"),
            location(2014, "Hawaii"),
        ];
        assert_eq!(year_domain(&rows), vec![2014, 2016, 2020]);
        assert_eq!(state_domain(&rows), vec!["Hawaii", "Ohio", "Texas"]);
        assert_eq!(year_bounds(&rows), Some((2014, 2020)));
    }

    #[test]
    fn empty_table_has_no_bounds() {
        let rows: Vec<LocationRow> = Vec::new();
        assert_eq!(year_bounds(&rows), None);
        assert!(year_domain(&rows).is_empty());
    }
}
