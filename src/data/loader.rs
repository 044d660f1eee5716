use serde::Deserialize;

use super::model::{
    EmploymentDataset, EmploymentRow, GenderDataset, GenderRow, IndustryDataset, IndustryRow,
    LocationDataset, LocationRow,
};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Raw CSV records (serde-renamed to the published header names)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct EmploymentRecord {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Male Population")]
    male_population: f64,
    #[serde(rename = "Female Population")]
    female_population: f64,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
    #[serde(rename = "Average Wage")]
    average_wage: f64,
}

#[derive(Debug, Deserialize)]
struct GenderRecord {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "fmale")]
    full_time_male: i64,
    #[serde(rename = "pmale")]
    part_time_male: i64,
    #[serde(rename = "ffemale")]
    full_time_female: i64,
    #[serde(rename = "pfemale")]
    part_time_female: i64,
}

#[derive(Debug, Deserialize)]
struct IndustryRecord {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Industry Sector")]
    sector: String,
    #[serde(rename = "Industry Group")]
    group: String,
    #[serde(rename = "Total Population")]
    total_population: i64,
    #[serde(rename = "Average Wage")]
    average_wage: f64,
}

// ---------------------------------------------------------------------------
// Parsers, one per dataset
// ---------------------------------------------------------------------------

/// Parse the "Employment Over Time" CSV (one row per year).
pub fn parse_employment(csv_text: &str) -> Result<EmploymentDataset, DataError> {
    let rows = parse_records::<EmploymentRecord>(csv_text)?
        .into_iter()
        .map(|r| EmploymentRow {
            year: r.year,
            male_population: r.male_population,
            female_population: r.female_population,
        })
        .collect();
    Ok(EmploymentDataset { rows })
}

/// Parse the "Employment By Location" CSV. Rows with missing or
/// out-of-range coordinates are dropped (the published table has a handful
/// of states without geocoding); wages are rounded to 2 decimals.
pub fn parse_locations(csv_text: &str) -> Result<LocationDataset, DataError> {
    let raw = parse_records::<LocationRecord>(csv_text)?;
    let total = raw.len();

    let mut rows = Vec::with_capacity(total);
    for r in raw {
        let (Some(latitude), Some(longitude)) = (r.latitude, r.longitude) else {
            continue;
        };
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            continue;
        }
        rows.push(LocationRow {
            year: r.year,
            state: r.state,
            latitude,
            longitude,
            average_wage: round2(r.average_wage),
        });
    }

    if rows.len() < total {
        log::warn!(
            "dropped {} location rows with missing or out-of-range coordinates",
            total - rows.len()
        );
    }
    Ok(LocationDataset { rows })
}

/// Parse the "Workforce By Gender" CSV. Counts must be whole numbers; a
/// fractional count is a coercion failure, not something to round away.
pub fn parse_gender(csv_text: &str) -> Result<GenderDataset, DataError> {
    let rows = parse_records::<GenderRecord>(csv_text)?
        .into_iter()
        .map(|r| GenderRow {
            year: r.year,
            full_time_male: r.full_time_male,
            part_time_male: r.part_time_male,
            full_time_female: r.full_time_female,
            part_time_female: r.part_time_female,
        })
        .collect();
    Ok(GenderDataset { rows })
}

/// Parse the "Occupations By Industry" CSV; wages rounded to 2 decimals.
pub fn parse_industry(csv_text: &str) -> Result<IndustryDataset, DataError> {
    let rows = parse_records::<IndustryRecord>(csv_text)?
        .into_iter()
        .map(|r| IndustryRow {
            year: r.year,
            sector: r.sector,
            group: r.group,
            total_population: r.total_population,
            average_wage: round2(r.average_wage),
        })
        .collect();
    Ok(IndustryDataset { rows })
}

/// Round to 2 decimals, the precision wages are displayed at.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Shared CSV plumbing
// ---------------------------------------------------------------------------

fn parse_records<T: for<'de> Deserialize<'de>>(csv_text: &str) -> Result<Vec<T>, DataError> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut out = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let record: T = result.map_err(|err| classify(row_no, err))?;
        out.push(record);
    }
    Ok(out)
}

/// Deserialization failures are per-cell coercion problems; everything else
/// (malformed CSV, uneven row lengths) means the resource itself is bad.
fn classify(row_no: usize, err: csv::Error) -> DataError {
    match err.kind() {
        csv::ErrorKind::Deserialize { .. } => DataError::Coercion(format!("row {row_no}: {err}")),
        _ => DataError::Unavailable(format!("row {row_no}: {err}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employment_parses_typed_rows() {
        let csv = "Year,Male Population,Female Population\n\
                   2014,180000,95000\n\
                   2015,185000.5,97000\n";
        let ds = parse_employment(csv).unwrap();
        assert_eq!(ds.rows.len(), 2);
        assert_eq!(ds.rows[0].year, 2014);
        assert_eq!(ds.rows[1].male_population, 185000.5);
    }

    #[test]
    fn locations_drop_missing_and_out_of_range_coordinates() {
        let csv = "Year,State,Latitude,Longitude,Average Wage\n\
                   2020,Hawaii,21.30,-157.85,41234.567\n\
                   2020,Unknown,,,30000\n\
                   2020,Broken,95.0,-100.0,30000\n";
        let ds = parse_locations(csv).unwrap();
        assert_eq!(ds.rows.len(), 1);
        assert_eq!(ds.rows[0].state, "Hawaii");
        // wage rounded to 2 decimals at load time
        assert_eq!(ds.rows[0].average_wage, 41234.57);
    }

    #[test]
    fn gender_counts_must_be_whole_numbers() {
        let csv = "Year,fmale,pmale,ffemale,pfemale\n\
                   2020,500,100.5,200,150\n";
        let err = parse_gender(csv).unwrap_err();
        assert!(matches!(err, DataError::Coercion(_)), "got {err:?}");
    }

    #[test]
    fn non_numeric_year_is_a_coercion_failure() {
        let csv = "Year,Male Population,Female Population\n\
                   twenty-twenty,1,2\n";
        let err = parse_employment(csv).unwrap_err();
        assert!(matches!(err, DataError::Coercion(_)));
    }

    #[test]
    fn uneven_rows_mean_the_resource_is_unavailable() {
        let csv = "Year,fmale,pmale,ffemale,pfemale\n\
                   2020,500,100\n";
        let err = parse_gender(csv).unwrap_err();
        assert!(matches!(err, DataError::Unavailable(_)), "got {err:?}");
    }

    #[test]
    fn industry_wages_are_rounded() {
        let csv = "Year,Industry Sector,Industry Group,Total Population,Average Wage\n\
                   2020,Accommodation & Food,Restaurants,120000,23456.789\n";
        let ds = parse_industry(csv).unwrap();
        assert_eq!(ds.rows[0].average_wage, 23456.79);
        assert_eq!(ds.rows[0].total_population, 120000);
    }

    #[test]
    fn empty_table_is_valid() {
        let csv = "Year,Male Population,Female Population\n";
        let ds = parse_employment(csv).unwrap();
        assert!(ds.rows.is_empty());
    }
}
