// ---------------------------------------------------------------------------
// Typed dataset rows
// ---------------------------------------------------------------------------

/// A row with a calendar year, the dimension every selector filters on.
pub trait Yearly {
    fn year(&self) -> i32;
}

/// One row of the "Employment Over Time" table (one row per year).
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentRow {
    pub year: i32,
    pub male_population: f64,
    pub female_population: f64,
}

/// One row of "Employment By Location". Rows with missing or out-of-range
/// coordinates never make it into the dataset; `latitude` is always in
/// [-90, 90] and `longitude` in [-180, 180].
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub year: i32,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Rounded to 2 decimals at load time.
    pub average_wage: f64,
}

/// One row of "Workforce By Gender": full/part-time counts per gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderRow {
    pub year: i32,
    pub full_time_male: i64,
    pub part_time_male: i64,
    pub full_time_female: i64,
    pub part_time_female: i64,
}

/// One row of "Occupations By Industry": a Sector → Group leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryRow {
    pub year: i32,
    pub sector: String,
    pub group: String,
    pub total_population: i64,
    /// Rounded to 2 decimals at load time.
    pub average_wage: f64,
}

impl Yearly for EmploymentRow {
    fn year(&self) -> i32 {
        self.year
    }
}

impl Yearly for LocationRow {
    fn year(&self) -> i32 {
        self.year
    }
}

impl Yearly for GenderRow {
    fn year(&self) -> i32 {
        self.year
    }
}

impl Yearly for IndustryRow {
    fn year(&self) -> i32 {
        self.year
    }
}

// ---------------------------------------------------------------------------
// Loaded datasets
// ---------------------------------------------------------------------------

// Datasets are immutable after load; the filter stage produces index views
// into `rows` rather than mutating anything.

#[derive(Debug, Clone, Default)]
pub struct EmploymentDataset {
    pub rows: Vec<EmploymentRow>,
}

#[derive(Debug, Clone, Default)]
pub struct LocationDataset {
    pub rows: Vec<LocationRow>,
}

#[derive(Debug, Clone, Default)]
pub struct GenderDataset {
    pub rows: Vec<GenderRow>,
}

#[derive(Debug, Clone, Default)]
pub struct IndustryDataset {
    pub rows: Vec<IndustryRow>,
}

impl IndustryDataset {
    /// Sorted distinct Industry Sector values of the full table. Drives the
    /// stable sector colour assignment.
    pub fn sectors(&self) -> std::collections::BTreeSet<String> {
        self.rows.iter().map(|r| r.sector.clone()).collect()
    }
}
