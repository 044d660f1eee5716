//! Writes the four dashboard CSVs to a local directory so the app can run
//! offline: `generate_sample [DIR]`, then `workforce-dash DIR`.

use std::path::Path;

use anyhow::{Context, Result};

/// Minimal deterministic LCG, enough for wage jitter.
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed)
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [-spread, spread].
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

const YEARS: std::ops::RangeInclusive<i32> = 2014..=2022;

const STATES: &[(&str, f64, f64, f64)] = &[
    // state, latitude, longitude, base wage
    ("Hawaii", 21.31, -157.80, 41000.0),
    ("District of Columbia", 38.91, -77.04, 39500.0),
    ("Massachusetts", 42.41, -71.38, 37000.0),
    ("California", 36.78, -119.42, 34000.0),
    ("New York", 43.00, -75.00, 33500.0),
    ("Washington", 47.75, -120.74, 33000.0),
    ("Texas", 31.00, -100.00, 26000.0),
    ("Ohio", 40.42, -82.91, 24500.0),
    ("Mississippi", 32.35, -89.40, 21500.0),
    ("West Virginia", 38.60, -80.45, 21000.0),
];

const INDUSTRIES: &[(&str, &str, i64, f64)] = &[
    // sector, group, base population, base wage
    ("Accommodation & Food Services", "Restaurants & Food Services", 1800000, 23000.0),
    ("Accommodation & Food Services", "Traveler Accommodation", 160000, 26000.0),
    ("Educational Services", "Elementary & Secondary Schools", 90000, 25000.0),
    ("Educational Services", "Colleges & Universities", 45000, 27000.0),
    ("Health Care & Social Assistance", "Hospitals", 70000, 28000.0),
    ("Health Care & Social Assistance", "Nursing Care Facilities", 85000, 24000.0),
    ("Retail Trade", "Grocery Stores", 60000, 22000.0),
    ("Arts & Entertainment", "Amusement & Recreation", 30000, 21000.0),
];

/// Employment rises to a 2018 peak, then declines.
fn trend(year: i32, base: f64) -> f64 {
    let offset = f64::from(year - 2018);
    base * (1.0 - 0.012 * offset * offset)
}

fn main() -> Result<()> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "sample_data".to_string());
    let dir = Path::new(&dir);
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);

    write_employment(dir)?;
    write_locations(dir, &mut rng)?;
    write_gender(dir)?;
    write_industry(dir, &mut rng)?;

    println!("Wrote 4 datasets to {}", dir.display());
    Ok(())
}

fn write_employment(dir: &Path) -> Result<()> {
    let mut w = writer(dir, "Employment Over Time.csv")?;
    w.write_record(["Year", "Male Population", "Female Population"])?;
    for year in YEARS {
        w.write_record([
            year.to_string(),
            format!("{:.0}", trend(year, 1_900_000.0)),
            format!("{:.0}", trend(year, 1_050_000.0)),
        ])?;
    }
    Ok(w.flush()?)
}

fn write_locations(dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    let mut w = writer(dir, "Employment_By_Location.csv")?;
    w.write_record(["Year", "State", "Latitude", "Longitude", "Average Wage"])?;
    for year in YEARS {
        for &(state, lat, lon, base_wage) in STATES {
            let wage = base_wage + 450.0 * f64::from(year - 2014) + rng.jitter(800.0);
            w.write_record([
                year.to_string(),
                state.to_string(),
                format!("{lat:.2}"),
                format!("{lon:.2}"),
                format!("{wage:.2}"),
            ])?;
        }
        // one territory without geocoding, as in the published table
        w.write_record([
            year.to_string(),
            "Puerto Rico".to_string(),
            String::new(),
            String::new(),
            "19000.00".to_string(),
        ])?;
    }
    Ok(w.flush()?)
}

fn write_gender(dir: &Path) -> Result<()> {
    let mut w = writer(dir, "workforce_by_gender.csv")?;
    w.write_record(["Year", "fmale", "pmale", "ffemale", "pfemale"])?;
    for year in YEARS {
        w.write_record([
            year.to_string(),
            format!("{:.0}", trend(year, 1_350_000.0)),
            format!("{:.0}", trend(year, 550_000.0)),
            format!("{:.0}", trend(year, 650_000.0)),
            format!("{:.0}", trend(year, 400_000.0)),
        ])?;
    }
    Ok(w.flush()?)
}

fn write_industry(dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    let mut w = writer(dir, "Occupations_by_Industries.csv")?;
    w.write_record([
        "Year",
        "Industry Sector",
        "Industry Group",
        "Total Population",
        "Average Wage",
    ])?;
    for year in YEARS {
        for &(sector, group, base_population, base_wage) in INDUSTRIES {
            let population = trend(year, base_population as f64);
            let wage = base_wage + 400.0 * f64::from(year - 2014) + rng.jitter(500.0);
            w.write_record([
                year.to_string(),
                sector.to_string(),
                group.to_string(),
                format!("{population:.0}"),
                format!("{wage:.2}"),
            ])?;
        }
    }
    Ok(w.flush()?)
}

fn writer(dir: &Path, name: &str) -> Result<csv::Writer<std::fs::File>> {
    let path = dir.join(name);
    csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))
}
