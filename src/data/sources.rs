//! Resource identifiers of the four published CSV datasets (DataUSA
//! extracts hosted as static files).

pub const EMPLOYMENT_OVER_TIME: &str =
    "https://raw.githubusercontent.com/wackyjackyi/ie6600data/refs/heads/main/ie6600p2/Employment%20Over%20Time.csv";

pub const EMPLOYMENT_BY_LOCATION: &str =
    "https://raw.githubusercontent.com/wackyjackyi/ie6600data/refs/heads/main/ie6600p2/Employment_By_Location.csv";

pub const WORKFORCE_BY_GENDER: &str =
    "https://raw.githubusercontent.com/wackyjackyi/ie6600data/refs/heads/main/ie6600p2/workforce_by_gender.csv";

pub const OCCUPATIONS_BY_INDUSTRY: &str =
    "https://raw.githubusercontent.com/wackyjackyi/ie6600data/refs/heads/main/ie6600p2/Occupations_by_Industries.csv";
