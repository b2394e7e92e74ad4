#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const COUNTRIES: [&str; 8] = [
    "Bangladesh",
    "Chad",
    "Denmark",
    "Ethiopia",
    "Fiji",
    "Ghana",
    "Haiti",
    "Iceland",
];

/// Largest-city share in 2019 for each of [`COUNTRIES`]; Haiti is missing.
pub const LARGEST_CITY_2019: [Option<f64>; 8] = [
    Some(32.0),
    Some(40.0),
    Some(24.0),
    Some(18.0),
    Some(55.0),
    Some(13.0),
    None,
    Some(61.0),
];

fn header() -> String {
    let mut h = String::from("Country Name,Country Code,Series Name,Series Code");
    for y in 2001..=2019 {
        write!(h, ",{y} [YR{y}]").unwrap();
    }
    h
}

fn record(country: &str, series: &str, code: &str, value: impl Fn(i32) -> String) -> String {
    let mut r = format!("{country},{},{series},{code}", &country[..3].to_uppercase());
    for y in 2001..=2019 {
        write!(r, ",{}", value(y)).unwrap();
    }
    r
}

/// A small DataBank-style export: three series for every country plus the
/// five footnote records the real export ends with.
pub fn export_csv() -> String {
    let mut out = format!("\u{feff}{}\n", header());
    for (i, c) in COUNTRIES.iter().enumerate() {
        out += &record(c, "Urban population growth (annual %)", "SP.URB.GROW", |y| {
            format!("{:.2}", 1.0 + i as f64 * 0.5 + (y - 2015) as f64 * 0.1)
        });
        out.push('\n');
        out += &record(
            c,
            "\"Population in the largest city (% of urban population)\"",
            "EN.URB.LCTY.UR.ZS",
            |y| match (y, LARGEST_CITY_2019[i]) {
                (2019, None) => "..".to_string(),
                (2019, Some(v)) => v.to_string(),
                _ => format!("{}", 10.0 + i as f64),
            },
        );
        out.push('\n');
        out += &record(c, "Rural population", "SP.RUR.TOTL", |y| {
            format!("{}", 1_000_000 * (i as i64 + 1) + (y as i64 - 2000) * 1_000)
        });
        out.push('\n');
    }
    out += ",,,\n";
    out += ",,,\n";
    out += "Data from database: World Development Indicators,,,\n";
    out += "Last Updated: 12/21/2023,,,\n";
    out += ",,,\n";
    out
}

/// Write [`export_csv`] into `dir` and return its path.
pub fn write_export(dir: &Path) -> PathBuf {
    let path = dir.join("world_population_data.csv");
    fs::write(&path, export_csv()).unwrap();
    path
}
