use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Series plotted by the bar and line charts.
pub const URBAN_GROWTH_SERIES: &str = "Urban population growth (annual %)";
/// Series plotted by the pie chart.
pub const LARGEST_CITY_SERIES: &str = "Population in the largest city (% of urban population)";
/// Series plotted by the histogram.
pub const RURAL_POPULATION_SERIES: &str = "Rural population";

/// Years melted into long rows by every chart.
pub const CHART_YEARS: RangeInclusive<i32> = 2015..=2019;
/// Single year shown by the pie chart.
pub const PIE_YEAR: i32 = 2019;
/// Number of wedges in the pie chart.
pub const PIE_TOP_N: usize = 6;
/// Fixed bin count of the histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Trailing DataBank footnote records ("Data from database: ...", "Last Updated: ...").
pub const FOOTER_ROWS: usize = 5;

/// Raw headers removed by the loader: two identifier columns and 2001-2012.
pub const DROPPED_COLUMNS: [&str; 14] = [
    "Country Code",
    "Series Code",
    "2001 [YR2001]",
    "2002 [YR2002]",
    "2003 [YR2003]",
    "2004 [YR2004]",
    "2005 [YR2005]",
    "2006 [YR2006]",
    "2007 [YR2007]",
    "2008 [YR2008]",
    "2009 [YR2009]",
    "2010 [YR2010]",
    "2011 [YR2011]",
    "2012 [YR2012]",
];

/// Column holding the country name after renaming (`Country Name` -> `Country`).
pub const COUNTRY_COLUMN: &str = "Country";
/// Column holding the series name after renaming (`Series Name` -> `Series`).
pub const SERIES_COLUMN: &str = "Series";

/// One table cell. `None` marks a missing observation.
pub type Cell = Option<String>;

/// Spellings treated as a missing value when reading the export: the DataBank
/// `..` placeholder plus the usual NA strings of spreadsheet and dataframe tools.
const MISSING_MARKERS: [&str; 19] = [
    "..", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Normalize a raw CSV field into a [`Cell`].
pub fn parse_cell(raw: &str) -> Cell {
    let s = raw.trim();
    if s.is_empty() || MISSING_MARKERS.contains(&s) {
        None
    } else {
        Some(s.to_string())
    }
}

/// Header + records exactly as read from the CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Row-per-(Country, Series) table with year columns as strings.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl WideTable {
    pub fn column_index(&self, name: &str) -> DataResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> DataResult<Vec<&Cell>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Rows whose `Series` cell equals `series` exactly. Filtering the
    /// result again with the same name returns an identical table.
    pub fn filter_series(&self, series: &str) -> DataResult<WideTable> {
        let idx = self.column_index(SERIES_COLUMN)?;
        let rows = self
            .rows
            .iter()
            .filter(|r| r.get(idx).and_then(|c| c.as_deref()) == Some(series))
            .cloned()
            .collect();
        Ok(WideTable {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Headers that look like years, paired with their parsed value.
    pub fn year_columns(&self) -> Vec<(usize, i32)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| is_numeric_label(c))
            .filter_map(|(i, c)| c.parse::<i32>().ok().map(|y| (i, y)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// True for non-empty labels made only of numeric characters.
pub fn is_numeric_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(char::is_numeric)
}

/// One transposed row: a year and that year's cell for every wide row.
#[derive(Debug, Clone, PartialEq)]
pub struct TransposedRow {
    pub year: i32,
    pub values: Vec<Cell>,
    /// Mirrors `year`, kept as its own column of the transposed view.
    pub years: i32,
}

/// Year-indexed view of [`WideTable`]: one column per wide row, labeled by country.
#[derive(Debug, Clone, PartialEq)]
pub struct TransposedTable {
    /// Column headers; a country appears once per Series it has.
    pub countries: Vec<String>,
    pub rows: Vec<TransposedRow>,
}

impl TransposedTable {
    pub fn index(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }
}

/// Tidy structure used by the charts (one row = one country-year observation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LongRow {
    pub country: String,
    pub year: i32,
    pub value: Option<f64>,
}

/// Melted observations for a single Series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LongTable {
    pub series: String,
    pub rows: Vec<LongRow>,
}

impl LongTable {
    /// Countries in first-seen order.
    pub fn countries(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.rows {
            if !out.contains(&r.country) {
                out.push(r.country.clone());
            }
        }
        out
    }

    /// Years in first-seen order.
    pub fn years(&self) -> Vec<i32> {
        let mut out: Vec<i32> = Vec::new();
        for r in &self.rows {
            if !out.contains(&r.year) {
                out.push(r.year);
            }
        }
        out
    }

    pub fn present_values(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.value).collect()
    }
}

/// One pie wedge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSlice {
    pub country: String,
    pub value: f64,
    pub percent: f64,
}

/// Equal-width histogram bin; `upper` is exclusive except for the last bin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Grouping key used in stats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub series: String,
    pub country: String,
}
