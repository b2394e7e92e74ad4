//! Wide -> long transformations shared by the chart builders.
//!
//! Every builder rebuilds its own [`LongTable`]; nothing here caches.

use crate::error::{DataError, DataResult};
use crate::models::{
    CHART_YEARS, COUNTRY_COLUMN, HistogramBin, LongRow, LongTable, PieSlice, WideTable,
};

/// Parse one present cell as `f64`, naming the column and country on failure.
/// Spellings that parse to NaN (`NAN`, `+nan`) count as missing.
fn coerce(value: &str, column: &str, country: &str) -> DataResult<Option<f64>> {
    let v = value
        .parse::<f64>()
        .map_err(|_| DataError::InvalidNumber {
            column: column.to_string(),
            country: country.to_string(),
            value: value.to_string(),
        })?;
    Ok((!v.is_nan()).then_some(v))
}

/// Melt the given year columns of `table` into one row per (country, year).
///
/// Rows come out year-major: every country for the first year, then the next year.
pub fn melt_years(table: &WideTable, series: &str, years: &[i32]) -> DataResult<LongTable> {
    let country_idx = table.column_index(COUNTRY_COLUMN)?;
    let year_idx: Vec<(i32, usize)> = years
        .iter()
        .map(|y| table.column_index(&y.to_string()).map(|i| (*y, i)))
        .collect::<DataResult<_>>()?;

    let mut rows = Vec::with_capacity(year_idx.len() * table.rows.len());
    for (year, idx) in &year_idx {
        for r in &table.rows {
            let country = r[country_idx].clone().unwrap_or_default();
            let value = match &r[*idx] {
                Some(s) => coerce(s, &year.to_string(), &country)?,
                None => None,
            };
            rows.push(LongRow {
                country,
                year: *year,
                value,
            });
        }
    }
    Ok(LongTable {
        series: series.to_string(),
        rows,
    })
}

/// Filter to one Series and melt the 2015-2019 window.
pub fn series_long_table(wide: &WideTable, series: &str) -> DataResult<LongTable> {
    let years: Vec<i32> = CHART_YEARS.collect();
    let filtered = wide.filter_series(series)?;
    melt_years(&filtered, series, &years)
}

/// The `n` largest present values of `series` in `year`, descending, with
/// their share of the selection in percent.
///
/// A selected value that is negative or infinite cannot be a wedge and is an error.
pub fn top_n_for_year(
    wide: &WideTable,
    series: &str,
    year: i32,
    n: usize,
) -> DataResult<Vec<PieSlice>> {
    let filtered = wide.filter_series(series)?;
    let country_idx = filtered.column_index(COUNTRY_COLUMN)?;
    let column = year.to_string();
    let year_idx = filtered.column_index(&column)?;

    let mut present: Vec<(String, f64)> = Vec::new();
    for r in &filtered.rows {
        if let Some(s) = &r[year_idx] {
            let country = r[country_idx].clone().unwrap_or_default();
            if let Some(v) = coerce(s, &column, &country)? {
                present.push((country, v));
            }
        }
    }
    // Stable: equal values keep table order.
    present.sort_by(|a, b| b.1.total_cmp(&a.1));
    present.truncate(n);
    if let Some((country, value)) = present.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
        return Err(DataError::InvalidWedge {
            country: country.clone(),
            value: *value,
        });
    }

    let total: f64 = present.iter().map(|(_, v)| *v).sum();
    Ok(present
        .into_iter()
        .map(|(country, value)| PieSlice {
            percent: if total != 0.0 { value / total * 100.0 } else { 0.0 },
            country,
            value,
        })
        .collect())
}

/// Equal-width bins spanning the data range. The last bin includes its upper edge.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }
    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();
    for v in finite {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}
