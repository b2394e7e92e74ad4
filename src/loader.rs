//! Read a World Bank DataBank export and reshape it into the tables the charts use.
//!
//! The export is wide: identifier columns followed by one `YYYY [YRYYYY]` column
//! per year, with a few footnote records at the end. Loading drops the footer,
//! the identifier codes and 2001-2012, then trims every header to its first
//! space-delimited token so `2015 [YR2015]` becomes `2015`.
//!
//! ```no_run
//! let (wide, _transposed) = wbinfo::loader::load_world_bank_csv("world_population_data.csv")?;
//! println!("{} rows", wide.len());
//! # Ok::<(), wbinfo::DataError>(())
//! ```

use crate::error::{DataError, DataResult};
use crate::models::{
    DROPPED_COLUMNS, FOOTER_ROWS, RawTable, TransposedRow, TransposedTable, WideTable,
    is_numeric_label, parse_cell,
};
use csv::ReaderBuilder;
use log::{debug, info};
use std::path::Path;

/// Read the CSV verbatim. Short records are padded with missing cells.
pub fn read_raw<P: AsRef<Path>>(path: P) -> DataResult<RawTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if rec.len() > headers.len() {
            return Err(DataError::RaggedRecord {
                record: i + 1,
                found: rec.len(),
                expected: headers.len(),
            });
        }
        let mut row: Vec<_> = rec.iter().map(parse_cell).collect();
        row.resize(headers.len(), None);
        rows.push(row);
    }
    debug!(
        "read {} records x {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );
    Ok(RawTable { headers, rows })
}

/// First space-delimited token of a header (`"2015 [YR2015]"` -> `"2015"`).
pub fn trim_header(header: &str) -> String {
    header.split(' ').next().unwrap_or("").to_string()
}

/// Drop footer rows and unused columns, rename headers, and build the transposed view.
pub fn reshape(raw: RawTable) -> DataResult<(WideTable, TransposedTable)> {
    let RawTable { headers, mut rows } = raw;

    if rows.len() < FOOTER_ROWS {
        return Err(DataError::TooFewRows {
            found: rows.len(),
            required: FOOTER_ROWS,
        });
    }
    rows.truncate(rows.len() - FOOTER_ROWS);

    for name in DROPPED_COLUMNS {
        if !headers.iter().any(|h| h == name) {
            return Err(DataError::MissingColumn(name.to_string()));
        }
    }
    debug!("dropping columns: {:?}", DROPPED_COLUMNS);

    let keep: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !DROPPED_COLUMNS.contains(&h.as_str()))
        .map(|(i, _)| i)
        .collect();

    let columns: Vec<String> = keep.iter().map(|&i| trim_header(&headers[i])).collect();
    let rows: Vec<Vec<_>> = rows
        .into_iter()
        .map(|r| keep.iter().map(|&i| r.get(i).cloned().flatten()).collect())
        .collect();

    let wide = WideTable { columns, rows };
    let transposed = transpose(&wide)?;
    Ok((wide, transposed))
}

/// Year-indexed view: first column becomes the header, numeric labels become rows.
pub fn transpose(wide: &WideTable) -> DataResult<TransposedTable> {
    let countries: Vec<String> = wide
        .rows
        .iter()
        .map(|r| r.first().cloned().flatten().unwrap_or_default())
        .collect();

    let mut rows = Vec::new();
    for (j, label) in wide.columns.iter().enumerate().skip(1) {
        if !is_numeric_label(label) {
            continue;
        }
        let year: i32 = label
            .parse()
            .map_err(|_| DataError::InvalidYear(label.clone()))?;
        let values = wide
            .rows
            .iter()
            .map(|r| r.get(j).cloned().flatten())
            .collect();
        rows.push(TransposedRow {
            year,
            values,
            years: year,
        });
    }
    Ok(TransposedTable { countries, rows })
}

/// Read and reshape in one step.
pub fn load_world_bank_csv<P: AsRef<Path>>(path: P) -> DataResult<(WideTable, TransposedTable)> {
    let path = path.as_ref();
    let raw = read_raw(path)?;
    let (raw_rows, raw_cols) = (raw.rows.len(), raw.headers.len());
    let (wide, transposed) = reshape(raw)?;
    info!(
        "loaded {}: {}x{} raw -> {}x{} wide, {} year rows transposed",
        path.display(),
        raw_rows,
        raw_cols,
        wide.rows.len(),
        wide.columns.len(),
        transposed.rows.len()
    );
    Ok((wide, transposed))
}
