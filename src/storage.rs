use crate::models::LongTable;
use anyhow::Result;
use csv::WriterBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix cells that a spreadsheet would evaluate as a formula.
fn sanitize(cell: &str) -> Cow<'_, str> {
    if cell.starts_with(['=', '+', '-', '@']) {
        Cow::Owned(format!("'{cell}"))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Save a melted table as CSV with header `series,country,year,value`.
pub fn save_long_csv<P: AsRef<Path>>(table: &LongTable, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["series", "country", "year", "value"])?;
    let series = sanitize(&table.series);
    for r in &table.rows {
        let year = r.year.to_string();
        let value = r.value.map(|v| v.to_string()).unwrap_or_default();
        let country = sanitize(&r.country);
        wtr.write_record([series.as_ref(), country.as_ref(), year.as_str(), value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a melted table as a pretty JSON object (`series` + `rows`).
pub fn save_long_json<P: AsRef<Path>>(table: &LongTable, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(table)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
