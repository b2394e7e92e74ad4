use std::fs;
use tempfile::tempdir;
use wbinfo::models::{LongRow, LongTable};
use wbinfo::storage;

fn sample(n: usize) -> LongTable {
    LongTable {
        series: "Rural population".into(),
        rows: (0..n)
            .map(|i| LongRow {
                country: "Denmark".into(),
                year: 2015 + i as i32,
                value: Some(100.0 + i as f64),
            })
            .collect(),
    }
}

#[test]
fn save_csv_and_json() {
    let table = sample(3);
    let dir = tempdir().unwrap();

    let csv_path = dir.path().join("rural.csv");
    storage::save_long_csv(&table, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("series,country,year,value"));
    assert_eq!(csv_txt.lines().count(), 1 + table.rows.len());
    assert!(csv_txt.contains("Rural population,Denmark,2015,100"));

    let json_path = dir.path().join("rural.json");
    storage::save_long_json(&table, &json_path).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(v["series"], "Rural population");
    assert_eq!(v["rows"].as_array().unwrap().len(), table.rows.len());
}

// Spreadsheet apps evaluate cells starting with = + - @ as formulas;
// exported text cells get a leading single quote.
#[test]
fn csv_cells_are_prefixed_to_avoid_formulas() {
    let table = LongTable {
        series: "=HYPERLINK(\"http://x\")".into(),
        rows: vec![
            LongRow {
                country: "+SUM(A1:A2)".into(),
                year: 2019,
                value: Some(-1.5),
            },
            LongRow {
                country: "@cmd".into(),
                year: 2019,
                value: None,
            },
        ],
    };
    let dir = tempdir().unwrap();
    let path = dir.path().join("inj.csv");
    storage::save_long_csv(&table, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(&rows[0][0], "'=HYPERLINK(\"http://x\")");
    assert_eq!(&rows[0][1], "'+SUM(A1:A2)");
    // numeric values are written as numbers
    assert_eq!(&rows[0][3], "-1.5");
    assert_eq!(&rows[1][1], "'@cmd");
    assert_eq!(&rows[1][3], "");
}
