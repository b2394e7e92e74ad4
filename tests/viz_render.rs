mod common;

use std::fs;
use tempfile::tempdir;
use wbinfo::WideTable;
use wbinfo::loader::load_world_bank_csv;
use wbinfo::viz::{self, FigureOptions};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn wide() -> WideTable {
    let dir = tempdir().unwrap();
    let path = common::write_export(dir.path());
    load_world_bank_csv(&path).unwrap().0
}

#[test]
fn renders_png_infographic() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("22077669.png");
    viz::render_infographic(&wide(), &out, &FigureOptions::with_dpi(40)).unwrap();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.len() > PNG_MAGIC.len());
    assert_eq!(bytes[..8], PNG_MAGIC);
    // only the final image is left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn renders_svg_with_titles_and_caption() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("figure.svg");
    viz::render_infographic(&wide(), &out, &FigureOptions::with_dpi(40)).unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Population Growth Analysis"));
    assert!(svg.contains("Student ID : 22077669"));
    assert!(svg.contains("Frequency"));
    // largest pie wedge: 61 / 230
    assert!(svg.contains("26.5%"));
}

#[test]
fn empty_series_still_render() {
    let mut w = wide();
    w.rows.clear();
    let dir = tempdir().unwrap();
    let out = dir.path().join("empty.png");
    viz::render_infographic(&w, &out, &FigureOptions::with_dpi(30)).unwrap();
    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn failed_render_leaves_no_file() {
    // no Country column: every builder fails to melt its series
    let w = WideTable {
        columns: vec!["Series".into(), "2019".into()],
        rows: vec![vec![Some("Rural population".into()), Some("5".into())]],
    };
    let dir = tempdir().unwrap();
    let out = dir.path().join("broken.png");
    let err = viz::render_infographic(&w, &out, &FigureOptions::with_dpi(30)).unwrap_err();
    assert!(format!("{err:#}").contains("Country"));
    assert!(!out.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn two_country_export_renders_end_to_end() {
    let mut csv = String::from("Country Name,Country Code,Series Name,Series Code");
    for y in 2001..=2019 {
        csv += &format!(",{y} [YR{y}]");
    }
    csv.push('\n');
    for (country, code, base) in [("Chad", "TCD", 1.0), ("Fiji", "FJI", 2.0)] {
        for (series, scode, v) in [
            ("Urban population growth (annual %)", "SP.URB.GROW", base),
            ("Population in the largest city (% of urban population)", "EN.URB.LCTY.UR.ZS", base * 20.0),
            ("Rural population", "SP.RUR.TOTL", base * 1.0e6),
        ] {
            csv += &format!("{country},{code},{series},{scode}");
            for y in 2001..=2019 {
                csv += &format!(",{}", v + (y - 2015) as f64);
            }
            csv.push('\n');
        }
    }
    csv += &",,,\n".repeat(5);

    let dir = tempdir().unwrap();
    let input = dir.path().join("two.csv");
    fs::write(&input, csv).unwrap();
    let (w, transposed) = load_world_bank_csv(&input).unwrap();
    assert_eq!(w.len(), 6);
    assert_eq!(transposed.index(), (2013..=2019).collect::<Vec<_>>());

    let out = dir.path().join("two.svg");
    viz::render_infographic(&w, &out, &FigureOptions::with_dpi(40)).unwrap();
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Over the Years"));
    // Fiji 44 of 68 in 2019
    assert!(svg.contains("64.7%"));
}
