use wbinfo::models::{GroupKey, LongRow, LongTable};
use wbinfo::stats::grouped_summary;

fn table(series: &str, rows: &[(&str, i32, Option<f64>)]) -> LongTable {
    LongTable {
        series: series.into(),
        rows: rows
            .iter()
            .map(|(c, y, v)| LongRow {
                country: (*c).into(),
                year: *y,
                value: *v,
            })
            .collect(),
    }
}

#[test]
fn grouped_stats_handle_missing_and_median_even_odd() {
    // (S1, Chad) [1,2,3,4] -> median 2.5; (S1, Fiji) [10, None, 30] -> missing 1, median 20
    let t = table(
        "S1",
        &[
            ("Chad", 2015, Some(1.0)),
            ("Fiji", 2015, Some(10.0)),
            ("Chad", 2016, Some(2.0)),
            ("Fiji", 2016, None),
            ("Chad", 2017, Some(3.0)),
            ("Fiji", 2017, Some(30.0)),
            ("Chad", 2018, Some(4.0)),
        ],
    );
    let got = grouped_summary(&[t]);
    assert_eq!(got.len(), 2);

    let a = &got[0];
    assert_eq!(
        a.key,
        GroupKey {
            series: "S1".into(),
            country: "Chad".into()
        }
    );
    assert_eq!(a.count, 4);
    assert_eq!(a.missing, 0);
    assert_eq!(a.min, Some(1.0));
    assert_eq!(a.max, Some(4.0));
    assert_eq!(a.mean, Some(2.5));
    assert_eq!(a.median, Some(2.5));

    let b = &got[1];
    assert_eq!(b.key.country, "Fiji");
    assert_eq!(b.count, 2);
    assert_eq!(b.missing, 1);
    assert_eq!(b.median, Some(20.0));
}

#[test]
fn groups_are_kept_apart_per_series() {
    let a = table("Rural population", &[("Chad", 2015, Some(5.0))]);
    let b = table("Urban population growth (annual %)", &[("Chad", 2015, None)]);
    let got = grouped_summary(&[a, b]);
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].key.series, "Rural population");
    assert_eq!(got[0].count, 1);
    assert_eq!(got[1].count, 0);
    assert_eq!(got[1].missing, 1);
    assert_eq!(got[1].mean, None);
    assert_eq!(got[1].median, None);
}
