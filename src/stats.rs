use crate::models::{GroupKey, LongTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub key: GroupKey,
    pub count: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute grouped statistics by (series, country), sorted by key.
pub fn grouped_summary(tables: &[LongTable]) -> Vec<Summary> {
    let mut groups: BTreeMap<GroupKey, (Vec<f64>, usize)> = BTreeMap::new();
    for t in tables {
        for r in &t.rows {
            let key = GroupKey {
                series: t.series.clone(),
                country: r.country.clone(),
            };
            let entry = groups.entry(key).or_default();
            match r.value {
                Some(v) => entry.0.push(v),
                None => entry.1 += 1,
            }
        }
    }

    let mut out = Vec::new();
    for (key, (mut vals, missing)) in groups {
        vals.sort_by(|a, b| a.total_cmp(b));
        let count = vals.len();
        let min = vals.first().cloned();
        let max = vals.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        out.push(Summary { key, count, missing, min, max, mean, median });
    }
    out
}
