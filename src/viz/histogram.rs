//! Histogram: distribution of rural population over all country-year observations.

use anyhow::{Context, Result, anyhow};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::types::Theme;
use super::util::{
    SKY_BLUE, choose_axis_scale, compute_left_label_area_px, format_count, format_tick,
};
use crate::models::{HISTOGRAM_BINS, RURAL_POPULATION_SERIES, WideTable};
use crate::reshape::{histogram_bins, series_long_table};

const TITLE: &str = "Distribution of Rural Population Across Countries (2015-2019)";

pub fn draw_rural_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    wide: &WideTable,
    theme: &Theme,
) -> Result<()> {
    let long = series_long_table(wide, RURAL_POPULATION_SERIES).context("histogram data")?;
    let values = long.present_values();
    let max_abs = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let (scale, scale_label) = choose_axis_scale(max_abs);
    let bins = histogram_bins(&values, HISTOGRAM_BINS);
    debug!(
        "histogram: {} observations, {} bins, scale {}",
        values.len(),
        bins.len(),
        scale
    );

    let (x_min, x_max) = match (bins.first(), bins.last()) {
        (Some(f), Some(l)) => (f.lower / scale, l.upper / scale),
        _ => (0.0, 1.0),
    };
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;
    let x_desc = if scale_label.is_empty() {
        "Rural Population".to_string()
    } else {
        format!("Rural Population (in {scale_label})")
    };

    let left = compute_left_label_area_px(
        0.0,
        max_count * 1.05,
        8,
        theme.px_u32(12.0),
        theme.px_u32(14.0),
        format_count,
    );
    let mut chart = ChartBuilder::on(area)
        .margin(theme.px_u32(6.0))
        .caption(TITLE, theme.bold(16.0))
        .set_label_area_size(LabelAreaPosition::Left, left)
        .set_label_area_size(LabelAreaPosition::Bottom, theme.px_u32(40.0))
        .build_cartesian_2d(x_min..x_max, 0.0..max_count * 1.05)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_fmt = |v: &f64| format_tick(*v);
    let y_fmt = |v: &f64| format_count(*v);
    chart
        .configure_mesh()
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .x_desc(x_desc)
        .y_desc("Frequency")
        .label_style(theme.font(12.0))
        .axis_desc_style(theme.font(14.0))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let edge = BLACK.mix(0.5).stroke_width(1);
    for b in bins.iter().filter(|b| b.count > 0) {
        let corners = [(b.lower / scale, 0.0), (b.upper / scale, b.count as f64)];
        chart
            .draw_series([
                Rectangle::new(corners, SKY_BLUE.filled()),
                Rectangle::new(corners, edge),
            ])
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}
