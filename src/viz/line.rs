//! Line chart: urban population growth across the years, one line per country.

use anyhow::{Context, Result, anyhow};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::legend::{LegendItem, LegendMarker, draw_legend, legend_size};
use super::types::Theme;
use super::util::{compute_left_label_area_px, format_tick, office_color, padded_range};
use crate::models::{CHART_YEARS, URBAN_GROWTH_SERIES, WideTable};
use crate::reshape::series_long_table;

const TITLE: &str = "Urban Population Growth (Annual %) Over the Years";
const Y_DESC: &str = "Urban Population Growth (Annual %)";

pub fn draw_urban_growth_lines<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    wide: &WideTable,
    theme: &Theme,
) -> Result<()> {
    let long = series_long_table(wide, URBAN_GROWTH_SERIES).context("line chart data")?;
    let countries = long.countries();

    // Per-country (year, value) points in year order; missing years are skipped.
    let series: Vec<(String, Vec<(f64, f64)>)> = countries
        .iter()
        .map(|c| {
            let mut pts: Vec<(f64, f64)> = long
                .rows
                .iter()
                .filter(|r| &r.country == c)
                .filter_map(|r| r.value.map(|v| (r.year as f64, v)))
                .collect();
            pts.sort_by(|a, b| a.0.total_cmp(&b.0));
            (c.clone(), pts)
        })
        .collect();
    debug!("line chart: {} series", series.len());

    let legend_items: Vec<LegendItem> = series
        .iter()
        .enumerate()
        .map(|(i, (c, _))| LegendItem::new(c.clone(), office_color(i)))
        .collect();

    // Legend lives in its own panel right of the plot.
    let (area_w, _) = area.dim_in_pixel();
    let (legend_w, _) = legend_size(area, "Country", &legend_items, theme)?;
    let pad = theme.px_u32(6.0);
    let panel_w = (legend_w + 2 * pad).min(area_w * 40 / 100);
    let (plot_area, legend_area) = area.split_horizontally(area_w - panel_w);

    let (y_min, y_max) = padded_range(&long.present_values(), false);
    let first = *CHART_YEARS.start() as f64;
    let last = *CHART_YEARS.end() as f64;

    let left = compute_left_label_area_px(
        y_min,
        y_max,
        8,
        theme.px_u32(12.0),
        theme.px_u32(14.0),
        format_tick,
    );
    let mut chart = ChartBuilder::on(&plot_area)
        .margin(theme.px_u32(6.0))
        .caption(TITLE, theme.bold(16.0))
        .set_label_area_size(LabelAreaPosition::Left, left)
        .set_label_area_size(LabelAreaPosition::Bottom, theme.px_u32(40.0))
        .build_cartesian_2d((first - 0.25)..(last + 0.25), y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_fmt = |v: &f64| format!("{:.0}", v);
    let y_fmt = |v: &f64| format_tick(*v);
    chart
        .configure_mesh()
        .x_labels(CHART_YEARS.count())
        .x_label_formatter(&x_fmt)
        .y_labels(8)
        .y_label_formatter(&y_fmt)
        .x_desc("Year")
        .y_desc(Y_DESC)
        .label_style(theme.font(12.0))
        .axis_desc_style(theme.font(14.0))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let stroke = theme.px_u32(2.0);
    let marker_r = theme.px_u32(4.0);
    for (item, (_, pts)) in legend_items.iter().zip(series.iter()) {
        let color = item.color;
        chart
            .draw_series(LineSeries::new(pts.iter().copied(), color.stroke_width(stroke)))
            .map_err(|e| anyhow!("{:?}", e))?;
        chart
            .draw_series(
                pts.iter()
                    .map(|(x, y)| Circle::new((*x, *y), marker_r, color.filled())),
            )
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    draw_legend(
        &legend_area,
        (pad as i32, theme.px_i32(30.0)),
        "Country",
        &legend_items,
        LegendMarker::LineDot,
        theme,
    )?;
    Ok(())
}
