//! Grouped bar chart: urban population growth per country, one bar per year.

use anyhow::{Context, Result, anyhow};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::HashMap;

use super::legend::{LegendItem, LegendMarker, draw_legend};
use super::text::max_width;
use super::types::Theme;
use super::util::{compute_left_label_area_px, format_tick, magma_color, padded_range};
use crate::models::{CHART_YEARS, URBAN_GROWTH_SERIES, WideTable};
use crate::reshape::series_long_table;

const TITLE: &str = "Urban Population Growth (Annual %) in 2015 - 2019";
const Y_DESC: &str = "Urban Population Growth (Annual %)";

/// Share of each country slot covered by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

pub fn draw_urban_growth_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    wide: &WideTable,
    theme: &Theme,
) -> Result<()> {
    let long = series_long_table(wide, URBAN_GROWTH_SERIES).context("bar chart data")?;
    let countries = long.countries();
    let years: Vec<i32> = CHART_YEARS.collect();
    debug!(
        "bar chart: {} countries x {} years",
        countries.len(),
        years.len()
    );

    let values: HashMap<(&str, i32), f64> = long
        .rows
        .iter()
        .filter_map(|r| r.value.map(|v| ((r.country.as_str(), r.year), v)))
        .collect();
    let (y_min, y_max) = padded_range(&long.present_values(), true);
    let n = countries.len().max(1) as f64;

    let tick_style = theme.font(10.0);
    let (_, area_h) = area.dim_in_pixel();
    // Country names are drawn rotated, so the bottom band must fit the longest one.
    let name_w = max_width(area, &countries, &tick_style)?;
    let bottom = (name_w + theme.px_u32(10.0) + theme.px_u32(14.0))
        .min(area_h * 45 / 100);
    let left = compute_left_label_area_px(
        y_min,
        y_max,
        8,
        theme.px_u32(10.0),
        theme.px_u32(11.0),
        format_tick,
    );

    let mut chart = ChartBuilder::on(area)
        .margin(theme.px_u32(6.0))
        .caption(TITLE, theme.font(12.0))
        .set_label_area_size(LabelAreaPosition::Left, left)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom)
        .build_cartesian_2d(-0.5..(n - 0.5), y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let y_fmt = |v: &f64| format_tick(*v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_labels(8)
        .y_label_formatter(&y_fmt)
        .x_desc("Country")
        .y_desc(Y_DESC)
        .label_style(tick_style.clone())
        .axis_desc_style(theme.font(11.0))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let bar_w = GROUP_WIDTH / years.len() as f64;
    let mut legend_items = Vec::with_capacity(years.len());
    for (yi, year) in years.iter().enumerate() {
        let color = magma_color(yi);
        let bars = countries.iter().enumerate().filter_map(|(ci, country)| {
            let v = *values.get(&(country.as_str(), *year))?;
            let x0 = ci as f64 - GROUP_WIDTH / 2.0 + yi as f64 * bar_w;
            Some(Rectangle::new(
                [(x0, 0.0f64.min(v)), (x0 + bar_w, 0.0f64.max(v))],
                color.filled(),
            ))
        });
        chart.draw_series(bars).map_err(|e| anyhow!("{:?}", e))?;
        legend_items.push(LegendItem::new(year.to_string(), color));
    }

    // Rotated category labels under each group, in area-relative pixels.
    let (base_x, base_y) = area.get_base_pixel();
    let label_style = tick_style
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (ci, country) in countries.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(ci as f64, y_min));
        area.draw(&Text::new(
            country.as_str(),
            (px - base_x, py - base_y + theme.px_i32(3.0)),
            label_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    let (lx, ly) = chart.backend_coord(&(-0.5, y_max));
    let pad = theme.px_i32(6.0);
    draw_legend(
        area,
        (lx - base_x + pad, ly - base_y + pad),
        "Year",
        &legend_items,
        LegendMarker::Square,
        theme,
    )?;
    Ok(())
}
