//! Pie chart: share of urban population living in the largest city, top countries in 2019.

use anyhow::{Context, Result, anyhow};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;

use super::legend::{LegendItem, LegendMarker, draw_legend, legend_size};
use super::types::Theme;
use super::util::set3_color;
use crate::models::{LARGEST_CITY_SERIES, PIE_TOP_N, PIE_YEAR, PieSlice, WideTable};
use crate::reshape::top_n_for_year;

/// Angle of the first wedge edge, counter-clockwise from 3 o'clock.
const START_ANGLE_DEG: f64 = 140.0;
/// Percentage labels sit at this fraction of the radius.
const PCT_DISTANCE: f64 = 0.85;

fn title() -> String {
    format!("Population in the Largest City (% of Urban Population) ({PIE_YEAR})")
}

/// Point on the circle for a counter-clockwise angle (screen y grows downward).
fn polar(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.cos()).round() as i32,
        center.1 - (radius * angle.sin()).round() as i32,
    )
}

/// Start and end angle (radians) of every wedge, in slice order.
pub fn wedge_angles(slices: &[PieSlice]) -> Vec<(f64, f64)> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = START_ANGLE_DEG.to_radians();
    slices
        .iter()
        .map(|s| {
            let end = start + s.value / total * 2.0 * PI;
            let out = (start, end);
            start = end;
            out
        })
        .collect()
}

pub fn draw_largest_city_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    wide: &WideTable,
    theme: &Theme,
) -> Result<()> {
    let slices =
        top_n_for_year(wide, LARGEST_CITY_SERIES, PIE_YEAR, PIE_TOP_N).context("pie chart data")?;
    debug!("pie chart: {} wedges", slices.len());

    let body = area
        .titled(&title(), theme.bold(14.0))
        .map_err(|e| anyhow!("{:?}", e))?;

    let legend_items: Vec<LegendItem> = slices
        .iter()
        .enumerate()
        .map(|(i, s)| LegendItem::new(s.country.clone(), set3_color(i)))
        .collect();
    let (body_w, body_h) = body.dim_in_pixel();
    let (legend_w, legend_h) = legend_size(&body, "Country", &legend_items, theme)?;
    let pad = theme.px_u32(6.0);
    let panel_w = (legend_w + 2 * pad).min(body_w * 40 / 100);
    let (plot_area, legend_area) = body.split_horizontally(body_w - panel_w);

    let (plot_w, plot_h) = plot_area.dim_in_pixel();
    let center = (plot_w as i32 / 2, plot_h as i32 / 2);
    let radius = plot_w.min(plot_h) as f64 * 0.42;
    let step = (PI / 180.0).min(2.0 / radius.max(1.0));

    let angles = wedge_angles(&slices);
    for (i, (start, end)) in angles.iter().enumerate() {
        let mut points = vec![center];
        let mut a = *start;
        while a < *end {
            points.push(polar(center, radius, a));
            a += step;
        }
        points.push(polar(center, radius, *end));
        plot_area
            .draw(&Polygon::new(points, set3_color(i).filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    let pct_style = theme
        .bold(10.0)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (s, (start, end)) in slices.iter().zip(angles.iter()) {
        let at = polar(center, radius * PCT_DISTANCE, (start + end) / 2.0);
        plot_area
            .draw(&Text::new(format!("{:.1}%", s.percent), at, pct_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    // Legend vertically centered beside the pie.
    let top = (body_h as i32 - legend_h as i32).max(0) / 2;
    draw_legend(
        &legend_area,
        (pad as i32, top),
        "Country",
        &legend_items,
        LegendMarker::Square,
        theme,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(v: f64) -> PieSlice {
        PieSlice {
            country: "X".into(),
            value: v,
            percent: 0.0,
        }
    }

    #[test]
    fn wedges_cover_full_circle_from_start_angle() {
        let angles = wedge_angles(&[slice(3.0), slice(1.0)]);
        assert_eq!(angles.len(), 2);
        assert!((angles[0].0 - 140f64.to_radians()).abs() < 1e-12);
        assert!((angles[0].1 - angles[1].0).abs() < 1e-12);
        let sweep = angles[1].1 - angles[0].0;
        assert!((sweep - 2.0 * PI).abs() < 1e-9);
        assert!(((angles[0].1 - angles[0].0) - 1.5 * PI).abs() < 1e-9);
    }

    #[test]
    fn zero_total_draws_nothing() {
        assert!(wedge_angles(&[]).is_empty());
        assert!(wedge_angles(&[slice(0.0)]).is_empty());
    }
}
