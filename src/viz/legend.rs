//! Boxed legends with a title row, drawn either over a plot or in a side panel.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::{max_width, measure};
use super::types::Theme;

/// Glyph drawn before each legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMarker {
    /// Filled square (bars, wedges).
    Square,
    /// Short line with a dot (line series).
    LineDot,
}

#[derive(Debug, Clone)]
pub struct LegendItem {
    pub label: String,
    pub color: RGBAColor,
}

impl LegendItem {
    pub fn new(label: impl Into<String>, color: RGBAColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Font size of legend entries (points); the title uses the same size in bold.
const LEGEND_PT: f64 = 10.0;

struct Metrics {
    pad: i32,
    marker_w: i32,
    gap: i32,
    line_h: i32,
}

fn metrics(theme: &Theme) -> Metrics {
    Metrics {
        pad: theme.px_i32(4.0),
        marker_w: theme.px_i32(14.0),
        gap: theme.px_i32(5.0),
        line_h: theme.px_i32(LEGEND_PT * 1.5),
    }
}

/// Pixel size of the legend box for these items.
pub fn legend_size<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    items: &[LegendItem],
    theme: &Theme,
) -> Result<(u32, u32)> {
    let m = metrics(theme);
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    let label_w = max_width(area, &labels, &theme.font(LEGEND_PT))? as i32;
    let title_w = measure(area, title, &theme.bold(LEGEND_PT))?.0 as i32;
    let w = (m.marker_w + m.gap + label_w).max(title_w) + 2 * m.pad;
    let rows = items.len() as i32 + i32::from(!title.is_empty());
    let h = rows * m.line_h + 2 * m.pad;
    Ok((w as u32, h as u32))
}

/// Draw a legend box with its top-left corner at `origin` (area-relative pixels).
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    origin: (i32, i32),
    title: &str,
    items: &[LegendItem],
    marker: LegendMarker,
    theme: &Theme,
) -> Result<()> {
    let m = metrics(theme);
    let (w, h) = legend_size(area, title, items, theme)?;
    let (x0, y0) = origin;
    let (x1, y1) = (x0 + w as i32, y0 + h as i32);

    area.draw(&Rectangle::new([(x0, y0), (x1, y1)], WHITE.mix(0.85).filled()))
        .map_err(|e| anyhow!("{:?}", e))?;
    area.draw(&Rectangle::new(
        [(x0, y0), (x1, y1)],
        RGBColor(204, 204, 204).stroke_width(1),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    let mut y = y0 + m.pad;
    if !title.is_empty() {
        let style = theme
            .bold(LEGEND_PT)
            .pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(title, ((x0 + x1) / 2, y + m.line_h / 2), style))
            .map_err(|e| anyhow!("{:?}", e))?;
        y += m.line_h;
    }

    let label_style = theme.font(LEGEND_PT).pos(Pos::new(HPos::Left, VPos::Center));
    let half = (m.line_h / 3).max(1);
    for item in items {
        let cy = y + m.line_h / 2;
        let mx = x0 + m.pad;
        match marker {
            LegendMarker::Square => {
                area.draw(&Rectangle::new(
                    [(mx, cy - half), (mx + m.marker_w, cy + half)],
                    item.color.filled(),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
            }
            LegendMarker::LineDot => {
                area.draw(&PathElement::new(
                    vec![(mx, cy), (mx + m.marker_w, cy)],
                    item.color.stroke_width(theme.px_u32(1.5)),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
                area.draw(&Circle::new(
                    (mx + m.marker_w / 2, cy),
                    theme.px_u32(3.0),
                    item.color.filled(),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
        area.draw(&Text::new(
            item.label.as_str(),
            (mx + m.marker_w + m.gap, cy),
            label_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        y += m.line_h;
    }
    Ok(())
}
