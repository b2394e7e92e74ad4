//! Visualization: compose the four charts into one infographic, as **PNG** or **SVG**.
//!
//! Layout of the figure:
//! - a title band across the top,
//! - a 2x2 chart grid (bar, line / pie, histogram),
//! - a boxed caption panel right of the grid.
//!
//! All sizes are given in inches and points and scaled by the DPI in [`FigureOptions`].

pub mod bar;
pub mod histogram;
pub mod legend;
pub mod line;
pub mod pie;
pub mod text;
pub mod types;
pub mod util;

pub use types::{DEFAULT_CAPTION, DEFAULT_TITLE, FigureOptions, Theme};

use crate::models::WideTable;
use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::{Path, PathBuf};
use std::sync::Once;

use text::{measure, wrap_block};

/// One-time registration of the bundled "sans-serif" faces for the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let regular = plotters::style::register_font(
            "sans-serif",
            FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
        let bold = plotters::style::register_font(
            "sans-serif",
            FontStyle::Bold,
            include_bytes!("../../assets/DejaVuSans-Bold.ttf"),
        );
        if regular.is_err() || bold.is_err() {
            warn!("bundled DejaVu Sans could not be registered; text rendering will fail");
        }
    });
}

/// Render the infographic for `wide` to `out_path`.
///
/// The format follows the extension (`.svg` -> SVG, anything else -> PNG).
/// Drawing goes to a temporary file in the destination directory, which is
/// moved into place only after every chart succeeded; on error no file is left.
pub fn render_infographic<P: AsRef<Path>>(
    wide: &WideTable,
    out_path: P,
    opts: &FigureOptions,
) -> Result<()> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let dir = match out_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    let (width, height) = opts.pixel_size();
    debug!(
        "rendering {}x{} px at {} dpi ({})",
        width,
        height,
        opts.dpi,
        if is_svg { "svg" } else { "png" }
    );

    let tmp = tempfile::Builder::new()
        .prefix(".wbinfo-")
        .suffix(if is_svg { ".svg" } else { ".png" })
        .tempfile_in(&dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;

    // The root must drop before `tmp`: backends flush on drop.
    {
        if is_svg {
            let root = SVGBackend::new(tmp.path(), (width, height)).into_drawing_area();
            compose(&root, wide, opts)?;
            root.present().map_err(|e| anyhow!("{:?}", e))?;
        } else {
            let root = BitMapBackend::new(tmp.path(), (width, height)).into_drawing_area();
            compose(&root, wide, opts)?;
            root.present().map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    tmp.persist(out_path)
        .with_context(|| format!("writing {}", out_path.display()))?;
    info!("wrote infographic to {}", out_path.display());
    Ok(())
}

/// Draw the whole figure onto `root`: title, the four charts, caption.
pub fn compose<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    wide: &WideTable,
    opts: &FigureOptions,
) -> Result<()> {
    let theme = opts.theme();
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let (title_area, body) = root.split_vertically(theme.inches(opts.title_height_in));
    let (tw, th) = title_area.dim_in_pixel();
    title_area
        .draw(&Text::new(
            opts.title.as_str(),
            (tw as i32 / 2, th as i32 / 2),
            theme.bold(40.0).pos(Pos::new(HPos::Center, VPos::Center)),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;

    let (grid, caption_area) = body.split_horizontally(theme.inches(opts.grid_width_in));
    let cells = grid.split_evenly((2, 2));
    let gap = theme.inches(0.2);
    let cell = |i: usize| cells[i].margin(gap, gap, gap, gap);

    bar::draw_urban_growth_bars(&cell(0), wide, &theme).context("bar chart")?;
    line::draw_urban_growth_lines(&cell(1), wide, &theme).context("line chart")?;
    pie::draw_largest_city_pie(&cell(2), wide, &theme).context("pie chart")?;
    histogram::draw_rural_histogram(&cell(3), wide, &theme).context("histogram")?;

    draw_caption(&caption_area, &opts.caption, &theme).context("caption")?;
    Ok(())
}

/// Boxed, word-wrapped caption text, vertically centered in `area`.
fn draw_caption<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    theme: &Theme,
) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    let outer = theme.px_i32(12.0);
    let pad = theme.px_i32(9.0);
    let style = theme.bold(18.0);
    let line_h = theme.px_i32(18.0 * 1.25);

    let max_text_w = (w as i32 - 2 * (outer + pad)).max(1) as u32;
    let lines = wrap_block(caption, max_text_w, |s| Ok(measure(area, s, &style)?.0))?;

    let box_h = lines.len() as i32 * line_h + 2 * pad;
    let y0 = ((h as i32 - box_h) / 2).max(outer);
    let (x0, x1) = (outer, w as i32 - outer);
    area.draw(&Rectangle::new(
        [(x0, y0), (x1, y0 + box_h)],
        WHITE.mix(0.8).filled(),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    area.draw(&Rectangle::new(
        [(x0, y0), (x1, y0 + box_h)],
        BLACK.stroke_width(theme.px_u32(1.0)),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    let text_style = style.pos(Pos::new(HPos::Left, VPos::Top));
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        area.draw(&Text::new(
            line.as_str(),
            (x0 + pad, y0 + pad + i as i32 * line_h),
            text_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}
