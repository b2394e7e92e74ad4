//! Public types and constants for the visualization module.

use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};

/// Page title drawn above the chart grid.
pub const DEFAULT_TITLE: &str = "Population Growth Analysis - Urban & Rural (2015 - 2019)";

/// Caption block drawn to the right of the chart grid.
pub const DEFAULT_CAPTION: &str = "Student ID : 22077669

This illustration shows World urban and rural population growth, generates four different plots to visualize various aspects of the data.

1. Bar plot illustrating the annual urban population growth for each country from 2015 to 2019.
   This plot provides a visual comparison of urban growth rates across countries.

2. Line plot showing the annual urban population growth over the years for various countries.
   The plot helps in understanding the trend of urban population growth from 2015 to 2019.

3. Pie chart depicting the percentage distribution of population in the largest city for the top countries in 2019.
   This chart visually represents the concentration of urban population in the largest cities of selected countries.

4. Histogram representing the distribution of rural population across countries for the years 2015 to 2019.
   This plot illustrates the frequency distribution of rural population across different countries.";

/// Physical layout of the composed figure. Sizes are in inches and
/// converted to pixels with `dpi`.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureOptions {
    pub dpi: u32,
    /// Width of the 2x2 chart grid.
    pub grid_width_in: f64,
    /// Height of the 2x2 chart grid.
    pub grid_height_in: f64,
    /// Width of the caption panel right of the grid.
    pub caption_width_in: f64,
    /// Height of the title band above the grid.
    pub title_height_in: f64,
    pub title: String,
    pub caption: String,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            dpi: 300,
            grid_width_in: 20.0,
            grid_height_in: 12.0,
            caption_width_in: 11.0,
            title_height_in: 1.2,
            title: DEFAULT_TITLE.to_string(),
            caption: DEFAULT_CAPTION.to_string(),
        }
    }
}

impl FigureOptions {
    pub fn with_dpi(dpi: u32) -> Self {
        Self {
            dpi,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::new(self.dpi)
    }

    /// Canvas size in pixels: (grid + caption) x (title + grid).
    pub fn pixel_size(&self) -> (u32, u32) {
        let t = self.theme();
        (
            t.inches(self.grid_width_in + self.caption_width_in),
            t.inches(self.title_height_in + self.grid_height_in),
        )
    }
}

/// Converts typographic sizes (points, inches) to pixels at a fixed DPI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    dpi: f64,
}

impl Theme {
    pub fn new(dpi: u32) -> Self {
        Self {
            dpi: dpi.max(1) as f64,
        }
    }

    pub fn px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    pub fn px_u32(&self, pt: f64) -> u32 {
        self.px(pt).round().max(1.0) as u32
    }

    pub fn px_i32(&self, pt: f64) -> i32 {
        self.px_u32(pt) as i32
    }

    pub fn inches(&self, inches: f64) -> u32 {
        (inches * self.dpi).round().max(1.0) as u32
    }

    pub fn font(&self, pt: f64) -> TextStyle<'static> {
        TextStyle::from(FontDesc::new(FontFamily::SansSerif, self.px(pt), FontStyle::Normal))
    }

    pub fn bold(&self, pt: f64) -> TextStyle<'static> {
        TextStyle::from(FontDesc::new(FontFamily::SansSerif, self.px(pt), FontStyle::Bold))
    }
}
