//! Text measurement and wrapping for labels and the caption block.

use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Heuristic: estimate pixel width of text when no backend is at hand.
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Width and height of `text` as the backend will render it.
pub fn measure<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    style: &TextStyle,
) -> Result<(u32, u32)> {
    area.estimate_text_size(text, style)
        .map_err(|e| anyhow!("{:?}", e))
}

/// Width of the widest string in `texts`.
pub fn max_width<DB: DrawingBackend, S: AsRef<str>>(
    area: &DrawingArea<DB, Shift>,
    texts: &[S],
    style: &TextStyle,
) -> Result<u32> {
    let mut w = 0;
    for t in texts {
        w = w.max(measure(area, t.as_ref(), style)?.0);
    }
    Ok(w)
}

/// Wrap one line on word boundaries so each piece is at most `max_px` wide
/// according to `width_of`. Leading indentation is repeated on continuation
/// lines; a single word wider than `max_px` is kept whole.
pub fn wrap_line<F>(line: &str, max_px: u32, mut width_of: F) -> Result<Vec<String>>
where
    F: FnMut(&str) -> Result<u32>,
{
    let indent: String = line.chars().take_while(|c| *c == ' ').collect();
    let mut out = Vec::new();
    let mut cur = String::new();
    for word in line.split_whitespace() {
        let candidate = if cur.is_empty() {
            format!("{indent}{word}")
        } else {
            format!("{cur} {word}")
        };
        if cur.is_empty() || width_of(&candidate)? <= max_px {
            cur = candidate;
        } else {
            out.push(std::mem::take(&mut cur));
            cur = format!("{indent}{word}");
        }
    }
    out.push(cur);
    Ok(out)
}

/// Wrap a multi-line block, keeping blank lines as paragraph breaks.
pub fn wrap_block<F>(text: &str, max_px: u32, mut width_of: F) -> Result<Vec<String>>
where
    F: FnMut(&str) -> Result<u32>,
{
    let mut out = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            out.push(String::new());
        } else {
            out.extend(wrap_line(line, max_px, &mut width_of)?);
        }
    }
    Ok(out)
}
