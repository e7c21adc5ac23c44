//! Text rendering with fontdue: glyph blitting, measurement, and line wrapping.

use std::path::Path;

use fontdue::{Font, FontSettings};
use tonight_layout::{Measure, Size};
use tracing::info;

use crate::error::{CardError, Result};
use crate::renderer::Renderer;
use crate::theme::Color;

const ELLIPSIS: &str = "…";

pub struct TextRenderer {
    font: Font,
}

impl TextRenderer {
    pub fn from_bytes(bytes: &[u8], origin: &Path) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| CardError::Font {
            path: origin.to_path_buf(),
            reason: reason.to_string(),
        })?;
        Ok(Self { font })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| CardError::io(path, e))?;
        let renderer = Self::from_bytes(&bytes, path)?;
        info!(font = %path.display(), "font loaded");
        Ok(renderer)
    }

    /// Render a single line of text with its top edge at `y`.
    /// Returns the advance width of the rendered text.
    pub fn draw(&self, renderer: &mut Renderer, text: &str, x: f32, y: f32, size: f32, color: Color) -> f32 {
        let pw = renderer.width() as i32;
        let ph = renderer.height() as i32;
        let pm = renderer.pixmap.data_mut();
        let mut cursor_x = x;

        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, size);
            if bitmap.is_empty() {
                cursor_x += metrics.advance_width;
                continue;
            }

            let gx = cursor_x as i32 + metrics.xmin;
            let gy = y as i32 + (size as i32 - metrics.height as i32 - metrics.ymin);

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    if coverage == 0 {
                        continue;
                    }
                    let px = gx + col as i32;
                    let py = gy + row as i32;
                    if px < 0 || py < 0 || px >= pw || py >= ph {
                        continue;
                    }
                    let idx = (py as usize * pw as usize + px as usize) * 4;
                    let t = coverage as f32 / 255.0 * color.a as f32 / 255.0;
                    composite(&mut pm[idx..idx + 4], [color.r, color.g, color.b, 255], t);
                }
            }

            cursor_x += metrics.advance_width;
        }
        cursor_x - x
    }

    /// Advance width of `text` at `size`.
    pub fn width(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum()
    }
}

/// Source-over of an opaque `src` at coverage `t` onto a premultiplied pixel.
fn composite(dst: &mut [u8], src: [u8; 4], t: f32) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = (*d as f32 + (s as f32 - *d as f32) * t).round() as u8;
    }
}

impl Measure for TextRenderer {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        Size::new(self.width(text, font_size), font_size)
    }
}

/// Word-wrap `text` to `max_width`. With `max_lines`, the last kept line is
/// shortened and ends in an ellipsis when text was cut.
pub fn wrap<M: Measure + ?Sized>(
    measure: &M,
    text: &str,
    size: f32,
    max_width: f32,
    max_lines: Option<usize>,
) -> Vec<String> {
    let fits = |s: &str| measure.measure(s, size).width <= max_width;

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in words {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(current);
                }
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    match max_lines {
        Some(limit) if lines.len() > limit => {
            lines.truncate(limit);
            if let Some(last) = lines.last_mut() {
                *last = with_ellipsis(last, &fits);
            }
            lines
        }
        _ => lines,
    }
}

fn with_ellipsis(line: &str, fits: &impl Fn(&str) -> bool) -> String {
    let mut kept: String = line.trim_end().to_string();
    loop {
        let candidate = format!("{kept}{ELLIPSIS}");
        if kept.is_empty() || fits(&candidate) {
            return candidate;
        }
        kept.pop();
        kept.truncate(kept.trim_end().len());
    }
}
