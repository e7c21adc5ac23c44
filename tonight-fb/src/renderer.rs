//! 2D rendering wrapper around tiny-skia.

use std::path::Path;

use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::{CardError, Result};
use crate::theme::Color;

pub struct Renderer {
    pub pixmap: Pixmap,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(CardError::Canvas { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA of one pixel, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap
            .pixel(x, y)
            .map(|p| Color::rgba(p.red(), p.green(), p.blue(), p.alpha()))
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap.save_png(path).map_err(|e| CardError::Png {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let paint = paint(color, false);
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, w, h) {
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    pub fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
        let paint = paint(color, true);
        if let Some(path) = rounded_rect_path(x, y, w, h, radius) {
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    pub fn stroke_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color, width: f32) {
        let paint = paint(color, true);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        if let Some(path) = rounded_rect_path(x, y, w, h, radius) {
            self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        let paint = paint(color, true);
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Stroked rectangle outline with round caps, used for the film glyph.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, width: f32) {
        let paint = paint(color, true);
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, w, h) {
            let path = PathBuilder::from_rect(rect);
            self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Five-pointed star centred on (cx, cy).
    pub fn fill_star(&mut self, cx: f32, cy: f32, outer: f32, color: Color) {
        let inner = outer * 0.45;
        let mut pb = PathBuilder::new();
        for i in 0..10 {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
            let (px, py) = (cx + r * angle.cos(), cy + r * angle.sin());
            if i == 0 {
                pb.move_to(px, py);
            } else {
                pb.line_to(px, py);
            }
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(&path, &paint(color, true), FillRule::Winding, Transform::identity(), None);
        }
    }
}

fn paint(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = anti_alias;
    paint
}

/// Handle length for a cubic approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Rounded rectangle with circular corners; `r` is clamped so a short side
/// becomes a full semicircle, which is how chips get their capsule ends.
fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<tiny_skia::Path> {
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    let k = r * KAPPA;
    let (right, bottom) = (x + w, y + h);
    // Each corner: the point where its arc starts, its vertex, and where it ends.
    let corners = [
        ((right - r, y), (right, y), (right, y + r)),
        ((right, bottom - r), (right, bottom), (right - r, bottom)),
        ((x + r, bottom), (x, bottom), (x, bottom - r)),
        ((x, y + r), (x, y), (x + r, y)),
    ];

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    for ((sx, sy), (vx, vy), (ex, ey)) in corners {
        pb.line_to(sx, sy);
        let toward = |from: f32, to: f32| if to > from { from + k } else if to < from { from - k } else { from };
        pb.cubic_to(toward(sx, vx), toward(sy, vy), toward(ex, vx), toward(ey, vy), ex, ey);
    }
    pb.close();
    pb.finish()
}
