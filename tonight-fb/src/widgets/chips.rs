//! Genre chips: pill background, hairline stroke, soft offset shadow, label.

use tonight_layout::{RenderableBlock, TagStyle};

use crate::renderer::Renderer;
use crate::text::TextRenderer;
use crate::theme::Palette;

/// Paint a laid-out tag block with its origin at (x, y).
pub fn draw_tag_block(
    renderer: &mut Renderer,
    text: &TextRenderer,
    block: &RenderableBlock,
    style: &TagStyle,
    palette: &Palette,
    x: f32,
    y: f32,
) {
    for chip in &block.chips {
        let (cx, cy) = (x + chip.x, y + chip.y);
        let (sx, sy) = style.shadow_offset;

        renderer.fill_rounded_rect(cx + sx, cy + sy, chip.width, chip.height, chip.corner_radius, palette.chip_shadow);
        renderer.fill_rounded_rect(cx, cy, chip.width, chip.height, chip.corner_radius, palette.chip_fill);
        // Outline is a full capsule regardless of the fill's corner radius.
        renderer.stroke_rounded_rect(
            cx,
            cy,
            chip.width,
            chip.height,
            chip.height / 2.0,
            palette.chip_stroke,
            style.stroke_width,
        );
        text.draw(
            renderer,
            &chip.label,
            x + chip.label_x,
            y + chip.label_y,
            style.font_size,
            palette.text_primary,
        );
    }
}
