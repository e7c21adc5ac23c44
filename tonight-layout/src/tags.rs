//! Tag list: turns genre labels into laid-out chips.

use serde::Deserialize;
use tracing::trace;

use crate::flow::{AlignScope, Alignment, FlowItem, FlowLayout, LayoutConstraints, Size};

/// Text measurement supplied by the platform's text renderer.
pub trait Measure {
    /// Size of `text` rendered at `font_size`.
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

impl<F> Measure for F
where
    F: Fn(&str, f32) -> Size,
{
    fn measure(&self, text: &str, font_size: f32) -> Size {
        self(text, font_size)
    }
}

/// Chip style constants. Layout only reads the sizing fields; the rest are
/// passed through to whoever paints the chips.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TagStyle {
    pub font_size: f32,
    pub padding_h: f32,
    pub padding_v: f32,
    pub corner_radius: f32,
    pub stroke_width: f32,
    pub spacing: f32,
    pub row_spacing: f32,
    pub alignment: Alignment,
    pub align_scope: AlignScope,
    pub shadow_offset: (f32, f32),
}

impl Default for TagStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            padding_h: 12.0,
            padding_v: 6.0,
            corner_radius: 12.0,
            stroke_width: 1.0,
            spacing: 8.0,
            row_spacing: 8.0,
            alignment: Alignment::Leading,
            align_scope: AlignScope::AllRows,
            shadow_offset: (2.0, 2.0),
        }
    }
}

impl TagStyle {
    pub fn constraints(&self, available_width: f32) -> LayoutConstraints {
        LayoutConstraints::new(available_width)
            .spacing(self.spacing, self.row_spacing)
            .aligned(self.alignment, self.align_scope)
    }
}

/// A positioned chip ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct Chip {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Top-left of the label text, relative to the block.
    pub label_x: f32,
    pub label_y: f32,
    pub corner_radius: f32,
}

/// The laid-out tag flow, positioned relative to its own origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderableBlock {
    pub chips: Vec<Chip>,
    pub size: Size,
    pub rows: usize,
}

impl RenderableBlock {
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}

/// Measure each genre, flow the chips into `available_width`, and map the
/// result back to labelled chips. Blank labels are dropped.
pub fn render_tag_flow<S, M>(
    genres: &[S],
    available_width: f32,
    style: &TagStyle,
    measure: &M,
) -> RenderableBlock
where
    S: AsRef<str>,
    M: Measure + ?Sized,
{
    let labels: Vec<&str> = genres
        .iter()
        .map(|g| g.as_ref().trim())
        .filter(|g| !g.is_empty())
        .collect();

    let items: Vec<FlowItem> = labels
        .iter()
        .enumerate()
        .map(|(id, label)| {
            let text = measure.measure(label, style.font_size);
            FlowItem::new(
                id,
                text.width + style.padding_h * 2.0,
                text.height + style.padding_v * 2.0,
            )
        })
        .collect();

    let result = FlowLayout::new(style.constraints(available_width)).layout(&items);

    let chips: Vec<Chip> = result
        .positioned()
        .map(|p| Chip {
            label: labels[p.id].to_string(),
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            label_x: p.x + style.padding_h,
            label_y: p.y + style.padding_v,
            corner_radius: style.corner_radius,
        })
        .collect();

    trace!(tags = chips.len(), rows = result.rows.len(), "tag flow rendered");

    RenderableBlock {
        chips,
        size: result.size,
        rows: result.rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 6 units per character, line height equal to the font size.
    fn mono(text: &str, size: f32) -> Size {
        Size::new(text.chars().count() as f32 * 6.0, size)
    }

    #[test]
    fn chips_include_padding() {
        let block = render_tag_flow(&["Drama"], 300.0, &TagStyle::default(), &mono);
        let chip = &block.chips[0];
        assert_eq!(chip.width, 30.0 + 24.0);
        assert_eq!(chip.height, 12.0 + 12.0);
        assert_eq!((chip.label_x, chip.label_y), (12.0, 6.0));
        assert_eq!(block.rows, 1);
    }

    #[test]
    fn chips_wrap_into_rows() {
        // Each chip is 6*6 + 24 = 60 wide; two fit in 128 with spacing 8.
        let genres = ["Action", "Comedy", "Horror"];
        let block = render_tag_flow(&genres, 128.0, &TagStyle::default(), &mono);
        assert_eq!(block.rows, 2);
        assert_eq!(block.chips[1].x, 68.0);
        assert_eq!(block.chips[2].x, 0.0);
        assert_eq!(block.chips[2].y, 24.0 + 8.0);
        assert_eq!(block.size, Size::new(128.0, 56.0));
    }

    #[test]
    fn empty_and_blank_genres_render_nothing() {
        let none: [&str; 0] = [];
        assert!(render_tag_flow(&none, 200.0, &TagStyle::default(), &mono).is_empty());

        let blank = render_tag_flow(&["  ", ""], 200.0, &TagStyle::default(), &mono);
        assert!(blank.is_empty());
        assert_eq!(blank.size.height, 0.0);
    }

    #[test]
    fn labels_are_trimmed() {
        let genres = vec![String::from(" Sci-Fi "), String::from("Thriller")];
        let block = render_tag_flow(&genres, 400.0, &TagStyle::default(), &mono);
        let labels: Vec<&str> = block.chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Sci-Fi", "Thriller"]);
    }

    #[test]
    fn centered_style_offsets_chips() {
        let style = TagStyle {
            alignment: Alignment::Center,
            ..TagStyle::default()
        };
        let block = render_tag_flow(&["Crime"], 100.0, &style, &mono);
        // Chip is 54 wide, slack 46.
        assert_eq!(block.chips[0].x, 23.0);
    }

    #[test]
    fn style_decodes_with_defaults() {
        let style: TagStyle = serde_json::from_str(r#"{"font_size": 14, "alignment": "trailing"}"#).unwrap();
        assert_eq!(style.font_size, 14.0);
        assert_eq!(style.padding_h, 12.0);
        assert_eq!(style.alignment, Alignment::Trailing);
    }
}
