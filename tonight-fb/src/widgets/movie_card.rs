//! Movie summary card: poster slot, title, metadata lines, rating, genre chips.
//!
//! Layout and painting are separate so the card height is known before the
//! canvas is allocated, and so layout can be checked without a font file.

use tonight_layout::{render_tag_flow, Measure, RenderableBlock, TagStyle};

use crate::movie::Movie;
use crate::renderer::Renderer;
use crate::text::{wrap, TextRenderer};
use crate::theme::{self, Palette};
use crate::widgets::chips;

const ACTOR_LINES: usize = 2;
const OVERVIEW_LINES: usize = 3;
const OVERVIEW_TOP_PADDING: f32 = 4.0;
const FILM_GLYPH: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
}

/// One positioned piece of the card, in card coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Poster { x: f32, y: f32, w: f32, h: f32 },
    Line { text: String, x: f32, y: f32, size: f32, tone: Tone },
    Star { cx: f32, cy: f32, radius: f32 },
    Tags { x: f32, y: f32, block: RenderableBlock },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
    pub tag_style: TagStyle,
}

pub struct MovieSummaryCard;

impl MovieSummaryCard {
    /// Stack the card's content top to bottom inside `width`.
    pub fn layout<M: Measure + ?Sized>(movie: &Movie, width: f32, measure: &M, style: &TagStyle) -> CardLayout {
        let pad = theme::CARD_PADDING;
        let content_w = (width - pad * 2.0).max(0.0);
        let mut stack = Stack {
            measure,
            left: pad,
            width: content_w,
            y: pad,
            elements: Vec::new(),
            text_items: 0,
        };

        stack.elements.push(Element::Poster {
            x: pad,
            y: stack.y,
            w: content_w,
            h: theme::POSTER_HEIGHT,
        });
        stack.y += theme::POSTER_HEIGHT + theme::SECTION_SPACING;

        stack.text(&movie.title, theme::FONT_SIZE_TITLE, Tone::Primary, None, 0.0);
        if let Some(meta) = movie.meta_line() {
            stack.text(&meta, theme::FONT_SIZE_SUBHEADLINE, Tone::Secondary, None, 0.0);
        }
        if let Some(rating) = movie.imdb_rating.as_deref() {
            stack.rating(rating);
        }
        if let Some(credit) = movie.credit_line() {
            stack.text(&credit, theme::FONT_SIZE_CAPTION, Tone::Secondary, None, 0.0);
        }
        if let Some(actors) = movie.actors.as_deref() {
            stack.text(actors, theme::FONT_SIZE_CAPTION, Tone::Secondary, Some(ACTOR_LINES), 0.0);
        }
        if let Some(overview) = movie.overview.as_deref() {
            stack.text(
                overview,
                theme::FONT_SIZE_CAPTION,
                Tone::Secondary,
                Some(OVERVIEW_LINES),
                OVERVIEW_TOP_PADDING,
            );
        }

        let block = render_tag_flow(&movie.genres, content_w, style, measure);
        if !block.is_empty() {
            stack.y += theme::SECTION_SPACING;
            let height = block.size.height;
            stack.elements.push(Element::Tags {
                x: pad,
                y: stack.y,
                block,
            });
            stack.y += height;
        }

        CardLayout {
            width,
            height: stack.y + pad,
            elements: stack.elements,
            tag_style: style.clone(),
        }
    }
}

struct Stack<'a, M: ?Sized> {
    measure: &'a M,
    left: f32,
    width: f32,
    y: f32,
    elements: Vec<Element>,
    text_items: usize,
}

impl<M: Measure + ?Sized> Stack<'_, M> {
    fn begin_item(&mut self, top_padding: f32) {
        if self.text_items > 0 {
            self.y += theme::TEXT_SPACING;
        }
        self.text_items += 1;
        self.y += top_padding;
    }

    fn centered_x(&self, line_width: f32) -> f32 {
        self.left + ((self.width - line_width) / 2.0).max(0.0)
    }

    fn text(&mut self, text: &str, size: f32, tone: Tone, max_lines: Option<usize>, top_padding: f32) {
        let lines = wrap(self.measure, text, size, self.width, max_lines);
        if lines.is_empty() {
            return;
        }
        self.begin_item(top_padding);
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                self.y += theme::LINE_GAP;
            }
            let x = self.centered_x(self.measure.measure(&line, size).width);
            self.elements.push(Element::Line {
                text: line,
                x,
                y: self.y,
                size,
                tone,
            });
            self.y += size;
        }
    }

    /// Star, rating, and "IMDb", centered as one row.
    fn rating(&mut self, rating: &str) {
        self.begin_item(0.0);
        let star = theme::FONT_SIZE_CAPTION;
        let rating_w = self.measure.measure(rating, theme::FONT_SIZE_SUBHEADLINE).width;
        let label_w = self.measure.measure("IMDb", theme::FONT_SIZE_CAPTION).width;
        let row_w = star + theme::RATING_SPACING + rating_w + theme::RATING_SPACING + label_w;
        let row_h = theme::FONT_SIZE_SUBHEADLINE;

        let mut x = self.centered_x(row_w);
        self.elements.push(Element::Star {
            cx: x + star / 2.0,
            cy: self.y + row_h / 2.0,
            radius: star / 2.0,
        });
        x += star + theme::RATING_SPACING;
        self.elements.push(Element::Line {
            text: rating.to_string(),
            x,
            y: self.y,
            size: theme::FONT_SIZE_SUBHEADLINE,
            tone: Tone::Primary,
        });
        x += rating_w + theme::RATING_SPACING;
        self.elements.push(Element::Line {
            text: "IMDb".to_string(),
            x,
            y: self.y + (row_h - theme::FONT_SIZE_CAPTION),
            size: theme::FONT_SIZE_CAPTION,
            tone: Tone::Secondary,
        });
        self.y += row_h;
    }
}

impl CardLayout {
    /// Paint the card with its top-left corner at (x, y).
    pub fn draw(&self, renderer: &mut Renderer, text: &TextRenderer, palette: &Palette, x: f32, y: f32) {
        renderer.fill_rounded_rect(x, y, self.width, self.height, theme::CARD_RADIUS, palette.card);

        for element in &self.elements {
            match element {
                Element::Poster { x: px, y: py, w, h } => {
                    draw_poster_placeholder(renderer, palette, x + px, y + py, *w, *h);
                }
                Element::Line {
                    text: line,
                    x: lx,
                    y: ly,
                    size,
                    tone,
                } => {
                    let color = match tone {
                        Tone::Primary => palette.text_primary,
                        Tone::Secondary => palette.text_secondary,
                    };
                    text.draw(renderer, line, x + lx, y + ly, *size, color);
                }
                Element::Star { cx, cy, radius } => {
                    renderer.fill_star(x + cx, y + cy, *radius, palette.star);
                }
                Element::Tags { x: tx, y: ty, block } => {
                    chips::draw_tag_block(renderer, text, block, &self.tag_style, palette, x + tx, y + ty);
                }
            }
        }
    }
}

/// Rounded slot with a film-strip glyph in the middle.
fn draw_poster_placeholder(renderer: &mut Renderer, palette: &Palette, x: f32, y: f32, w: f32, h: f32) {
    renderer.fill_rounded_rect(x, y, w, h, theme::POSTER_RADIUS, palette.placeholder);

    let g = FILM_GLYPH;
    let (gx, gy) = (x + (w - g) / 2.0, y + (h - g) / 2.0);
    renderer.stroke_rect(gx, gy, g, g, palette.text_secondary, 2.0);
    let hole = g / 10.0;
    for i in 0..4 {
        let hy = gy + g * (0.12 + i as f32 * 0.22);
        renderer.fill_rect(gx + hole * 0.5, hy, hole, hole, palette.text_secondary);
        renderer.fill_rect(gx + g - hole * 1.5, hy, hole, hole, palette.text_secondary);
    }
    renderer.draw_line(gx + g * 0.25, gy + g * 0.5, gx + g * 0.75, gy + g * 0.5, palette.text_secondary, 1.0);
}
