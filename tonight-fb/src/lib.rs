//! Which Movie Tonight: software-rendered movie summary cards.
//!
//! The card is laid out first (so its height is known), then painted into a
//! tiny-skia pixmap sized to fit it exactly.

pub mod config;
pub mod error;
pub mod movie;
pub mod renderer;
pub mod suggestion;
pub mod text;
pub mod theme;
pub mod widgets;

use tracing::debug;

pub use config::CardConfig;
pub use error::{CardError, Result};
pub use movie::Movie;
pub use renderer::Renderer;
pub use suggestion::{parse_suggested_movie, ChatCompletion};
pub use text::TextRenderer;
pub use widgets::movie_card::{CardLayout, MovieSummaryCard};

/// Lay out and paint `movie` onto a fresh canvas.
pub fn render_card(movie: &Movie, config: &CardConfig, text: &TextRenderer) -> Result<Renderer> {
    let layout = MovieSummaryCard::layout(movie, config.width as f32, text, &config.tags);
    let height = layout.height.ceil() as u32;
    debug!(title = %movie.title, width = config.width, height, "card laid out");

    let palette = theme::Palette::for_scheme(config.scheme);
    let mut renderer = Renderer::new(config.width, height)?;
    if config.background {
        renderer.clear(palette.background);
    }
    layout.draw(&mut renderer, text, &palette, 0.0, 0.0);
    Ok(renderer)
}

/// Decode input that is either a movie object or a chat-completion envelope
/// whose first message carries one.
pub fn movie_from_input(json: &str) -> Result<Movie> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| CardError::json("input", e))?;
    if value.get("choices").is_some() {
        let completion = ChatCompletion::from_json(json)?;
        parse_suggested_movie(completion.content()?)
    } else {
        serde_json::from_value(value).map_err(|e| CardError::json("movie", e))
    }
}
