use std::path::{Path, PathBuf};

use tonight_fb::widgets::movie_card::Element;
use tonight_fb::{movie_from_input, render_card, CardConfig, CardError, MovieSummaryCard, TextRenderer};
use tonight_layout::{Size, TagStyle};

const ARRIVAL: &str = r#"{
    "title": "Arrival",
    "year": "2016",
    "rated": "PG-13",
    "runtime": "116 min",
    "imdbRating": "7.9",
    "director": "Denis Villeneuve",
    "actors": "Amy Adams, Jeremy Renner, Forest Whitaker",
    "overview": "A linguist works with the military to communicate with alien lifeforms after twelve mysterious spacecraft appear around the world.",
    "genres": ["Drama", "Mystery", "Sci-Fi", "Thriller"]
}"#;

fn mono(text: &str, size: f32) -> Size {
    Size::new(text.chars().count() as f32 * size * 0.55, size)
}

/// A font from the environment or a common system location, if any.
fn test_font() -> Option<PathBuf> {
    let candidates = [
        std::env::var("TONIGHT_TEST_FONT").ok().map(PathBuf::from),
        Some(PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")),
        Some(PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf")),
        Some(PathBuf::from("/Library/Fonts/Arial Unicode.ttf")),
    ];
    candidates.into_iter().flatten().find(|p| p.is_file())
}

#[test]
fn full_card_stacks_in_reading_order() {
    let movie = movie_from_input(ARRIVAL).unwrap();
    let layout = MovieSummaryCard::layout(&movie, 420.0, &mono, &TagStyle::default());

    let mut last_y = 0.0f32;
    for element in &layout.elements {
        let y = match element {
            Element::Poster { y, .. } | Element::Line { y, .. } | Element::Tags { y, .. } => *y,
            // Vertically centred on the rating text that follows it.
            Element::Star { .. } => continue,
        };
        assert!(y >= last_y, "element {element:?} above previous ({last_y})");
        last_y = y;
    }

    let texts: Vec<&str> = layout
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Line { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts[0], "Arrival");
    assert!(texts.contains(&"2016 • PG-13 • 116 min"));
    assert!(texts.contains(&"Directed by Denis Villeneuve"));

    let Some(Element::Tags { block, .. }) = layout.elements.last() else {
        panic!("expected tags last");
    };
    let labels: Vec<&str> = block.chips.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Drama", "Mystery", "Sci-Fi", "Thriller"]);
    assert!(layout.height > last_y);
}

#[test]
fn narrow_card_wraps_tags_into_more_rows() {
    let movie = movie_from_input(ARRIVAL).unwrap();
    let rows = |width: f32| {
        let layout = MovieSummaryCard::layout(&movie, width, &mono, &TagStyle::default());
        match layout.elements.last() {
            Some(Element::Tags { block, .. }) => block.rows,
            _ => 0,
        }
    };
    assert_eq!(rows(600.0), 1);
    assert!(rows(160.0) > 1);
    assert!(rows(160.0) >= rows(300.0));
}

#[test]
fn font_file_errors_are_typed() {
    let missing = TextRenderer::load(Path::new("/definitely/not/here.ttf"));
    assert!(matches!(missing, Err(CardError::Io { .. })));

    let garbage = TextRenderer::from_bytes(b"not a font", Path::new("inline"));
    assert!(matches!(garbage, Err(CardError::Font { .. })));
}

#[test]
fn renders_card_png_with_system_font() {
    let Some(font) = test_font() else {
        eprintln!("no test font available, skipping");
        return;
    };
    let text = TextRenderer::load(&font).unwrap();
    let movie = movie_from_input(ARRIVAL).unwrap();
    let config = CardConfig {
        font_path: Some(font),
        ..CardConfig::default()
    };

    let canvas = render_card(&movie, &config, &text).unwrap();
    assert_eq!(canvas.width(), config.width);

    let expected = MovieSummaryCard::layout(&movie, config.width as f32, &text, &config.tags);
    assert_eq!(canvas.height(), expected.height.ceil() as u32);

    let out = std::env::temp_dir().join("tonight-fb-card-test.png");
    canvas.save_png(&out).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
    let _ = std::fs::remove_file(out);
}
