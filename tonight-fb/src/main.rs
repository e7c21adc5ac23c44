//! tonight-fb: render a movie summary card to a PNG.
//!
//! Usage: tonight-fb [--config <path>] <input.json> [output.png]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tonight_fb::{movie_from_input, render_card, CardConfig, TextRenderer};

const DEFAULT_OUTPUT: &str = "card.png";

struct Args {
    config: Option<PathBuf>,
    input: PathBuf,
    output: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut config = std::env::var_os("TONIGHT_CONFIG").map(PathBuf::from);
    let mut positional = Vec::new();

    let mut args = std::env::args_os().skip(1);
    while let Some(arg) = args.next() {
        let flag = arg.to_str();
        if flag == Some("--config") {
            let path = args.next().context("--config needs a path")?;
            config = Some(PathBuf::from(path));
        } else if matches!(flag, Some("-h" | "--help")) {
            println!("usage: tonight-fb [--config <path>] <input.json> [output.png]");
            std::process::exit(0);
        } else {
            positional.push(PathBuf::from(arg));
        }
    }

    let mut positional = positional.into_iter();
    let Some(input) = positional.next() else {
        bail!("missing input file (movie JSON or chat completion JSON)");
    };
    let output = positional.next().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    if positional.next().is_some() {
        bail!("too many arguments");
    }
    Ok(Args { config, input, output })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let config = CardConfig::load(args.config.as_deref()).context("loading config")?;

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let movie = movie_from_input(&raw).with_context(|| format!("decoding {}", args.input.display()))?;

    let text = TextRenderer::load(config.font_path()?).context("loading font")?;
    let canvas = render_card(&movie, &config, &text).context("rendering card")?;
    canvas.save_png(&args.output)?;

    info!(
        title = %movie.title,
        output = %args.output.display(),
        width = canvas.width(),
        height = canvas.height(),
        "card written"
    );
    Ok(())
}
