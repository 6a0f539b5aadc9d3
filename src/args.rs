use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;
use crate::deck::{Deck, DeckError};

#[derive(Debug, Clone, Parser)]
#[command(name = "onboarding", version, about = "Onboarding slides with slide-up transitions")]
pub struct Args {
    /// Deck file (TOML) or a directory of images
    pub source: PathBuf,

    /// Window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Advance to the next item every N seconds
    #[arg(long, value_parser = parse_seconds)]
    pub autoplay: Option<f32>,

    /// Switch items without animating
    #[arg(long)]
    pub instant: bool,

    /// Log filter directive, e.g. `debug` or `onboarding=trace`
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn load_deck(&self) -> Result<Deck, DeckError> {
        if self.source.is_dir() {
            Deck::from_image_dir(&self.source)
        } else {
            Deck::load(&self.source)
        }
    }
}

fn parse_seconds(s: &str) -> Result<f32, String> {
    let seconds: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if seconds > 0.0 && seconds.is_finite() {
        Ok(seconds)
    } else {
        Err(format!("expected a positive number of seconds, got {s}"))
    }
}
