//! Deck files: the onboarding content a parent screen feeds to the
//! transition controller.
//!
//! ```toml
//! [window]
//! title = "Welcome"
//! background = "#3d6ab0"
//!
//! [transition]
//! show_duration = 0.8
//!
//! [[items]]
//! image = "hotels.png"
//! title = "Hotels"
//! description = "All hotels and hostels are sorted by hospitality rating"
//! title_font = { family = "fonts/Nunito-Bold.ttf", size = 36 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, trace, warn};

use crate::constants::*;
use crate::content::{OnboardingDelegate, TransitionTiming};
use crate::item::{ItemInfo, ItemView};
use crate::style::{Color, FontSpec, ImageAsset};
use crate::texture_loader::{LoaderError, load_sorted_image_paths, probe_image};

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("deck validation failed: {message}")]
    Validation { message: String },

    #[error(transparent)]
    Images(#[from] LoaderError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub background: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Onboarding".to_string(),
            background: Color::rgba(0x3d, 0x6a, 0xb0, 0xff),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    #[serde(default)]
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title_font: Option<FontSpec>,
    #[serde(default)]
    pub title_color: Option<Color>,
    #[serde(default)]
    pub description_font: Option<FontSpec>,
    #[serde(default)]
    pub description_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub transition: TransitionTiming,
    pub items: Vec<ItemConfig>,
}

impl DeckConfig {
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.items.is_empty() {
            return Err(DeckError::Validation {
                message: "at least one item must be configured".to_string(),
            });
        }

        let timing = &self.transition;
        let durations = [timing.show_duration, timing.hide_duration];
        if durations.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(DeckError::Validation {
                message: "transition durations must be finite and not negative".to_string(),
            });
        }
        if !timing.offset.is_finite() {
            return Err(DeckError::Validation {
                message: "transition offset must be finite".to_string(),
            });
        }

        for (index, item) in self.items.iter().enumerate() {
            let fonts = [&item.title_font, &item.description_font];
            if fonts.into_iter().flatten().any(|font| !font.size.is_finite() || font.size <= 0.0) {
                return Err(DeckError::Validation {
                    message: format!("item {index}: font size must be positive"),
                });
            }
        }

        Ok(())
    }
}

/// A loaded deck, ready to serve content by index.
#[derive(Debug, Clone)]
pub struct Deck {
    pub window: WindowConfig,
    pub transition: TransitionTiming,
    items: Vec<ItemInfo>,
}

impl Deck {
    /// Reads, validates and resolves a deck file. Relative paths are taken
    /// from the deck's directory.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: DeckConfig = toml::from_str(&content).map_err(|source| DeckError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let deck = Self::from_config(config, base_dir)?;
        info!(path = %path.display(), items = deck.len(), "deck loaded");
        Ok(deck)
    }

    pub fn from_config(config: DeckConfig, base_dir: &Path) -> Result<Self, DeckError> {
        config.validate()?;

        let items = config
            .items
            .into_iter()
            .map(|item| resolve_item(item, base_dir))
            .collect();

        Ok(Self {
            window: config.window,
            transition: config.transition,
            items,
        })
    }

    /// One untitled-description item per image, sorted by file name and
    /// titled with the file stem.
    pub fn from_image_dir(dir: &Path) -> Result<Self, DeckError> {
        let mut items = Vec::new();
        for path in load_sorted_image_paths(dir)? {
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            items.push(ItemInfo {
                image: probe_or_skip(&path),
                title,
                title_font: FontSpec::system(TITLE_FONT_SIZE),
                title_color: Color::WHITE,
                description: String::new(),
                description_font: FontSpec::system(DESCRIPTION_FONT_SIZE),
                description_color: Color::WHITE,
            });
        }
        info!(dir = %dir.display(), items = items.len(), "deck built from images");

        Ok(Self {
            window: WindowConfig::default(),
            transition: TransitionTiming::default(),
            items,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemInfo] {
        &self.items
    }
}

impl OnboardingDelegate for Deck {
    fn item_at(&self, index: usize) -> Option<ItemInfo> {
        self.items.get(index).cloned()
    }

    fn configure_item(&self, item: &mut ItemView, index: usize) {
        trace!(index, item = %item.id(), "deck item configured");
    }
}

fn probe_or_skip(path: &Path) -> Option<ImageAsset> {
    match probe_image(path) {
        Ok(asset) => Some(asset),
        Err(e) => {
            warn!("skipping image: {}", e);
            None
        }
    }
}

fn resolve_item(item: ItemConfig, base_dir: &Path) -> ItemInfo {
    let image = item.image.and_then(|image| probe_or_skip(&base_dir.join(image)));

    let resolve_font = |font: Option<FontSpec>, default_size: f32| match font {
        Some(FontSpec { family, size }) => FontSpec {
            family: family.map(|family| base_dir.join(family)),
            size,
        },
        None => FontSpec::system(default_size),
    };

    ItemInfo {
        image,
        title: item.title,
        title_font: resolve_font(item.title_font, TITLE_FONT_SIZE),
        title_color: item.title_color.unwrap_or(Color::WHITE),
        description: item.description,
        description_font: resolve_font(item.description_font, DESCRIPTION_FONT_SIZE),
        description_color: item.description_color.unwrap_or(Color::WHITE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::Easing;

    const DECK: &str = r##"
        [window]
        title = "Welcome"
        background = "#112233"

        [transition]
        hide_duration = 0.3

        [[items]]
        title = "Hotels"
        description = "All hotels"
        title_color = "#ff0000"

        [[items]]
        title = "Banks"
        description_font = { family = "fonts/OpenSans.ttf", size = 16 }
    "##;

    #[test]
    fn parses_sections_and_fills_defaults() {
        let config: DeckConfig = toml::from_str(DECK).expect("parse");
        assert_eq!(config.window.title, "Welcome");
        assert_eq!(config.window.background, Color::rgba(0x11, 0x22, 0x33, 0xff));
        assert_eq!(config.transition.hide_duration, 0.3);
        assert_eq!(config.transition.show_duration, SHOW_DURATION);
        assert_eq!(config.transition.easing, Easing::EaseOut);
        assert_eq!(config.items.len(), 2);
    }

    #[test]
    fn resolves_fonts_and_colors() {
        let config: DeckConfig = toml::from_str(DECK).expect("parse");
        let deck = Deck::from_config(config, Path::new("/decks")).expect("deck");

        let hotels = deck.item_at(0).expect("item 0");
        assert_eq!(hotels.title_color, Color::rgba(255, 0, 0, 255));
        assert_eq!(hotels.title_font, FontSpec::system(TITLE_FONT_SIZE));
        assert_eq!(hotels.description_color, Color::WHITE);

        let banks = deck.item_at(1).expect("item 1");
        assert_eq!(banks.description_font.size, 16.0);
        assert_eq!(
            banks.description_font.family.as_deref(),
            Some(Path::new("/decks/fonts/OpenSans.ttf"))
        );
    }

    #[test]
    fn out_of_range_index_has_no_content() {
        let config: DeckConfig = toml::from_str(DECK).expect("parse");
        let deck = Deck::from_config(config, Path::new(".")).expect("deck");
        assert!(deck.item_at(2).is_none());
    }

    #[test]
    fn missing_image_is_skipped() {
        let config: DeckConfig = toml::from_str(
            r#"
            [[items]]
            image = "does-not-exist.png"
            title = "Ghost"
            "#,
        )
        .expect("parse");
        let deck = Deck::from_config(config, Path::new("/nowhere")).expect("deck");
        assert!(deck.items()[0].image.is_none());
        assert_eq!(deck.items()[0].title, "Ghost");
    }

    #[test]
    fn rejects_empty_deck() {
        let config: DeckConfig = toml::from_str("items = []").expect("parse");
        assert!(matches!(config.validate(), Err(DeckError::Validation { .. })));
    }

    #[test]
    fn rejects_negative_duration() {
        let config: DeckConfig = toml::from_str(
            r#"
            [transition]
            show_duration = -1.0

            [[items]]
            title = "x"
            "#,
        )
        .expect("parse");
        assert!(matches!(config.validate(), Err(DeckError::Validation { .. })));
    }

    #[test]
    fn rejects_zero_font_size() {
        let config: DeckConfig = toml::from_str(
            r#"
            [[items]]
            title = "x"
            title_font = { size = 0 }
            "#,
        )
        .expect("parse");
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_timing() {
        for transition in ["show_duration = inf", "hide_duration = nan", "offset = -inf"] {
            let deck = format!("[transition]\n{transition}\n\n[[items]]\ntitle = \"x\"\n");
            let config: DeckConfig = toml::from_str(&deck).expect("parse");
            assert!(
                matches!(config.validate(), Err(DeckError::Validation { .. })),
                "{transition} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_finite_font_size() {
        let config: DeckConfig = toml::from_str(
            r#"
            [[items]]
            title = "x"
            description_font = { size = nan }
            "#,
        )
        .expect("parse");
        assert!(matches!(config.validate(), Err(DeckError::Validation { .. })));
    }

    #[test]
    fn unknown_easing_is_a_parse_error() {
        let result = toml::from_str::<DeckConfig>(
            r#"
            [transition]
            easing = "bounce"

            [[items]]
            title = "x"
            "#,
        );
        assert!(result.is_err());
    }
}
