use std::collections::HashMap;
use std::path::{Path, PathBuf};

use raylib::prelude::*;
use tracing::warn;

use crate::deck::Deck;
use crate::geometry::Rect;
use crate::item::{ItemView, LabelLayout};
use crate::style::{self, FontSpec, Label};
use crate::text::TextMeasure;
use crate::texture_loader::load_texture_with_exif_rotation;

fn to_color(color: style::Color, opacity: f32) -> Color {
    let color = color.faded(opacity);
    Color::new(color.r, color.g, color.b, color.a)
}

/// Glyph spacing raylib's default text drawing uses.
fn spacing(font: &FontSpec) -> f32 {
    font.size / 10.0
}

/// GPU resources for a deck: one texture per image and one font per family.
#[derive(Default)]
pub struct Renderer {
    textures: HashMap<PathBuf, Texture2D>,
    fonts: HashMap<PathBuf, Font>,
}

impl Renderer {
    /// Uploads every image and font the deck refers to. Failures are logged;
    /// the affected element is drawn empty or with the built-in font.
    pub fn preload(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, deck: &Deck) {
        for item in deck.items() {
            if let Some(image) = &item.image {
                if !self.textures.contains_key(&image.path) {
                    match load_texture_with_exif_rotation(rl, thread, &image.path) {
                        Ok(texture) => {
                            self.textures.insert(image.path.clone(), texture);
                        }
                        Err(e) => warn!("{}", e),
                    }
                }
            }

            for family in [&item.title_font.family, &item.description_font.family].into_iter().flatten() {
                if self.fonts.contains_key(family) {
                    continue;
                }
                match rl.load_font(thread, &family.to_string_lossy()) {
                    Ok(font) => {
                        self.fonts.insert(family.clone(), font);
                    }
                    Err(e) => warn!(path = %family.display(), "failed to load font: {}", e),
                }
            }
        }
    }

    fn font(&self, family: Option<&Path>) -> Option<&Font> {
        family.and_then(|family| self.fonts.get(family))
    }

    pub fn draw_item(&self, d: &mut RaylibDrawHandle, view: &ItemView, bounds: Rect) {
        let opacity = view.alpha();
        if opacity <= 0.0 {
            return;
        }
        let layout = view.layout(bounds, self);

        if let Some(texture) = view.image.as_ref().and_then(|image| self.textures.get(&image.path)) {
            let frame = layout.image;
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                Rectangle::new(frame.x, frame.y, frame.width, frame.height),
                Vector2::new(0.0, 0.0),
                0.0,
                to_color(style::Color::WHITE, opacity),
            );
        }

        self.draw_label(d, &view.title, &layout.title, opacity);
        self.draw_label(d, &view.description, &layout.description, opacity);
    }

    fn draw_label(&self, d: &mut RaylibDrawHandle, label: &Label, layout: &LabelLayout, opacity: f32) {
        let color = to_color(label.color, opacity);
        let font = self.font(label.font.family.as_deref());

        for (i, line) in layout.lines.iter().enumerate() {
            // Centered horizontally, vertically centered in its line box
            let width = self.line_width(line, &label.font);
            let x = layout.frame.x + (layout.frame.width - width) * 0.5;
            let y = layout.frame.y + i as f32 * layout.line_height + (layout.line_height - label.font.size) * 0.5;

            match font {
                Some(font) => d.draw_text_ex(font, line, Vector2::new(x, y), label.font.size, spacing(&label.font), color),
                None => d.draw_text(line, x as i32, y as i32, label.font.size as i32, color),
            }
        }
    }
}

impl TextMeasure for Renderer {
    fn line_width(&self, text: &str, font: &FontSpec) -> f32 {
        match self.font(font.family.as_deref()) {
            Some(loaded) => loaded.measure_text(text, font.size, spacing(font)).x,
            None => {
                // raylib 5.5 only exposes MeasureText on RaylibHandle; same call without a handle
                let c_text = std::ffi::CString::new(text).unwrap();
                (unsafe { ffi::MeasureText(c_text.as_ptr(), font.size as i32) }) as f32
            }
        }
    }
}
