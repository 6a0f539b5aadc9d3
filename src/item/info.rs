use crate::style::{Color, FontSpec, ImageAsset};

/// Content for one slide, supplied by the delegate per index.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInfo {
    pub image: Option<ImageAsset>,
    pub title: String,
    pub title_font: FontSpec,
    pub title_color: Color,
    pub description: String,
    pub description_font: FontSpec,
    pub description_color: Color,
}
