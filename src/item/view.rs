use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::constants::*;
use crate::geometry::{Rect, Size};
use crate::style::{FontSpec, ImageAsset, Label};
use crate::text::{TextMeasure, wrap_lines};

use super::ItemInfo;

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// One onboarding slide: image, title and description stacked vertically.
///
/// The content fields are public so the delegate can tweak them in its
/// configure hook. Opacity and stack offset are owned by the transition
/// controller.
#[derive(Debug, Clone)]
pub struct ItemView {
    id: ItemId,
    index: usize,

    pub image: Option<ImageAsset>,
    pub title: Label,
    pub description: Label,

    alpha: f32,
    stack_offset: f32,
}

impl ItemView {
    pub fn new(index: usize) -> Self {
        Self {
            id: ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed)),
            index,
            image: None,
            title: Label::new(FontSpec::system(TITLE_FONT_SIZE)),
            description: Label::new(FontSpec::system(DESCRIPTION_FONT_SIZE)),
            alpha: 1.0,
            stack_offset: 0.0,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Index this view was built for.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Vertical translation of the stack from its resting position.
    pub fn stack_offset(&self) -> f32 {
        self.stack_offset
    }

    pub(crate) fn set_presentation(&mut self, alpha: f32, stack_offset: f32) {
        self.alpha = alpha;
        self.stack_offset = stack_offset;
    }

    /// True when no delegate content was ever applied.
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.title.text.is_empty() && self.description.text.is_empty()
    }

    pub fn apply(&mut self, info: ItemInfo) {
        self.image = info.image;
        self.title.text = info.title;
        self.title.font = info.title_font;
        self.title.color = info.title_color;
        self.description.text = info.description;
        self.description.font = info.description_font;
        self.description.color = info.description_color;
    }

    /// Resolves element frames for a view pinned to `bounds`.
    pub fn layout(&self, bounds: Rect, measure: &dyn TextMeasure) -> ItemLayout {
        let column = bounds.inset_horizontal(SIDE_PADDING);

        let image_size = self
            .image
            .as_ref()
            .map(|image| image.size.aspect_fit(Size::new(column.width, image.size.height)))
            .unwrap_or_default();

        let title = LabelLayout::measure(&self.title, column.width, measure);
        let description = LabelLayout::measure(&self.description, column.width, measure);

        let stack_height = image_size.height + title.height() + description.height() + 2.0 * STACK_SPACING;

        // Centered, then pushed below the top padding. The top padding is the
        // larger one, so a centered stack already clears the bottom padding;
        // when the stack is too tall for both, the top one wins.
        let mut top = (bounds.center_y() - stack_height * 0.5).max(bounds.y + TOP_PADDING);
        top += self.stack_offset;

        let stack = Rect::new(column.x, top, column.width, stack_height);

        let image = Rect::new(
            column.x + (column.width - image_size.width) * 0.5,
            top,
            image_size.width,
            image_size.height,
        );
        let title = title.placed(column.x, image.bottom() + STACK_SPACING, column.width);
        let description = description.placed(column.x, title.frame.bottom() + STACK_SPACING, column.width);

        ItemLayout {
            frame: bounds,
            stack,
            image,
            title,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub frame: Rect,
    pub lines: Vec<String>,
    pub line_height: f32,
}

impl LabelLayout {
    fn measure(label: &Label, width: f32, measure: &dyn TextMeasure) -> Self {
        Self {
            frame: Rect::default(),
            lines: wrap_lines(&label.text, &label.font, width, measure),
            line_height: measure.line_height(&label.font),
        }
    }

    fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    fn placed(mut self, x: f32, y: f32, width: f32) -> Self {
        self.frame = Rect::new(x, y, width, self.height());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    pub frame: Rect,
    pub stack: Rect,
    pub image: Rect,
    pub title: LabelLayout,
    pub description: LabelLayout,
}
