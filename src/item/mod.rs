mod info;
mod view;

pub use info::ItemInfo;
pub use view::{ItemId, ItemLayout, ItemView, LabelLayout};
