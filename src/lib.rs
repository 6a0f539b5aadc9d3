pub mod args;
pub mod constants;
pub mod content;
pub mod deck;
pub mod ease;
pub mod engine;
pub mod geometry;
pub mod item;
pub mod logging;
pub mod render;
pub mod style;
pub mod text;
pub mod texture_loader;
