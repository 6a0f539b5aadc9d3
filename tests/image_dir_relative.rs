// Changes the working directory, so it lives in its own test binary.

use std::env;
use std::fs;
use std::path::Path;

use onboarding::deck::Deck;
use onboarding::geometry::Size;

#[test]
fn test_relative_image_directory_keeps_its_images() {
    let root = tempfile::tempdir().expect("tempdir");
    fs::create_dir(root.path().join("slides")).expect("mkdir");
    image::RgbaImage::new(40, 30)
        .save(root.path().join("slides/01-hotels.png"))
        .expect("save png");
    env::set_current_dir(root.path()).expect("chdir");

    let deck = Deck::from_image_dir(Path::new("slides")).expect("deck");

    let image = deck.items()[0].image.as_ref().expect("image");
    assert_eq!(image.path, Path::new("slides/01-hotels.png"));
    assert_eq!(image.size, Size::new(40.0, 30.0));
}
