use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::geometry::Size;
use crate::style::ImageAsset;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),

    #[error("failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to upload {path:?}: {message}")]
    Upload { path: PathBuf, message: String },
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, LoaderError> {
    let read_err = |source| LoaderError::Read {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(LoaderError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// EXIF orientation tag of a JPEG, `1` (upright) for anything else or when
/// the tag cannot be read.
pub fn read_exif_orientation(file_bytes: &[u8], extension: &str) -> u16 {
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }

    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
            _ => 1,
        },
        Err(e) => {
            // Non-critical: proceed without rotation
            debug!("no EXIF data: {}", e);
            1
        }
    }
}

/// 6 and 8 are quarter turns; the other orientations keep the stored
/// dimensions (flips are ignored).
pub fn is_quarter_turn(orientation: u16) -> bool {
    matches!(orientation, 6 | 8)
}

/// Reads an image's displayed dimensions without decoding its pixels.
pub fn probe_image(path: &Path) -> Result<ImageAsset, LoaderError> {
    let file_bytes = fs::read(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = image::ImageReader::new(Cursor::new(&file_bytes))
        .with_guessed_format()
        .map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .into_dimensions()
        .map_err(|source| LoaderError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let orientation = read_exif_orientation(&file_bytes, &extension_of(path));
    let size = if is_quarter_turn(orientation) {
        Size::new(height as f32, width as f32)
    } else {
        Size::new(width as f32, height as f32)
    };

    Ok(ImageAsset {
        path: path.to_path_buf(),
        size,
    })
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut raylib::prelude::RaylibHandle,
    thread: &raylib::prelude::RaylibThread,
    image_path: &Path,
) -> Result<raylib::prelude::Texture2D, LoaderError> {
    use raylib::prelude::Image;

    let file_bytes = fs::read(image_path).map_err(|source| LoaderError::Read {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(image_path);
    let orientation = read_exif_orientation(&file_bytes, &extension);

    let upload_err = |e: &dyn std::fmt::Display| LoaderError::Upload {
        path: image_path.to_path_buf(),
        message: e.to_string(),
    };

    // Provide extension hint for loading from memory
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| upload_err(&e))?;

    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        1 => {}
        other => warn!(orientation = other, path = ?image_path, "ignoring mirrored EXIF orientation"),
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| upload_err(&e))?;
    debug!(path = ?image_path, orientation, "texture loaded");

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_jpeg_is_upright() {
        assert_eq!(read_exif_orientation(b"\x89PNG", "png"), 1);
    }

    #[test]
    fn jpeg_without_exif_is_upright() {
        assert_eq!(read_exif_orientation(b"not really a jpeg", "jpg"), 1);
    }

    #[test]
    fn only_quarter_turns_swap_dimensions() {
        assert!(is_quarter_turn(6));
        assert!(is_quarter_turn(8));
        assert!(!is_quarter_turn(1));
        assert!(!is_quarter_turn(3));
    }

    #[test]
    fn sorts_images_and_skips_other_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["b.png", "a.JPG", "notes.txt", "c.gif"] {
            fs::write(dir.path().join(name), b"").expect("write");
        }
        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .expect("images")
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(load_sorted_image_paths(dir.path()), Err(LoaderError::NoImages(_))));
    }

    #[test]
    fn probes_png_dimensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wide.png");
        image::RgbImage::new(8, 4).save(&path).expect("save png");

        let asset = probe_image(&path).expect("probe");
        assert_eq!(asset.size, Size::new(8.0, 4.0));
        assert_eq!(asset.path, path);
    }
}
