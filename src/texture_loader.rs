use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::slide::Slide;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
const DEMO_SIZE: (i32, i32) = (1280, 720);
const DEMO_PALETTE: [Color; 6] = [
    Color::new(56, 93, 138, 255),
    Color::new(171, 82, 54, 255),
    Color::new(74, 128, 77, 255),
    Color::new(120, 81, 150, 255),
    Color::new(190, 150, 60, 255),
    Color::new(60, 130, 140, 255),
];

/// Where the slide set comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideSource {
    Directory(PathBuf),
    Demo(usize),
}

pub fn load_slides(rl: &mut RaylibHandle, thread: &RaylibThread, source: &SlideSource) -> Result<Vec<Slide>> {
    match source {
        SlideSource::Directory(dir) => {
            let paths = load_sorted_image_paths(dir)?;
            let mut slides = Vec::with_capacity(paths.len());
            for path in paths {
                match load_texture_with_exif_rotation(rl, thread, &path) {
                    Ok(texture) => {
                        let caption = path.file_name().map(|n| n.to_string_lossy().into_owned());
                        slides.push(Slide::new(texture, caption));
                    }
                    Err(e) => warn!("Skipping {:?}: {}", path, e),
                }
            }
            if slides.is_empty() {
                return Err(Error::NoImages(dir.clone()));
            }
            info!("Loaded {} slides from {:?}", slides.len(), dir);
            Ok(slides)
        }
        SlideSource::Demo(count) => {
            let mut slides = Vec::with_capacity(*count);
            for index in 0..*count {
                let texture = generate_demo_texture(rl, thread, index)?;
                slides.push(Slide::new(texture, Some(format!("Slide {}", index + 1))));
            }
            info!("Generated {} demo slides", slides.len());
            Ok(slides)
        }
    }
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Image files of `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_error = |source: std::io::Error| Error::Io { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && is_image_file(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(Error::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// EXIF orientation tag, 1 (upright) when absent or unreadable.
pub fn exif_orientation(bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!("No usable EXIF data: {}", e);
            1
        }
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).map_err(|source| Error::Io {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only reliable for JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes).map_err(|e| {
        Error::ImageDecode {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flips are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| Error::Texture(e.to_string()))
}

fn generate_demo_texture(rl: &mut RaylibHandle, thread: &RaylibThread, index: usize) -> Result<Texture2D> {
    let color = DEMO_PALETTE[index % DEMO_PALETTE.len()];
    let image = Image::gen_image_color(DEMO_SIZE.0, DEMO_SIZE.1, color);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| Error::Texture(e.to_string()))
}
