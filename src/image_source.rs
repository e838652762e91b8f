//! Loading the measured image from disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use eframe::egui;
use image::{DynamicImage, ImageReader};

/// Decoded RGBA8 pixels. Never modified after loading.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub path: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    rgba: Vec<u8>,
}

impl LoadedImage {
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        Self {
            path: None,
            width: w as usize,
            height: h as usize,
            rgba: rgba.into_raw(),
        }
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.rgba)
    }

    /// File name for display, falling back to a generic label.
    pub fn display_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }
}

/// Decode any raster format the `image` crate recognises. The format is
/// guessed from the file contents, not the extension.
pub fn load_image(path: &Path) -> anyhow::Result<LoadedImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("failed to read image {}", path.display()))?;
    let decoded = reader
        .decode()
        .with_context(|| format!("failed to decode image {}", path.display()))?;

    let mut loaded = LoadedImage::from_dynamic(decoded);
    if loaded.width == 0 || loaded.height == 0 {
        anyhow::bail!("image {} has no pixels", path.display());
    }
    loaded.path = Some(path.to_path_buf());
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        loaded.width,
        loaded.height
    );
    Ok(loaded)
}
