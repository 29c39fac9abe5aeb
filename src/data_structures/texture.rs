//! Decoded sprite textures.
//!
//! This module provides [`Texture`], the RGBA pixel data of one sprite image
//! together with the label it was loaded under. Uploading it to a GPU is left
//! to the host renderer.

use anyhow::*;
use image::{ImageFormat, load_from_memory_with_format};

/// A decoded sprite image.
#[derive(Clone, Debug)]
pub struct Texture {
    pub label: String,
    pub rgba: image::RgbaImage,
}

impl Texture {
    /// Load a texture from raw byte data (image file contents).
    ///
    /// # Arguments
    ///
    /// * `bytes` represent raw image file data (PNG, JPEG, etc.)
    /// * `label` is used as the texture name, usually the sprite id
    /// * `format` is an optional file extension hint (e.g., "png"). If None, auto-detect.
    pub fn from_bytes(bytes: &[u8], label: &str, format: Option<&str>) -> Result<Self> {
        let img = match format.and_then(ImageFormat::from_extension) {
            None => image::load_from_memory(bytes)?,
            Some(fmt) => load_from_memory_with_format(bytes, fmt)?,
        };
        Ok(Self::from_image(&img, label))
    }

    pub fn from_image(img: &image::DynamicImage, label: &str) -> Self {
        Self {
            label: label.to_string(),
            rgba: img.to_rgba8(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.rgba.dimensions()
    }
}
