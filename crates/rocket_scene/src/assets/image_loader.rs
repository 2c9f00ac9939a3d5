//! Image loading utilities for texture data
//!
//! Images are decoded to RGBA8 and flipped so the first row is the bottom
//! of the picture, matching texture coordinates with a bottom-left origin.

use super::AssetError;
use std::path::Path;

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data, bottom row first
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        log::debug!("Loading image from: {:?}", path);

        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;

        let image = Self::from_dynamic(img);
        log::info!("Loaded image {}x{} from {:?}", image.width, image.height, path);
        Ok(image)
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("<memory>: {e}")))?;
        Ok(Self::from_dynamic(img))
    }

    fn from_dynamic(img: image::DynamicImage) -> Self {
        let rgba = img.flipv().to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            data: rgba.into_raw(),
            width,
            height,
        }
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        Self {
            data: color.repeat(pixel_count),
            width,
            height,
        }
    }

    /// RGBA value of the pixel at `(x, y)`, with `y = 0` the bottom row
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(start..start + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 4, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);
        assert_eq!(img.pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(img.pixel(4, 0), None);
    }

    #[test]
    fn test_png_is_flipped_to_bottom_left_origin() {
        let mut src = RgbaImage::new(1, 2);
        src.put_pixel(0, 0, Rgba([255, 0, 0, 255])); // top
        src.put_pixel(0, 1, Rgba([0, 0, 255, 255])); // bottom

        let img = ImageData::from_bytes(&encode_png(src)).unwrap();
        assert_eq!((img.width, img.height), (1, 2));
        assert_eq!(img.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(img.pixel(0, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_garbage_bytes_fail_to_load() {
        let err = ImageData::from_bytes(b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::LoadFailed(_)));
    }

    #[test]
    fn test_pixel_index_does_not_overflow_u32() {
        let img = ImageData {
            data: Vec::new(),
            width: 70_000,
            height: 70_000,
        };
        assert_eq!(img.pixel(69_999, 69_999), None);
    }

    #[test]
    fn test_unreadable_path_is_an_io_error() {
        assert!(matches!(
            ImageData::from_file(std::env::temp_dir()),
            Err(AssetError::Io(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ImageData::from_file("no/such/texture.png"),
            Err(AssetError::NotFound(_))
        ));
    }
}
