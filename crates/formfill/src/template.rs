//! Template image loading

use crate::{FillError, Result};
use image::{DynamicImage, RgbImage};

/// Decode a template image and flatten it to 8-bit RGB
///
/// Accepts anything the image crate decodes (PNG and JPEG in this build).
/// Alpha channels are blended onto a white background so transparent regions
/// come out as blank paper.
pub fn load_template(data: &[u8]) -> Result<RgbImage> {
    let image = image::load_from_memory(data).map_err(|e| {
        FillError::TemplateLoadError(format!("Failed to decode template image: {e}"))
    })?;
    Ok(flatten_to_rgb(image))
}

fn flatten_to_rgb(image: DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    // Blend onto a white background
    let rgba = image.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as f32 / 255.0;
        let r = (pixel[0] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8;
        let g = (pixel[1] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8;
        let b = (pixel[2] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8;
        rgb.put_pixel(x, y, image::Rgb([r, g, b]));
    }
    rgb
}
