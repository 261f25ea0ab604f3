//! Coordinate-driven text compositing onto template images

use crate::font::load_font;
use crate::schema::{Field, Layout, Position, Record};
use crate::template::load_template;
use crate::{FillError, Result};
use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use std::collections::BTreeMap;

/// Ink color for field text
const TEXT_INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Ink color for calibration crosshairs
const MARKER_INK: Rgb<u8> = Rgb([255, 0, 0]);

/// Crosshair arm length in pixels, each side of the anchor
const MARKER_ARM: i64 = 5;

/// Immutable per-run resources and placement settings
///
/// Holds the decoded template page, the parsed font, and the field placement
/// shared by every fill in a run. Loading happens once here; the compositor
/// borrows the configuration and never mutates it.
pub struct RunConfig {
    template: RgbImage,
    font: FontVec,
    coordinates: BTreeMap<Field, Position>,
    font_size: u32,
    markers: bool,
}

impl RunConfig {
    /// Load template and font bytes with the stock layout
    pub fn new(template_data: &[u8], font_data: Vec<u8>) -> Result<Self> {
        RunConfig::from_layout(template_data, font_data, Layout::default())
    }

    /// Load template and font bytes with an explicit layout
    pub fn from_layout(template_data: &[u8], font_data: Vec<u8>, layout: Layout) -> Result<Self> {
        let template = load_template(template_data)?;
        let font = load_font(font_data)?;

        Ok(RunConfig {
            template,
            font,
            coordinates: layout.coordinates,
            font_size: layout.font_size,
            markers: layout.markers,
        })
    }

    /// The decoded template page
    pub fn template(&self) -> &RgbImage {
        &self.template
    }

    /// Current field anchors
    pub fn coordinates(&self) -> &BTreeMap<Field, Position> {
        &self.coordinates
    }

    /// Set or replace the anchor of a field
    pub fn set_coordinate(&mut self, field: Field, position: Position) -> &mut Self {
        self.coordinates.insert(field, position);
        self
    }

    /// Set the text height in pixels
    pub fn set_font_size(&mut self, size: u32) -> &mut Self {
        self.font_size = size;
        self
    }

    /// Enable or disable calibration crosshairs
    pub fn set_markers(&mut self, markers: bool) -> &mut Self {
        self.markers = markers;
        self
    }
}

/// Renders records onto copies of a configured template
///
/// Each [`fill`](Compositor::fill) call works on its own copy of the
/// template, so one compositor can serve a whole batch.
pub struct Compositor<'a> {
    config: &'a RunConfig,
    scale: PxScale,
}

impl<'a> Compositor<'a> {
    /// Create a compositor over a run configuration
    ///
    /// Fails with [`FillError::FontLoadError`] when the configured text
    /// height is below one pixel.
    pub fn new(config: &'a RunConfig) -> Result<Self> {
        if config.font_size == 0 {
            return Err(FillError::FontLoadError(
                "Font size must be at least 1 pixel".to_string(),
            ));
        }

        Ok(Compositor {
            config,
            scale: PxScale::from(config.font_size as f32),
        })
    }

    /// Draw a record onto a fresh copy of the template
    ///
    /// Only fields present in both the coordinate map and the record are
    /// drawn; the anchor is the top-left corner of the rendered text. When
    /// crosshairs are enabled they are drawn at every anchor, matched or
    /// not. A failure on any field aborts the whole record and no image is
    /// returned.
    pub fn fill(&self, record: &Record) -> Result<RgbImage> {
        let mut page = self.config.template.clone();

        for field in Field::ALL {
            let position = match self.config.coordinates.get(&field) {
                Some(position) => *position,
                None => continue,
            };
            let text = match record.get(field) {
                Some(text) => text,
                None => continue,
            };
            self.draw_text(&mut page, field, text, position)?;
        }

        if self.config.markers {
            for position in self.config.coordinates.values() {
                draw_marker(&mut page, *position);
            }
        }

        Ok(page)
    }

    /// Render one field's text with its top-left corner at `position`
    fn draw_text(
        &self,
        page: &mut RgbImage,
        field: Field,
        text: &str,
        position: Position,
    ) -> Result<()> {
        let font = &self.config.font;
        let scaled = font.as_scaled(self.scale);

        // Top-left anchor: the baseline sits one ascent below the anchor
        let baseline = position.y as f32 + scaled.ascent();
        let mut caret = position.x as f32;
        let mut previous: Option<GlyphId> = None;

        for ch in text.chars() {
            let glyph_id = font.glyph_id(ch);
            if glyph_id.0 == 0 && !ch.is_whitespace() {
                return Err(FillError::FieldRenderError(
                    field,
                    format!("Font has no glyph for character {ch:?}"),
                ));
            }

            if let Some(previous) = previous {
                caret += scaled.kern(previous, glyph_id);
            }

            let glyph = glyph_id.with_scale_and_position(self.scale, point(caret, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i64 + gx as i64;
                    let y = bounds.min.y as i64 + gy as i64;
                    blend_pixel(page, x, y, TEXT_INK, coverage);
                });
            }

            caret += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);
        }

        Ok(())
    }
}

/// Draw a crosshair centered on `position`, clipped to the page
fn draw_marker(page: &mut RgbImage, position: Position) {
    let (x, y) = (position.x as i64, position.y as i64);
    for offset in -MARKER_ARM..=MARKER_ARM {
        blend_pixel(page, x + offset, y, MARKER_INK, 1.0);
        blend_pixel(page, x, y + offset, MARKER_INK, 1.0);
    }
}

/// Mix ink into one pixel at the given coverage, ignoring out-of-bounds hits
fn blend_pixel(page: &mut RgbImage, x: i64, y: i64, ink: Rgb<u8>, coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    if x < 0 || y < 0 || x >= page.width() as i64 || y >= page.height() as i64 {
        return;
    }

    let coverage = coverage.min(1.0);
    let pixel = page.get_pixel_mut(x as u32, y as u32);
    for (channel, ink_channel) in pixel.0.iter_mut().zip(ink.0) {
        *channel = (ink_channel as f32 * coverage + *channel as f32 * (1.0 - coverage)) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_page(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
    }

    #[test]
    fn test_blend_pixel_full_coverage() {
        let mut page = white_page(4, 4);

        blend_pixel(&mut page, 1, 2, Rgb([0, 0, 0]), 1.0);

        assert_eq!(page.get_pixel(1, 2), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_blend_pixel_zero_coverage_leaves_page() {
        let mut page = white_page(4, 4);

        blend_pixel(&mut page, 1, 1, Rgb([0, 0, 0]), 0.0);

        assert_eq!(page.get_pixel(1, 1), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_blend_pixel_partial_coverage_mixes() {
        let mut page = white_page(4, 4);

        blend_pixel(&mut page, 0, 0, Rgb([0, 0, 0]), 0.5);

        let pixel = page.get_pixel(0, 0);
        assert!(pixel[0] > 100 && pixel[0] < 150);
    }

    #[test]
    fn test_blend_pixel_clips_out_of_bounds() {
        let mut page = white_page(4, 4);

        blend_pixel(&mut page, -1, 0, Rgb([0, 0, 0]), 1.0);
        blend_pixel(&mut page, 0, -3, Rgb([0, 0, 0]), 1.0);
        blend_pixel(&mut page, 4, 0, Rgb([0, 0, 0]), 1.0);
        blend_pixel(&mut page, 0, 7, Rgb([0, 0, 0]), 1.0);

        for pixel in page.pixels() {
            assert_eq!(pixel, &Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn test_blend_pixel_clamps_excess_coverage() {
        let mut page = white_page(2, 2);

        blend_pixel(&mut page, 0, 0, Rgb([0, 0, 0]), 1.5);

        assert_eq!(page.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_draw_marker_paints_crosshair() {
        let mut page = white_page(32, 32);

        draw_marker(&mut page, Position::new(10, 10));

        assert_eq!(page.get_pixel(10, 10), &Rgb([255, 0, 0]));
        assert_eq!(page.get_pixel(5, 10), &Rgb([255, 0, 0]));
        assert_eq!(page.get_pixel(15, 10), &Rgb([255, 0, 0]));
        assert_eq!(page.get_pixel(10, 5), &Rgb([255, 0, 0]));
        assert_eq!(page.get_pixel(10, 15), &Rgb([255, 0, 0]));
        assert_eq!(page.get_pixel(9, 9), &Rgb([255, 255, 255]));
        assert_eq!(page.get_pixel(4, 10), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_draw_marker_clips_at_page_edge() {
        let mut page = white_page(8, 8);

        draw_marker(&mut page, Position::new(0, 0));

        assert_eq!(page.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(page.get_pixel(3, 0), &Rgb([255, 0, 0]));
        assert_eq!(page.get_pixel(0, 3), &Rgb([255, 0, 0]));
        assert_eq!(page.get_pixel(6, 0), &Rgb([255, 255, 255]));
    }
}
