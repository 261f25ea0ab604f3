//! Lossless raster embedding for PDF documents

use crate::Result;
use image::RgbImage;
use lopdf::{Dictionary, Stream};

/// Image XObject holding one losslessly encoded raster page
///
/// The pixel data is stored as raw 8-bit RGB rows compressed with zlib, so
/// the embedded image decodes back to exactly the input pixels (FlateDecode
/// is lossless, unlike DCTDecode).
#[derive(Debug, Clone)]
pub struct RasterXObject {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Zlib-compressed RGB rows
    pub data: Vec<u8>,
}

impl RasterXObject {
    /// Encode an RGB image as a FlateDecode XObject
    pub fn from_image(image: &RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        std::io::Write::write_all(&mut encoder, image.as_raw())?;
        let data = encoder.finish()?;

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert to a lopdf Stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();

        dict.set("Type", lopdf::Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", lopdf::Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set("ColorSpace", lopdf::Object::Name(b"DeviceRGB".to_vec()));
        dict.set("BitsPerComponent", 8i64);
        dict.set("Filter", lopdf::Object::Name(b"FlateDecode".to_vec()));
        dict.set("Length", self.data.len() as i64);

        Stream::new(dict, self.data.clone())
    }
}

/// Generate operators that draw an image to fill a page
///
/// # Arguments
/// * `image_name` - Image resource name (e.g., "Im1")
/// * `width` - Page width in points
/// * `height` - Page height in points
///
/// # Returns
/// PDF content stream operators as bytes
pub fn generate_page_operators(image_name: &str, width: u32, height: u32) -> Vec<u8> {
    // q                      - Save graphics state
    // width 0 0 height 0 0 cm - Map the unit square onto the full page
    // /Im1 Do                - Draw image
    // Q                      - Restore graphics state
    format!("q\n{width} 0 0 {height} 0 0 cm\n/{image_name} Do\nQ\n").into_bytes()
}
