//! PDF document assembly from raster pages

use crate::raster::{generate_page_operators, RasterXObject};
use crate::{ExportError, Result};
use image::RgbImage;
use lopdf::{dictionary, Document, Object, Stream};

/// PDF version written to the document header
const PDF_VERSION: &str = "1.5";

/// Export one image as a single-page PDF document
///
/// The page MediaBox matches the image dimensions (one point per pixel) and
/// the raster is embedded losslessly (see [`RasterXObject`]).
pub fn export_single(image: &RgbImage) -> Result<Vec<u8>> {
    build_document(std::slice::from_ref(image))
}

/// Export an ordered sequence of images as one multi-page PDF document
///
/// Page order follows slice order. Fails with
/// [`ExportError::EmptyBatchError`] when the slice is empty; a document with
/// zero pages is never produced.
pub fn export_multi(images: &[RgbImage]) -> Result<Vec<u8>> {
    if images.is_empty() {
        return Err(ExportError::EmptyBatchError);
    }
    build_document(images)
}

/// Build a document from scratch: one page per image, each page holding a
/// single full-page image XObject.
fn build_document(images: &[RgbImage]) -> Result<Vec<u8>> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        let xobject = RasterXObject::from_image(image)?;
        let image_name = format!("Im{}", index + 1);

        let xobject_id = doc.add_object(xobject.to_pdf_stream());
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            generate_page_operators(&image_name, xobject.width, xobject.height),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (xobject.width as i64).into(),
                (xobject.height as i64).into(),
            ],
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    image_name.as_str() => xobject_id,
                },
            },
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
