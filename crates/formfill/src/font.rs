//! Font loading and validation

use crate::{FillError, Result};
use ab_glyph::FontVec;

/// Parse a TrueType or OpenType font for text compositing
///
/// The bytes are validated up front so a malformed font fails at load time
/// instead of mid-render.
pub fn load_font(data: Vec<u8>) -> Result<FontVec> {
    let face = ttf_parser::Face::parse(&data, 0)
        .map_err(|e| FillError::FontLoadError(format!("Failed to parse font: {e}")))?;
    if face.number_of_glyphs() == 0 {
        return Err(FillError::FontLoadError(
            "Font contains no glyphs".to_string(),
        ));
    }

    FontVec::try_from_vec(data)
        .map_err(|e| FillError::FontLoadError(format!("Failed to load font: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_font_rejects_empty_data() {
        let result = load_font(Vec::new());

        match result {
            Err(FillError::FontLoadError(_)) => {}
            _ => panic!("Expected FontLoadError for empty data"),
        }
    }

    #[test]
    fn test_load_font_rejects_garbage() {
        let result = load_font(vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02, 0x03]);

        match result {
            Err(FillError::FontLoadError(_)) => {}
            _ => panic!("Expected FontLoadError for undecodable bytes"),
        }
    }

    #[test]
    fn test_load_font_error_is_descriptive() {
        let error = load_font(Vec::new()).unwrap_err();

        assert!(error.to_string().contains("font"));
    }
}
