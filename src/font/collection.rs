use std::fs;
use std::path::Path;

use log::debug;
use ttf_parser::Face;

use crate::error::{Error, Result};
use crate::models::FontVariant;

/// Check the sfnt / collection signature at the start of a font file
pub fn has_font_magic(data: &[u8]) -> bool {
    matches!(
        data.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) // TTF
            | Some(b"OTTO") // OTF
            | Some(b"true") // Apple TrueType
            | Some(b"ttcf") // collection
    )
}

/// Number of faces in a font file. Plain fonts count as one face.
pub fn face_count(data: &[u8]) -> Option<u32> {
    if !has_font_magic(data) {
        return None;
    }
    Some(ttf_parser::fonts_in_collection(data).unwrap_or(1))
}

/// Make sure every variant points at a face that exists and parses.
///
/// Returns the number of faces in the source font.
pub fn validate_variants(font_path: &Path, variants: &[FontVariant]) -> Result<u32> {
    if !font_path.is_file() {
        return Err(Error::InvalidPath(font_path.to_path_buf()));
    }
    let data = fs::read(font_path)?;

    let count = face_count(&data).ok_or_else(|| {
        Error::Font(format!("{} is not a font or font collection", font_path.display()))
    })?;
    debug!("{} contains {} face(s)", font_path.display(), count);

    for variant in variants {
        if variant.face_index >= count {
            return Err(Error::Font(format!(
                "variant {} uses face {} but {} has only {} face(s)",
                variant.tag,
                variant.face_index,
                font_path.display(),
                count
            )));
        }

        Face::parse(&data, variant.face_index).map_err(|e| {
            Error::Font(format!(
                "face {} of {} (variant {}): {}",
                variant.face_index,
                font_path.display(),
                variant.tag,
                e
            ))
        })?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collection header announcing `faces` fonts, without any font data
    fn collection_header(faces: u32) -> Vec<u8> {
        let mut data = b"ttcf".to_vec();
        data.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        data.extend_from_slice(&faces.to_be_bytes());
        data
    }

    #[test]
    fn counts_faces_in_collection_header() {
        assert_eq!(face_count(&collection_header(3)), Some(3));
        assert_eq!(face_count(&[0x00, 0x01, 0x00, 0x00, 0x00]), Some(1));
        assert_eq!(face_count(b"PK\x03\x04"), None);
        assert_eq!(face_count(b""), None);
    }

    #[test]
    fn face_index_out_of_range_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("fonts.ttc");
        fs::write(&font, collection_header(2)).unwrap();

        let err = validate_variants(&font, &[FontVariant::new("SC", 2)]).unwrap_err();
        let Error::Font(msg) = err else {
            panic!("unexpected error: {err}");
        };
        assert!(msg.contains("only 2 face(s)"), "{msg}");
    }

    #[test]
    fn missing_font_is_an_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("absent.ttc");
        let err = validate_variants(&font, &FontVariant::defaults()).unwrap_err();
        assert!(matches!(err, Error::InvalidPath(path) if path == font));
    }

    #[test]
    fn non_font_data_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("readme.ttc");
        fs::write(&font, "definitely not a font").unwrap();

        let err = validate_variants(&font, &FontVariant::defaults()).unwrap_err();
        assert!(matches!(err, Error::Font(_)));
    }
}
