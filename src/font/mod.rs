//! Source font inspection

pub mod collection;

pub use collection::{face_count, has_font_magic, validate_variants};
