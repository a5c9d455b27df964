use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use vellum_backend::PageSpec;

/// A page size as it appears in document options: either a named format or
/// an explicit width/height pair in document units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeOption {
    Name(String),
    Dimensions(f32, f32),
}

/// Maps a size option to the backend's page specification. Only A4 is a
/// recognized name; custom dimensions pass through unchanged. Unset keeps
/// the document default.
pub fn translate(size: Option<&SizeOption>) -> Result<PageSpec, DocumentError> {
    match size {
        None => Ok(PageSpec::Auto),
        Some(SizeOption::Name(name)) if name.eq_ignore_ascii_case("a4") => {
            Ok(PageSpec::named("A4"))
        }
        Some(SizeOption::Name(name)) => {
            Err(DocumentError::UnsupportedFeature(format!("page size '{name}'")))
        }
        Some(SizeOption::Dimensions(width, height)) => {
            Ok(PageSpec::Custom { width: *width, height: *height })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_recognized_case_insensitively() {
        let spec = translate(Some(&SizeOption::Name("a4".to_string()))).unwrap();
        assert_eq!(spec, PageSpec::named("A4"));
        let spec = translate(Some(&SizeOption::Name("A4".to_string()))).unwrap();
        assert_eq!(spec, PageSpec::named("A4"));
    }

    #[test]
    fn dimensions_pass_through() {
        let spec = translate(Some(&SizeOption::Dimensions(210.0, 297.0))).unwrap();
        assert_eq!(spec, PageSpec::Custom { width: 210.0, height: 297.0 });
    }

    #[test]
    fn unset_keeps_the_document_default() {
        assert_eq!(translate(None).unwrap(), PageSpec::Auto);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!(
            translate(Some(&SizeOption::Name("letter".to_string()))),
            Err(DocumentError::UnsupportedFeature(_))
        ));
    }

    #[test]
    fn size_options_deserialize_untagged() {
        let name: SizeOption = serde_json::from_str("\"a4\"").unwrap();
        assert_eq!(name, SizeOption::Name("a4".to_string()));
        let dims: SizeOption = serde_json::from_str("[210.0, 297.0]").unwrap();
        assert_eq!(dims, SizeOption::Dimensions(210.0, 297.0));
    }
}
