use crate::error::DocumentError;

/// Orientation code: `"P"` (portrait), `"L"` (landscape), or `""` to keep
/// the document default. Names are matched case-insensitively; anything
/// else is an error.
pub fn translate(orientation: Option<&str>) -> Result<&'static str, DocumentError> {
    let Some(orientation) = orientation else {
        return Ok("");
    };
    match orientation.to_lowercase().as_str() {
        "" => Ok(""),
        "portrait" => Ok("P"),
        "landscape" => Ok("L"),
        other => Err(DocumentError::UnsupportedFeature(format!("orientation '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_both_orientations_case_insensitively() {
        assert_eq!(translate(Some("portrait")).unwrap(), "P");
        assert_eq!(translate(Some("Portrait")).unwrap(), "P");
        assert_eq!(translate(Some("landscape")).unwrap(), "L");
        assert_eq!(translate(Some("LANDSCAPE")).unwrap(), "L");
    }

    #[test]
    fn unset_keeps_the_document_default() {
        assert_eq!(translate(None).unwrap(), "");
        assert_eq!(translate(Some("")).unwrap(), "");
    }

    #[test]
    fn unknown_orientation_is_rejected() {
        assert!(matches!(
            translate(Some("diagonal")),
            Err(DocumentError::UnsupportedFeature(_))
        ));
    }
}
