//! Document construction options and their translated backend form.

use crate::error::DocumentError;
use crate::translate::{orientation, page_size};
use serde::{Deserialize, Serialize};
use vellum_backend::PageSpec;

pub use crate::translate::page_size::SizeOption;

/// Options a document is created with, deserializable from a JSON/config
/// object. Every field is optional; the translated defaults live in
/// [`DocumentOptions::to_backend_config`].
///
/// `margins` is `[left, right, top, bottom]` in document units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DocumentOptions {
    pub orientation: Option<String>,
    pub unit: Option<String>,
    pub size: Option<SizeOption>,
    pub compression: Option<bool>,
    pub margins: Option<[f32; 4]>,
    pub font_path: Option<String>,
}

/// The options translated into the backend's literal vocabulary: portrait A4
/// in millimetres with compression, unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub orientation: &'static str,
    pub unit: &'static str,
    pub size: PageSpec,
    pub compression: bool,
}

impl DocumentOptions {
    pub fn to_backend_config(&self) -> Result<BackendConfig, DocumentError> {
        let orientation = match orientation::translate(self.orientation.as_deref())? {
            "" => "P",
            code => code,
        };

        let unit = match self.unit.as_deref() {
            None => "mm",
            Some(unit) => match unit.to_lowercase().as_str() {
                "mm" => "mm",
                "cm" => "cm",
                "in" => "in",
                "pt" => "pt",
                other => {
                    return Err(DocumentError::UnsupportedFeature(format!("unit '{other}'")));
                }
            },
        };

        let size = match page_size::translate(self.size.as_ref())? {
            PageSpec::Auto => PageSpec::named("A4"),
            spec => spec,
        };

        Ok(BackendConfig {
            orientation,
            unit,
            size,
            compression: self.compression.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_translate_to_portrait_a4_mm() {
        let config = DocumentOptions::default().to_backend_config().unwrap();
        assert_eq!(config.orientation, "P");
        assert_eq!(config.unit, "mm");
        assert_eq!(config.size, PageSpec::named("A4"));
        assert!(config.compression);
    }

    #[test]
    fn explicit_options_translate() {
        let options = DocumentOptions {
            orientation: Some("landscape".to_string()),
            unit: Some("pt".to_string()),
            size: Some(SizeOption::Dimensions(400.0, 600.0)),
            compression: Some(false),
            ..DocumentOptions::default()
        };
        let config = options.to_backend_config().unwrap();
        assert_eq!(config.orientation, "L");
        assert_eq!(config.unit, "pt");
        assert_eq!(config.size, PageSpec::Custom { width: 400.0, height: 600.0 });
        assert!(!config.compression);
    }

    #[test]
    fn unknown_enumerations_are_rejected() {
        let options =
            DocumentOptions { unit: Some("furlong".to_string()), ..DocumentOptions::default() };
        assert!(matches!(
            options.to_backend_config(),
            Err(DocumentError::UnsupportedFeature(_))
        ));

        let options = DocumentOptions {
            orientation: Some("diagonal".to_string()),
            ..DocumentOptions::default()
        };
        assert!(options.to_backend_config().is_err());

        let options = DocumentOptions {
            size: Some(SizeOption::Name("letter".to_string())),
            ..DocumentOptions::default()
        };
        assert!(options.to_backend_config().is_err());
    }

    #[test]
    fn options_deserialize_from_kebab_case_json() {
        let options: DocumentOptions = serde_json::from_str(
            r#"{
                "orientation": "portrait",
                "unit": "mm",
                "size": "a4",
                "compression": true,
                "margins": [15.0, 15.0, 20.0, 20.0],
                "font-path": "fonts/"
            }"#,
        )
        .unwrap();
        assert_eq!(options.margins, Some([15.0, 15.0, 20.0, 20.0]));
        assert_eq!(options.font_path.as_deref(), Some("fonts/"));
        assert_eq!(options.size, Some(SizeOption::Name("a4".to_string())));
    }
}
