/// The translated page-size value handed to [`PageBackend::add_page`].
///
/// `Auto` keeps the backend's current page size; `Named` is a format the
/// backend knows by name ("A4"); `Custom` is an explicit dimension pair.
///
/// [`PageBackend::add_page`]: crate::PageBackend::add_page
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageSpec {
    #[default]
    Auto,
    Named(String),
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSpec {
    pub fn named(name: impl Into<String>) -> Self {
        PageSpec::Named(name.into())
    }
}
