//! Styled document building over an abstract page-drawing backend.
//!
//! `vellum` layers a CSS-like cascade onto a minimal stateful drawing
//! contract: named style rules ([`Stylesheet`]) and inline styles resolve to
//! an attribute bag ([`Style`]), attribute translators turn that bag into
//! the backend's literal parameter codes, and the [`DocumentAdapter`] ties
//! cascade, geometry, and backend state together behind margin-relative
//! coordinates.
//!
//! ```
//! use vellum::{DocumentAdapter, RecordingBackend, Region, Style};
//!
//! let mut doc = DocumentAdapter::new(RecordingBackend::new());
//! doc.h1("Invoice", None)?;
//! doc.p("Thank you for your order.", None)?;
//! doc.cell(Region::sized(40, 8), "Total", Some(&Style::new().with("border", true)))?;
//! # Ok::<(), vellum::DocumentError>(())
//! ```

pub mod document;
pub mod error;
pub mod layout;
pub mod options;
pub mod resolver;
pub mod translate;

pub use document::{DocumentAdapter, Region};
pub use error::DocumentError;
pub use layout::CursorLayoutEngine;
pub use options::{BackendConfig, DocumentOptions, SizeOption};
pub use resolver::{default_stylesheet, StyleResolver};

pub use vellum_backend::{BackendError, Op, PageBackend, PageSpec, RecordingBackend};
pub use vellum_style::{attr, Dimension, Style, StyleParseError, StyleValue, Stylesheet};
pub use vellum_types::Color;
