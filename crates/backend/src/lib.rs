pub mod error;
pub mod recording;
pub mod traits;
pub mod types;

pub use error::BackendError;
pub use recording::{Op, RecordingBackend};
pub use traits::PageBackend;
pub use types::PageSpec;
