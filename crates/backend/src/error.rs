use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Drawing error: {0}")]
    Draw(String),
    #[error("Output error: {0}")]
    Output(String),
}

impl From<&str> for BackendError {
    fn from(s: &str) -> Self {
        BackendError::Draw(s.to_string())
    }
}
