use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("render error: {0}")]
    Render(String),
}

impl ReportError {
    pub fn invalid_data<T: Into<String>>(msg: T) -> Self {
        ReportError::InvalidData(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        ReportError::Render(msg.into())
    }
}
