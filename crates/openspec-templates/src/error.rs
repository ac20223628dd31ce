use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("invalid slash command id: {0}")]
    InvalidCommandId(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
