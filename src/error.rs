use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Message not found: {0}")]
    MessageNotFound(String),

    #[error("Glossary pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssistError>;
