pub mod config;
pub mod conversation;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod language;
pub mod localization;
pub mod matcher;
pub mod responses;
pub mod translate;

pub use config::EngineConfig;
pub use conversation::{Conversation, ConversationMessage, Sender};
pub use engine::ResponseEngine;
pub use error::{AssistError, Result};
pub use knowledge::{DiseaseKnowledgeBase, DiseaseRecord, Severity};
pub use language::LanguageCode;
pub use matcher::{Category, Classification};
