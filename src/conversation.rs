//! Conversation History
//!
//! The chat transcript is owned by the caller, never by the engine. This
//! module holds it and implements the translate toggle on bot messages.

use crate::engine::ResponseEngine;
use crate::error::{AssistError, Result};
use crate::language::LanguageCode;
use crate::localization;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Id of the greeting message every conversation starts with.
pub const WELCOME_MESSAGE_ID: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_content: Option<String>,
}

impl ConversationMessage {
    fn new(id: String, content: String, sender: Sender, language: Option<LanguageCode>) -> Self {
        Self {
            id,
            content,
            sender,
            timestamp: Utc::now(),
            language,
            translation: None,
            original_content: None,
        }
    }

    pub fn is_translated(&self) -> bool {
        self.translation.is_some() && self.original_content.is_some()
    }

    /// What a front end should show: the translation while toggled on.
    pub fn display_text(&self) -> &str {
        self.translation.as_deref().unwrap_or(&self.content)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    language: LanguageCode,
    messages: Vec<ConversationMessage>,
}

impl Conversation {
    pub fn new(language: LanguageCode) -> Self {
        let mut conversation = Self {
            language,
            messages: Vec::new(),
        };
        conversation.seed_welcome();
        conversation
    }

    fn seed_welcome(&mut self) {
        self.messages.push(ConversationMessage::new(
            WELCOME_MESSAGE_ID.to_string(),
            localization::greeting(self.language).to_string(),
            Sender::Bot,
            Some(self.language),
        ));
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn last_bot_message(&self) -> Option<&ConversationMessage> {
        self.messages.iter().rev().find(|m| m.sender == Sender::Bot)
    }

    /// Record the user's message and the engine's reply. Blank input is ignored.
    pub fn send(&mut self, engine: &ResponseEngine, text: &str) -> Option<&ConversationMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ConversationMessage::new(
            Uuid::new_v4().to_string(),
            text.to_string(),
            Sender::User,
            None,
        ));

        let reply = engine.respond(text, self.language);
        self.messages.push(ConversationMessage::new(
            Uuid::new_v4().to_string(),
            reply,
            Sender::Bot,
            Some(self.language),
        ));
        self.messages.last()
    }

    /// Translate a message into the conversation language, or revert it if it
    /// is already showing a translation. Two calls restore the original state.
    pub fn toggle_translation(
        &mut self,
        engine: &ResponseEngine,
        id: &str,
    ) -> Result<&ConversationMessage> {
        let language = self.language;
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AssistError::MessageNotFound(id.to_string()))?;

        if message.is_translated() {
            debug!("Reverting translation of message {}", id);
            message.translation = None;
            message.original_content = None;
        } else {
            debug!("Translating message {} into {}", id, language);
            message.translation = Some(engine.translate(&message.content, language));
            message.original_content = Some(message.content.clone());
        }
        Ok(message)
    }

    /// Switch language; only the welcome message is re-localized.
    pub fn set_language(&mut self, language: LanguageCode) {
        self.language = language;
        if let Some(welcome) = self
            .messages
            .iter_mut()
            .find(|m| m.id == WELCOME_MESSAGE_ID && m.sender == Sender::Bot)
        {
            welcome.content = localization::greeting(language).to_string();
            welcome.language = Some(language);
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.seed_welcome();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ResponseEngine {
        ResponseEngine::builtin().unwrap()
    }

    #[test]
    fn test_starts_with_localized_welcome() {
        let conversation = Conversation::new(LanguageCode::Te);
        let messages = conversation.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, WELCOME_MESSAGE_ID);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].content, localization::greeting(LanguageCode::Te));
    }

    #[test]
    fn test_send_appends_user_and_bot() {
        let engine = engine();
        let mut conversation = Conversation::new(LanguageCode::En);
        let reply = conversation.send(&engine, "tell me about crop rotation").unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert!(reply.content.starts_with("**Crop Rotation Benefits & Strategies**"));

        let messages = conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].content, "tell me about crop rotation");
        assert_ne!(messages[1].id, messages[2].id);
    }

    #[test]
    fn test_blank_send_is_ignored() {
        let engine = engine();
        let mut conversation = Conversation::new(LanguageCode::En);
        assert!(conversation.send(&engine, "   ").is_none());
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn test_toggle_translation_round_trip() {
        let engine = engine();
        let mut conversation = Conversation::new(LanguageCode::En);
        conversation.set_language(LanguageCode::Hi);

        let id = conversation.send(&engine, "drip irrigation").unwrap().id.clone();
        let original = conversation.last_bot_message().unwrap().content.clone();

        let translated = conversation.toggle_translation(&engine, &id).unwrap();
        assert!(translated.is_translated());
        assert_eq!(translated.original_content.as_deref(), Some(original.as_str()));
        assert!(translated.display_text().contains("पानी"));

        let reverted = conversation.toggle_translation(&engine, &id).unwrap();
        assert!(!reverted.is_translated());
        assert_eq!(reverted.display_text(), original);
    }

    #[test]
    fn test_toggle_unknown_message() {
        let engine = engine();
        let mut conversation = Conversation::new(LanguageCode::En);
        let err = conversation.toggle_translation(&engine, "missing").unwrap_err();
        assert!(matches!(err, AssistError::MessageNotFound(_)));
    }

    #[test]
    fn test_set_language_relocalizes_welcome_only() {
        let engine = engine();
        let mut conversation = Conversation::new(LanguageCode::En);
        conversation.send(&engine, "hello");
        conversation.set_language(LanguageCode::Pa);

        let messages = conversation.messages();
        assert_eq!(messages[0].content, localization::greeting(LanguageCode::Pa));
        // earlier replies keep the language they were produced in
        assert_eq!(messages[2].content, localization::greeting(LanguageCode::En));
    }

    #[test]
    fn test_clear_reseeds_welcome() {
        let engine = engine();
        let mut conversation = Conversation::new(LanguageCode::Kn);
        conversation.send(&engine, "market prices");
        conversation.clear();
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].id, WELCOME_MESSAGE_ID);
    }
}
