//! Language Codes
//!
//! The closed set of languages the assistant speaks. Anything outside the
//! set resolves to English.

use crate::error::AssistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Hi,
    Ta,
    Te,
    Bn,
    Mr,
    Pa,
    Kn,
    Gu,
    Ml,
}

impl LanguageCode {
    /// Every supported language, in selector order.
    pub const ALL: [LanguageCode; 10] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Ta,
        LanguageCode::Te,
        LanguageCode::Bn,
        LanguageCode::Mr,
        LanguageCode::Pa,
        LanguageCode::Kn,
        LanguageCode::Gu,
        LanguageCode::Ml,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Ta => "ta",
            LanguageCode::Te => "te",
            LanguageCode::Bn => "bn",
            LanguageCode::Mr => "mr",
            LanguageCode::Pa => "pa",
            LanguageCode::Kn => "kn",
            LanguageCode::Gu => "gu",
            LanguageCode::Ml => "ml",
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Hi => "हिंदी",
            LanguageCode::Ta => "தமிழ்",
            LanguageCode::Te => "తెలుగు",
            LanguageCode::Bn => "বাংলা",
            LanguageCode::Mr => "मराठी",
            LanguageCode::Pa => "ਪੰਜਾਬੀ",
            LanguageCode::Kn => "ಕನ್ನಡ",
            LanguageCode::Gu => "ગુજરાતી",
            LanguageCode::Ml => "മലയാളം",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            LanguageCode::En => "🇺🇸",
            LanguageCode::Bn => "🇧🇩",
            _ => "🇮🇳",
        }
    }

    /// BCP-47 locale handed to speech recognition / synthesis front ends.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            LanguageCode::En => "en-US",
            LanguageCode::Hi => "hi-IN",
            LanguageCode::Ta => "ta-IN",
            LanguageCode::Te => "te-IN",
            LanguageCode::Bn => "bn-BD",
            LanguageCode::Mr => "mr-IN",
            LanguageCode::Pa => "pa-IN",
            LanguageCode::Kn => "kn-IN",
            LanguageCode::Gu => "gu-IN",
            LanguageCode::Ml => "ml-IN",
        }
    }

    /// Lenient lookup used at the engine boundary: unknown codes become English.
    pub fn resolve(code: &str) -> Self {
        match code.parse() {
            Ok(lang) => lang,
            Err(_) => {
                warn!("Unsupported language code '{}', falling back to en", code);
                LanguageCode::En
            }
        }
    }
}

impl FromStr for LanguageCode {
    type Err = AssistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LanguageCode::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == wanted)
            .ok_or_else(|| AssistError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
