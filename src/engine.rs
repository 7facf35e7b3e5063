//! Response Engine
//!
//! Classifies a farmer's message and composes the reply. Pure over its
//! immutable tables: the same message and language always give the same
//! answer, and no input string can make it fail.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::knowledge::DiseaseKnowledgeBase;
use crate::language::LanguageCode;
use crate::localization::{self, SectionLabels};
use crate::matcher::{self, Category, Classification};
use crate::responses;
use crate::translate::Glossary;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ResponseEngine {
    knowledge: DiseaseKnowledgeBase,
    glossary: Glossary,
}

impl ResponseEngine {
    pub fn new(knowledge: DiseaseKnowledgeBase, glossary: Glossary) -> Self {
        Self {
            knowledge,
            glossary,
        }
    }

    /// Engine over the built-in crop table and glossary.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(DiseaseKnowledgeBase::builtin(), Glossary::builtin()?))
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let knowledge = match &config.knowledge_base_path {
            Some(path) => DiseaseKnowledgeBase::load(path)?,
            None => DiseaseKnowledgeBase::builtin(),
        };
        info!(
            "Response engine ready ({} crops, default language {})",
            knowledge.crops().len(),
            config.default_language
        );
        Ok(Self::new(knowledge, Glossary::builtin()?))
    }

    pub fn knowledge(&self) -> &DiseaseKnowledgeBase {
        &self.knowledge
    }

    pub fn classify(&self, text: &str) -> Classification<'_> {
        matcher::classify(&self.knowledge, text)
    }

    pub fn respond(&self, text: &str, lang: LanguageCode) -> String {
        let classification = self.classify(text);
        let labels = SectionLabels::for_language(lang);

        match classification.category {
            Category::Greeting => localization::greeting(lang).to_string(),
            Category::Weather => responses::WEATHER.to_string(),
            Category::Soil => responses::SOIL.to_string(),
            Category::CropDisease => match (classification.record, classification.crop) {
                (Some(record), _) => responses::disease_report(record, &labels),
                (None, Some(crop)) => responses::crop_guide(crop),
                (None, None) => responses::CAPABILITIES.to_string(),
            },
            Category::Fertilizer => {
                responses::titled(labels.fertilization_tips, "🌿", responses::FERTILIZER_BODY)
            }
            Category::Water => {
                responses::titled(labels.water_guidelines, "💧", responses::WATER_BODY)
            }
            Category::Pest => responses::titled(labels.pest_management, "🐛", responses::PEST_BODY),
            Category::Harvest => responses::HARVEST.to_string(),
            Category::Organic => responses::ORGANIC.to_string(),
            Category::Rotation => responses::ROTATION.to_string(),
            Category::Market => responses::MARKET.to_string(),
            Category::Technology => responses::TECHNOLOGY.to_string(),
            Category::Unmatched => responses::CAPABILITIES.to_string(),
        }
    }

    pub fn translate(&self, text: &str, lang: LanguageCode) -> String {
        self.glossary.translate(text, lang)
    }
}
