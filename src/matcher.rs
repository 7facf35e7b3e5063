//! Category Matchers
//!
//! Ordered keyword rules that sort a chat message into a topic. Rules are
//! evaluated top to bottom and the first one that fires wins.

use crate::knowledge::{CropEntry, DiseaseKnowledgeBase, DiseaseRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Topic a message is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Greeting,
    Weather,
    Soil,
    CropDisease,
    Fertilizer,
    Water,
    Pest,
    Harvest,
    Organic,
    Rotation,
    Market,
    Technology,
    Unmatched,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Greeting => "greeting",
            Category::Weather => "weather",
            Category::Soil => "soil",
            Category::CropDisease => "crop-disease",
            Category::Fertilizer => "fertilizer",
            Category::Water => "water",
            Category::Pest => "pest",
            Category::Harvest => "harvest",
            Category::Organic => "organic",
            Category::Rotation => "rotation",
            Category::Market => "market",
            Category::Technology => "technology",
            Category::Unmatched => "unmatched",
        };
        write!(f, "{}", name)
    }
}

/// A category that fires when any keyword occurs in the lower-cased message.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|k| message.contains(k))
    }
}

/// One step of the classification order.
#[derive(Debug, Clone, Copy)]
pub enum RuleStep {
    Keywords(KeywordRule),
    /// Crop name gate followed by symptom / disease-name matching.
    CropDisease,
}

const fn keywords(category: Category, keywords: &'static [&'static str]) -> RuleStep {
    RuleStep::Keywords(KeywordRule { category, keywords })
}

pub const RULE_ORDER: [RuleStep; 12] = [
    keywords(
        Category::Greeting,
        &["hello", "hi", "namaste", "good morning", "good evening", "hey"],
    ),
    keywords(
        Category::Weather,
        &["weather", "rain", "temperature", "climate", "season"],
    ),
    keywords(
        Category::Soil,
        &["soil", "ph", "fertility", "nutrients", "compost"],
    ),
    RuleStep::CropDisease,
    keywords(
        Category::Fertilizer,
        &["fertilizer", "nutrition", "npk", "nitrogen", "phosphorus", "potassium"],
    ),
    keywords(
        Category::Water,
        &["water", "irrigation", "watering", "drought", "moisture"],
    ),
    keywords(
        Category::Pest,
        &["pest", "insect", "bug", "aphid", "caterpillar", "beetle"],
    ),
    keywords(
        Category::Harvest,
        &["harvest", "when to pick", "ripe", "storage", "post harvest"],
    ),
    keywords(
        Category::Organic,
        &["organic", "natural", "chemical free", "sustainable"],
    ),
    keywords(
        Category::Rotation,
        &["rotation", "crop rotation", "succession"],
    ),
    keywords(
        Category::Market,
        &["price", "market", "sell", "profit", "economics"],
    ),
    keywords(
        Category::Technology,
        &["technology", "sensors", "automation", "precision farming", "drones"],
    ),
];

/// Outcome of classifying one message. Crop and record borrow from the
/// knowledge base that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification<'a> {
    pub category: Category,
    pub crop: Option<&'a CropEntry>,
    pub record: Option<&'a DiseaseRecord>,
}

impl<'a> Classification<'a> {
    fn topic(category: Category) -> Self {
        Self {
            category,
            crop: None,
            record: None,
        }
    }
}

/// First crop (table order) whose key occurs in the message.
pub fn find_crop<'a>(kb: &'a DiseaseKnowledgeBase, message: &str) -> Option<&'a CropEntry> {
    kb.crops().iter().find(|c| message.contains(c.name.as_str()))
}

/// First disease of `crop` (table order) with a matching symptom or name.
pub fn match_disease<'a>(crop: &'a CropEntry, message: &str) -> Option<&'a DiseaseRecord> {
    crop.diseases.iter().find(|record| {
        let symptom_hit = record.symptoms.iter().any(|symptom| {
            let symptom = symptom.trim().to_lowercase();
            !symptom.is_empty()
                && (symptom.split_whitespace().any(|word| message.contains(word))
                    || message.contains(symptom.as_str()))
        });
        symptom_hit || message.contains(record.spoken_name().as_str())
    })
}

/// Run the rule order over `text`.
///
/// A crop mention without a recognizable disease does not stop the scan:
/// later keyword rules still get their turn, and the crop is only reported
/// if none of them fire.
pub fn classify<'a>(kb: &'a DiseaseKnowledgeBase, text: &str) -> Classification<'a> {
    let message = text.to_lowercase();
    let mut pending_crop: Option<&'a CropEntry> = None;

    for step in RULE_ORDER.iter() {
        match step {
            RuleStep::Keywords(rule) => {
                if rule.matches(&message) {
                    debug!("Classified message as {}", rule.category);
                    return Classification::topic(rule.category);
                }
            }
            RuleStep::CropDisease => {
                let Some(crop) = find_crop(kb, &message) else {
                    continue;
                };
                if let Some(record) = match_disease(crop, &message) {
                    debug!(
                        "Classified message as {} in {}",
                        record.disease_name, crop.name
                    );
                    return Classification {
                        category: Category::CropDisease,
                        crop: Some(crop),
                        record: Some(record),
                    };
                }
                debug!("Crop '{}' mentioned without a known disease", crop.name);
                pending_crop = Some(crop);
            }
        }
    }

    match pending_crop {
        Some(crop) => Classification {
            category: Category::CropDisease,
            crop: Some(crop),
            record: None,
        },
        None => Classification::topic(Category::Unmatched),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(text: &str) -> Category {
        let kb = DiseaseKnowledgeBase::builtin();
        classify(&kb, text).category
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let order: Vec<String> = RULE_ORDER
            .iter()
            .map(|step| match step {
                RuleStep::Keywords(rule) => rule.category.to_string(),
                RuleStep::CropDisease => "crop-disease".to_string(),
            })
            .collect();
        assert_eq!(
            order,
            vec![
                "greeting", "weather", "soil", "crop-disease", "fertilizer", "water", "pest",
                "harvest", "organic", "rotation", "market", "technology"
            ]
        );
    }

    #[test]
    fn test_each_keyword_rule() {
        assert_eq!(category_of("Namaste"), Category::Greeting);
        assert_eq!(category_of("will it RAIN tomorrow"), Category::Weather);
        assert_eq!(category_of("how to make compost"), Category::Soil);
        assert_eq!(category_of("npk ratio"), Category::Fertilizer);
        assert_eq!(category_of("drought tolerance"), Category::Water);
        assert_eq!(category_of("caterpillar attack"), Category::Pest);
        assert_eq!(category_of("is my mango ripe"), Category::Harvest);
        assert_eq!(category_of("going organic"), Category::Organic);
        assert_eq!(category_of("succession planting"), Category::Rotation);
        assert_eq!(category_of("can I make a profit"), Category::Market);
        assert_eq!(category_of("farm drones"), Category::Technology);
    }

    #[test]
    fn test_every_keyword_alone() {
        // keywords that contain an earlier rule's keyword
        let shadowed = [("phosphorus", Category::Soil), ("aphid", Category::Greeting)];

        for step in RULE_ORDER.iter() {
            let RuleStep::Keywords(rule) = step else { continue };
            for keyword in rule.keywords {
                let expected = shadowed
                    .iter()
                    .find(|(k, _)| k == keyword)
                    .map_or(rule.category, |(_, category)| *category);
                assert_eq!(category_of(keyword), expected, "keyword '{}'", keyword);
                assert_eq!(category_of(&keyword.to_uppercase()), expected, "keyword '{}'", keyword);
            }
        }
    }

    #[test]
    fn test_first_match_wins() {
        // weather precedes water and soil
        assert_eq!(category_of("rain water for the soil"), Category::Weather);
        // soil ("ph" inside "phosphorus") precedes fertilizer
        assert_eq!(category_of("phosphorus dose"), Category::Soil);
        // greeting substring "hi" inside "which"
        assert_eq!(category_of("which crop should I plant"), Category::Greeting);
    }

    #[test]
    fn test_symptom_word_match() {
        let kb = DiseaseKnowledgeBase::builtin();
        let result = classify(&kb, "Tomato plants show sudden wilting");
        assert_eq!(result.category, Category::CropDisease);
        // "sudden" is not a late/early blight symptom word; bacterial wilt wins
        assert_eq!(result.record.unwrap().disease_name, "bacterial_wilt");
    }

    #[test]
    fn test_disease_name_match() {
        let kb = DiseaseKnowledgeBase::builtin();
        let result = classify(&kb, "wheat powdery mildew");
        assert_eq!(result.record.unwrap().disease_name, "powdery_mildew");

        let result = classify(&kb, "rice bacterial leaf blight");
        // "leaf" is a blast symptom word, and blast is defined first
        assert_eq!(result.record.unwrap().disease_name, "blast");
    }

    #[test]
    fn test_crop_without_disease_falls_through() {
        assert_eq!(category_of("what fertilizer is best for wheat"), Category::Fertilizer);
        assert_eq!(category_of("tomato market"), Category::Market);

        let kb = DiseaseKnowledgeBase::builtin();
        let result = classify(&kb, "tell me about tomato");
        assert_eq!(result.category, Category::CropDisease);
        assert_eq!(result.crop.unwrap().name, "tomato");
        assert!(result.record.is_none());
    }

    #[test]
    fn test_blank_symptom_never_matches() {
        let maize = CropEntry {
            name: "maize".to_string(),
            advice: None,
            diseases: vec![DiseaseRecord {
                crop: "maize".to_string(),
                disease_name: "smut".to_string(),
                symptoms: vec!["".to_string(), "  ".to_string(), "black galls".to_string()],
                treatment: "t".to_string(),
                prevention: "p".to_string(),
                severity: crate::knowledge::Severity::High,
            }],
        };
        assert!(match_disease(&maize, "how much fertilizer for maize").is_none());
        assert_eq!(
            match_disease(&maize, "maize with black galls").map(|r| r.disease_name.as_str()),
            Some("smut")
        );
    }

    #[test]
    fn test_empty_is_unmatched() {
        assert_eq!(category_of(""), Category::Unmatched);
        assert_eq!(category_of("   "), Category::Unmatched);
        assert_eq!(category_of("mango"), Category::Unmatched);
    }
}
