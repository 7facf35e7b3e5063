//! Crop / Disease Knowledge Base
//!
//! Per-crop disease records (symptoms, treatment, prevention, severity) and
//! per-crop cultivation advice. Crops and diseases keep their definition
//! order; matching walks them in that order.

use crate::error::{AssistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::High => "🔴",
            Severity::Medium => "🟡",
            Severity::Low => "🟢",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub crop: String,
    pub disease_name: String,
    pub symptoms: Vec<String>,
    pub treatment: String,
    pub prevention: String,
    pub severity: Severity,
}

impl DiseaseRecord {
    /// Disease key with underscores turned into spaces ("late_blight" -> "late blight").
    pub fn spoken_name(&self) -> String {
        self.disease_name.replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropEntry {
    pub name: String,
    /// Cultivation guide returned when the crop is mentioned without a recognizable disease.
    #[serde(default)]
    pub advice: Option<String>,
    pub diseases: Vec<DiseaseRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseKnowledgeBase {
    crops: Vec<CropEntry>,
}

impl DiseaseKnowledgeBase {
    /// Build a knowledge base from crop entries, checking the table invariants.
    pub fn new(crops: Vec<CropEntry>) -> Result<Self> {
        let kb = Self { crops };
        kb.validate()?;
        Ok(kb)
    }

    /// Load a knowledge base from a JSON document of the form `{"crops": [...]}`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AssistError::KnowledgeBase(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let kb = Self::from_json(&content).map_err(|e| match e {
            AssistError::Json(err) => {
                AssistError::KnowledgeBase(format!("Failed to parse {}: {}", path.display(), err))
            }
            other => other,
        })?;
        info!(
            "Loaded knowledge base from {} ({} crops)",
            path.display(),
            kb.crops.len()
        );
        Ok(kb)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let kb: DiseaseKnowledgeBase = serde_json::from_str(content)?;
        kb.validate()?;
        Ok(kb)
    }

    pub fn crops(&self) -> &[CropEntry] {
        &self.crops
    }

    pub fn crop(&self, name: &str) -> Option<&CropEntry> {
        self.crops.iter().find(|c| c.name == name)
    }

    pub fn disease(&self, crop: &str, disease: &str) -> Option<&DiseaseRecord> {
        self.crop(crop)?
            .diseases
            .iter()
            .find(|d| d.disease_name == disease)
    }

    fn validate(&self) -> Result<()> {
        if self.crops.is_empty() {
            return Err(AssistError::KnowledgeBase("No crops defined".to_string()));
        }
        for crop in &self.crops {
            if !is_lower_key(&crop.name) {
                return Err(AssistError::KnowledgeBase(format!(
                    "Crop key '{}' must be non-empty lowercase ASCII",
                    crop.name
                )));
            }
            if crop.diseases.is_empty() {
                return Err(AssistError::KnowledgeBase(format!(
                    "Crop '{}' has no diseases",
                    crop.name
                )));
            }
            for record in &crop.diseases {
                if record.crop != crop.name {
                    return Err(AssistError::KnowledgeBase(format!(
                        "Disease '{}' is filed under '{}' but names crop '{}'",
                        record.disease_name, crop.name, record.crop
                    )));
                }
                if !is_lower_key(&record.disease_name) {
                    return Err(AssistError::KnowledgeBase(format!(
                        "Disease key '{}' must be non-empty lowercase ASCII",
                        record.disease_name
                    )));
                }
                if record.symptoms.is_empty() {
                    return Err(AssistError::KnowledgeBase(format!(
                        "Disease '{}' of '{}' has no symptoms",
                        record.disease_name, crop.name
                    )));
                }
                // a blank symptom is a substring of every message
                if record.symptoms.iter().any(|s| s.trim().is_empty()) {
                    return Err(AssistError::KnowledgeBase(format!(
                        "Disease '{}' of '{}' has a blank symptom",
                        record.disease_name, crop.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// The tomato / rice / wheat table shipped with the assistant.
    pub fn builtin() -> Self {
        Self {
            crops: vec![
                CropEntry {
                    name: "tomato".to_string(),
                    advice: Some(TOMATO_ADVICE.to_string()),
                    diseases: vec![
                        record(
                            "tomato",
                            "late_blight",
                            &["dark water-soaked spots", "white fungal growth", "brown lesions", "leaf yellowing"],
                            "Apply copper-based fungicide like copper sulfate or copper hydroxide. Ensure good air circulation and avoid overhead watering.",
                            "Use resistant varieties, practice crop rotation, maintain proper spacing between plants.",
                            Severity::High,
                        ),
                        record(
                            "tomato",
                            "early_blight",
                            &["circular brown spots", "target-like rings", "yellowing leaves", "defoliation"],
                            "Spray with fungicides containing chlorothalonil or mancozeb. Remove affected leaves immediately.",
                            "Avoid overhead irrigation, provide adequate spacing, use mulch to prevent soil splashing.",
                            Severity::Medium,
                        ),
                        record(
                            "tomato",
                            "bacterial_wilt",
                            &["sudden wilting", "yellow leaves", "brown vascular tissue", "plant collapse"],
                            "Remove infected plants immediately. Apply copper-based bactericide to surrounding plants.",
                            "Use certified disease-free seeds, practice crop rotation, improve soil drainage.",
                            Severity::High,
                        ),
                    ],
                },
                CropEntry {
                    name: "rice".to_string(),
                    advice: Some(RICE_ADVICE.to_string()),
                    diseases: vec![
                        record(
                            "rice",
                            "blast",
                            &["diamond-shaped lesions", "gray spots with brown borders", "leaf death", "panicle infection"],
                            "Apply tricyclazole or carbendazim fungicide. Increase potassium fertilization.",
                            "Use resistant varieties, avoid excessive nitrogen, maintain proper water management.",
                            Severity::High,
                        ),
                        record(
                            "rice",
                            "bacterial_leaf_blight",
                            &["water-soaked lesions", "yellow halos", "leaf drying", "systemic infection"],
                            "Spray copper-based bactericides. Apply streptomycin if available.",
                            "Use resistant varieties, avoid injury to plants, manage water levels properly.",
                            Severity::Medium,
                        ),
                    ],
                },
                CropEntry {
                    name: "wheat".to_string(),
                    advice: Some(WHEAT_ADVICE.to_string()),
                    diseases: vec![
                        record(
                            "wheat",
                            "rust",
                            &["orange pustules", "reddish-brown spots", "leaf yellowing", "reduced yield"],
                            "Apply propiconazole or tebuconazole fungicide. Use systemic fungicides for severe infections.",
                            "Plant rust-resistant varieties, avoid late sowing, maintain proper nutrition.",
                            Severity::Medium,
                        ),
                        record(
                            "wheat",
                            "powdery_mildew",
                            &["white powdery growth", "leaf yellowing", "stunted growth", "reduced photosynthesis"],
                            "Spray with sulfur-based fungicides or triadimefon. Ensure good air circulation.",
                            "Plant resistant varieties, avoid overcrowding, maintain moderate moisture.",
                            Severity::Low,
                        ),
                    ],
                },
            ],
        }
    }
}

impl Default for DiseaseKnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_lower_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == ' ' || c == '-')
}

fn record(
    crop: &str,
    disease_name: &str,
    symptoms: &[&str],
    treatment: &str,
    prevention: &str,
    severity: Severity,
) -> DiseaseRecord {
    DiseaseRecord {
        crop: crop.to_string(),
        disease_name: disease_name.to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        treatment: treatment.to_string(),
        prevention: prevention.to_string(),
        severity,
    }
}

const TOMATO_ADVICE: &str = "**Tomato Cultivation Guide** 🍅
- **Planting**: Warm season crop, plant after last frost
- **Watering**: Deep, consistent watering at soil level
- **Support**: Use stakes or cages for vine support
- **Common issues**: Blight, wilt, blossom end rot
- **Harvest**: Pick when fruits are firm and fully colored";

const RICE_ADVICE: &str = "**Rice Cultivation Guide** 🌾
- **Planting**: Requires flooded fields or consistent moisture
- **Varieties**: Choose based on local climate and market demand
- **Water management**: Maintain 2-5cm water depth in paddy
- **Common issues**: Blast, bacterial blight, stem borer
- **Harvest**: When grains are golden and firm";

const WHEAT_ADVICE: &str = "**Wheat Cultivation Guide** 🌾
- **Planting**: Cool season crop, plant in fall or early spring
- **Soil**: Well-drained, fertile soil with pH 6.0-7.5
- **Fertilization**: High nitrogen requirement, split applications
- **Common issues**: Rust, powdery mildew, aphids
- **Harvest**: When grain moisture is 12-14%";

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_order_and_invariants() {
        let kb = DiseaseKnowledgeBase::builtin();
        let names: Vec<&str> = kb.crops().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["tomato", "rice", "wheat"]);
        assert!(kb.validate().is_ok());

        let tomato: Vec<&str> = kb.crops()[0]
            .diseases
            .iter()
            .map(|d| d.disease_name.as_str())
            .collect();
        assert_eq!(tomato, vec!["late_blight", "early_blight", "bacterial_wilt"]);
    }

    #[test]
    fn test_lookup() {
        let kb = DiseaseKnowledgeBase::builtin();
        let blight = kb.disease("tomato", "late_blight").unwrap();
        assert_eq!(blight.severity, Severity::High);
        assert_eq!(blight.spoken_name(), "late blight");
        assert!(kb.disease("wheat", "late_blight").is_none());
        assert!(kb.crop("maize").is_none());
    }

    #[test]
    fn test_severity_emoji() {
        assert_eq!(Severity::High.emoji(), "🔴");
        assert_eq!(Severity::Medium.emoji(), "🟡");
        assert_eq!(Severity::Low.emoji(), "🟢");
    }

    #[test]
    fn test_from_json_rejects_crop_without_diseases() {
        let err = DiseaseKnowledgeBase::from_json(r#"{"crops":[{"name":"maize","diseases":[]}]}"#)
            .unwrap_err();
        assert!(matches!(err, AssistError::KnowledgeBase(_)));
    }

    #[test]
    fn test_from_json_rejects_empty_symptoms() {
        let json = r#"{"crops":[{"name":"maize","diseases":[{
            "crop":"maize","disease_name":"smut","symptoms":[],
            "treatment":"t","prevention":"p","severity":"low"}]}]}"#;
        let err = DiseaseKnowledgeBase::from_json(json).unwrap_err();
        assert!(matches!(err, AssistError::KnowledgeBase(ref m) if m.contains("no symptoms")));
    }

    #[test]
    fn test_from_json_rejects_blank_symptom() {
        let json = r#"{"crops":[{"name":"maize","diseases":[{
            "crop":"maize","disease_name":"smut","symptoms":["", "black galls"],
            "treatment":"t","prevention":"p","severity":"high"}]}]}"#;
        let err = DiseaseKnowledgeBase::from_json(json).unwrap_err();
        assert!(matches!(err, AssistError::KnowledgeBase(ref m) if m.contains("blank symptom")));

        let json = json.replace(r#""""#, r#""   ""#);
        assert!(DiseaseKnowledgeBase::from_json(&json).is_err());
    }

    #[test]
    fn test_from_json_rejects_uppercase_key() {
        let json = r#"{"crops":[{"name":"Maize","diseases":[{
            "crop":"Maize","disease_name":"smut","symptoms":["black galls"],
            "treatment":"t","prevention":"p","severity":"low"}]}]}"#;
        assert!(DiseaseKnowledgeBase::from_json(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"crops":[{{"name":"maize","diseases":[{{
                "crop":"maize","disease_name":"leaf_blight","symptoms":["long grey lesions"],
                "treatment":"Apply mancozeb.","prevention":"Rotate crops.","severity":"medium"}}]}}]}}"#
        )
        .unwrap();

        let kb = DiseaseKnowledgeBase::load(file.path()).unwrap();
        assert_eq!(kb.crops().len(), 1);
        assert!(kb.crops()[0].advice.is_none());
        assert_eq!(kb.disease("maize", "leaf_blight").unwrap().severity, Severity::Medium);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DiseaseKnowledgeBase::load("/nonexistent/kb.json").unwrap_err();
        assert!(matches!(err, AssistError::KnowledgeBase(_)));
    }
}
