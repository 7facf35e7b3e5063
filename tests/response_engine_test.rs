use krishi_setu::localization::greeting;
use krishi_setu::responses;
use krishi_setu::{
    Category, Conversation, DiseaseKnowledgeBase, EngineConfig, LanguageCode, ResponseEngine,
    Severity,
};
use std::io::Write;

fn engine() -> ResponseEngine {
    ResponseEngine::builtin().expect("built-in engine")
}

#[test]
fn greeting_tokens_return_exact_language_greeting() {
    let engine = engine();
    for text in ["hello", "Hi", "NAMASTE friend", "oh hi there"] {
        for lang in LanguageCode::ALL {
            assert_eq!(engine.respond(text, lang), greeting(lang), "{} / {}", text, lang);
        }
    }
}

#[test]
fn late_blight_in_tomato() {
    let engine = engine();
    let text = "my tomato has late blight symptoms with dark water-soaked spots";

    let classification = engine.classify(text);
    assert_eq!(classification.category, Category::CropDisease);
    let record = classification.record.expect("disease record");
    assert_eq!(record.crop, "tomato");
    assert_eq!(record.disease_name, "late_blight");
    assert_eq!(record.severity, Severity::High);

    let reply = engine.respond(text, LanguageCode::En);
    assert!(reply.contains("**LATE BLIGHT in TOMATO** 🔴"));
    assert!(reply.contains(
        "Apply copper-based fungicide like copper sulfate or copper hydroxide. Ensure good air circulation and avoid overhead watering."
    ));
    assert!(reply.contains("**Severity Level:** HIGH"));
}

#[test]
fn fertilizer_question_mentioning_a_crop() {
    let engine = engine();
    let text = "what fertilizer is best for wheat";
    assert_eq!(engine.classify(text).category, Category::Fertilizer);
    assert!(engine
        .respond(text, LanguageCode::En)
        .starts_with("**Fertilization Tips:** 🌿"));
}

#[test]
fn empty_input_gets_capability_listing() {
    let engine = engine();
    assert_eq!(engine.classify("").category, Category::Unmatched);
    assert_eq!(engine.respond("", LanguageCode::En), responses::CAPABILITIES);
    assert!(responses::CAPABILITIES
        .starts_with("I understand you're asking about farming, but I need more specific information"));
    assert!(responses::CAPABILITIES.ends_with("What specific farming challenge can I help you solve today?"));
}

#[test]
fn unknown_language_falls_back_to_english() {
    let engine = engine();
    let lang = LanguageCode::resolve("xx");
    assert_eq!(engine.respond("hello", lang), greeting(LanguageCode::En));

    let reply = engine.respond("tomato with brown lesions", lang);
    assert!(reply.starts_with("Based on your description, this appears to be"));
    assert!(reply.contains("**Treatment Recommendation:**"));
}

#[test]
fn translate_english_greeting_to_hindi() {
    let engine = engine();
    assert_eq!(
        engine.translate(greeting(LanguageCode::En), LanguageCode::Hi),
        greeting(LanguageCode::Hi)
    );
}

#[test]
fn translate_toggle_reverts_instead_of_compounding() {
    let engine = engine();
    let mut conversation = Conversation::new(LanguageCode::En);
    let id = conversation
        .send(&engine, "npk dose")
        .map(|m| m.id.clone())
        .expect("bot reply");
    let original = conversation.last_bot_message().unwrap().content.clone();
    conversation.set_language(LanguageCode::Hi);

    let first = conversation.toggle_translation(&engine, &id).unwrap().clone();
    assert!(first.is_translated());
    assert_eq!(
        first.translation.as_deref(),
        Some(engine.translate(&original, LanguageCode::Hi).as_str())
    );
    assert!(first.display_text().contains("फसल"));

    let second = conversation.toggle_translation(&engine, &id).unwrap().clone();
    assert!(!second.is_translated());
    assert_eq!(second.content, original);
    assert_eq!(second.display_text(), original);
}

#[test]
fn custom_knowledge_base_from_config() {
    let mut kb_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        kb_file,
        r#"{{"crops":[{{"name":"maize","diseases":[{{
            "crop":"maize","disease_name":"northern_leaf_blight",
            "symptoms":["cigar-shaped lesions"],
            "treatment":"Apply azoxystrobin at first sign.",
            "prevention":"Bury residue and rotate.","severity":"medium"}}]}}]}}"#
    )
    .unwrap();

    let config = EngineConfig {
        knowledge_base_path: Some(kb_file.path().to_path_buf()),
        ..EngineConfig::default()
    };
    let engine = ResponseEngine::from_config(&config).unwrap();

    let reply = engine.respond("maize with cigar-shaped lesions", LanguageCode::En);
    assert!(reply.contains("**NORTHERN LEAF BLIGHT in MAIZE** 🟡"));

    // crop without advice block: generic prompt naming the crop
    let reply = engine.respond("maize", LanguageCode::En);
    assert!(reply.starts_with("**MAIZE Information**"));

    // tomato is not in this table anymore
    assert_eq!(engine.classify("tomato").category, Category::Unmatched);
}

#[test]
fn invalid_knowledge_base_is_rejected() {
    let mut kb_file = tempfile::NamedTempFile::new().unwrap();
    write!(kb_file, r#"{{"crops":[]}}"#).unwrap();
    assert!(DiseaseKnowledgeBase::load(kb_file.path()).is_err());
}

#[test]
fn blank_symptom_cannot_hijack_crop_questions() {
    let mut kb_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        kb_file,
        r#"{{"crops":[{{"name":"maize","diseases":[{{
            "crop":"maize","disease_name":"smut","symptoms":["", "black galls"],
            "treatment":"t","prevention":"p","severity":"high"}}]}}]}}"#
    )
    .unwrap();

    let config = EngineConfig {
        knowledge_base_path: Some(kb_file.path().to_path_buf()),
        ..EngineConfig::default()
    };
    assert!(ResponseEngine::from_config(&config).is_err());
}
