//! Glossary Translation
//!
//! Best-effort localization of an already produced response: exact phrase
//! replacement, then whole-word glossary terms, then the weather / soil
//! openings. Anything else stays English. There is no path back to English;
//! callers keep the original text around instead.

use crate::error::Result;
use crate::language::LanguageCode;
use regex::{NoExpand, Regex};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GlossaryEntry {
    pub english: String,
    translations: HashMap<LanguageCode, String>,
}

impl GlossaryEntry {
    pub fn new(english: &str, translations: &[(LanguageCode, &str)]) -> Self {
        Self {
            english: english.to_string(),
            translations: translations
                .iter()
                .map(|(lang, text)| (*lang, text.to_string()))
                .collect(),
        }
    }

    pub fn translation(&self, lang: LanguageCode) -> Option<&str> {
        self.translations.get(&lang).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
struct Term {
    entry: GlossaryEntry,
    pattern: Regex,
}

/// Title line plus leading sentence of a canned topic response.
#[derive(Debug, Clone)]
pub struct Opening {
    emoji: &'static str,
    /// Substrings that mark a text as belonging to this topic.
    markers: &'static [&'static str],
    titles: HashMap<LanguageCode, &'static str>,
    leads: HashMap<LanguageCode, &'static str>,
}

impl Opening {
    fn render(&self, lang: LanguageCode) -> String {
        let pick = |table: &HashMap<LanguageCode, &'static str>| {
            table
                .get(&lang)
                .or_else(|| table.get(&LanguageCode::En))
                .copied()
                .unwrap_or_default()
        };
        format!("**{}** {}\n\n{}", pick(&self.titles), self.emoji, pick(&self.leads))
    }

    fn apply(&self, text: &str, lang: LanguageCode) -> Option<String> {
        let canned = self.render(LanguageCode::En);
        if text.contains(&canned) {
            return Some(text.replacen(&canned, &self.render(lang), 1));
        }
        if self.markers.iter().any(|m| text.contains(m)) {
            return Some(format!("{}...", self.render(lang)));
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct Glossary {
    phrases: Vec<GlossaryEntry>,
    terms: Vec<Term>,
    openings: Vec<Opening>,
}

impl Glossary {
    pub fn new(phrases: Vec<GlossaryEntry>, terms: Vec<GlossaryEntry>) -> Result<Self> {
        let terms = terms
            .into_iter()
            .map(|entry| -> Result<Term> {
                let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&entry.english)))?;
                Ok(Term { entry, pattern })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            phrases,
            terms,
            openings: builtin_openings(),
        })
    }

    /// Greeting phrase, agricultural terms and the weather / soil openings.
    pub fn builtin() -> Result<Self> {
        let entries = |table: &[TermTable]| -> Vec<GlossaryEntry> {
            table
                .iter()
                .map(|(english, translations)| GlossaryEntry::new(english, translations))
                .collect()
        };
        Self::new(entries(BUILTIN_PHRASES), entries(BUILTIN_TERMS))
    }

    pub fn translate(&self, text: &str, lang: LanguageCode) -> String {
        if let Some(phrase) = self.phrases.iter().find(|p| p.english == text) {
            if let Some(translated) = phrase.translation(lang) {
                debug!("Exact phrase translation into {}", lang);
                return translated.to_string();
            }
        }

        let mut working = text.to_string();
        for term in &self.terms {
            if let Some(translated) = term.entry.translation(lang) {
                working = term
                    .pattern
                    .replace_all(&working, NoExpand(translated))
                    .into_owned();
            }
        }
        if working != text {
            debug!("Glossary term translation into {}", lang);
            return working;
        }

        for opening in &self.openings {
            if let Some(translated) = opening.apply(text, lang) {
                debug!("Opening translation into {}", lang);
                return translated;
            }
        }

        text.to_string()
    }
}

type TermTable = (&'static str, &'static [(LanguageCode, &'static str)]);

/// Exact-match phrases. Kept apart from the label tables so edits there do
/// not change what the glossary produces.
const BUILTIN_PHRASES: &[TermTable] = &[
    (
        "Hello! I'm your AI farming assistant. I can help you identify crop diseases, recommend treatments, and provide farming advice. What would you like to know?",
        &[
            (LanguageCode::Hi, "नमस्ते! मैं आपका AI कृषि सहायक हूं। मैं फसल रोगों की पहचान, उपचार सुझाने और कृषि सलाह प्रदान करने में आपकी मदद कर सकता हूं। आप क्या जानना चाहते हैं?"),
            (LanguageCode::Ta, "வணக்கம்! நான் உங்களின் AI விவசாய உதவியாளர். பயிர் நோய்களைக் கண்டறிதல், சிகிச்சையைப் பரிந்துரைத்தல் மற்றும் விவசாய ஆலோசனை வழங்குதல் ஆகியவற்றில் உங்களுக்கு உதவ முடியும். நீங்கள் என்ன அறிய விரும்புகிறீர்கள்?"),
            (LanguageCode::Te, "నమస్కారం! నేను మీ AI వ్యవసాయ సహాయకుడను। పంట వ్యాధులను గుర్తించడం, చికిత్సలను సిఫార్సు చేయడం మరియు వ్యవసాయ సలహాలు అందించడంలో మీకు సహాయపడగలను। మీరు ఏమి తెలుసుకోవాలనుకుంటున్నారు?"),
            (LanguageCode::Bn, "হ্যালো! আমি আপনার AI কৃষি সহায়ক। আমি ফসলের রোগ চিহ্নিতকরণ, চিকিৎসার সুপারিশ এবং কৃষি পরামর্শ প্রদানে আপনাকে সাহায্য করতে পারি। আপনি কী জানতে চান?"),
            (LanguageCode::Mr, "नमस्कार! मी तुमचा AI शेती सहाय्यक आहे. मी पिकांच्या रोगांची ओळख, उपचारांची शिफारस आणि शेतीविषयक सल्ला देण्यात तुम्हाला मदत करू शकतो. तुम्हाला काय जाणून घ्यायचे आहे?"),
            (LanguageCode::Pa, "ਸਤ ਸ੍ਰੀ ਅਕਾਲ! ਮੈਂ ਤੁਹਾਡਾ AI ਖੇਤੀ ਸਹਾਇਕ ਹਾਂ। ਮੈਂ ਫਸਲ ਦੀਆਂ ਬਿਮਾਰੀਆਂ ਦੀ ਪਛਾਣ, ਇਲਾਜ ਦੀ ਸਿਫਾਰਿਸ਼ ਅਤੇ ਖੇਤੀ ਸਲਾਹ ਪ੍ਰਦਾਨ ਕਰਨ ਵਿੱਚ ਤੁਹਾਡੀ ਮਦਦ ਕਰ ਸਕਦਾ ਹਾਂ। ਤੁਸੀਂ ਕੀ ਜਾਣਨਾ ਚਾਹੁੰਦੇ ਹੋ?"),
            (LanguageCode::Kn, "ನಮಸ್ಕಾರ! ನಾನು ನಿಮ್ಮ AI ಕೃಷಿ ಸಹಾಯಕ. ಬೆಳೆ ರೋಗಗಳ ಗುರುತಿಸುವಿಕೆ, ಚಿಕಿತ್ಸೆಯ ಶಿಫಾರಸುಗಳು ಮತ್ತು ಕೃಷಿ ಸಲಹೆ ನೀಡುವಲ್ಲಿ ನಿಮಗೆ ಸಹಾಯ ಮಾಡಬಲ್ಲೆ। ನೀವು ಏನು ತಿಳಿಯಲು ಬಯಸುತ್ತೀರಿ?"),
            (LanguageCode::Gu, "નમસ્તે! હું તમારો AI કૃષિ સહાયક છું. હું પાકના રોગોની ઓળખ, સારવારની ભલામણો અને કૃષિ સલાહ આપવામાં તમારી સહાય કરી શકું છું. તમે શું જાણવા માંગો છો?"),
            (LanguageCode::Ml, "നമസ്കാരം! ഞാൻ നിങ്ങളുടെ AI കൃഷി സഹായിയാണ്. വിള രോഗങ്ങൾ തിരിച്ചറിയൽ, ചികിത്സാ ശുപാർശകൾ, കൃഷി ഉപദേശം എന്നിവയിൽ നിങ്ങളെ സഹായിക്കാൻ എനിക്ക് കഴിയും. നിങ്ങൾ എന്താണ് അറിയാൻ ആഗ്രഹിക്കുന്നത്?"),
        ],
    ),
];

const BUILTIN_TERMS: &[TermTable] = &[
    ("crop", &[(LanguageCode::Hi, "फसल"), (LanguageCode::Ta, "பயிர்"), (LanguageCode::Te, "పంట"), (LanguageCode::Bn, "ফসল"), (LanguageCode::Mr, "पीक"), (LanguageCode::Pa, "ਫਸਲ"), (LanguageCode::Kn, "ಬೆಳೆ"), (LanguageCode::Gu, "પાક"), (LanguageCode::Ml, "വിള")]),
    ("disease", &[(LanguageCode::Hi, "रोग"), (LanguageCode::Ta, "நோய்"), (LanguageCode::Te, "వ్యాధి"), (LanguageCode::Bn, "রোগ"), (LanguageCode::Mr, "रोग"), (LanguageCode::Pa, "ਬਿਮਾਰੀ"), (LanguageCode::Kn, "ರೋಗ"), (LanguageCode::Gu, "રોગ"), (LanguageCode::Ml, "രോഗം")]),
    ("treatment", &[(LanguageCode::Hi, "उपचार"), (LanguageCode::Ta, "சிகிச்சை"), (LanguageCode::Te, "చికిత్స"), (LanguageCode::Bn, "চিকিৎসা"), (LanguageCode::Mr, "उपचार"), (LanguageCode::Pa, "ਇਲਾਜ"), (LanguageCode::Kn, "ಚಿಕಿತ್ಸೆ"), (LanguageCode::Gu, "સારવાર"), (LanguageCode::Ml, "ചികിത്സ")]),
    ("prevention", &[(LanguageCode::Hi, "रोकथाम"), (LanguageCode::Ta, "தடுப்பு"), (LanguageCode::Te, "నివారణ"), (LanguageCode::Bn, "প্রতিরোধ"), (LanguageCode::Mr, "प्रतिबंध"), (LanguageCode::Pa, "ਬਚਾਅ"), (LanguageCode::Kn, "ತಡೆಗಟ್ಟುವಿಕೆ"), (LanguageCode::Gu, "નિવારણ"), (LanguageCode::Ml, "പ്രതിരോധം")]),
    ("fertilizer", &[(LanguageCode::Hi, "उर्वरक"), (LanguageCode::Ta, "உரம்"), (LanguageCode::Te, "ఎరువులు"), (LanguageCode::Bn, "সার"), (LanguageCode::Mr, "खत"), (LanguageCode::Pa, "ਖਾਦ"), (LanguageCode::Kn, "ಗೊಬ್ಬರ"), (LanguageCode::Gu, "ખાતર"), (LanguageCode::Ml, "വളം")]),
    ("water", &[(LanguageCode::Hi, "पानी"), (LanguageCode::Ta, "நீர்"), (LanguageCode::Te, "నీరు"), (LanguageCode::Bn, "পানি"), (LanguageCode::Mr, "पाणी"), (LanguageCode::Pa, "ਪਾਣੀ"), (LanguageCode::Kn, "ನೀರು"), (LanguageCode::Gu, "પાણી"), (LanguageCode::Ml, "വെള്ളം")]),
    ("soil", &[(LanguageCode::Hi, "मिट्टी"), (LanguageCode::Ta, "மண்"), (LanguageCode::Te, "నేల"), (LanguageCode::Bn, "মাটি"), (LanguageCode::Mr, "माती"), (LanguageCode::Pa, "ਮਿੱਟੀ"), (LanguageCode::Kn, "ಮಣ್ಣು"), (LanguageCode::Gu, "માટી"), (LanguageCode::Ml, "മണ്ണ്")]),
];

fn table(entries: &[(LanguageCode, &'static str)]) -> HashMap<LanguageCode, &'static str> {
    entries.iter().copied().collect()
}

fn builtin_openings() -> Vec<Opening> {
    vec![
        Opening {
            emoji: "🌤\u{fe0f}",
            markers: &["Weather & Climate Information", "weather"],
            titles: table(&[
                (LanguageCode::En, "Weather & Climate Information"),
                (LanguageCode::Hi, "मौसम और जलवायु की जानकारी"),
                (LanguageCode::Ta, "வானிலை மற்றும் காலநிலை தகவல்"),
                (LanguageCode::Te, "వాతావరణం మరియు వాతావరణ సమాచారం"),
                (LanguageCode::Bn, "আবহাওয়া ও জলবায়ু তথ্য"),
                (LanguageCode::Mr, "हवामान आणि हवामान माहिती"),
                (LanguageCode::Pa, "ਮੌਸਮ ਅਤੇ ਜਲਵਾਯੂ ਦੀ ਜਾਣਕਾਰੀ"),
                (LanguageCode::Kn, "ಹವಾಮಾನ ಮತ್ತು ಹವಾಮಾನ ಮಾಹಿತಿ"),
                (LanguageCode::Gu, "હવામાન અને આબોહવા માહિતી"),
                (LanguageCode::Ml, "കാലാവസ്ഥയും കാലാവസ്ഥാ വിവരങ്ങളും"),
            ]),
            leads: table(&[
                (LanguageCode::En, "For optimal crop growth, consider these weather factors"),
                (LanguageCode::Hi, "इष्टतम फसल विकास के लिए, इन मौसम कारकों पर विचार करें"),
                (LanguageCode::Ta, "உகந்த பயிர் வளர்ச்சிக்கு, இந்த வானிலை காரணிகளை கருத்தில் கொள்ளுங்கள்"),
                (LanguageCode::Te, "సరైన పంట వృద్ధి కోసం, ఈ వాతావరణ కారకాలను పరిశీలించండి"),
                (LanguageCode::Bn, "সর্বোত্তম শস্য বৃদ্ধির জন্য, এই আবহাওয়া কারণগুলি বিবেচনা করুন"),
                (LanguageCode::Mr, "इष्टतम पीक वाढीसाठी, या हवामान घटकांचा विचार करा"),
                (LanguageCode::Pa, "ਸਰਵੋਤਮ ਫਸਲ ਵਿਕਾਸ ਲਈ, ਇਨ੍ਹਾਂ ਮੌਸਮ ਕਾਰਕਾਂ ਤੇ ਵਿਚਾਰ ਕਰੋ"),
                (LanguageCode::Kn, "ಅತ್ಯುತ್ತಮ ಬೆಳೆ ಬೆಳವಣಿಗೆಗಾಗಿ, ಈ ಹವಾಮಾನ ಅಂಶಗಳನ್ನು ಪರಿಗಣಿಸಿ"),
                (LanguageCode::Gu, "આદર્શ પાક વૃદ્ધિ માટે, આ હવામાન પરિબળોનો વિચાર કરો"),
                (LanguageCode::Ml, "ഉത്തമ വിള വളർച്ചയ്ക്കായി, ഈ കാലാവസ്ഥാ ഘടകങ്ങൾ പരിഗണിക്കുക"),
            ]),
        },
        Opening {
            emoji: "🌱",
            markers: &["Soil Health", "soil"],
            titles: table(&[
                (LanguageCode::En, "Soil Health & Management"),
                (LanguageCode::Hi, "मृदा स्वास्थ्य और प्रबंधन"),
                (LanguageCode::Ta, "மண் ஆரோக்கியம் மற்றும் மேலாண்மை"),
                (LanguageCode::Te, "నేల ఆరోగ్యం మరియు నిర్వహణ"),
                (LanguageCode::Bn, "মাটির স্বাস্থ্য ও ব্যবস্থাপনা"),
                (LanguageCode::Mr, "माती आरोग्य आणि व्यवस्थापन"),
                (LanguageCode::Pa, "ਮਿੱਟੀ ਦੀ ਸਿਹਤ ਅਤੇ ਪ੍ਰਬੰਧਨ"),
                (LanguageCode::Kn, "ಮಣ್ಣಿನ ಆರೋಗ್ಯ ಮತ್ತು ನಿರ್ವಹಣೆ"),
                (LanguageCode::Gu, "માટીની આરોગ્ય અને વ્યવસ્થાપન"),
                (LanguageCode::Ml, "മണ്ണിന്റെ ആരോഗ്യവും പരിപാലനവും"),
            ]),
            leads: table(&[
                (LanguageCode::En, "Healthy soil is the foundation of successful farming"),
                (LanguageCode::Hi, "स्वस्थ मिट्टी सफल खेती की नींव है"),
                (LanguageCode::Ta, "ஆரோக்கியமான மண் வெற்றிகரமான விவசாயத்தின் அடித்தளம்"),
                (LanguageCode::Te, "ఆరోగ్యకరమైన మట్టి విజయవంతమైన వ్యవసాయానికి పునాది"),
                (LanguageCode::Bn, "স্বাস্থ্যকর মাটি সফল কৃষিকাজের ভিত্তি"),
                (LanguageCode::Mr, "निरोगी माती यशस्वी शेतीचा पाया आहे"),
                (LanguageCode::Pa, "ਸਿਹਤਮੰਦ ਮਿੱਟੀ ਸਫਲ ਖੇਤੀ ਦਾ ਆਧਾਰ ਹੈ"),
                (LanguageCode::Kn, "ಆರೋಗ್ಯಕರ ಮಣ್ಣು ಯಶಸ್ವಿ ಕೃಷಿಯ ಅಡಿಪಾಯ"),
                (LanguageCode::Gu, "તંદુરસ્ત માટી સફળ ખેતીનો આધાર છે"),
                (LanguageCode::Ml, "ആരോഗ്യകരമായ മണ്ണ് വിജയകരമായ കൃഷിയുടെ അടിത്തറ"),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization;
    use crate::responses;

    fn glossary() -> Glossary {
        Glossary::builtin().unwrap()
    }

    #[test]
    fn test_exact_greeting_phrase() {
        let english = localization::greeting(LanguageCode::En);
        assert_eq!(
            glossary().translate(english, LanguageCode::Hi),
            localization::greeting(LanguageCode::Hi)
        );
        // no English entry for the phrase: falls through and stays as is
        assert_eq!(glossary().translate(english, LanguageCode::En), english);
    }

    #[test]
    fn test_greeting_phrase_uses_glossary_wording() {
        let english = localization::greeting(LanguageCode::En);
        let telugu = glossary().translate(english, LanguageCode::Te);
        assert!(telugu.contains("చేయడం మరియు వ్యవసాయ"));
        assert!(telugu.ends_with("సహాయపడగలను। మీరు ఏమి తెలుసుకోవాలనుకుంటున్నారు?"));
        assert_ne!(telugu, localization::greeting(LanguageCode::Te));

        let kannada = glossary().translate(english, LanguageCode::Kn);
        assert!(kannada.contains("ಮಾಡಬಲ್ಲೆ। ನೀವು"));
    }

    #[test]
    fn test_whole_word_terms_case_insensitive() {
        let translated = glossary().translate("Water your CROP before the soil dries", LanguageCode::Hi);
        assert_eq!(translated, "पानी your फसल before the मिट्टी dries");
    }

    #[test]
    fn test_partial_words_are_left_alone() {
        let text = "watering schedule for croppers";
        assert_eq!(glossary().translate(text, LanguageCode::Ta), text);
    }

    #[test]
    fn test_weather_mention_gets_localized_opening() {
        let translated = glossary().translate("Check the weather today", LanguageCode::Hi);
        assert_eq!(
            translated,
            "**मौसम और जलवायु की जानकारी** 🌤\u{fe0f}\n\nइष्टतम फसल विकास के लिए, इन मौसम कारकों पर विचार करें..."
        );
    }

    #[test]
    fn test_canned_opening_keeps_body() {
        let bare = Glossary::new(Vec::new(), Vec::new()).unwrap();
        let translated = bare.translate(responses::SOIL, LanguageCode::Mr);
        assert!(translated.starts_with(
            "**माती आरोग्य आणि व्यवस्थापन** 🌱\n\nनिरोगी माती यशस्वी शेतीचा पाया आहे:\n"
        ));
        assert!(translated.contains("- Test pH levels (6.0-7.5 ideal for most crops)"));
        assert!(translated.ends_with("What specific soil concern do you have?"));
    }

    #[test]
    fn test_english_canned_bodies_are_untouched() {
        assert_eq!(glossary().translate(responses::WEATHER, LanguageCode::En), responses::WEATHER);
        assert_eq!(glossary().translate(responses::SOIL, LanguageCode::En), responses::SOIL);
    }

    #[test]
    fn test_unrelated_text_unchanged() {
        let text = "Rotate beans and corn every year";
        assert_eq!(glossary().translate(text, LanguageCode::Gu), text);
    }
}
