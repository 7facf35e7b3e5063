//! Localized String Tables
//!
//! Section labels and the greeting for every supported language. The tables
//! are built once and never mutated; lookups fall back to English when a
//! language or key is missing.

use crate::language::LanguageCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named template slots available in every language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKey {
    Greeting,
    DiseaseIdentified,
    TreatmentRecommendation,
    PreventionTips,
    Severity,
    NeedMoreInfo,
    CropNotFound,
    GeneralAdvice,
    WaterGuidelines,
    FertilizationTips,
    PestManagement,
}

impl StringKey {
    pub const ALL: [StringKey; 11] = [
        StringKey::Greeting,
        StringKey::DiseaseIdentified,
        StringKey::TreatmentRecommendation,
        StringKey::PreventionTips,
        StringKey::Severity,
        StringKey::NeedMoreInfo,
        StringKey::CropNotFound,
        StringKey::GeneralAdvice,
        StringKey::WaterGuidelines,
        StringKey::FertilizationTips,
        StringKey::PestManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StringKey::Greeting => "greeting",
            StringKey::DiseaseIdentified => "disease_identified",
            StringKey::TreatmentRecommendation => "treatment_recommendation",
            StringKey::PreventionTips => "prevention_tips",
            StringKey::Severity => "severity",
            StringKey::NeedMoreInfo => "need_more_info",
            StringKey::CropNotFound => "crop_not_found",
            StringKey::GeneralAdvice => "general_advice",
            StringKey::WaterGuidelines => "water_guidelines",
            StringKey::FertilizationTips => "fertilization_tips",
            StringKey::PestManagement => "pest_management",
        }
    }
}

type StringTable = HashMap<StringKey, &'static str>;

fn strings(entries: &[(StringKey, &'static str)]) -> StringTable {
    entries.iter().copied().collect()
}

lazy_static::lazy_static! {
    static ref LOCALIZED_STRINGS: HashMap<LanguageCode, StringTable> = {
        let mut table = HashMap::new();

        table.insert(
            LanguageCode::En,
            strings(&[
                (StringKey::Greeting, "Hello! I'm your AI farming assistant. I can help you identify crop diseases, recommend treatments, and provide farming advice. What would you like to know?"),
                (StringKey::DiseaseIdentified, "Based on your description, this appears to be"),
                (StringKey::TreatmentRecommendation, "Treatment Recommendation:"),
                (StringKey::PreventionTips, "Prevention Tips:"),
                (StringKey::Severity, "Severity Level:"),
                (StringKey::NeedMoreInfo, "Could you provide more details about the symptoms you're observing?"),
                (StringKey::CropNotFound, "I don't have specific information about that crop. Could you try with rice, wheat, or tomato?"),
                (StringKey::GeneralAdvice, "For healthy crops, ensure proper watering, adequate sunlight, balanced nutrition, and regular monitoring for pests and diseases."),
                (StringKey::WaterGuidelines, "Watering Guidelines:"),
                (StringKey::FertilizationTips, "Fertilization Tips:"),
                (StringKey::PestManagement, "Pest Management:"),
            ]),
        );
        table.insert(
            LanguageCode::Hi,
            strings(&[
                (StringKey::Greeting, "नमस्ते! मैं आपका AI कृषि सहायक हूं। मैं फसल रोगों की पहचान, उपचार सुझाने और कृषि सलाह प्रदान करने में आपकी मदद कर सकता हूं। आप क्या जानना चाहते हैं?"),
                (StringKey::DiseaseIdentified, "आपके वर्णन के आधार पर, यह प्रतीत होता है"),
                (StringKey::TreatmentRecommendation, "उपचार की सिफारिश:"),
                (StringKey::PreventionTips, "रोकथाम के उपाय:"),
                (StringKey::Severity, "गंभीरता का स्तर:"),
                (StringKey::NeedMoreInfo, "क्या आप उन लक्षणों के बारे में और विवरण दे सकते हैं जो आप देख रहे हैं?"),
                (StringKey::CropNotFound, "मेरे पास उस फसल के बारे में विशिष्ट जानकारी नहीं है। क्या आप चावल, गेहूं या टमाटर के साथ कोशिश कर सकते हैं?"),
                (StringKey::GeneralAdvice, "स्वस्थ फसलों के लिए, उचित पानी देना, पर्याप्त धूप, संतुलित पोषण और कीटों और रोगों की नियमित निगरानी सुनिश्चित करें।"),
                (StringKey::WaterGuidelines, "पानी देने के दिशानिर्देश:"),
                (StringKey::FertilizationTips, "उर्वरक के सुझाव:"),
                (StringKey::PestManagement, "कीट प्रबंधन:"),
            ]),
        );
        table.insert(
            LanguageCode::Ta,
            strings(&[
                (StringKey::Greeting, "வணக்கம்! நான் உங்களின் AI விவசாய உதவியாளர். பயிர் நோய்களைக் கண்டறிதல், சிகிச்சையைப் பரிந்துரைத்தல் மற்றும் விவசாய ஆலோசனை வழங்குதல் ஆகியவற்றில் உங்களுக்கு உதவ முடியும். நீங்கள் என்ன அறிய விரும்புகிறீர்கள்?"),
                (StringKey::DiseaseIdentified, "உங்கள் விளக்கத்தின் அடிப்படையில், இது தோன்றுகிறது"),
                (StringKey::TreatmentRecommendation, "சிகிச்சை பரிந்துரை:"),
                (StringKey::PreventionTips, "தடுப்பு குறிப்புகள்:"),
                (StringKey::Severity, "தீவிரத்தன்மை நிலை:"),
                (StringKey::NeedMoreInfo, "நீங்கள் கவனிக்கும் அறிகுறிகள் பற்றி மேலும் விவரங்களை வழங்க முடியுமா?"),
                (StringKey::CropNotFound, "அந்த பயிரைப் பற்றி எனக்கு குறிப்பிட்ட தகவல் இல்லை। அரிசி, கோதுமை அல்லது தக்காளியுடன் முயற்சி செய்ய முடியுமா?"),
                (StringKey::GeneralAdvice, "ஆரோக்கியமான பயிர்களுக்கு, சரியான நீர்ப்பாசனம், போதுமான சூரிய ஒளி, சமச்சீர் ஊட்டம் மற்றும் பூச்சி மற்றும் நோய்களுக்கு வழக்கமான கண்காணிப்பை உறுதி செய்யுங்கள்।"),
                (StringKey::WaterGuidelines, "நீர் வழிகாட்டுதல்கள்:"),
                (StringKey::FertilizationTips, "உர குறிப்புகள்:"),
                (StringKey::PestManagement, "பூச்சி மேலாண்மை:"),
            ]),
        );
        table.insert(
            LanguageCode::Te,
            strings(&[
                (StringKey::Greeting, "నమస్కారం! నేను మీ AI వ్యవసాయ సహాయకుడను. పంట వ్యాధులను గుర్తించడం, చికిత్సలను సిఫార్సు చేయడం మற్రియు వ్యవసాయ సలహాలు అందించడంలో మీకు సహాయపడగలను. మీరు ఏమి తెలుసుకోవాలనుకుంటున్నారు?"),
                (StringKey::DiseaseIdentified, "మీ వివరణ ఆధారంగా, ఇది కనిపిస్తుంది"),
                (StringKey::TreatmentRecommendation, "చికిత్సా సిఫారసు:"),
                (StringKey::PreventionTips, "నివారణ చిట్కాలు:"),
                (StringKey::Severity, "తీవ్రత స్థాయి:"),
                (StringKey::NeedMoreInfo, "మీరు గమనిస్తున్న లక్షణాల గురించి మరిన్ని వివరాలు అందించగలరా?"),
                (StringKey::CropNotFound, "ఆ పంట గురించి నాకు నిర్దిష్ట సమాచారం లేదు. వరి, గోధుమ లేదా టమోటాతో ప్రయత్నించగలరా?"),
                (StringKey::GeneralAdvice, "ఆరోగ్యకరమైన పంటల కోసం, సరైన నీటిపారుదల, తగిన సూర్యకాంతి, సమతుల్య పోషణ మరియు చీమలు మరియు వ్యాధుల కోసం క్రమం తప్పకుండా పర్యవేక్షణను నిర్ధారించండి।"),
                (StringKey::WaterGuidelines, "నీటి మార్గదర్శకాలు:"),
                (StringKey::FertilizationTips, "ఎరువుల చిట్కాలు:"),
                (StringKey::PestManagement, "పురుగుల నిర్వహణ:"),
            ]),
        );
        table.insert(
            LanguageCode::Bn,
            strings(&[
                (StringKey::Greeting, "হ্যালো! আমি আপনার AI কৃষি সহায়ক। আমি ফসলের রোগ চিহ্নিতকরণ, চিকিৎসার সুপারিশ এবং কৃষি পরামর্শ প্রদানে আপনাকে সাহায্য করতে পারি। আপনি কী জানতে চান?"),
                (StringKey::DiseaseIdentified, "আপনার বর্ণনার উপর ভিত্তি করে, এটি মনে হচ্ছে"),
                (StringKey::TreatmentRecommendation, "চিকিৎসার সুপারিশ:"),
                (StringKey::PreventionTips, "প্রতিরোধের টিপস:"),
                (StringKey::Severity, "গুরুত্বের স্তর:"),
                (StringKey::NeedMoreInfo, "আপনি যে লক্ষণগুলি পর্যবেক্ষণ করছেন সে সম্পর্কে আরও বিস্তারিত তথ্য দিতে পারেন?"),
                (StringKey::CropNotFound, "সেই ফসল সম্পর্কে আমার কাছে নির্দিষ্ট তথ্য নেই। ধান, গম বা টমেটো দিয়ে চেষ্টা করতে পারেন?"),
                (StringKey::GeneralAdvice, "সুস্থ ফসলের জন্য, সঠিক সেচ, পর্যাপ্ত সূর্যালোক, সুষম পুষ্টি এবং পোকামাকড় ও রোগের নিয়মিত নিরীক্ষণ নিশ্চিত করুন।"),
                (StringKey::WaterGuidelines, "পানির নির্দেশিকা:"),
                (StringKey::FertilizationTips, "সার প্রয়োগের টিপস:"),
                (StringKey::PestManagement, "কীটপতঙ্গ ব্যবস্থাপনা:"),
            ]),
        );
        table.insert(
            LanguageCode::Mr,
            strings(&[
                (StringKey::Greeting, "नमस्कार! मी तुमचा AI शेती सहाय्यक आहे. मी पिकांच्या रोगांची ओळख, उपचारांची शिफारस आणि शेतीविषयक सल्ला देण्यात तुम्हाला मदत करू शकतो. तुम्हाला काय जाणून घ्यायचे आहे?"),
                (StringKey::DiseaseIdentified, "तुमच्या वर्णनावर आधारित, हे दिसते"),
                (StringKey::TreatmentRecommendation, "उपचाराची शिफारस:"),
                (StringKey::PreventionTips, "प्रतिबंधक टिप्स:"),
                (StringKey::Severity, "तीव्रतेची पातळी:"),
                (StringKey::NeedMoreInfo, "तुम्ही पाहत असलेल्या लक्षणांबद्दल अधिक तपशील देऊ शकता का?"),
                (StringKey::CropNotFound, "माझ्याकडे त्या पिकाविषयी विशिष्ट माहिती नाही. तांदूळ, गहू किंवा टोमेटोसह प्रयत्न करू शकता का?"),
                (StringKey::GeneralAdvice, "निरोगी पिकांसाठी, योग्य पाणी, पुरेसा सूर्यप्रकाश, संतुलित पोषण आणि कीड आणि रोगांची नियमित तपासणी सुनिश्चित करा।"),
                (StringKey::WaterGuidelines, "पाण्याचे मार्गदर्शन:"),
                (StringKey::FertilizationTips, "खत वापराच्या टिप्स:"),
                (StringKey::PestManagement, "कीड व्यवस्थापन:"),
            ]),
        );
        table.insert(
            LanguageCode::Pa,
            strings(&[
                (StringKey::Greeting, "ਸਤ ਸ੍ਰੀ ਅਕਾਲ! ਮੈਂ ਤੁਹਾਡਾ AI ਖੇਤੀ ਸਹਾਇਕ ਹਾਂ। ਮੈਂ ਫਸਲ ਦੀਆਂ ਬਿਮਾਰੀਆਂ ਦੀ ਪਛਾਣ, ਇਲਾਜ ਦੀ ਸਿਫਾਰਿਸ਼ ਅਤੇ ਖੇਤੀ ਸਲਾਹ ਪ੍ਰਦਾਨ ਕਰਨ ਵਿੱਚ ਤੁਹਾਡੀ ਮਦਦ ਕਰ ਸਕਦਾ ਹਾਂ। ਤੁਸੀਂ ਕੀ ਜਾਣਨਾ ਚਾਹੁੰਦੇ ਹੋ?"),
                (StringKey::DiseaseIdentified, "ਤੁਹਾਡੇ ਵਰਣਨ ਦੇ ਆਧਾਰ ਤੇ, ਇਹ ਲੱਗਦਾ ਹੈ"),
                (StringKey::TreatmentRecommendation, "ਇਲਾਜ ਦੀ ਸਿਫਾਰਿਸ਼:"),
                (StringKey::PreventionTips, "ਬਚਾਅ ਦੇ ਟਿੱਪਸ:"),
                (StringKey::Severity, "ਗੰਭੀਰਤਾ ਦਾ ਪੱਧਰ:"),
                (StringKey::NeedMoreInfo, "ਕੀ ਤੁਸੀਂ ਉਨ੍ਹਾਂ ਲੱਛਣਾਂ ਬਾਰੇ ਹੋਰ ਵੇਰਵੇ ਦੇ ਸਕਦੇ ਹੋ ਜੋ ਤੁਸੀਂ ਦੇਖ ਰਹੇ ਹੋ?"),
                (StringKey::CropNotFound, "ਮੇਰੇ ਕੋਲ ਉਸ ਫਸਲ ਬਾਰੇ ਖਾਸ ਜਾਣਕਾਰੀ ਨਹੀਂ ਹੈ। ਕੀ ਤੁਸੀਂ ਚੌਲ, ਕਣਕ ਜਾਂ ਟਮਾਟਰ ਨਾਲ ਕੋਸ਼ਿਸ਼ ਕਰ ਸਕਦੇ ਹੋ?"),
                (StringKey::GeneralAdvice, "ਸਿਹਤਮੰਦ ਫਸਲਾਂ ਲਈ, ਸਹੀ ਪਾਣੀ, ਲੋੜੀਂਦਾ ਸੂਰਜ, ਸੰਤੁਲਿਤ ਪੋਸ਼ਣ ਅਤੇ ਕੀੜੇ ਅਤੇ ਬਿਮਾਰੀਆਂ ਦੀ ਨਿਯਮਿਤ ਨਿਗਰਾਨੀ ਯਕੀਨੀ ਬਣਾਓ।"),
                (StringKey::WaterGuidelines, "ਪਾਣੀ ਦੇ ਦਿਸ਼ਾ-ਨਿਰਦੇਸ਼:"),
                (StringKey::FertilizationTips, "ਖਾਦ ਦੇ ਟਿੱਪਸ:"),
                (StringKey::PestManagement, "ਕੀੜੇ ਪ੍ਰਬੰਧਨ:"),
            ]),
        );
        table.insert(
            LanguageCode::Kn,
            strings(&[
                (StringKey::Greeting, "ನಮಸ್ಕಾರ! ನಾನು ನಿಮ್ಮ AI ಕೃಷಿ ಸಹಾಯಕ. ಬೆಳೆ ರೋಗಗಳ ಗುರುತಿಸುವಿಕೆ, ಚಿಕಿತ್ಸೆಯ ಶಿಫಾರಸುಗಳು ಮತ್ತು ಕೃಷಿ ಸಲಹೆ ನೀಡುವಲ್ಲಿ ನಿಮಗೆ ಸಹಾಯ ಮಾಡಬಲ್ಲೆ. ನೀವು ಏನು ತಿಳಿಯಲು ಬಯಸುತ್ತೀರಿ?"),
                (StringKey::DiseaseIdentified, "ನಿಮ್ಮ ವಿವರಣೆಯ ಆಧಾರದ ಮೇಲೆ, ಇದು ಕಾಣುತ್ತದೆ"),
                (StringKey::TreatmentRecommendation, "ಚಿಕಿತ್ಸೆಯ ಶಿಫಾರಸು:"),
                (StringKey::PreventionTips, "ತಡೆಗಟ್ಟುವ ಸಲಹೆಗಳು:"),
                (StringKey::Severity, "ತೀವ್ರತೆಯ ಮಟ್ಟ:"),
                (StringKey::NeedMoreInfo, "ನೀವು ಗಮನಿಸುತ್ತಿರುವ ಲಕ್ಷಣಗಳ ಬಗ್ಗೆ ಹೆಚ್ಚಿನ ವಿವರಗಳನ್ನು ನೀಡಬಹುದೇ?"),
                (StringKey::CropNotFound, "ಆ ಬೆಳೆಯ ಬಗ್ಗೆ ನನಗೆ ನಿರ್ದಿಷ್ಟ ಮಾಹಿತಿ ಇಲ್ಲ. ಅಕ್ಕಿ, ಗೋಧಿ ಅಥವಾ ಟೊಮೆಟೊದೊಂದಿಗೆ ಪ್ರಯತ್ನಿಸಬಹುದೇ?"),
                (StringKey::GeneralAdvice, "ಆರೋಗ್ಯಕರ ಬೆಳೆಗಳಿಗಾಗಿ, ಸರಿಯಾದ ನೀರಾವರಿ, ಸಾಕಷ್ಟು ಸೂರ್ಯಕಾಂತಿ, ಸಮತೋಲಿತ ಪೋಷಣೆ ಮತ್ತು ಕೀಟಗಳು ಮತ್ತು ರೋಗಗಳಿಗೆ ನಿಯಮಿತ ಮೇಲ್ವಿಚಾರಣೆಯನ್ನು ಖಚಿತಪಡಿಸಿಕೊಳ್ಳಿ।"),
                (StringKey::WaterGuidelines, "ನೀರಾವರಿ ಮಾರ್ಗಸೂಚಿಗಳು:"),
                (StringKey::FertilizationTips, "ಗೊಬ್ಬರ ಸಲಹೆಗಳು:"),
                (StringKey::PestManagement, "ಕೀಟ ನಿರ್ವಹಣೆ:"),
            ]),
        );
        table.insert(
            LanguageCode::Gu,
            strings(&[
                (StringKey::Greeting, "નમસ્તે! હું તમારો AI કૃષિ સહાયક છું. હું પાકના રોગોની ઓળખ, સારવારની ભલામણો અને કૃષિ સલાહ આપવામાં તમારી સહાય કરી શકું છું. તમે શું જાણવા માંગો છો?"),
                (StringKey::DiseaseIdentified, "તમારા વર્ણનના આધારે, આ લાગે છે"),
                (StringKey::TreatmentRecommendation, "સારવારની ભલામણ:"),
                (StringKey::PreventionTips, "નિવારણ ટિપ્સ:"),
                (StringKey::Severity, "ગંભીરતાનું સ્તર:"),
                (StringKey::NeedMoreInfo, "તમે જે લક્ષણો જોઈ રહ્યા છો તેના વિશે વધુ વિગતો આપી શકો છો?"),
                (StringKey::CropNotFound, "મારી પાસે તે પાક વિશે વિશિષ્ટ માહિતી નથી. શકો તો ચોખા, ઘઉં અથવા ટામેટા સાથે પ્રયાસ કરો?"),
                (StringKey::GeneralAdvice, "સ્વસ્થ પાક માટે, યોગ્ય પાણી, પૂરતો સૂર્યપ્રકાશ, સંતુલિત પોષણ અને કીડા અને રોગોની નિયમિત દેખરેખ સુનિશ્ચિત કરો।"),
                (StringKey::WaterGuidelines, "પાણીની માર્ગદર્શિકા:"),
                (StringKey::FertilizationTips, "ખાતરની ટિપ્સ:"),
                (StringKey::PestManagement, "કીટ વ્યવસ્થાપન:"),
            ]),
        );
        table.insert(
            LanguageCode::Ml,
            strings(&[
                (StringKey::Greeting, "നമസ്കാരം! ഞാൻ നിങ്ങളുടെ AI കൃഷി സഹായിയാണ്. വിള രോഗങ്ങൾ തിരിച്ചറിയൽ, ചികിത്സാ ശുപാർശകൾ, കൃഷി ഉപദേശം എന്നിവയിൽ നിങ്ങളെ സഹായിക്കാൻ എനിക്ക് കഴിയും. നിങ്ങൾ എന്താണ് അറിയാൻ ആഗ്രഹിക്കുന്നത്?"),
                (StringKey::DiseaseIdentified, "നിങ്ങളുടെ വിവരണത്തിന്റെ അടിസ്ഥാനത്തിൽ, ഇത് കാണപ്പെടുന്നു"),
                (StringKey::TreatmentRecommendation, "ചികിത്സാ ശുപാർശ:"),
                (StringKey::PreventionTips, "പ്രതിരോധ നുറുങ്ങുകൾ:"),
                (StringKey::Severity, "ഗുരുത്വാകർഷണ നില:"),
                (StringKey::NeedMoreInfo, "നിങ്ങൾ നിരീക്ഷിക്കുന്ന ലക്ഷണങ്ങളെക്കുറിച്ച് കൂടുതൽ വിവരങ്ങൾ നൽകാമോ?"),
                (StringKey::CropNotFound, "ആ വിളയെക്കുറിച്ച് എനിക്ക് നിർദ്ദിഷ്ട വിവരങ്ങളില്ല. നെല്ല്, ഗോതമ്പ് അല്ലെങ്കിൽ തക്കാളി ഉപയോഗിച്ച് ശ്രമിക്കാമോ?"),
                (StringKey::GeneralAdvice, "ആരോഗ്യകരമായ വിളകൾക്കായി, ശരിയായ നനവ്, മതിയായ സൂര്യപ്രകാശം, സമതുലിതമായ പോഷണം, കീടങ്ങൾക്കും രോഗങ്ങൾക്കും സ്ഥിരമായ നിരീക്ഷണം എന്നിവ ഉറപ്പാക്കുക।"),
                (StringKey::WaterGuidelines, "ജല മാർഗ്ഗനിർദ്ദേശങ്ങൾ:"),
                (StringKey::FertilizationTips, "വളപ്രയോഗ നുറുങ്ങുകൾ:"),
                (StringKey::PestManagement, "കീട നിയന്ത്രണം:"),
            ]),
        );
        table
    };
}

/// Look up `key` for `lang`, falling back to the English entry.
pub fn localized(lang: LanguageCode, key: StringKey) -> &'static str {
    LOCALIZED_STRINGS
        .get(&lang)
        .and_then(|strings| strings.get(&key))
        .or_else(|| {
            LOCALIZED_STRINGS
                .get(&LanguageCode::En)
                .and_then(|strings| strings.get(&key))
        })
        .copied()
        .unwrap_or_default()
}

/// The welcome line shown when a conversation starts.
pub fn greeting(lang: LanguageCode) -> &'static str {
    localized(lang, StringKey::Greeting)
}

/// Section labels resolved once per response.
#[derive(Debug, Clone, Copy)]
pub struct SectionLabels {
    pub disease_identified: &'static str,
    pub treatment_recommendation: &'static str,
    pub prevention_tips: &'static str,
    pub severity: &'static str,
    pub water_guidelines: &'static str,
    pub fertilization_tips: &'static str,
    pub pest_management: &'static str,
}

impl SectionLabels {
    pub fn for_language(lang: LanguageCode) -> Self {
        Self {
            disease_identified: localized(lang, StringKey::DiseaseIdentified),
            treatment_recommendation: localized(lang, StringKey::TreatmentRecommendation),
            prevention_tips: localized(lang, StringKey::PreventionTips),
            severity: localized(lang, StringKey::Severity),
            water_guidelines: localized(lang, StringKey::WaterGuidelines),
            fertilization_tips: localized(lang, StringKey::FertilizationTips),
            pest_management: localized(lang, StringKey::PestManagement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_defines_every_key() {
        for lang in LanguageCode::ALL {
            let strings = LOCALIZED_STRINGS.get(&lang).expect("language table");
            for key in StringKey::ALL {
                let value = strings.get(&key).copied().unwrap_or_default();
                assert!(!value.is_empty(), "{} missing {}", lang, key.as_str());
            }
        }
    }

    #[test]
    fn test_english_labels() {
        let labels = SectionLabels::for_language(LanguageCode::En);
        assert_eq!(labels.treatment_recommendation, "Treatment Recommendation:");
        assert_eq!(labels.severity, "Severity Level:");
        assert_eq!(labels.fertilization_tips, "Fertilization Tips:");
    }

    #[test]
    fn test_hindi_greeting() {
        assert!(greeting(LanguageCode::Hi).starts_with("नमस्ते!"));
        assert_ne!(greeting(LanguageCode::Hi), greeting(LanguageCode::En));
    }
}
