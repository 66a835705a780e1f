//! Built-in canned replies and quick questions.
//!
//! All text is static and fictional medical reference material. Lines use a
//! light markup that `format` understands: `**Heading**`, `•` bullets, and
//! emoji-prefixed callouts.

use carevault_contracts::response::Category;

pub const GREETING: &str = "Hello! I'm your AI Medical Assistant. I can help you with information about medicines, hospitals, treatment options, and general health queries. How can I assist you today?";

pub const PARACETAMOL: &str = "**Paracetamol (Acetaminophen) Information:**\n\n**Common Side Effects:**\n• Nausea and vomiting\n• Skin rash\n• Liver damage (with overdose)\n\n**Dosage:** Adults: 500-1000mg every 4-6 hours (max 4000mg/day)\n\n**Generic Alternatives:**\n• Acetaminophen\n• Tylenol\n• Calpol\n\n⚠️ **Warning:** Never exceed recommended dosage. Consult your doctor if symptoms persist.";

pub const HOSPITAL_EMERGENCY: &str = "**Emergency & Hospital Information:**\n\n🚨 **Emergency Numbers:**\n• Emergency: 911 (US) / 108 (India)\n• Poison Control: 1-800-222-1222\n\n🏥 **Nearby Hospitals:**\n• City General Hospital - 2.1 km\n• Metro Medical Center - 3.5 km\n• Downtown Emergency Clinic - 1.8 km\n\n📱 Would you like me to help you find specific specialists or book an appointment?";

pub const IBUPROFEN: &str = "**Ibuprofen Information:**\n\n**Generic Alternatives:**\n• Advil\n• Motrin\n• Nurofen\n• Generic Ibuprofen tablets\n\n**Chemical Composition:** C₁₃H₁₈O₂\n\n**Uses:**\n• Pain relief\n• Inflammation reduction\n• Fever reduction\n\n**Dosage:** 200-400mg every 4-6 hours (max 1200mg/day for OTC)\n\n⚠️ **Contraindications:** Avoid with stomach ulcers, kidney problems, or blood thinners.";

pub const BLOOD_PRESSURE: &str = "**High Blood Pressure (Hypertension) Symptoms:**\n\n**Common Signs:**\n• Headaches\n• Shortness of breath\n• Nosebleeds\n• Dizziness\n• Chest pain\n• Visual changes\n\n**Normal Range:** Less than 120/80 mmHg\n**High:** 140/90 mmHg or higher\n\n🩺 **Recommendation:** Regular monitoring is essential. Consult a cardiologist if you experience these symptoms frequently.\n\n**Prevention:**\n• Reduce sodium intake\n• Regular exercise\n• Maintain healthy weight\n• Limit alcohol consumption";

pub const DEFAULT: &str = "I understand you're asking about medical information. While I can provide general information about medicines, hospitals, and health topics, please remember:\n\n✅ I can help with:\n• Medicine information and alternatives\n• Hospital locations and contacts\n• General health information\n• Symptom guidance\n\n⚠️ **Important:** This information is for educational purposes only. Always consult healthcare professionals for medical advice, diagnosis, or treatment.\n\nCould you please be more specific about what you'd like to know?";

/// Built-in rules as `(id, triggers, category, body)`, in priority order.
///
/// Hospital/emergency sits between paracetamol and ibuprofen. An utterance
/// mentioning both "hospital" and "ibuprofen" gets the hospital reply.
pub const BUILTIN_RULES: [(&str, &[&str], Category, &str); 4] = [
    (
        "paracetamol",
        &["paracetamol", "acetaminophen"],
        Category::Medicine,
        PARACETAMOL,
    ),
    (
        "hospital-emergency",
        &["hospital", "emergency"],
        Category::Hospital,
        HOSPITAL_EMERGENCY,
    ),
    ("ibuprofen", &["ibuprofen"], Category::Medicine, IBUPROFEN),
    (
        "blood-pressure",
        &["blood pressure", "hypertension"],
        Category::General,
        BLOOD_PRESSURE,
    ),
];

pub const QUICK_QUESTIONS: [(&str, Category); 5] = [
    ("What are the side effects of paracetamol?", Category::Medicine),
    ("Find hospitals near me", Category::Hospital),
    ("What are generic alternatives for ibuprofen?", Category::Medicine),
    ("Symptoms of high blood pressure", Category::General),
    ("Emergency contact numbers", Category::Hospital),
];

/// Disclaimer shown under the chat input.
pub const DISCLAIMER: &str =
    "⚠️ This AI provides general information only. Always consult healthcare professionals for medical advice.";
