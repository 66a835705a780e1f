//! Sample records for the CareVault portals.
//!
//! All data in this module is hardcoded and fictional. Nothing is loaded from
//! disk or the network, and nothing written through the UI ever lands here.

use carevault_contracts::{
    navigation::Section,
    portal::{
        FeatureCard, FeedbackRecord, FeedbackStatus, HospitalReport, PatientProfile,
        PatientReport, PortalStat, ReportStatus,
    },
};

// ── Hospital portal ───────────────────────────────────────────────────────────

/// The three reports listed on the hospital dashboard and Reports tab.
pub fn hospital_reports() -> Vec<HospitalReport> {
    let report = |id: &str, patient_id: &str, name: &str, kind: &str, date: &str, status| {
        HospitalReport {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            patient_name: name.to_string(),
            report_type: kind.to_string(),
            date: date.to_string(),
            status,
        }
    };

    vec![
        report("RPT-2024-001", "PAT-12345", "John Doe", "Blood Test", "2024-01-15", ReportStatus::Completed),
        report("RPT-2024-002", "PAT-12346", "Jane Smith", "X-Ray", "2024-01-14", ReportStatus::InReview),
        report("RPT-2024-003", "PAT-12347", "Mike Johnson", "CT Scan", "2024-01-13", ReportStatus::Completed),
    ]
}

/// Headline numbers on the hospital dashboard.
pub fn hospital_stats() -> Vec<PortalStat> {
    [
        ("Total Reports", "1,234"),
        ("Active Patients", "856"),
        ("This Month", "89"),
        ("Secure Storage", "99.9%"),
    ]
    .into_iter()
    .map(|(label, value)| PortalStat {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

/// Report types offered on the Upload tab.
pub const UPLOAD_REPORT_TYPES: [&str; 5] = ["Blood Test", "X-Ray", "CT Scan", "MRI", "Lab Report"];

/// File formats the Upload tab claims to accept.
pub const UPLOAD_FORMATS: &str = "Supported: PDF, DOC, DOCX, JPG, PNG (Max 10MB each)";

// ── Patient portal ────────────────────────────────────────────────────────────

/// The one patient every sign-in resolves to.
pub fn patient_profile() -> PatientProfile {
    PatientProfile {
        id: "PAT-12345".to_string(),
        name: "John Doe".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        email: "john.doe@email.com".to_string(),
        date_of_birth: "1985-06-15".to_string(),
    }
}

/// Reports visible to the signed-in patient.
pub fn patient_reports() -> Vec<PatientReport> {
    let report = |id: &str, kind: &str, hospital: &str, date: &str, status: &str, urgent| {
        PatientReport {
            id: id.to_string(),
            report_type: kind.to_string(),
            hospital: hospital.to_string(),
            date: date.to_string(),
            status: status.to_string(),
            urgent,
        }
    };

    vec![
        report("RPT-2024-001", "Blood Test Report", "City General Hospital", "2024-01-15", "Available", false),
        report("RPT-2024-002", "Chest X-Ray", "Metro Medical Center", "2024-01-12", "Available", true),
        report("RPT-2024-003", "Lab Results", "City General Hospital", "2024-01-10", "Processing", false),
    ]
}

pub const PATIENT_QUICK_ACTIONS: [&str; 3] =
    ["Download All Reports", "Schedule Appointment", "Contact Hospital"];

pub const SECURITY_NOTICE: &str = "Your medical data is protected with end-to-end encryption and HIPAA-compliant security measures.";

// ── Feedback portal ───────────────────────────────────────────────────────────

/// Feedback history shown on the Track tab.
pub fn feedback_history() -> Vec<FeedbackRecord> {
    vec![
        FeedbackRecord {
            id: "FB-2024-001".to_string(),
            hospital: "City General Hospital".to_string(),
            doctor: "Dr. Sarah Johnson".to_string(),
            rating: 5,
            date: "2024-01-15".to_string(),
            status: FeedbackStatus::Resolved,
            kind: "Appreciation".to_string(),
            summary: "Excellent care and very professional staff...".to_string(),
        },
        FeedbackRecord {
            id: "FB-2024-002".to_string(),
            hospital: "Metro Medical Center".to_string(),
            doctor: "Dr. Michael Chen".to_string(),
            rating: 2,
            date: "2024-01-12".to_string(),
            status: FeedbackStatus::UnderReview,
            kind: "Complaint".to_string(),
            summary: "Long waiting times and poor communication...".to_string(),
        },
        FeedbackRecord {
            id: "FB-2024-003".to_string(),
            hospital: "Downtown Clinic".to_string(),
            doctor: "Dr. Emily Davis".to_string(),
            rating: 4,
            date: "2024-01-10".to_string(),
            status: FeedbackStatus::Acknowledged,
            kind: "Suggestion".to_string(),
            summary: "Good service but could improve appointment scheduling...".to_string(),
        },
    ]
}

/// The three counters on the "Your Impact" tab.
pub fn feedback_impact() -> Vec<PortalStat> {
    [
        ("Feedback Submitted", "12"),
        ("Issues Resolved", "8"),
        ("Average Rating Given", "4.2"),
    ]
    .into_iter()
    .map(|(label, value)| PortalStat {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

pub const FEEDBACK_DEPARTMENTS: [&str; 7] = [
    "Emergency",
    "General Medicine",
    "Surgery",
    "Pediatrics",
    "Cardiology",
    "Orthopedics",
    "Other",
];

pub const FEEDBACK_PRIVACY_NOTICE: &str = "Your feedback is confidential and will be shared directly with the Health Ministry. Personal information is optional and will only be used if follow-up is needed.";

// ── Home ──────────────────────────────────────────────────────────────────────

pub const HERO_TITLE: &str = "Secure Healthcare Document Management";

pub const HERO_TAGLINE: &str = "A comprehensive platform connecting hospitals, patients, and healthcare authorities with secure document storage, feedback systems, and AI-powered medical assistance.";

/// Feature tiles on the landing page.
pub fn feature_cards() -> Vec<FeatureCard> {
    [
        (
            "Secure Document Management",
            "Store and manage hospital reports and patient documents with enterprise-grade security.",
        ),
        (
            "Patient Portal Access",
            "Patients can securely access their medical reports using unique IDs and authentication.",
        ),
        (
            "Feedback System",
            "Direct feedback and grievance redressal system connecting patients to health ministry.",
        ),
        (
            "Multilingual Support",
            "AI-powered chatbot providing medical information in multiple languages.",
        ),
        (
            "Privacy Guaranteed",
            "Zero data leaks with encrypted storage and HIPAA-compliant security measures.",
        ),
        (
            "Cross-Platform",
            "Available on Windows, Mac, Android, and iOS with seamless synchronization.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| FeatureCard {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Navigation header entries in display order.
pub fn nav_items() -> Vec<(Section, &'static str)> {
    Section::ALL.iter().map(|s| (*s, s.label())).collect()
}
