//! Sections, tabs, and the other small enums that make up UI state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CarevaultError;

/// Top-level portal section selected in the navigation header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Home,
    Hospital,
    Patient,
    Feedback,
    Chatbot,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Hospital,
        Section::Patient,
        Section::Feedback,
        Section::Chatbot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Hospital => "Hospital Portal",
            Section::Patient => "Patient Portal",
            Section::Feedback => "Feedback",
            Section::Chatbot => "Medical Assistant",
        }
    }

    /// Stable identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Hospital => "hospital",
            Section::Patient => "patient",
            Section::Feedback => "feedback",
            Section::Chatbot => "chatbot",
        }
    }
}

impl FromStr for Section {
    type Err = CarevaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.id() == wanted)
            .ok_or(CarevaultError::UnknownSection { name: s.to_string() })
    }
}

/// Tabs of the hospital portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HospitalTab {
    #[default]
    Dashboard,
    Reports,
    Upload,
    Patients,
}

impl HospitalTab {
    pub const ALL: [HospitalTab; 4] = [
        HospitalTab::Dashboard,
        HospitalTab::Reports,
        HospitalTab::Upload,
        HospitalTab::Patients,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HospitalTab::Dashboard => "Dashboard",
            HospitalTab::Reports => "Reports",
            HospitalTab::Upload => "Upload",
            HospitalTab::Patients => "Patients",
        }
    }
}

/// Tabs of the feedback portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackTab {
    #[default]
    Submit,
    Track,
    Impact,
}

impl FeedbackTab {
    pub const ALL: [FeedbackTab; 3] = [FeedbackTab::Submit, FeedbackTab::Track, FeedbackTab::Impact];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackTab::Submit => "Submit Feedback",
            FeedbackTab::Track => "Track Feedback",
            FeedbackTab::Impact => "Your Impact",
        }
    }
}

/// How the patient identifies themselves on the (fake) sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginMethod {
    #[default]
    PatientId,
    Phone,
}

impl LoginMethod {
    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::PatientId => "Patient ID",
            LoginMethod::Phone => "Phone Number",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LoginMethod::PatientId => "PAT-12345",
            LoginMethod::Phone => "+1 (555) 123-4567",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            LoginMethod::PatientId => LoginMethod::Phone,
            LoginMethod::Phone => LoginMethod::PatientId,
        }
    }
}

/// Kind of feedback being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackType {
    #[default]
    General,
    Complaint,
    Appreciation,
    Suggestion,
    Urgent,
}

impl FeedbackType {
    pub const ALL: [FeedbackType; 5] = [
        FeedbackType::General,
        FeedbackType::Complaint,
        FeedbackType::Appreciation,
        FeedbackType::Suggestion,
        FeedbackType::Urgent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackType::General => "General Feedback",
            FeedbackType::Complaint => "Complaint",
            FeedbackType::Appreciation => "Appreciation",
            FeedbackType::Suggestion => "Suggestion",
            FeedbackType::Urgent => "Urgent Issue",
        }
    }

    /// The next type in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

/// Display language chosen in the assistant sidebar. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    German,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
        }
    }

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}
