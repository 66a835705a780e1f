//! Record types displayed by the hospital, patient, and feedback portals.
//!
//! These are plain data carriers. The sample values themselves live in
//! `carevault-portals`.

use serde::{Deserialize, Serialize};

// ── Hospital portal ───────────────────────────────────────────────────────────

/// Processing status of a report in the hospital's document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Completed,
    InReview,
    Pending,
}

impl ReportStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::InReview => "In Review",
            ReportStatus::Pending => "Pending",
        }
    }
}

/// Status filter on the hospital Reports tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    InReview,
    Pending,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Completed,
        StatusFilter::InReview,
        StatusFilter::Pending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Reports",
            StatusFilter::Completed => "Completed",
            StatusFilter::InReview => "In Review",
            StatusFilter::Pending => "Pending",
        }
    }

    /// Whether a report with `status` passes this filter.
    pub fn admits(self, status: ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => status == ReportStatus::Completed,
            StatusFilter::InReview => status == ReportStatus::InReview,
            StatusFilter::Pending => status == ReportStatus::Pending,
        }
    }

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

/// One row of the hospital report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalReport {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub report_type: String,
    pub date: String,
    pub status: ReportStatus,
}

/// A headline number on the hospital dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalStat {
    pub label: String,
    pub value: String,
}

// ── Patient portal ────────────────────────────────────────────────────────────

/// Personal details shown once the patient has signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date_of_birth: String,
}

/// A report as the patient sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientReport {
    pub id: String,
    pub report_type: String,
    pub hospital: String,
    pub date: String,
    /// Free-form availability ("Available", "Processing").
    pub status: String,
    pub urgent: bool,
}

// ── Feedback portal ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    Resolved,
    UnderReview,
    Acknowledged,
}

impl FeedbackStatus {
    pub fn label(self) -> &'static str {
        match self {
            FeedbackStatus::Resolved => "Resolved",
            FeedbackStatus::UnderReview => "Under Review",
            FeedbackStatus::Acknowledged => "Acknowledged",
        }
    }
}

/// A previously submitted piece of feedback, as listed on the Track tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: String,
    pub hospital: String,
    pub doctor: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub date: String,
    pub status: FeedbackStatus,
    /// "Appreciation", "Complaint", "Suggestion", ...
    pub kind: String,
    pub summary: String,
}

impl FeedbackRecord {
    /// The short number shown in the feedback list: the last dash-separated
    /// segment of the id (`FB-2024-001` → `001`).
    pub fn display_number(&self) -> &str {
        self.id.rsplit('-').next().unwrap_or(&self.id)
    }
}

// ── Home ──────────────────────────────────────────────────────────────────────

/// A feature tile on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
}
