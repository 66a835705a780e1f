//! # carevault-contracts
//!
//! Shared types and error definitions for the CareVault demo.
//!
//! All crates in the workspace import from here. No behaviour lives in this
//! crate, only data definitions and the error type.

pub mod chat;
pub mod error;
pub mod navigation;
pub mod portal;
pub mod response;

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use chat::{Message, MessageId, Sender};
    use error::CarevaultError;
    use navigation::{FeedbackType, Language, LoginMethod, Section};
    use portal::{FeedbackRecord, FeedbackStatus, ReportStatus, StatusFilter};
    use response::{Category, ResponseBody};

    // ── Section parsing ──────────────────────────────────────────────────────

    #[test]
    fn section_parses_every_id() {
        for section in Section::ALL {
            let parsed: Section = section.id().parse().unwrap();
            assert_eq!(parsed, section);
        }
    }

    #[test]
    fn section_parse_is_case_insensitive_and_trims() {
        let parsed: Section = "  ChatBot ".parse().unwrap();
        assert_eq!(parsed, Section::Chatbot);
    }

    #[test]
    fn section_parse_rejects_unknown_names() {
        let err = "pharmacy".parse::<Section>().unwrap_err();
        match err {
            CarevaultError::UnknownSection { name } => assert_eq!(name, "pharmacy"),
            other => panic!("expected UnknownSection, got {:?}", other),
        }
    }

    #[test]
    fn default_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    // ── Cycling enums ────────────────────────────────────────────────────────

    #[test]
    fn feedback_type_next_wraps_around() {
        assert_eq!(FeedbackType::General.next(), FeedbackType::Complaint);
        assert_eq!(FeedbackType::Urgent.next(), FeedbackType::General);
    }

    #[test]
    fn language_next_visits_every_language_once() {
        let mut seen = vec![Language::default()];
        let mut current = Language::default();
        for _ in 1..Language::ALL.len() {
            current = current.next();
            assert!(!seen.contains(&current), "language {:?} repeated", current);
            seen.push(current);
        }
        assert_eq!(current.next(), Language::English);
    }

    #[test]
    fn login_method_toggle_is_an_involution() {
        let m = LoginMethod::PatientId;
        assert_eq!(m.toggled(), LoginMethod::Phone);
        assert_eq!(m.toggled().toggled(), m);
    }

    // ── Messages ─────────────────────────────────────────────────────────────

    #[test]
    fn user_messages_carry_no_category() {
        let msg = Message::from_user("hello", Utc::now());
        assert_eq!(msg.sender, Sender::User);
        assert!(msg.category.is_none());
        assert!(msg.is_from_user());
    }

    #[test]
    fn assistant_messages_carry_the_body_category() {
        let msg = Message::from_assistant("**Info**", Category::Hospital, Utc::now());
        assert_eq!(msg.sender, Sender::Assistant);
        assert_eq!(msg.category, Some(Category::Hospital));
    }

    #[test]
    fn message_ids_are_unique() {
        let ids: std::collections::HashSet<MessageId> =
            (0..100).map(|_| MessageId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn user_message_json_omits_category() {
        let msg = Message::from_user("hi", Utc::now());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "user");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn response_body_serializes_category_in_lowercase() {
        let body = ResponseBody::new(Category::Medicine, "text");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["category"], "medicine");
    }

    // ── Portal records ───────────────────────────────────────────────────────

    #[test]
    fn feedback_display_number_is_last_segment() {
        let record = FeedbackRecord {
            id: "FB-2024-003".to_string(),
            hospital: "Downtown Clinic".to_string(),
            doctor: "Dr. Emily Davis".to_string(),
            rating: 4,
            date: "2024-01-10".to_string(),
            status: FeedbackStatus::Acknowledged,
            kind: "Suggestion".to_string(),
            summary: String::new(),
        };
        assert_eq!(record.display_number(), "003");
    }

    #[test]
    fn status_filter_all_admits_everything() {
        for status in [ReportStatus::Completed, ReportStatus::InReview, ReportStatus::Pending] {
            assert!(StatusFilter::All.admits(status));
        }
    }

    #[test]
    fn status_filter_admits_only_its_own_status() {
        assert!(StatusFilter::InReview.admits(ReportStatus::InReview));
        assert!(!StatusFilter::InReview.admits(ReportStatus::Completed));
        assert!(!StatusFilter::Completed.admits(ReportStatus::Pending));
    }

    #[test]
    fn status_filter_next_cycles_back_to_all() {
        assert_eq!(StatusFilter::Pending.next(), StatusFilter::All);
    }

    // ── Error display messages ───────────────────────────────────────────────

    #[test]
    fn error_invalid_rating_display() {
        let err = CarevaultError::InvalidRating { value: 7 };
        let msg = err.to_string();
        assert!(msg.contains("invalid rating 7"));
        assert!(msg.contains("between 1 and 5"));
    }

    #[test]
    fn error_config_display() {
        let err = CarevaultError::Config {
            reason: "missing default body".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing default body"));
    }

    #[test]
    fn error_unknown_quick_question_display() {
        let err = CarevaultError::UnknownQuickQuestion { index: 9 };
        assert!(err.to_string().contains("#9"));
    }
}
