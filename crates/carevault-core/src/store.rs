//! Explicit application state and the reducer that updates it.
//!
//! Every piece of UI state (active section, tabs, the fake login flag, the
//! star rating, the chat draft and history) lives in one `AppState`. Views
//! read it through `Store::state()` and change it only by dispatching an
//! `Action`. Time is always passed in by the caller, so the reducer is
//! deterministic under test.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use carevault_contracts::{
    error::{CarevaultError, CarevaultResult},
    navigation::{FeedbackTab, FeedbackType, HospitalTab, Language, LoginMethod, Section},
    portal::StatusFilter,
};

use crate::{chat::ChatSession, traits::Responder};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Tunables for a `Store`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// How long the assistant "types" before its reply appears.
    #[serde(default = "StoreConfig::default_typing_delay_ms")]
    pub typing_delay_ms: u64,
}

impl StoreConfig {
    pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

    fn default_typing_delay_ms() -> u64 {
        Self::DEFAULT_TYPING_DELAY_MS
    }

    pub fn typing_delay(&self) -> Duration {
        i64::try_from(self.typing_delay_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: Self::DEFAULT_TYPING_DELAY_MS,
        }
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HospitalState {
    pub tab: HospitalTab,
    pub report_query: String,
    pub report_filter: StatusFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientState {
    /// Fake login flag. No credentials are ever checked.
    pub signed_in: bool,
    pub login_method: LoginMethod,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackState {
    pub tab: FeedbackTab,
    /// 0 until the user picks a star, then 1 to 5.
    pub rating: u8,
    pub feedback_type: FeedbackType,
}

#[derive(Debug, Clone)]
pub struct ChatState {
    pub draft: String,
    pub language: Language,
    pub listening: bool,
    pub session: ChatSession,
}

/// The whole UI state of one running demo.
#[derive(Debug, Clone)]
pub struct AppState {
    pub section: Section,
    pub hospital: HospitalState,
    pub patient: PatientState,
    pub feedback: FeedbackState,
    pub chat: ChatState,
}

// ── Actions ───────────────────────────────────────────────────────────────────

/// Everything a view can ask the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Section),
    /// Landing page primary button: go to the patient portal.
    GetStarted,
    /// Landing page secondary button: go to the hospital portal.
    LearnMore,

    SelectHospitalTab(HospitalTab),
    SetReportQuery(String),
    SetReportFilter(StatusFilter),

    SetLoginMethod(LoginMethod),
    SignIn,
    SignOut,

    SelectFeedbackTab(FeedbackTab),
    SetFeedbackType(FeedbackType),
    Rate(u8),

    EditDraft(String),
    SubmitDraft { at: DateTime<Utc> },
    AskQuickQuestion { index: usize, at: DateTime<Utc> },
    SelectLanguage(Language),
    ToggleListening,

    /// Advance the clock; delivers any assistant replies that are due.
    Tick { now: DateTime<Utc> },
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Owns the application state and the responder that answers chat messages.
pub struct Store {
    state: AppState,
    responder: Box<dyn Responder>,
    config: StoreConfig,
}

impl Store {
    /// Build a store in its initial state: landing page, signed out, unrated,
    /// and a conversation holding only the greeting.
    pub fn new(responder: Box<dyn Responder>, config: StoreConfig, now: DateTime<Utc>) -> Self {
        let session = ChatSession::new(responder.as_ref(), config.typing_delay(), now);
        let state = AppState {
            section: Section::default(),
            hospital: HospitalState::default(),
            patient: PatientState::default(),
            feedback: FeedbackState::default(),
            chat: ChatState {
                draft: String::new(),
                language: Language::default(),
                listening: false,
                session,
            },
        };
        Self { state, responder, config }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn responder(&self) -> &dyn Responder {
        self.responder.as_ref()
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// `InvalidRating` for a rating outside `1..=5` and `UnknownQuickQuestion`
    /// for an out-of-range quick-question index. In both cases the state is
    /// left unchanged. Empty chat submissions are not errors; they do nothing.
    pub fn dispatch(&mut self, action: Action) -> CarevaultResult<()> {
        debug!(?action, "dispatch");

        match action {
            Action::Navigate(section) => self.state.section = section,
            Action::GetStarted => self.state.section = Section::Patient,
            Action::LearnMore => self.state.section = Section::Hospital,

            Action::SelectHospitalTab(tab) => self.state.hospital.tab = tab,
            Action::SetReportQuery(query) => self.state.hospital.report_query = query,
            Action::SetReportFilter(filter) => self.state.hospital.report_filter = filter,

            Action::SetLoginMethod(method) => self.state.patient.login_method = method,
            Action::SignIn => self.state.patient.signed_in = true,
            Action::SignOut => self.state.patient.signed_in = false,

            Action::SelectFeedbackTab(tab) => self.state.feedback.tab = tab,
            Action::SetFeedbackType(kind) => self.state.feedback.feedback_type = kind,
            Action::Rate(value) => {
                if !(1..=5).contains(&value) {
                    warn!(value, "rejecting out-of-range rating");
                    return Err(CarevaultError::InvalidRating { value });
                }
                self.state.feedback.rating = value;
            }

            Action::EditDraft(draft) => self.state.chat.draft = draft,
            Action::SubmitDraft { at } => {
                let draft = std::mem::take(&mut self.state.chat.draft);
                if !self.state.chat.session.submit(&draft, at) {
                    // Nothing but whitespace: keep what the user typed.
                    self.state.chat.draft = draft;
                }
            }
            Action::AskQuickQuestion { index, at } => {
                let question = self
                    .responder
                    .quick_questions()
                    .get(index)
                    .ok_or(CarevaultError::UnknownQuickQuestion { index })?;
                self.state.chat.session.submit(&question.text, at);
            }
            Action::SelectLanguage(language) => self.state.chat.language = language,
            Action::ToggleListening => self.state.chat.listening = !self.state.chat.listening,

            Action::Tick { now } => {
                self.state.chat.session.tick(self.responder.as_ref(), now);
            }
        }

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use carevault_contracts::{
        chat::Sender,
        response::{Category, QuickQuestion, ResponseBody},
    };

    use super::*;

    // ── Mock responder ───────────────────────────────────────────────────────

    struct FixedResponder {
        greeting: ResponseBody,
        reply: ResponseBody,
        quick: Vec<QuickQuestion>,
    }

    impl Responder for FixedResponder {
        fn respond(&self, _utterance: &str) -> &ResponseBody {
            &self.reply
        }

        fn greeting(&self) -> &ResponseBody {
            &self.greeting
        }

        fn quick_questions(&self) -> &[QuickQuestion] {
            &self.quick
        }
    }

    fn t(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    fn store() -> Store {
        store_with(StoreConfig::default())
    }

    fn store_with(config: StoreConfig) -> Store {
        let responder = FixedResponder {
            greeting: ResponseBody::new(Category::General, "welcome"),
            reply: ResponseBody::new(Category::Hospital, "nearest hospital"),
            quick: vec![
                QuickQuestion::new("Find hospitals near me", Category::Hospital),
                QuickQuestion::new("Emergency contact numbers", Category::Hospital),
            ],
        };
        Store::new(Box::new(responder), config, t(0))
    }

    // ── Initial state ────────────────────────────────────────────────────────

    #[test]
    fn initial_state_is_landing_page_signed_out() {
        let s = store();
        assert_eq!(s.state().section, Section::Home);
        assert!(!s.state().patient.signed_in);
        assert_eq!(s.state().feedback.rating, 0);
        assert_eq!(s.state().hospital.tab, HospitalTab::Dashboard);
        assert_eq!(s.state().chat.session.conversation().len(), 1);
    }

    #[test]
    fn default_typing_delay_is_1500_ms() {
        assert_eq!(StoreConfig::default().typing_delay(), Duration::milliseconds(1500));
    }

    #[test]
    fn huge_typing_delay_does_not_panic_on_submit() {
        let config = StoreConfig {
            typing_delay_ms: 10_000_000_000_000_000,
        };
        assert_eq!(config.typing_delay(), Duration::MAX);

        let mut s = store_with(config);
        s.dispatch(Action::EditDraft("hi".into())).unwrap();
        s.dispatch(Action::SubmitDraft { at: t(0) }).unwrap();
        s.dispatch(Action::Tick { now: t(60_000) }).unwrap();
        assert_eq!(s.state().chat.session.conversation().len(), 2);
        assert!(s.state().chat.session.is_typing());
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    #[test]
    fn landing_buttons_route_to_portals() {
        let mut s = store();
        s.dispatch(Action::GetStarted).unwrap();
        assert_eq!(s.state().section, Section::Patient);
        s.dispatch(Action::LearnMore).unwrap();
        assert_eq!(s.state().section, Section::Hospital);
        s.dispatch(Action::Navigate(Section::Chatbot)).unwrap();
        assert_eq!(s.state().section, Section::Chatbot);
    }

    // ── Patient login toggle ─────────────────────────────────────────────────

    #[test]
    fn sign_in_and_out_toggle_the_flag() {
        let mut s = store();
        s.dispatch(Action::SetLoginMethod(LoginMethod::Phone)).unwrap();
        s.dispatch(Action::SignIn).unwrap();
        assert!(s.state().patient.signed_in);
        assert_eq!(s.state().patient.login_method, LoginMethod::Phone);
        s.dispatch(Action::SignOut).unwrap();
        assert!(!s.state().patient.signed_in);
    }

    // ── Rating ───────────────────────────────────────────────────────────────

    #[test]
    fn rating_accepts_one_through_five() {
        let mut s = store();
        for value in 1..=5 {
            s.dispatch(Action::Rate(value)).unwrap();
            assert_eq!(s.state().feedback.rating, value);
        }
    }

    #[test]
    fn rating_out_of_range_is_rejected_and_state_kept() {
        let mut s = store();
        s.dispatch(Action::Rate(4)).unwrap();

        for bad in [0, 6, 255] {
            match s.dispatch(Action::Rate(bad)) {
                Err(CarevaultError::InvalidRating { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidRating, got {:?}", other),
            }
        }
        assert_eq!(s.state().feedback.rating, 4);
    }

    // ── Hospital search state ────────────────────────────────────────────────

    #[test]
    fn report_search_state_is_stored() {
        let mut s = store();
        s.dispatch(Action::SelectHospitalTab(HospitalTab::Reports)).unwrap();
        s.dispatch(Action::SetReportQuery("jane".to_string())).unwrap();
        s.dispatch(Action::SetReportFilter(StatusFilter::InReview)).unwrap();

        let h = &s.state().hospital;
        assert_eq!(h.tab, HospitalTab::Reports);
        assert_eq!(h.report_query, "jane");
        assert_eq!(h.report_filter, StatusFilter::InReview);
    }

    // ── Chat ─────────────────────────────────────────────────────────────────

    #[test]
    fn submitting_draft_clears_it_and_queues_reply() {
        let mut s = store();
        s.dispatch(Action::EditDraft("Find hospitals near me".to_string())).unwrap();
        s.dispatch(Action::SubmitDraft { at: t(100) }).unwrap();

        assert!(s.state().chat.draft.is_empty());
        assert!(s.state().chat.session.is_typing());
        assert_eq!(s.state().chat.session.conversation().len(), 2);

        s.dispatch(Action::Tick { now: t(1600) }).unwrap();
        let last = s.state().chat.session.conversation().last().unwrap();
        assert_eq!(last.sender, Sender::Assistant);
        assert_eq!(last.text, "nearest hospital");
        assert!(!s.state().chat.session.is_typing());
    }

    #[test]
    fn blank_draft_submission_is_a_no_op() {
        let mut s = store();
        s.dispatch(Action::EditDraft("   ".to_string())).unwrap();
        s.dispatch(Action::SubmitDraft { at: t(100) }).unwrap();

        assert_eq!(s.state().chat.session.conversation().len(), 1);
        assert!(!s.state().chat.session.is_typing());
        assert_eq!(s.state().chat.draft, "   ");
    }

    #[test]
    fn quick_question_bypasses_the_draft() {
        let mut s = store();
        s.dispatch(Action::EditDraft("half typed".to_string())).unwrap();
        s.dispatch(Action::AskQuickQuestion { index: 1, at: t(0) }).unwrap();

        let last = s.state().chat.session.conversation().last().unwrap();
        assert_eq!(last.text, "Emergency contact numbers");
        assert_eq!(s.state().chat.draft, "half typed");
    }

    #[test]
    fn unknown_quick_question_is_an_error() {
        let mut s = store();
        match s.dispatch(Action::AskQuickQuestion { index: 2, at: t(0) }) {
            Err(CarevaultError::UnknownQuickQuestion { index }) => assert_eq!(index, 2),
            other => panic!("expected UnknownQuickQuestion, got {:?}", other),
        }
        assert_eq!(s.state().chat.session.conversation().len(), 1);
    }

    #[test]
    fn cosmetic_chat_toggles() {
        let mut s = store();
        s.dispatch(Action::SelectLanguage(Language::French)).unwrap();
        s.dispatch(Action::ToggleListening).unwrap();
        assert_eq!(s.state().chat.language, Language::French);
        assert!(s.state().chat.listening);
        s.dispatch(Action::ToggleListening).unwrap();
        assert!(!s.state().chat.listening);
    }
}
