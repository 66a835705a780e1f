//! Conversation history and the simulated "assistant is typing" delay.
//!
//! A submitted utterance is appended to the history immediately. Its reply is
//! queued with a due time of `submitted_at + typing_delay` and only appended
//! once `tick()` is called with a time at or past that point. Replies are
//! delivered in submission order and none is ever dropped.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use carevault_contracts::chat::Message;

use crate::traits::Responder;

// ── Conversation ──────────────────────────────────────────────────────────────

/// Ordered, append-only message history.
///
/// Messages are only ever pushed; nothing removes or edits one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

// ── Pending replies ───────────────────────────────────────────────────────────

/// A reply that has been requested but not yet delivered.
///
/// `due` saturates at `DateTime::<Utc>::MAX_UTC` when the delay would
/// overflow the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// The trimmed utterance the reply answers.
    pub utterance: String,
    /// Earliest time at which the reply may be appended.
    pub due: DateTime<Utc>,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One assistant conversation: history plus the queue of replies in flight.
#[derive(Debug, Clone)]
pub struct ChatSession {
    conversation: Conversation,
    pending: VecDeque<PendingReply>,
    typing_delay: Duration,
}

impl ChatSession {
    /// Start a session whose history holds only the responder's greeting.
    pub fn new(responder: &dyn Responder, typing_delay: Duration, now: DateTime<Utc>) -> Self {
        let greeting = responder.greeting();
        let mut conversation = Conversation::default();
        conversation.push(Message::from_assistant(
            greeting.text.clone(),
            greeting.category,
            now,
        ));
        Self {
            conversation,
            pending: VecDeque::new(),
            typing_delay,
        }
    }

    /// Submit an utterance typed (or picked) by the user.
    ///
    /// Leading and trailing whitespace is trimmed. Returns `false` and leaves
    /// the session untouched when nothing remains.
    pub fn submit(&mut self, text: &str, at: DateTime<Utc>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring empty submission");
            return false;
        }

        self.conversation.push(Message::from_user(text, at));
        self.pending.push_back(PendingReply {
            utterance: text.to_string(),
            due: at
                .checked_add_signed(self.typing_delay)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });

        debug!(
            pending = self.pending.len(),
            delay_ms = self.typing_delay.num_milliseconds(),
            "utterance queued for reply"
        );
        true
    }

    /// Deliver every pending reply whose due time is at or before `now`.
    ///
    /// Returns how many replies were appended.
    pub fn tick(&mut self, responder: &dyn Responder, now: DateTime<Utc>) -> usize {
        let mut delivered = 0;

        while self.pending.front().is_some_and(|p| p.due <= now) {
            let Some(reply) = self.pending.pop_front() else {
                break;
            };
            let body = responder.respond(&reply.utterance);
            info!(
                category = body.category.label(),
                utterance_len = reply.utterance.len(),
                "assistant reply delivered"
            );
            self.conversation
                .push(Message::from_assistant(body.text.clone(), body.category, now));
            delivered += 1;
        }

        delivered
    }

    /// True while at least one reply is still waiting for its delay to pass.
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &PendingReply> {
        self.pending.iter()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
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

    /// Echoes a fixed body per first letter so tests can tell replies apart.
    struct EchoResponder {
        greeting: ResponseBody,
        upper: ResponseBody,
        other: ResponseBody,
    }

    impl EchoResponder {
        fn new() -> Self {
            Self {
                greeting: ResponseBody::new(Category::General, "hello"),
                upper: ResponseBody::new(Category::Medicine, "starts uppercase"),
                other: ResponseBody::new(Category::General, "starts otherwise"),
            }
        }
    }

    impl Responder for EchoResponder {
        fn respond(&self, utterance: &str) -> &ResponseBody {
            if utterance.chars().next().is_some_and(char::is_uppercase) {
                &self.upper
            } else {
                &self.other
            }
        }

        fn greeting(&self) -> &ResponseBody {
            &self.greeting
        }

        fn quick_questions(&self) -> &[QuickQuestion] {
            &[]
        }
    }

    fn t(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    fn session(responder: &EchoResponder) -> ChatSession {
        ChatSession::new(responder, Duration::milliseconds(1500), t(0))
    }

    // ── Greeting ─────────────────────────────────────────────────────────────

    #[test]
    fn new_session_starts_with_greeting() {
        let responder = EchoResponder::new();
        let s = session(&responder);

        assert_eq!(s.conversation().len(), 1);
        let first = &s.conversation().messages()[0];
        assert_eq!(first.sender, Sender::Assistant);
        assert_eq!(first.text, "hello");
        assert!(!s.is_typing());
    }

    // ── Submission ───────────────────────────────────────────────────────────

    #[test]
    fn whitespace_only_submission_is_a_no_op() {
        let responder = EchoResponder::new();
        let mut s = session(&responder);

        assert!(!s.submit("   \t\n", t(10)));
        assert!(!s.submit("", t(10)));
        assert_eq!(s.conversation().len(), 1);
        assert!(!s.is_typing());
    }

    #[test]
    fn submission_appends_trimmed_user_message_immediately() {
        let responder = EchoResponder::new();
        let mut s = session(&responder);

        assert!(s.submit("  Find hospitals  ", t(10)));
        let last = s.conversation().last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "Find hospitals");
        assert!(s.is_typing());
    }

    // ── Typing delay ─────────────────────────────────────────────────────────

    #[test]
    fn reply_is_withheld_until_delay_elapses() {
        let responder = EchoResponder::new();
        let mut s = session(&responder);
        s.submit("Paracetamol?", t(0));

        assert_eq!(s.tick(&responder, t(1499)), 0);
        assert_eq!(s.conversation().len(), 2, "reply must not appear early");
        assert!(s.is_typing());

        assert_eq!(s.tick(&responder, t(1500)), 1);
        assert_eq!(s.conversation().len(), 3);
        assert!(!s.is_typing());

        let reply = s.conversation().last().unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, "starts uppercase");
        assert_eq!(reply.category, Some(Category::Medicine));
    }

    #[test]
    fn overlapping_submissions_each_get_a_reply_in_order() {
        let responder = EchoResponder::new();
        let mut s = session(&responder);
        s.submit("Upper first", t(0));
        s.submit("lower second", t(500));

        // Only the first is due at 1600.
        assert_eq!(s.tick(&responder, t(1600)), 1);
        assert!(s.is_typing());

        assert_eq!(s.tick(&responder, t(2000)), 1);
        let texts: Vec<&str> = s
            .conversation()
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec!["hello", "Upper first", "lower second", "starts uppercase", "starts otherwise"]
        );
    }

    #[test]
    fn late_tick_delivers_everything_due() {
        let responder = EchoResponder::new();
        let mut s = session(&responder);
        s.submit("a", t(0));
        s.submit("b", t(1));
        s.submit("c", t(2));

        assert_eq!(s.tick(&responder, t(60_000)), 3);
        assert_eq!(s.conversation().len(), 7);
        assert_eq!(s.pending().count(), 0);
    }

    #[test]
    fn tick_with_nothing_pending_does_nothing() {
        let responder = EchoResponder::new();
        let mut s = session(&responder);
        assert_eq!(s.tick(&responder, t(10_000)), 0);
        assert_eq!(s.conversation().len(), 1);
    }

    #[test]
    fn zero_delay_replies_on_the_same_tick() {
        let responder = EchoResponder::new();
        let mut s = ChatSession::new(&responder, Duration::zero(), t(0));
        s.submit("now", t(5));
        assert_eq!(s.tick(&responder, t(5)), 1);
    }

    #[test]
    fn overflowing_delay_saturates_instead_of_panicking() {
        let responder = EchoResponder::new();
        let mut s = ChatSession::new(&responder, Duration::MAX, t(0));

        assert!(s.submit("hi", t(0)));
        let due = s.pending().next().map(|p| p.due);
        assert_eq!(due, Some(DateTime::<Utc>::MAX_UTC));
        assert_eq!(s.tick(&responder, t(60_000)), 0, "reply must stay pending");
        assert!(s.is_typing());
    }
}
