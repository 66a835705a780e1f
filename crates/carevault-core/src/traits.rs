//! The seam between the application store and whatever produces replies.
//!
//! The store never decides what the assistant says. It hands each utterance to
//! a `Responder` and appends whatever body comes back.

use carevault_contracts::response::{QuickQuestion, ResponseBody};

/// Produces the assistant's canned replies.
///
/// Implementations must be deterministic: the same utterance always yields the
/// same body, and producing a body has no side effects.
pub trait Responder: Send + Sync {
    /// Select the reply for `utterance`.
    ///
    /// Total: an implementation always returns exactly one body, falling back
    /// to a default when nothing more specific applies.
    fn respond(&self, utterance: &str) -> &ResponseBody;

    /// The opening message shown before the user has typed anything.
    fn greeting(&self) -> &ResponseBody;

    /// Canned questions the user can send with one key press.
    fn quick_questions(&self) -> &[QuickQuestion];
}
