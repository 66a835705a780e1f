//! # carevault-assistant
//!
//! The rule-based medical assistant for the CareVault demo.
//!
//! ## Overview
//!
//! This crate provides [`KeywordSelector`], which implements the
//! [`Responder`](carevault_core::traits::Responder) trait. Each rule pairs a
//! list of trigger substrings with a canned reply. Rules are tested in
//! declaration order against the lowercased utterance; the first match wins.
//! If nothing matches, a fixed default reply describing what the assistant
//! can and cannot do is returned.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use carevault_assistant::KeywordSelector;
//!
//! let selector = KeywordSelector::builtin();
//! // or: KeywordSelector::from_file(Path::new("rules/assistant.toml"))?
//! ```

pub mod bodies;
pub mod format;
pub mod rule;
pub mod selector;

pub use rule::{ResponseRule, RuleConfig};
pub use selector::KeywordSelector;

// ── Tests ─────────────────────────────────────────────────────────────────────
