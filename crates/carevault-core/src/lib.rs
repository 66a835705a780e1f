//! # carevault-core
//!
//! The application core of the CareVault demo.
//!
//! This crate provides:
//! - The `Responder` trait that the assistant implements
//! - `ChatSession`, the append-only conversation plus simulated typing delay
//! - `Store`, the explicit application state and its reducer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carevault_core::{Action, Store, StoreConfig};
//!
//! let mut store = Store::new(Box::new(responder), StoreConfig::default(), Utc::now());
//! store.dispatch(Action::EditDraft("Find hospitals near me".into()))?;
//! store.dispatch(Action::SubmitDraft { at: Utc::now() })?;
//! ```

pub mod chat;
pub mod store;
pub mod traits;

pub use chat::{ChatSession, Conversation};
pub use store::{Action, AppState, Store, StoreConfig};
pub use traits::Responder;
