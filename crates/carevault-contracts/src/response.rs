//! Canned response bodies and their topic categories.

use serde::{Deserialize, Serialize};

/// Topic tag attached to every response body.
///
/// Expressed in TOML and JSON as a lowercase string:
/// ```toml
/// category = "medicine"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Medicine,
    Hospital,
    General,
}

impl Category {
    /// Short label used by the front-ends next to an assistant message.
    pub fn label(self) -> &'static str {
        match self {
            Category::Medicine => "medicine",
            Category::Hospital => "hospital",
            Category::General => "general",
        }
    }
}

/// A pre-authored, multi-line informational reply.
///
/// Bodies are built once when the rule table is constructed and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub category: Category,
    pub text: String,
}

impl ResponseBody {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self { category, text: text.into() }
    }
}

/// A canned question offered in the assistant sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickQuestion {
    pub text: String,
    pub category: Category,
}

impl QuickQuestion {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self { text: text.into(), category }
    }
}
