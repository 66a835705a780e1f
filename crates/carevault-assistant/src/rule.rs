//! Response rule types and the TOML rule-file schema.
//!
//! A `RuleConfig` is deserialized from TOML and holds an ordered list of
//! `RuleSpec`s plus the greeting and fallback bodies. Rules are evaluated in
//! declaration order; the first matching rule wins. If no rule matches, the
//! fallback body is returned.

use serde::{Deserialize, Serialize};

use carevault_contracts::response::{Category, QuickQuestion, ResponseBody};

/// A canned body as written in TOML.
///
/// ```toml
/// category = "medicine"
/// text = """
/// **Ibuprofen Information:**
/// ...
/// """
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    pub category: Category,
    pub text: String,
}

impl From<BodySpec> for ResponseBody {
    fn from(spec: BodySpec) -> Self {
        ResponseBody::new(spec.category, spec.text)
    }
}

/// A single rule as written in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Stable identifier used in logs.
    pub id: String,

    /// Substrings that trigger this rule. Matching is case-insensitive.
    pub triggers: Vec<String>,

    pub category: Category,

    pub text: String,
}

/// The top-level structure deserialized from a TOML rule file.
///
/// Example:
/// ```toml
/// [greeting]
/// category = "general"
/// text = "Hello!"
///
/// [default]
/// category = "general"
/// text = "Could you be more specific?"
///
/// [[rules]]
/// id = "ibuprofen"
/// triggers = ["ibuprofen"]
/// category = "medicine"
/// text = "**Ibuprofen Information:**"
///
/// [[quick_questions]]
/// text = "What are generic alternatives for ibuprofen?"
/// category = "medicine"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub greeting: BodySpec,

    /// Returned when no rule matches.
    pub default: BodySpec,

    /// Ordered list of rules. First match wins.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,

    #[serde(default)]
    pub quick_questions: Vec<QuickQuestion>,
}

/// A compiled rule: lowercase triggers paired with an immutable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRule {
    pub id: String,
    triggers: Vec<String>,
    pub body: ResponseBody,
}

impl ResponseRule {
    /// Build a rule, lowercasing every trigger.
    pub fn new<I, S>(id: impl Into<String>, triggers: I, body: ResponseBody) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: id.into(),
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            body,
        }
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Return true if `lowered` contains any trigger.
    ///
    /// `lowered` must already be lowercase; the selector normalizes once per
    /// utterance rather than once per rule.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }
}
