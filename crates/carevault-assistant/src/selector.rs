//! Keyword-driven response selector.
//!
//! `KeywordSelector` holds an ordered rule table and implements the
//! `Responder` trait from carevault-core.
//!
//! Selection algorithm:
//!
//! 1. Lowercase the utterance once.
//! 2. Walk the rules in declaration order; the first rule with a trigger that
//!    occurs as a substring wins.
//! 3. If no rule matched, return the default body.
//!
//! Selection never fails and has no side effects.

use std::path::Path;

use tracing::debug;

use carevault_contracts::{
    error::{CarevaultError, CarevaultResult},
    response::{Category, QuickQuestion, ResponseBody},
};
use carevault_core::traits::Responder;

use crate::{
    bodies,
    rule::{ResponseRule, RuleConfig},
};

/// An ordered keyword rule table with greeting and fallback bodies.
///
/// ```rust,ignore
/// use carevault_assistant::KeywordSelector;
///
/// let selector = KeywordSelector::builtin();
/// let body = selector.select("Find hospitals near me");
/// ```
#[derive(Debug, Clone)]
pub struct KeywordSelector {
    greeting: ResponseBody,
    default: ResponseBody,
    rules: Vec<ResponseRule>,
    quick_questions: Vec<QuickQuestion>,
}

impl KeywordSelector {
    /// The built-in medical assistant rules.
    pub fn builtin() -> Self {
        let rules = bodies::BUILTIN_RULES
            .iter()
            .map(|(id, triggers, category, text)| {
                ResponseRule::new(*id, triggers.iter(), ResponseBody::new(*category, *text))
            })
            .collect();

        let quick_questions = bodies::QUICK_QUESTIONS
            .iter()
            .map(|(text, category)| QuickQuestion::new(*text, *category))
            .collect();

        Self {
            greeting: ResponseBody::new(Category::General, bodies::GREETING),
            default: ResponseBody::new(Category::General, bodies::DEFAULT),
            rules,
            quick_questions,
        }
    }

    /// Parse `s` as TOML and build a selector.
    ///
    /// Returns `CarevaultError::Config` if the TOML is malformed, does not
    /// match `RuleConfig`, or declares a rule without triggers.
    pub fn from_toml_str(s: &str) -> CarevaultResult<Self> {
        let config: RuleConfig = toml::from_str(s).map_err(|e| CarevaultError::Config {
            reason: format!("failed to parse rule TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML rule file.
    pub fn from_file(path: &Path) -> CarevaultResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CarevaultError::Config {
            reason: format!("failed to read rule file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn from_config(config: RuleConfig) -> CarevaultResult<Self> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for spec in config.rules {
            if spec.triggers.iter().all(|t| t.trim().is_empty()) {
                return Err(CarevaultError::Config {
                    reason: format!("rule '{}' has no triggers", spec.id),
                });
            }
            let triggers = spec.triggers.into_iter().filter(|t| !t.trim().is_empty());
            rules.push(ResponseRule::new(
                spec.id,
                triggers,
                ResponseBody::new(spec.category, spec.text),
            ));
        }

        Ok(Self {
            greeting: config.greeting.into(),
            default: config.default.into(),
            rules,
            quick_questions: config.quick_questions,
        })
    }

    /// The rule that would answer `utterance`, or `None` if the default
    /// body would be used.
    pub fn matching_rule(&self, utterance: &str) -> Option<&ResponseRule> {
        let lowered = utterance.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Select the reply for `utterance`.
    pub fn select(&self, utterance: &str) -> &ResponseBody {
        match self.matching_rule(utterance) {
            Some(rule) => {
                debug!(rule_id = %rule.id, "rule matched");
                &rule.body
            }
            None => {
                debug!("no rule matched; using default body");
                &self.default
            }
        }
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn default_body(&self) -> &ResponseBody {
        &self.default
    }
}

impl Default for KeywordSelector {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Responder for KeywordSelector {
    fn respond(&self, utterance: &str) -> &ResponseBody {
        self.select(utterance)
    }

    fn greeting(&self) -> &ResponseBody {
        &self.greeting
    }

    fn quick_questions(&self) -> &[QuickQuestion] {
        &self.quick_questions
    }
}
