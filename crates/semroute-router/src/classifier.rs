// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based intent classification.
//!
//! Deterministic, ordered rule evaluation: the arithmetic pattern first,
//! then the configured keyword rules in fixed priority
//! (mathematical > explanatory > creative), then the general fallback.
//! The rules are data, not control flow, so keyword sets can be audited
//! and extended through configuration alone.

use std::sync::LazyLock;

use regex::Regex;

use semroute_config::model::IntentConfig;
use semroute_core::Intent;

/// Two numeric operands joined by `+ - * /`, optional whitespace.
static ARITHMETIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*[+\-*/]\s*\d+").expect("arithmetic pattern is a valid literal regex")
});

/// One keyword rule: the intent it produces and the phrases that trigger it.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub intent: Intent,
    /// Lowercased trigger phrases; matching is substring containment.
    pub keywords: Vec<String>,
}

impl IntentRule {
    fn matches(&self, lowered_query: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_query.contains(kw))
    }
}

/// Deterministic first-match-wins intent classifier.
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// Build the classifier from configured keyword sets.
    ///
    /// Keywords are lowercased once here so `classify` stays allocation-light.
    pub fn new(config: &IntentConfig) -> Self {
        let rule = |intent: Intent, keywords: &[String]| IntentRule {
            intent,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        };

        Self {
            rules: vec![
                rule(Intent::Mathematical, &config.mathematical_keywords),
                rule(Intent::Explanatory, &config.explanatory_keywords),
                rule(Intent::Creative, &config.creative_keywords),
            ],
        }
    }

    /// Classify a query. The arithmetic pattern outranks every keyword
    /// rule; keyword rules run in declared order; `General` is the default.
    pub fn classify(&self, query: &str) -> Intent {
        if ARITHMETIC_PATTERN.is_match(query) {
            return Intent::Arithmetic;
        }

        let lowered = query.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&lowered) {
                return rule.intent;
            }
        }

        Intent::General
    }

    /// The keyword rules in evaluation order, for audit and testing.
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(&IntentConfig::default())
    }

    #[test]
    fn arithmetic_pattern_wins() {
        let c = classifier();
        assert_eq!(c.classify("2 + 3"), Intent::Arithmetic);
        assert_eq!(c.classify("what is 10*5?"), Intent::Arithmetic);
        assert_eq!(c.classify("12 / 4"), Intent::Arithmetic);
        assert_eq!(c.classify("7-2"), Intent::Arithmetic);
    }

    #[test]
    fn arithmetic_outranks_keywords() {
        // "solve" is a mathematical keyword, but the pattern rule is first.
        let c = classifier();
        assert_eq!(c.classify("solve 2 + 3 for me"), Intent::Arithmetic);
    }

    #[test]
    fn mathematical_keywords_match() {
        let c = classifier();
        assert_eq!(
            c.classify("solve the quadratic equation"),
            Intent::Mathematical
        );
        assert_eq!(c.classify("find the derivative of x^2"), Intent::Mathematical);
    }

    #[test]
    fn mathematical_outranks_explanatory() {
        // Contains both "proof" (mathematical) and "explain" (explanatory);
        // the mathematical rule is evaluated first.
        let c = classifier();
        assert_eq!(
            c.classify("explain the proof of this theorem"),
            Intent::Mathematical
        );
    }

    #[test]
    fn explanatory_keywords_match() {
        let c = classifier();
        assert_eq!(
            c.classify("explain how transformers work"),
            Intent::Explanatory
        );
        assert_eq!(c.classify("what is entropy"), Intent::Explanatory);
    }

    #[test]
    fn explanatory_outranks_creative() {
        let c = classifier();
        assert_eq!(
            c.classify("explain this funny meme"),
            Intent::Explanatory
        );
    }

    #[test]
    fn creative_keywords_match() {
        let c = classifier();
        assert_eq!(c.classify("roast my code"), Intent::Creative);
        assert_eq!(c.classify("write a poem"), Intent::Creative);
    }

    #[test]
    fn general_is_the_default() {
        let c = classifier();
        assert_eq!(c.classify("hello there"), Intent::General);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = classifier();
        assert_eq!(c.classify("EXPLAIN this"), Intent::Explanatory);
        assert_eq!(c.classify("ROAST me"), Intent::Creative);
    }

    #[test]
    fn rules_are_enumerable_in_priority_order() {
        let c = classifier();
        let intents: Vec<Intent> = c.rules().iter().map(|r| r.intent).collect();
        assert_eq!(
            intents,
            vec![Intent::Mathematical, Intent::Explanatory, Intent::Creative]
        );
    }

    #[test]
    fn custom_keyword_sets_change_behavior_not_control_flow() {
        let config = IntentConfig {
            creative_keywords: vec!["limerick".to_string()],
            ..IntentConfig::default()
        };
        let c = IntentClassifier::new(&config);
        assert_eq!(c.classify("write me a limerick"), Intent::Creative);
        // The default creative keyword no longer triggers.
        assert_eq!(c.classify("tell a joke"), Intent::General);
    }
}
