// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic query complexity analysis.
//!
//! Combines three signals in fixed precedence: arithmetic intent forces
//! low, keyword tiers pick the highest matching tier, and a word-count
//! fallback covers queries with no tier keywords. Length escalation is
//! monotonic: it can raise the keyword tier but never lower it.

use semroute_config::model::ComplexityConfig;
use semroute_core::{Intent, Tier};

/// Keyword-tier and length-based complexity analyzer.
pub struct ComplexityAnalyzer {
    high_keywords: Vec<String>,
    medium_keywords: Vec<String>,
    low_keywords: Vec<String>,
    long_query_word_threshold: usize,
    very_long_query_word_threshold: usize,
}

impl ComplexityAnalyzer {
    /// Build the analyzer from configured keyword tiers and thresholds.
    pub fn new(config: &ComplexityConfig) -> Self {
        let lower = |set: &[String]| set.iter().map(|k| k.to_lowercase()).collect();
        Self {
            high_keywords: lower(&config.high_keywords),
            medium_keywords: lower(&config.medium_keywords),
            low_keywords: lower(&config.low_keywords),
            long_query_word_threshold: config.long_query_word_threshold,
            very_long_query_word_threshold: config.very_long_query_word_threshold,
        }
    }

    /// Estimate how demanding a query is to answer.
    pub fn analyze(&self, query: &str, intent: Intent) -> Tier {
        // Arithmetic queries are low complexity regardless of keyword tiers.
        if intent == Intent::Arithmetic {
            return Tier::Low;
        }

        let lowered = query.to_lowercase();
        let keyword_tier = self.keyword_tier(&lowered);
        let word_count = query.split_whitespace().count();

        self.escalate_by_length(keyword_tier, word_count)
    }

    /// The highest keyword tier with any match.
    fn keyword_tier(&self, lowered_query: &str) -> Option<Tier> {
        let matches = |set: &[String]| set.iter().any(|kw| lowered_query.contains(kw));

        if matches(&self.high_keywords) {
            Some(Tier::High)
        } else if matches(&self.medium_keywords) {
            Some(Tier::Medium)
        } else if matches(&self.low_keywords) {
            Some(Tier::Low)
        } else {
            None
        }
    }

    /// Word-count escalation: very long queries are at least medium, long
    /// queries keep whatever the keywords chose, and everything else
    /// bottoms out at low. Never downgrades.
    fn escalate_by_length(&self, keyword_tier: Option<Tier>, word_count: usize) -> Tier {
        let base = keyword_tier.unwrap_or(Tier::Low);
        if word_count > self.very_long_query_word_threshold {
            base.max(Tier::Medium)
        } else if word_count > self.long_query_word_threshold {
            base
        } else {
            base.max(Tier::Low)
        }
    }
}
