//! Compiled rule matching
//!
//! Literal rules share one case-insensitive Aho-Corasick automaton; regex
//! rules compile individually. Matches carry byte spans; callers convert to
//! character offsets when building violation records.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use oja_common::{OjaError, OjaResult};
use regex::{Regex, RegexBuilder};

use crate::rules::{Rule, RuleKind};

/// Pre-compiled rule set shared by every scan
pub struct RuleSet {
    /// Automaton over all literal rules, if any
    literals: Option<AhoCorasick>,
    /// Automaton pattern id -> rule index
    literal_rules: Vec<usize>,
    /// Compiled regex rules with their rule index
    regexes: Vec<(usize, Regex)>,
}

/// One occurrence of one rule in the scanned text
#[derive(Debug, Clone)]
pub struct RuleMatch<'a> {
    /// Index of the rule in the scanner's rule table
    pub rule_index: usize,
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset past the match end
    pub end: usize,
    /// Matched text slice
    pub matched_text: &'a str,
}

impl RuleSet {
    /// Compile a rule table.
    ///
    /// Fails on a blank pattern or an invalid regex; literal phrases cannot
    /// fail individually.
    pub fn build(rules: &[Rule]) -> OjaResult<Self> {
        let mut literal_patterns = Vec::new();
        let mut literal_rules = Vec::new();
        let mut regexes = Vec::new();

        for (index, rule) in rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(OjaError::ConfigError(format!(
                    "blank pattern in {} rule table",
                    rule.category.as_str()
                )));
            }
            match rule.kind {
                RuleKind::Literal => {
                    literal_patterns.push(rule.pattern.as_str());
                    literal_rules.push(index);
                }
                RuleKind::Regex => {
                    let regex = RegexBuilder::new(&rule.pattern)
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| OjaError::InvalidRule(format!("{}: {e}", rule.pattern)))?;
                    regexes.push((index, regex));
                }
            }
        }

        let literals = if literal_patterns.is_empty() {
            None
        } else {
            Some(
                AhoCorasickBuilder::new()
                    .ascii_case_insensitive(true)
                    .build(&literal_patterns)
                    .map_err(|e| OjaError::InvalidRule(e.to_string()))?,
            )
        };

        Ok(Self {
            literals,
            literal_rules,
            regexes,
        })
    }

    /// Every occurrence of every rule, ordered by rule declaration order and
    /// then left to right.
    ///
    /// Occurrences of different rules may overlap; all are reported.
    pub fn find_matches<'a>(&self, text: &'a str) -> Vec<RuleMatch<'a>> {
        let mut matches = Vec::new();

        if let Some(automaton) = &self.literals {
            for m in automaton.find_overlapping_iter(text) {
                if !word_bounded(text, m.start(), m.end()) {
                    continue;
                }
                matches.push(RuleMatch {
                    rule_index: self.literal_rules[m.pattern().as_usize()],
                    start: m.start(),
                    end: m.end(),
                    matched_text: &text[m.start()..m.end()],
                });
            }
        }

        for (index, regex) in &self.regexes {
            for m in regex.find_iter(text) {
                matches.push(RuleMatch {
                    rule_index: *index,
                    start: m.start(),
                    end: m.end(),
                    matched_text: m.as_str(),
                });
            }
        }

        matches.sort_by_key(|m| (m.rule_index, m.start));
        matches
    }

    /// Total number of compiled rules
    pub fn rule_count(&self) -> usize {
        self.literal_rules.len() + self.regexes.len()
    }
}

/// Phrase hits must sit on word boundaries, matching the `\b` anchors the
/// regex rules use. Bare names like "uba" must not fire inside "tuba".
fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before_ok = start == 0 || !is_word_byte(bytes[start - 1]);
    let after_ok = end == bytes.len() || !is_word_byte(bytes[end]);
    before_ok && after_ok
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
