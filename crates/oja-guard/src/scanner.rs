//! Message scanner combining rule matching, risk policy, and reporting

use std::sync::{Arc, OnceLock};

use oja_common::{OjaResult, RiskLevel, Violation};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::patterns::RuleSet;
use crate::report;
use crate::risk;
use crate::rules::{default_rules, Rule};

/// Scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Enable scanning; a disabled scanner reports every message as safe
    pub enabled: bool,
    /// Optional input bound; longer messages are truncated at a character
    /// boundary before scanning
    pub max_scan_bytes: Option<usize>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_scan_bytes: None,
        }
    }
}

/// Scan result for one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// True iff the violation list is non-empty
    pub has_violation: bool,
    /// Every flagged occurrence, in category scan order, then rule
    /// declaration order, then left to right
    pub violations: Vec<Violation>,
    /// Aggregated risk level
    pub risk_level: RiskLevel,
    /// Human-readable summary
    pub summary_message: String,
}

impl ScanResult {
    fn from_violations(violations: Vec<Violation>) -> Self {
        let has_violation = !violations.is_empty();
        let risk_level = risk::risk_level(&violations);
        let summary_message = report::summary_message(has_violation, risk_level, violations.len());
        Self {
            has_violation,
            violations,
            risk_level,
            summary_message,
        }
    }

    fn safe() -> Self {
        Self::from_violations(Vec::new())
    }
}

/// Contact-exchange scanner for marketplace chat messages
pub struct ContactScanner {
    config: GuardConfig,
    rules: Arc<Vec<Rule>>,
    compiled: RuleSet,
}

impl ContactScanner {
    /// Create a scanner over the default rule tables.
    pub fn new(config: GuardConfig) -> OjaResult<Self> {
        Self::with_rules(config, default_rules())
    }

    /// Create a scanner over a caller-supplied rule table.
    pub fn with_rules(config: GuardConfig, rules: Vec<Rule>) -> OjaResult<Self> {
        let compiled = RuleSet::build(&rules)?;
        Ok(Self {
            config,
            rules: Arc::new(rules),
            compiled,
        })
    }

    /// Scan one message.
    ///
    /// Never fails: empty, whitespace-only, and arbitrary Unicode input all
    /// produce a valid result. Deterministic for a given input.
    pub fn scan(&self, message: &str) -> ScanResult {
        if !self.config.enabled {
            return ScanResult::safe();
        }

        let message = match self.config.max_scan_bytes {
            Some(limit) if message.len() > limit => {
                let mut end = limit;
                while end > 0 && !message.is_char_boundary(end) {
                    end -= 1;
                }
                warn!(
                    "message truncated for scan: {} of {} bytes",
                    end,
                    message.len()
                );
                &message[..end]
            }
            _ => message,
        };

        let violations = self.collect_violations(message);
        if !violations.is_empty() {
            info!("found {} contact violations", violations.len());
        }
        ScanResult::from_violations(violations)
    }

    /// Scan raw bytes, decoding as UTF-8 (lossily if needed).
    pub fn scan_bytes(&self, content: &[u8]) -> ScanResult {
        match std::str::from_utf8(content) {
            Ok(text) => self.scan(text),
            Err(_) => self.scan(&String::from_utf8_lossy(content)),
        }
    }

    /// Render the message with every flagged span masked out.
    pub fn redact(&self, message: &str) -> String {
        if !self.config.enabled {
            return message.to_string();
        }
        let matches = self.compiled.find_matches(message);
        report::mask_spans(message, matches.iter().map(|m| (m.start, m.end)))
    }

    /// Number of rules in this scanner's table
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn collect_violations(&self, message: &str) -> Vec<Violation> {
        let matches = self.compiled.find_matches(message);
        let mut violations = Vec::with_capacity(matches.len());
        for m in &matches {
            let category = self.rules[m.rule_index].category;
            debug!("contact rule hit: {} at {}", category.as_str(), m.start);
            violations.push(Violation::new(
                category,
                m.matched_text,
                char_offset(message, m.start),
            ));
        }
        violations
    }
}

/// Scan a message with the shared default scanner.
///
/// The default rule tables compile once per process and are read-only
/// afterwards; this function is safe to call concurrently from any thread.
pub fn scan(message: &str) -> ScanResult {
    static DEFAULT: OnceLock<ContactScanner> = OnceLock::new();
    let scanner = DEFAULT.get_or_init(|| {
        ContactScanner::new(GuardConfig::default()).expect("default contact rules are valid")
    });
    scanner.scan(message)
}

fn char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}
