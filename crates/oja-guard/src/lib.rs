//! Contact-Exchange Scanner
//!
//! Flags attempts to move a marketplace deal off-platform: phone numbers,
//! social handles, email addresses, and payment details inside chat messages.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Message Scan Pipeline                 │
//! │                                                          │
//! │  ┌─────────────┐   ┌─────────────┐                       │
//! │  │Aho-Corasick │   │   Regex     │                       │
//! │  │  Phrases    │   │  Patterns   │                       │
//! │  │   O(n)      │   │ per rule    │                       │
//! │  └──────┬──────┘   └──────┬──────┘                       │
//! │         │                 │                              │
//! │         └────────┬────────┘                              │
//! │                  │                                       │
//! │           ┌──────▼──────┐   ┌──────────┐   ┌──────────┐  │
//! │           │ Violations  │──▶│   Risk   │──▶│ Summary  │  │
//! │           │  (ordered)  │   │  Policy  │   │ Message  │  │
//! │           └─────────────┘   └──────────┘   └──────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod patterns;
pub mod report;
pub mod risk;
pub mod rules;
pub mod scanner;

pub use patterns::RuleSet;
pub use rules::{default_rules, Rule, RuleKind};
pub use scanner::{scan, ContactScanner, GuardConfig, ScanResult};

pub use oja_common::{OjaError, OjaResult, RiskLevel, Violation, ViolationCategory};
