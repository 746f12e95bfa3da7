//! Violation records produced by the chat moderation engine

use serde::{Deserialize, Serialize};

/// Category of a flagged contact-exchange attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationCategory {
    /// Phone numbers in any recognized format
    Phone,
    /// Social media handles and messenger links
    Social,
    /// Email addresses
    Email,
    /// Off-platform payment details
    Payment,
}

impl ViolationCategory {
    /// Wire identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Social => "social",
            Self::Email => "email",
            Self::Payment => "payment",
        }
    }

    /// Display label shown to users and moderators
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "Phone Numbers",
            Self::Social => "Social Media Handles",
            Self::Email => "Email Addresses",
            Self::Payment => "Payment Information",
        }
    }
}

/// Risk level derived from the violations found in one message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No contact information found
    Low,
    /// Indirect contact information only
    Medium,
    /// Direct contact or payment information
    High,
}

impl RiskLevel {
    /// Wire identifier for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::Low
    }
}

/// One flagged occurrence inside a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Category that flagged the text
    pub category: ViolationCategory,
    /// Exact substring that triggered the match
    pub matched_text: String,
    /// Zero-based character offset of the match start
    pub position: usize,
    /// Display label for the category
    pub label: String,
}

impl Violation {
    /// Create a violation; the label is derived from the category
    pub fn new(category: ViolationCategory, matched_text: impl Into<String>, position: usize) -> Self {
        Self {
            category,
            matched_text: matched_text.into(),
            position,
            label: category.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(ViolationCategory::Phone.label(), "Phone Numbers");
        assert_eq!(ViolationCategory::Social.label(), "Social Media Handles");
        assert_eq!(ViolationCategory::Email.label(), "Email Addresses");
        assert_eq!(ViolationCategory::Payment.label(), "Payment Information");
    }

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::default(), RiskLevel::Low);
    }

    #[test]
    fn test_violation_wire_shape() {
        let v = Violation::new(ViolationCategory::Phone, "08031234567", 11);
        let json = serde_json::to_value(&v).unwrap();

        assert_eq!(json["category"], "phone");
        assert_eq!(json["matchedText"], "08031234567");
        assert_eq!(json["position"], 11);
        assert_eq!(json["label"], "Phone Numbers");
    }

    #[test]
    fn test_risk_level_wire_shape() {
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), "high");
        assert_eq!(serde_json::to_value(RiskLevel::Low).unwrap(), "low");
    }
}
