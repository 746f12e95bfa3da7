//! Detection rule tables
//!
//! Four fixed tables, one per violation category. Table order is scan order:
//! phone, social, email, payment.

use oja_common::ViolationCategory;

/// How a rule's pattern is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Fixed phrase, matched case-insensitively on word boundaries
    Literal,
    /// Regular expression, compiled case-insensitively
    Regex,
}

/// One detection rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Category reported for every match of this rule
    pub category: ViolationCategory,
    /// Matching strategy
    pub kind: RuleKind,
    /// Phrase or regex source
    pub pattern: String,
}

impl Rule {
    /// Fixed-phrase rule
    pub fn literal(category: ViolationCategory, pattern: &str) -> Self {
        Self {
            category,
            kind: RuleKind::Literal,
            pattern: pattern.to_string(),
        }
    }

    /// Regex rule
    pub fn regex(category: ViolationCategory, pattern: &str) -> Self {
        Self {
            category,
            kind: RuleKind::Regex,
            pattern: pattern.to_string(),
        }
    }
}

/// Phone number rules: local mobile format, country-code variants, generic
/// international, and delimiter-formatted numbers.
pub fn phone_rules() -> Vec<Rule> {
    use ViolationCategory::Phone;
    vec![
        Rule::regex(Phone, r"\b0[789]\d{8,9}\b"),
        Rule::regex(Phone, r"\+?234[789]\d{8,9}\b"),
        Rule::regex(Phone, r"\+?\d{10,14}\b"),
        Rule::regex(Phone, r"\d{4}[-.\s]\d{3}[-.\s]\d{4}"),
    ]
}

/// Social media rules: bare handles, messenger keywords, short links, and
/// platform-prefixed handle mentions.
pub fn social_rules() -> Vec<Rule> {
    use ViolationCategory::Social;
    vec![
        Rule::regex(Social, r"@[a-z0-9._]{3,}"),
        Rule::literal(Social, "whatsapp"),
        Rule::regex(Social, r"\b(?:wa\.me|t\.me)/[a-z0-9._/-]+"),
        Rule::regex(Social, r"\b(?:instagram|insta|ig)[:\s]?\s*@?[a-z0-9._]{3,}"),
        Rule::regex(Social, r"\b(?:snapchat|snap)[:\s]?\s*@?[a-z0-9._]{3,}"),
        Rule::regex(Social, r"\b(?:facebook|fb)[:\s]?\s*@?[a-z0-9._]{3,}"),
        Rule::regex(Social, r"\btwitter[:\s]?\s*@?[a-z0-9._]{3,}"),
        Rule::regex(Social, r"\btiktok[:\s]?\s*@?[a-z0-9._]{3,}"),
        Rule::regex(Social, r"\byoutube[:\s]?\s*@?[a-z0-9._]{3,}"),
    ]
}

/// Email rules: a general matcher plus the providers students actually use,
/// and campus `.edu.ng` addresses.
pub fn email_rules() -> Vec<Rule> {
    use ViolationCategory::Email;
    vec![
        Rule::regex(Email, r"\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b"),
        Rule::regex(Email, r"\b[a-z0-9._%+-]+@gmail\.com\b"),
        Rule::regex(Email, r"\b[a-z0-9._%+-]+@yahoo\.com\b"),
        Rule::regex(Email, r"\b[a-z0-9._%+-]+@hotmail\.com\b"),
        Rule::regex(Email, r"\b[a-z0-9._%+-]+@outlook\.com\b"),
        Rule::regex(Email, r"\b[a-z0-9._%+-]+@[a-z0-9.-]+\.edu\.ng\b"),
    ]
}

/// Payment rules: transfer phrases, account-detail phrases, bank and fintech
/// names, and account-routing vocabulary.
pub fn payment_rules() -> Vec<Rule> {
    use ViolationCategory::Payment;
    vec![
        Rule::literal(Payment, "send to"),
        Rule::literal(Payment, "transfer to"),
        Rule::literal(Payment, "my account is"),
        Rule::literal(Payment, "account number"),
        Rule::literal(Payment, "account details"),
        Rule::literal(Payment, "account name"),
        Rule::regex(Payment, r"\bbank\s*:\s*\w+"),
        Rule::literal(Payment, "gtb"),
        Rule::literal(Payment, "first bank"),
        Rule::literal(Payment, "access bank"),
        Rule::literal(Payment, "zenith"),
        Rule::literal(Payment, "uba"),
        Rule::literal(Payment, "opay"),
        Rule::literal(Payment, "palmpay"),
        Rule::literal(Payment, "kuda"),
        Rule::literal(Payment, "monnify"),
        Rule::literal(Payment, "sort code"),
        Rule::literal(Payment, "routing number"),
    ]
}

/// Full default table in category scan order.
pub fn default_rules() -> Vec<Rule> {
    let mut rules = phone_rules();
    rules.extend(social_rules());
    rules.extend(email_rules());
    rules.extend(payment_rules());
    rules
}
