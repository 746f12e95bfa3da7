//! Risk aggregation policy
//!
//! Maps the violation list for one message to a risk level. Direct contact
//! channels (phone) and payment details escalate immediately; social handles
//! escalate once there is more than one; email-only messages stay medium.

use oja_common::{RiskLevel, Violation, ViolationCategory};

/// Derive the risk level for one message from its full violation list.
pub fn risk_level(violations: &[Violation]) -> RiskLevel {
    if violations.is_empty() {
        return RiskLevel::Low;
    }

    let phone = count(violations, ViolationCategory::Phone);
    let payment = count(violations, ViolationCategory::Payment);
    let social = count(violations, ViolationCategory::Social);

    if phone > 0 && payment > 0 {
        return RiskLevel::High;
    }

    if phone > 0 || payment > 0 || social > 1 {
        return RiskLevel::High;
    }

    RiskLevel::Medium
}

fn count(violations: &[Violation], category: ViolationCategory) -> usize {
    violations
        .iter()
        .filter(|v| v.category == category)
        .count()
}
