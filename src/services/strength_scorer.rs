//! Heuristic password strength scoring.

use crate::types::generator::StrengthReport;

/// Scores a password from 0 to 100 with feedback for the missing criteria.
///
/// Deterministic pure function:
/// - length >= 12 earns 25 points (>= 8 earns 15), with a 10 point bonus at 16;
/// - each present character class earns its points (lowercase 15, uppercase
///   15, digit 15, symbol 20);
/// - every missed criterion contributes one feedback line.
pub fn score_password(password: &str) -> StrengthReport {
    let mut score = 0u32;
    let mut feedback = Vec::new();
    let length = password.chars().count();

    if length >= 12 {
        score += 25;
    } else if length >= 8 {
        score += 15;
    } else {
        feedback.push("Use at least 12 characters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    } else {
        feedback.push("Add lowercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    } else {
        feedback.push("Add uppercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    } else {
        feedback.push("Add numbers".to_string());
    }

    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 20;
    } else {
        feedback.push("Add symbols".to_string());
    }

    if length >= 16 {
        score += 10;
    }

    StrengthReport {
        score: score.min(100) as u8,
        feedback,
    }
}
