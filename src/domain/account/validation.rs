//! Account field validation
//!
//! Holds the CPF check-digit algorithm plus the format rules for names,
//! email addresses and car plates.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountValidationError {
    #[error("Name must contain at least a first and a last name")]
    InvalidName,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid CPF")]
    InvalidCpf,

    #[error("Car plate must be three letters followed by four digits")]
    InvalidCarPlate,
}

const CPF_LENGTH: usize = 11;
const FIRST_CHECK_DIGIT_FACTOR: i32 = 10;
const SECOND_CHECK_DIGIT_FACTOR: i32 = 11;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z] [a-zA-Z]+").unwrap());
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+)@(.+)$").unwrap());
static CAR_PLATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{3}[0-9]{4}").unwrap());

/// Validate a CPF (Brazilian taxpayer identifier).
///
/// Accepts any string; formatting characters such as dots and dashes are
/// stripped before checking. Returns `false` for anything that does not
/// come down to 11 digits whose two trailing check digits match the
/// weighted mod-11 scheme. Never fails.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }

    // Repdigit CPFs pass the checksum but are reserved placeholder values.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let first = calculate_check_digit(&digits, FIRST_CHECK_DIGIT_FACTOR);
    let second = calculate_check_digit(&digits, SECOND_CHECK_DIGIT_FACTOR);

    digits[9..] == [first, second]
}

/// Weighted mod-11 check digit.
///
/// Scans the full digit sequence; the weight counts down from `factor` on
/// every position and a digit only contributes while the weight is still
/// above 1, so the trailing positions never enter the sum.
fn calculate_check_digit(digits: &[u32], factor: i32) -> u32 {
    let mut weight = factor;
    let mut total = 0i32;

    for &digit in digits {
        if weight > 1 {
            total += digit as i32 * weight;
        }
        weight -= 1;
    }

    let remainder = total % 11;

    if remainder < 2 { 0 } else { (11 - remainder) as u32 }
}

/// Validate an account holder name: at least two space-separated words.
pub fn validate_name(name: &str) -> Result<(), AccountValidationError> {
    if !NAME_PATTERN.is_match(name) {
        return Err(AccountValidationError::InvalidName);
    }

    Ok(())
}

/// Validate an email address: something before and after a single `@`.
pub fn validate_email(email: &str) -> Result<(), AccountValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(AccountValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a car plate: three uppercase letters followed by four digits.
pub fn validate_car_plate(car_plate: &str) -> Result<(), AccountValidationError> {
    if !CAR_PLATE_PATTERN.is_match(car_plate) {
        return Err(AccountValidationError::InvalidCarPlate);
    }

    Ok(())
}
