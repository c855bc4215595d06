use crate::normalization::keep_digits_and;
use crate::secondary_validation::{parse_digits, weighted_checksum, Validator};
use crate::RejectionReason;

pub struct BrazilianRgChecksum;

const BRAZILIAN_RG_LENGTH: usize = 9;
/// Stands for a check digit of 10.
const TEN_CHECK_DIGIT: char = 'X';
const CHECKSUM_WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Validates a São Paulo identity card number (Registro Geral).
///
/// The last character is either a digit or `X` (either case); it is returned uppercased.
pub fn validate_rg(candidate: &str) -> Result<String, RejectionReason> {
    let rg = keep_digits_and(candidate, TEN_CHECK_DIGIT);
    if rg.len() != BRAZILIAN_RG_LENGTH {
        return Err(RejectionReason::WrongLength);
    }
    let (body, actual_checksum) = rg.split_at(BRAZILIAN_RG_LENGTH - 1);
    let digits: [u32; BRAZILIAN_RG_LENGTH - 1] =
        parse_digits(body.as_bytes()).ok_or(RejectionReason::ChecksumMismatch)?;

    let expected = match 11 - weighted_checksum(&digits, &CHECKSUM_WEIGHTS, 11) {
        11 => 0,
        r => r,
    };
    let actual = match actual_checksum.chars().next() {
        Some(TEN_CHECK_DIGIT) => Some(10),
        Some(c) => c.to_digit(10),
        None => None,
    };
    if actual != Some(expected) {
        return Err(RejectionReason::ChecksumMismatch);
    }
    Ok(rg)
}

impl Validator for BrazilianRgChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        validate_rg(candidate).is_ok()
    }
}
