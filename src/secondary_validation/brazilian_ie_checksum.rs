use crate::normalization::keep_digits_and;
use crate::secondary_validation::{fold_ten, parse_digits, weighted_checksum, Validator};
use crate::RejectionReason;

pub struct BrazilianIeChecksum;

/// Leading letter of a rural producer registration (e.g. `P-01100424.3/0002`).
const RURAL_PRODUCER_MARKER: char = 'P';
const RURAL_PRODUCER_LENGTH: usize = 14;
const STANDARD_LENGTH: usize = 12;

const FIRST_CHECK_DIGIT_WEIGHTS: [u32; 8] = [1, 3, 4, 5, 6, 7, 8, 10];
const SECOND_CHECK_DIGIT_WEIGHTS: [u32; 11] = [3, 2, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// The two layouts of a state registration, picked by the marker letter.
#[derive(Debug, PartialEq, Eq)]
enum StateRegistration<'a> {
    /// Marker letter followed by 13 digits, one check digit at position 9.
    RuralProducer(&'a str),
    /// 12 digits with check digits at positions 8 and 11.
    Standard(&'a str),
}

impl<'a> StateRegistration<'a> {
    fn classify(normalized: &'a str) -> Self {
        if normalized.contains(RURAL_PRODUCER_MARKER) {
            StateRegistration::RuralProducer(normalized)
        } else {
            StateRegistration::Standard(normalized)
        }
    }

    fn verify(&self) -> Result<(), RejectionReason> {
        match self {
            StateRegistration::RuralProducer(ie) => {
                if ie.len() != RURAL_PRODUCER_LENGTH {
                    return Err(RejectionReason::WrongLength);
                }
                // The marker must lead, and a second one cannot stand for a digit.
                let digits = ie
                    .strip_prefix(RURAL_PRODUCER_MARKER)
                    .and_then(|rest| parse_digits::<13>(rest.as_bytes()))
                    .ok_or(RejectionReason::ChecksumMismatch)?;

                let v1 = fold_ten(weighted_checksum(&digits[..8], &FIRST_CHECK_DIGIT_WEIGHTS, 11));
                if v1 != digits[8] {
                    return Err(RejectionReason::ChecksumMismatch);
                }
                Ok(())
            }
            StateRegistration::Standard(ie) => {
                if ie.len() != STANDARD_LENGTH {
                    return Err(RejectionReason::WrongLength);
                }
                let digits: [u32; STANDARD_LENGTH] =
                    parse_digits(ie.as_bytes()).ok_or(RejectionReason::ChecksumMismatch)?;

                let v1 = fold_ten(weighted_checksum(&digits[..8], &FIRST_CHECK_DIGIT_WEIGHTS, 11));
                let v2 = fold_ten(weighted_checksum(
                    &digits[..11],
                    &SECOND_CHECK_DIGIT_WEIGHTS,
                    11,
                ));
                if v1 != digits[8] || v2 != digits[11] {
                    return Err(RejectionReason::ChecksumMismatch);
                }
                Ok(())
            }
        }
    }
}

/// Validates a São Paulo state registration (Inscrição Estadual).
///
/// Digits and the rural producer marker (either case) are kept; the marker is
/// returned uppercased.
pub fn validate_ie(candidate: &str) -> Result<String, RejectionReason> {
    let ie = keep_digits_and(candidate, RURAL_PRODUCER_MARKER);
    StateRegistration::classify(&ie).verify()?;
    Ok(ie)
}

impl Validator for BrazilianIeChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        validate_ie(candidate).is_ok()
    }
}
