use crate::normalization::keep_digits;
use crate::secondary_validation::{parse_digits, weighted_checksum, Validator};
use crate::RejectionReason;

pub struct BrazilianCnpjChecksum;

const BRAZILIAN_CNPJ_DIGIT_COUNT: usize = 14;
const FIRST_CHECK_DIGIT_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_DIGIT_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validates a CNPJ (Cadastro Nacional da Pessoa Jurídica) and returns its 14 digits.
// https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
pub fn validate_cnpj(candidate: &str) -> Result<String, RejectionReason> {
    let cnpj = keep_digits(candidate);
    if cnpj.len() != BRAZILIAN_CNPJ_DIGIT_COUNT {
        return Err(RejectionReason::WrongLength);
    }
    let digits: [u32; BRAZILIAN_CNPJ_DIGIT_COUNT] =
        parse_digits(cnpj.as_bytes()).ok_or(RejectionReason::ChecksumMismatch)?;

    let v1 = check_digit(weighted_checksum(&digits[..12], &FIRST_CHECK_DIGIT_WEIGHTS, 11));
    let v2 = check_digit(weighted_checksum(&digits[..13], &SECOND_CHECK_DIGIT_WEIGHTS, 11));

    // Compare the computed checksum with the provided one
    if v1 != digits[12] || v2 != digits[13] {
        return Err(RejectionReason::ChecksumMismatch);
    }
    Ok(cnpj)
}

#[inline]
fn check_digit(remainder: u32) -> u32 {
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

impl Validator for BrazilianCnpjChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        validate_cnpj(candidate).is_ok()
    }
}
