use crate::normalization::keep_digits;
use crate::secondary_validation::{fold_ten, parse_digits, weighted_sum, Validator};
use crate::RejectionReason;

pub struct BrazilianCpfChecksum;

const BRAZILIAN_CPF_DIGIT_COUNT: usize = 11;
const FIRST_CHECK_DIGIT_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_DIGIT_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validates a CPF (Cadastro de Pessoas Físicas) and returns its 11 digits.
///
/// Every non-digit character is dropped before the length check, so both
/// `529.982.247-25` and `52998224725` are accepted.
// https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
pub fn validate_cpf(candidate: &str) -> Result<String, RejectionReason> {
    let cpf = keep_digits(candidate);
    if cpf.len() != BRAZILIAN_CPF_DIGIT_COUNT {
        return Err(RejectionReason::WrongLength);
    }
    let digits: [u32; BRAZILIAN_CPF_DIGIT_COUNT] =
        parse_digits(cpf.as_bytes()).ok_or(RejectionReason::ChecksumMismatch)?;

    let (r1, r2) = raw_remainders(&digits);
    if fold_ten(r1) != digits[9] || fold_ten(r2) != digits[10] {
        return Err(RejectionReason::ChecksumMismatch);
    }
    Ok(cpf)
}

/// Both remainders before 10 is folded onto 0. The second one is computed over
/// the supplied first check digit, not the recomputed one.
fn raw_remainders(digits: &[u32; BRAZILIAN_CPF_DIGIT_COUNT]) -> (u32, u32) {
    let v1 = weighted_sum(&digits[..9], &FIRST_CHECK_DIGIT_WEIGHTS);
    let v2 = weighted_sum(&digits[..10], &SECOND_CHECK_DIGIT_WEIGHTS);
    ((v1 * 10) % 11, (v2 * 10) % 11)
}

impl Validator for BrazilianCpfChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        validate_cpf(candidate).is_ok()
    }
}
