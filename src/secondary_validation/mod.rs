mod brazilian_cnpj_checksum;
mod brazilian_cpf_checksum;
mod brazilian_ie_checksum;
mod brazilian_rg_checksum;

pub use crate::secondary_validation::brazilian_cnpj_checksum::{
    validate_cnpj, BrazilianCnpjChecksum,
};
pub use crate::secondary_validation::brazilian_cpf_checksum::{validate_cpf, BrazilianCpfChecksum};
pub use crate::secondary_validation::brazilian_ie_checksum::{validate_ie, BrazilianIeChecksum};
pub use crate::secondary_validation::brazilian_rg_checksum::{validate_rg, BrazilianRgChecksum};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Converts exactly `N` ASCII digits into their numeric values.
/// Returns `None` on a length mismatch or on any non-digit byte.
fn parse_digits<const N: usize>(bytes: &[u8]) -> Option<[u32; N]> {
    if bytes.len() != N {
        return None;
    }
    let mut digits = [0; N];
    for (digit, byte) in digits.iter_mut().zip(bytes) {
        *digit = char::from(*byte).to_digit(10)?;
    }
    Some(digits)
}

/// Sum of every digit multiplied by the weight at the same position.
#[inline]
fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    debug_assert_eq!(digits.len(), weights.len());
    digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum()
}

#[inline]
fn weighted_checksum(digits: &[u32], weights: &[u32], modulus: u32) -> u32 {
    weighted_sum(digits, weights) % modulus
}

/// Modulo 11 remainders only fit a single decimal digit once 10 is folded onto 0.
#[inline]
fn fold_ten(remainder: u32) -> u32 {
    if remainder == 10 {
        0
    } else {
        remainder
    }
}
