//! Postal code (CEP) validation.
//!
//! A CEP has no check digit: the shape is verified locally and existence is
//! delegated to a [PostalCodeLookup], usually [ViaCepLookup].

use crate::normalization::keep_digits;
use crate::RejectionReason;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
mod via_cep;

pub use via_cep::ViaCepLookup;

const POSTAL_CODE_DIGIT_COUNT: usize = 8;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PostalAddress {
    pub cep: String,
    #[serde(rename = "logradouro", default)]
    pub street: String,
    #[serde(rename = "complemento", default)]
    pub complement: String,
    #[serde(rename = "bairro", default)]
    pub neighborhood: String,
    #[serde(rename = "localidade", default)]
    pub city: String,
    #[serde(rename = "uf", default)]
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostalCodeLookupOutcome {
    Found(PostalAddress),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Error making HTTP request: {0}")]
    Request(String),

    #[error("Unexpected HTTP status code {0}")]
    UnexpectedStatus(u16),

    #[error("Unable to decode the lookup response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostalCodeError {
    #[error(transparent)]
    InvalidShape(#[from] RejectionReason),

    #[error("The postal code does not exist")]
    NotFound,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Tells whether a postal code exists. Implementations own their I/O,
/// timeouts and retries.
pub trait PostalCodeLookup: Send + Sync {
    fn lookup_postal_code(&self, code: &str) -> Result<PostalCodeLookupOutcome, LookupError>;
}

/// Keeps the digits of `candidate` and checks there are exactly 8 of them.
pub fn validate_cep_shape(candidate: &str) -> Result<String, RejectionReason> {
    let cep = keep_digits(candidate);
    if cep.len() != POSTAL_CODE_DIGIT_COUNT {
        return Err(RejectionReason::WrongLength);
    }
    Ok(cep)
}

/// Checks the shape of `candidate` then asks `lookup` whether it exists.
/// The lookup is never called for a malformed candidate.
pub fn validate_cep(
    candidate: &str,
    lookup: &dyn PostalCodeLookup,
) -> Result<String, PostalCodeError> {
    let cep = validate_cep_shape(candidate)?;
    match lookup.lookup_postal_code(&cep)? {
        PostalCodeLookupOutcome::Found(_) => Ok(cep),
        PostalCodeLookupOutcome::NotFound => Err(PostalCodeError::NotFound),
    }
}
