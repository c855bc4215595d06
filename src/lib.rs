// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod normalization;
mod observability;
mod postal_code;
mod secondary_validation;
mod stats;
mod validation;
mod validator;

// This is the public API of the library
pub use normalization::{keep_digits, keep_digits_and};
pub use observability::labels::Labels;
pub use postal_code::config::ViaCepConfig;
pub use postal_code::{
    validate_cep, validate_cep_shape, LookupError, PostalAddress, PostalCodeError,
    PostalCodeLookup, PostalCodeLookupOutcome, ViaCepLookup,
};
pub use secondary_validation::{
    validate_cnpj, validate_cpf, validate_ie, validate_rg, BrazilianCnpjChecksum,
    BrazilianCpfChecksum, BrazilianIeChecksum, BrazilianRgChecksum, Validator,
};
pub use validation::{DocumentKind, RejectionReason};
pub use validator::config::DocumentValidatorConfig;
pub use validator::{DocumentValidator, DocumentValidatorBuilder};
