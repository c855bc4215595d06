use crate::secondary_validation::{
    validate_cnpj, validate_cpf, validate_ie, validate_rg, Validator,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionReason {
    #[error("The document number does not have the length required by its type")]
    WrongLength,

    #[error("The check digits do not match the ones computed from the document number")]
    ChecksumMismatch,
}

impl RejectionReason {
    /// Value of the `reason` label on rejection metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::WrongLength => "wrong_length",
            RejectionReason::ChecksumMismatch => "checksum_mismatch",
        }
    }
}

impl From<RejectionReason> for i64 {
    fn from(value: RejectionReason) -> i64 {
        match value {
            RejectionReason::WrongLength => -1,
            RejectionReason::ChecksumMismatch => -2,
        }
    }
}

/// The document families that carry check digits.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "type")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas, the individual taxpayer ID.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, the company taxpayer ID.
    Cnpj,
    /// Inscrição Estadual, the state registration.
    Ie,
    /// Registro Geral, the state ID card.
    Rg,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Cpf,
        DocumentKind::Cnpj,
        DocumentKind::Ie,
        DocumentKind::Rg,
    ];

    /// Normalizes `candidate` and checks its length and check digits.
    pub fn validate(&self, candidate: &str) -> Result<String, RejectionReason> {
        match self {
            DocumentKind::Cpf => validate_cpf(candidate),
            DocumentKind::Cnpj => validate_cnpj(candidate),
            DocumentKind::Ie => validate_ie(candidate),
            DocumentKind::Rg => validate_rg(candidate),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cnpj => "cnpj",
            DocumentKind::Ie => "ie",
            DocumentKind::Rg => "rg",
        }
    }
}

impl Validator for DocumentKind {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_ser_tokens, Token};

    #[test]
    fn dispatches_to_each_family() {
        assert_eq!(
            DocumentKind::Cpf.validate("529.982.247-25"),
            Ok("52998224725".to_string())
        );
        assert_eq!(
            DocumentKind::Cnpj.validate("00.623.904/0001-73"),
            Ok("00623904000173".to_string())
        );
        assert_eq!(
            DocumentKind::Ie.validate("110.042.490.114"),
            Ok("110042490114".to_string())
        );
        assert_eq!(
            DocumentKind::Rg.validate("51.620.466-x"),
            Ok("51620466X".to_string())
        );
    }

    #[test]
    fn families_do_not_accept_each_other() {
        assert_eq!(
            DocumentKind::Cnpj.validate("529.982.247-25"),
            Err(RejectionReason::WrongLength)
        );
        assert_eq!(
            DocumentKind::Cpf.validate("00.623.904/0001-73"),
            Err(RejectionReason::WrongLength)
        );
        assert_eq!(
            DocumentKind::Rg.validate("110.042.490.114"),
            Err(RejectionReason::WrongLength)
        );
    }

    #[test]
    fn empty_input_is_wrong_length_for_every_family() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.validate(""), Err(RejectionReason::WrongLength));
            assert_eq!(kind.validate(" .-/ "), Err(RejectionReason::WrongLength));
            assert!(!kind.is_valid_match(""));
        }
    }

    #[test]
    fn should_serialize_with_type_tag() {
        assert_ser_tokens(
            &DocumentKind::Cpf,
            &[
                Token::Struct {
                    name: "DocumentKind",
                    len: 1,
                },
                Token::Str("type"),
                Token::Str("Cpf"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn should_deserialize_from_json() {
        for kind in DocumentKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(serde_json::from_str::<DocumentKind>(&json).unwrap(), kind);
        }
        assert_eq!(
            serde_json::from_str::<DocumentKind>(r#"{"type": "Rg"}"#).unwrap(),
            DocumentKind::Rg
        );
        assert!(serde_json::from_str::<DocumentKind>(r#"{"type": "Cep"}"#).is_err());
    }

    #[test]
    fn rejection_reasons_have_stable_labels_and_codes() {
        assert_eq!(RejectionReason::WrongLength.as_str(), "wrong_length");
        assert_eq!(
            RejectionReason::ChecksumMismatch.as_str(),
            "checksum_mismatch"
        );
        assert_eq!(i64::from(RejectionReason::WrongLength), -1);
        assert_eq!(i64::from(RejectionReason::ChecksumMismatch), -2);
    }
}
