use afl::fuzz;
use brdoc_check::{validate_cep_shape, DocumentKind, Validator};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    for kind in DocumentKind::ALL {
        run_fuzz(kind, input);
    }
    if let Ok(cep) = validate_cep_shape(input) {
        assert_eq!(cep.len(), 8);
        assert_eq!(validate_cep_shape(&cep), Ok(cep.clone()));
    }
    Some(())
}

fn accepted_length(kind: DocumentKind, accepted: &str) -> usize {
    match kind {
        DocumentKind::Cpf => 11,
        DocumentKind::Cnpj => 14,
        DocumentKind::Ie if accepted.starts_with('P') => 14,
        DocumentKind::Ie => 12,
        DocumentKind::Rg => 9,
    }
}

fn run_fuzz(kind: DocumentKind, input: &str) {
    let outcome = kind.validate(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Document: {:?}", kind);
        println!("Input: {:?}", input);
        println!("Outcome: {:?}", outcome);
    }

    assert_eq!(kind.is_valid_match(input), outcome.is_ok());

    if let Ok(accepted) = outcome {
        assert_eq!(accepted.len(), accepted_length(kind, &accepted));
        assert!(accepted
            .chars()
            .all(|c| c.is_ascii_digit() || c == 'P' || c == 'X'));
        // accepting is idempotent
        assert_eq!(kind.validate(&accepted), Ok(accepted.clone()));
    }
}
