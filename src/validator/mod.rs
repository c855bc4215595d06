use crate::observability::labels::Labels;
use crate::secondary_validation::Validator;
use crate::stats::GLOBAL_STATS;
use crate::{DocumentKind, RejectionReason};
use rayon::prelude::*;

use self::metrics::ValidatorMetrics;

pub mod config;
pub mod metrics;

/// A validator for one document family that reports every outcome as a metric.
///
/// Validation itself holds no state, so a single instance can be shared across
/// threads (e.g. behind an `Arc`).
pub struct DocumentValidator {
    kind: DocumentKind,
    labels: Labels,
    metrics: ValidatorMetrics,
}

impl DocumentValidator {
    pub fn builder(kind: DocumentKind) -> DocumentValidatorBuilder {
        DocumentValidatorBuilder::new(kind)
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn validate(&self, candidate: &str) -> Result<String, RejectionReason> {
        let outcome = self.kind.validate(candidate);
        self.metrics.record(&outcome);
        outcome
    }

    /// Validates every candidate on the rayon thread pool. Results keep the
    /// order of `candidates`.
    pub fn validate_batch<S>(&self, candidates: &[S]) -> Vec<Result<String, RejectionReason>>
    where
        S: AsRef<str> + Sync,
    {
        candidates
            .par_iter()
            .map(|candidate| self.validate(candidate.as_ref()))
            .collect()
    }
}

impl Validator for DocumentValidator {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }
}

impl Drop for DocumentValidator {
    fn drop(&mut self) {
        let stats = &*GLOBAL_STATS;
        stats.validator_deletions.increment(1);
        stats.decrement_total_validators();
    }
}

pub struct DocumentValidatorBuilder {
    kind: DocumentKind,
    labels: Labels,
}

impl DocumentValidatorBuilder {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            labels: Labels::empty(),
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> DocumentValidator {
        {
            let stats = &*GLOBAL_STATS;
            stats.validator_creations.increment(1);
            stats.increment_total_validators();
        }

        DocumentValidator {
            kind: self.kind,
            metrics: ValidatorMetrics::new(self.kind, &self.labels),
            labels: self.labels,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ::metrics::Label;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
    use metrics_util::MetricKind;
    use std::sync::Arc;
    use std::thread;

    fn counter_value(snapshotter: &Snapshotter, name: &str, labels: &[(&str, &str)]) -> u64 {
        let expected: Vec<Label> = labels
            .iter()
            .map(|(key, value)| Label::new(key.to_string(), value.to_string()))
            .collect();
        snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .find(|(key, _, _, _)| {
                key.kind() == MetricKind::Counter
                    && key.key().name() == name
                    && expected.iter().all(|label| key.key().labels().any(|l| l == label))
            })
            .map(|(_, _, _, value)| match value {
                DebugValue::Counter(value) => value,
                _ => panic!("{} is not a counter", name),
            })
            .unwrap_or(0)
    }

    #[test]
    fn should_submit_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            let validator = DocumentValidator::builder(DocumentKind::Cpf)
                .labels(Labels::new(&[("service", "billing")]))
                .build();
            assert!(validator.validate("529.982.247-25").is_ok());
            assert!(validator.validate("52998224725").is_ok());
            assert_eq!(
                validator.validate("529.982.247-26"),
                Err(RejectionReason::ChecksumMismatch)
            );
            assert_eq!(
                validator.validate("529.982"),
                Err(RejectionReason::WrongLength)
            );
        });

        assert_eq!(
            counter_value(
                &snapshotter,
                "document_validation.accepted",
                &[("document", "cpf"), ("service", "billing")]
            ),
            2
        );
        assert_eq!(
            counter_value(
                &snapshotter,
                "document_validation.rejected",
                &[("document", "cpf"), ("reason", "checksum_mismatch")]
            ),
            1
        );
        assert_eq!(
            counter_value(
                &snapshotter,
                "document_validation.rejected",
                &[("document", "cpf"), ("reason", "wrong_length")]
            ),
            1
        );
    }

    #[test]
    fn metrics_are_labelled_per_document() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            let rg = DocumentValidator::builder(DocumentKind::Rg).build();
            let ie = DocumentValidator::builder(DocumentKind::Ie).build();
            assert!(rg.is_valid_match("51.620.466-X"));
            assert!(!ie.is_valid_match("51.620.466-X"));
        });

        assert_eq!(
            counter_value(
                &snapshotter,
                "document_validation.accepted",
                &[("document", "rg")]
            ),
            1
        );
        assert_eq!(
            counter_value(
                &snapshotter,
                "document_validation.rejected",
                &[("document", "ie"), ("reason", "wrong_length")]
            ),
            1
        );
        assert_eq!(
            counter_value(
                &snapshotter,
                "document_validation.accepted",
                &[("document", "ie")]
            ),
            0
        );
    }

    #[test]
    fn batch_keeps_input_order() {
        let validator = DocumentValidator::builder(DocumentKind::Cnpj).build();
        let candidates = vec![
            "00.623.904/0001-73",
            "00.623.904/0001-71",
            "00.623.904",
            "11.222.333/0001-81",
        ];
        assert_eq!(
            validator.validate_batch(&candidates[..]),
            vec![
                Ok("00623904000173".to_string()),
                Err(RejectionReason::ChecksumMismatch),
                Err(RejectionReason::WrongLength),
                Ok("11222333000181".to_string()),
            ]
        );
    }

    #[test]
    fn batch_accepts_owned_strings() {
        let validator = DocumentValidator::builder(DocumentKind::Cpf).build();
        let candidates: Vec<String> = (0..100).map(|_| "529.982.247-25".to_string()).collect();
        assert!(validator
            .validate_batch(&candidates[..])
            .iter()
            .all(|outcome| outcome.as_deref() == Ok("52998224725")));
    }

    #[test]
    fn shared_across_threads() {
        let validator = Arc::new(DocumentValidator::builder(DocumentKind::Rg).build());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let validator = Arc::clone(&validator);
                thread::spawn(move || validator.validate("24.678.131-2"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok("246781312".to_string()));
        }
        assert_eq!(validator.kind(), DocumentKind::Rg);
        assert_eq!(validator.labels(), &Labels::empty());
    }
}
