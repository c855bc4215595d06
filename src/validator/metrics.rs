use crate::observability::labels::Labels;
use crate::{DocumentKind, RejectionReason};
use metrics::{counter, Counter};

pub struct ValidatorMetrics {
    pub accepted: Counter,
    pub wrong_length: Counter,
    pub checksum_mismatch: Counter,
}

const DOCUMENT: &str = "document";
const REASON: &str = "reason";

impl ValidatorMetrics {
    pub fn new(kind: DocumentKind, labels: &Labels) -> Self {
        let labels = labels.clone_with_labels(Labels::new(&[(DOCUMENT, kind.name())]));
        let rejected_with = |reason: RejectionReason| {
            counter!(
                "document_validation.rejected",
                labels.clone_with_labels(Labels::new(&[(REASON, reason.as_str())]))
            )
        };
        ValidatorMetrics {
            wrong_length: rejected_with(RejectionReason::WrongLength),
            checksum_mismatch: rejected_with(RejectionReason::ChecksumMismatch),
            accepted: counter!("document_validation.accepted", labels),
        }
    }

    pub fn record(&self, outcome: &Result<String, RejectionReason>) {
        match outcome {
            Ok(_) => self.accepted.increment(1),
            Err(RejectionReason::WrongLength) => self.wrong_length.increment(1),
            Err(RejectionReason::ChecksumMismatch) => self.checksum_mismatch.increment(1),
        }
    }
}
