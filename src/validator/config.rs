use crate::observability::labels::Labels;
use crate::validator::DocumentValidator;
use crate::DocumentKind;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentValidatorConfig {
    pub kind: DocumentKind,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl DocumentValidatorConfig {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            labels: Labels::empty(),
        }
    }

    pub fn kind(&self, kind: DocumentKind) -> Self {
        self.mutate_clone(|x| x.kind = kind)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> DocumentValidator {
        DocumentValidator::builder(self.kind)
            .labels(self.labels.clone())
            .build()
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
