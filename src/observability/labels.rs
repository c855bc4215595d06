use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holder of metric labels providing some methods to easily clone and add new labels in it.
/// A key added twice keeps its last value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    pub fn empty() -> Self {
        Labels(BTreeMap::new())
    }

    pub fn new(labels: &[(impl ToString, impl ToString)]) -> Self {
        Labels(
            labels
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(&self, additional_labels: Labels) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.0);
        Labels(labels)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(key, value))
            .collect()
    }
}
