use super::config::ViaCepConfig;
use super::{LookupError, PostalAddress, PostalCodeLookup, PostalCodeLookupOutcome};
use metrics::{counter, Counter};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::warn;

struct LookupMetrics {
    found: Counter,
    not_found: Counter,
    error: Counter,
}

impl LookupMetrics {
    fn new() -> Self {
        LookupMetrics {
            found: counter!("postal_code.lookup", "outcome" => "found"),
            not_found: counter!("postal_code.lookup", "outcome" => "not_found"),
            error: counter!("postal_code.lookup", "outcome" => "error"),
        }
    }

    fn record(&self, outcome: &Result<PostalCodeLookupOutcome, LookupError>) {
        match outcome {
            Ok(PostalCodeLookupOutcome::Found(_)) => self.found.increment(1),
            Ok(PostalCodeLookupOutcome::NotFound) => self.not_found.increment(1),
            Err(_) => self.error.increment(1),
        }
    }
}

/// [PostalCodeLookup] backed by the ViaCEP web service.
///
/// Requests are blocking and bounded by the configured timeouts. There are no retries.
pub struct ViaCepLookup {
    config: ViaCepConfig,
    client: Client,
    metrics: LookupMetrics,
}

impl ViaCepLookup {
    pub fn new(config: ViaCepConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|err| LookupError::Request(err.to_string()))?;
        Ok(ViaCepLookup {
            config,
            client,
            metrics: LookupMetrics::new(),
        })
    }

    pub fn config(&self) -> &ViaCepConfig {
        &self.config
    }

    fn fetch(&self, code: &str) -> Result<PostalCodeLookupOutcome, LookupError> {
        let response = self
            .client
            .get(self.config.lookup_url(code))
            .header("Accept", "application/json")
            .send()
            .map_err(|err| LookupError::Request(err.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(LookupError::UnexpectedStatus(response.status().as_u16()));
        }
        let body = response
            .text()
            .map_err(|err| LookupError::InvalidResponse(err.to_string()))?;
        parse_response(&body)
    }
}

/// ViaCEP answers 200 for unknown postal codes, with an `erro` field in the body.
fn parse_response(body: &str) -> Result<PostalCodeLookupOutcome, LookupError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|err| LookupError::InvalidResponse(err.to_string()))?;
    if value.get("erro").is_some() {
        return Ok(PostalCodeLookupOutcome::NotFound);
    }
    serde_json::from_value::<PostalAddress>(value)
        .map(PostalCodeLookupOutcome::Found)
        .map_err(|err| LookupError::InvalidResponse(err.to_string()))
}

impl PostalCodeLookup for ViaCepLookup {
    fn lookup_postal_code(&self, code: &str) -> Result<PostalCodeLookupOutcome, LookupError> {
        let outcome = self.fetch(code);
        self.metrics.record(&outcome);
        if let Err(err) = &outcome {
            warn!(postal_code = code, error = %err, "postal code lookup failed");
        }
        outcome
    }
}
