use crate::{
    config::OracleConfig,
    engines::evaluation::FitnessOracle,
    error::{EvomovesError, Result},
};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct EvaluateRequest<'a> {
    solutions: &'a [String],
}

#[derive(Deserialize)]
struct EvaluateResponse {
    fitness_scores: Option<Vec<f64>>,
}

/// Scores genomes through the HTTP scoring service (`POST <base>/evaluate`).
///
/// Any transport or protocol failure yields `0.0` for every genome in the
/// batch; the failure is logged, never returned.
pub struct RemoteFitnessOracle {
    client: Client,
    endpoint: String,
}

impl RemoteFitnessOracle {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EvomovesError::Oracle(format!("HTTP client init failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: evaluate_endpoint(base_url),
        })
    }

    pub fn from_config(config: &OracleConfig) -> Result<Self> {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_scores(&self, genomes: &[String]) -> Result<Vec<f64>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EvaluateRequest { solutions: genomes })
            .send()
            .map_err(|e| {
                EvomovesError::Oracle(format!("request to {} failed: {e}", self.endpoint))
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| EvomovesError::Oracle(format!("reading response body failed: {e}")))?;

        parse_scores(status, &body)
    }
}

impl FitnessOracle for RemoteFitnessOracle {
    fn evaluate(&self, genomes: &[String]) -> Vec<f64> {
        if genomes.is_empty() {
            return Vec::new();
        }

        match self.request_scores(genomes) {
            Ok(scores) => scores,
            Err(e) => {
                log::error!("Error evaluating fitness: {}", e);
                vec![0.0; genomes.len()]
            }
        }
    }
}

fn evaluate_endpoint(base_url: &str) -> String {
    format!("{}/evaluate", base_url.trim_end_matches('/'))
}

fn parse_scores(status: u16, body: &str) -> Result<Vec<f64>> {
    if status != 200 {
        return Err(EvomovesError::Oracle(format!(
            "unexpected status {status}, body: {body}"
        )));
    }

    let parsed: EvaluateResponse = serde_json::from_str(body)?;
    parsed
        .fitness_scores
        .ok_or_else(|| EvomovesError::Oracle("response has no fitness_scores field".to_string()))
}
