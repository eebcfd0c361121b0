// Request handlers
// Handling for /isPrime and /echoNumber: parse the `number` query
// parameter, compute the answer, serialize it, record metrics
//
// Numan Thabit 2025 Nov

use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use crate::errors::ServiceError;
use crate::metrics::ServiceMetrics;
use crate::prime::is_prime;

/// Name of the query parameter both endpoints read.
pub const NUMBER_PARAM: &str = "number";

/// Parsed `/isPrime` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimalityQuery {
    pub number: i64,
}

impl PrimalityQuery {
    /// Read `number` from a raw, still percent-encoded query string. The first
    /// occurrence wins when the parameter is repeated.
    pub fn from_query(raw_query: Option<&str>) -> Result<Self, ServiceError> {
        parse_number(raw_query).map(|number| Self { number })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimalityResult {
    pub number: i64,
    pub prime: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchoResult {
    pub message: String,
}

fn parse_number(raw_query: Option<&str>) -> Result<i64, ServiceError> {
    let raw = raw_query.unwrap_or_default();
    let value = url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == NUMBER_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| {
            ServiceError::InvalidInput(format!("missing `{NUMBER_PARAM}` parameter"))
        })?;

    value
        .parse::<i64>()
        .map_err(|e| ServiceError::InvalidInput(format!("{value:?}: {e}")))
}

/// Count the request, run `compute`, and on success serialize the body.
/// The histogram window closes after serialization, so it spans the whole
/// handler; failures are counted but never timed.
fn instrumented<T, F>(metrics: &ServiceMetrics, endpoint: &str, compute: F) -> Response
where
    T: Serialize,
    F: FnOnce() -> Result<T, ServiceError>,
{
    let start = Instant::now();
    metrics.record_request();

    match compute() {
        Ok(body) => {
            let response = Json(body).into_response();
            metrics.observe_duration(start.elapsed());
            response
        }
        Err(err) => {
            debug!(error = %err, endpoint, "rejecting request");
            err.into_response()
        }
    }
}

/// Primality check with request metrics.
#[derive(Clone)]
pub struct PrimalityService {
    metrics: ServiceMetrics,
}

impl PrimalityService {
    pub fn new(metrics: ServiceMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    /// Parse and classify without touching metrics.
    pub fn evaluate(&self, raw_query: Option<&str>) -> Result<PrimalityResult, ServiceError> {
        let query = PrimalityQuery::from_query(raw_query)?;
        Ok(PrimalityResult {
            number: query.number,
            prime: is_prime(query.number),
        })
    }

    /// Full `/isPrime` handler: 200 JSON or 400 `Invalid number`.
    pub fn handle(&self, raw_query: Option<&str>) -> Response {
        instrumented(&self.metrics, "/isPrime", || self.evaluate(raw_query))
    }
}

/// Number echo with the same metrics contract as [`PrimalityService`].
#[derive(Clone)]
pub struct EchoService {
    metrics: ServiceMetrics,
}

impl EchoService {
    pub fn new(metrics: ServiceMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    pub fn evaluate(&self, raw_query: Option<&str>) -> Result<EchoResult, ServiceError> {
        let number = parse_number(raw_query)?;
        Ok(EchoResult {
            message: format!("your number is {number}"),
        })
    }

    pub fn handle(&self, raw_query: Option<&str>) -> Response {
        instrumented(&self.metrics, "/echoNumber", || self.evaluate(raw_query))
    }
}
