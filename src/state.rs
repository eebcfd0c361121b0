// Shared application state
//
// Built once at startup and cloned into every request handler. Owns the
// process-wide metrics registry and the services registered against it.
//
// Numan Thabit 2025 Nov

use prometheus::Registry;

use crate::errors::ServiceError;
use crate::metrics::ServiceMetrics;
use crate::service::{EchoService, PrimalityService};

pub const PRIME_METRICS_PREFIX: &str = "is_prime";
pub const ECHO_METRICS_PREFIX: &str = "echo_number";

#[derive(Clone)]
pub struct AppState {
    registry: Registry,
    pub primality: PrimalityService,
    pub echo: EchoService,
}

impl AppState {
    /// Create the registry and register every service's metrics into it.
    /// Call once per process; a second registry would split the exported series.
    pub fn new() -> Result<Self, ServiceError> {
        let registry = Registry::new();
        let primality = PrimalityService::new(ServiceMetrics::register(
            &registry,
            PRIME_METRICS_PREFIX,
            "/isPrime",
        )?);
        let echo = EchoService::new(ServiceMetrics::register(
            &registry,
            ECHO_METRICS_PREFIX,
            "/echoNumber",
        )?);

        Ok(Self {
            registry,
            primality,
            echo,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
