use std::env;

use flights_core::storage::{TableNames, FLIGHTS_TABLE, PASSENGERS_TABLE};

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Physical table names (default: "flights" / "passengers")
    pub tables: TableNames,
    /// Passenger lookups in flight while expanding one flight (default: 1)
    pub lookup_concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_ENDPOINT_URL` - Use local DynamoDB (e.g., http://localhost:8000)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `FLIGHTS_TABLE` - Flights table name (default: "flights")
    /// - `PASSENGERS_TABLE` - Passengers table name (default: "passengers")
    /// - `LOOKUP_CONCURRENCY` - Concurrent passenger lookups per flight (default: 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|url| !url.is_empty()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            tables: TableNames {
                flights: lookup("FLIGHTS_TABLE").unwrap_or_else(|| FLIGHTS_TABLE.to_string()),
                passengers: lookup("PASSENGERS_TABLE")
                    .unwrap_or_else(|| PASSENGERS_TABLE.to_string()),
            },
            lookup_concurrency: lookup("LOOKUP_CONCURRENCY")
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(1),
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
