//! Server configuration from the environment.

use std::net::SocketAddr;

use tracing::warn;

use crate::planner::PlannerConfig;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "CAMPUS_BIND_ADDR";

/// Environment variable enabling the destination early exit.
pub const STOP_AT_DESTINATION_VAR: &str = "CAMPUS_STOP_AT_DESTINATION";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Planner settings shared by all requests.
    pub planner: PlannerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            planner: PlannerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup.
    ///
    /// Unset variables keep their defaults; malformed ones are logged and
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            match raw.trim().parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warn!(var = BIND_ADDR_VAR, value = %raw, error = %e, "ignoring bad address"),
            }
        }

        if let Some(raw) = lookup(STOP_AT_DESTINATION_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.planner.stop_at_destination = flag,
                None => warn!(var = STOP_AT_DESTINATION_VAR, value = %raw, "ignoring bad flag"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
