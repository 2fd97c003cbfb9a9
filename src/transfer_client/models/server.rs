use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the companion server as reported by `/api/server-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub hostname: String,
    pub system: String,
    pub machine: String,
    pub processor: String,
    pub ip: String,
}

/// Reachability of the companion server, derived from the latest probe only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Online,
    #[default]
    Offline,
}

impl ConnectionState {
    pub fn is_online(self) -> bool {
        matches!(self, ConnectionState::Online)
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionState::Online => "online",
            ConnectionState::Offline => "offline",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value published by the connectivity monitor after each applied probe.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectivitySnapshot {
    pub state: ConnectionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<DateTime<Utc>>,
    /// Ticket of the probe that produced this snapshot (0 before the first one).
    pub probe_sequence: u64,
}

impl ConnectivitySnapshot {
    pub fn is_online(&self) -> bool {
        self.state.is_online()
    }
}
