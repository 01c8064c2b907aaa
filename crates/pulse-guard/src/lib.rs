//! # pulse-guard
//!
//! Authorization gate evaluated before any probe runs. Pure decision logic:
//! the caller extracts the presented key and source address from the
//! transport, the guard only decides. Either credential — shared secret or
//! allowlisted address — authorizes independently.

use std::net::IpAddr;
use std::str::FromStr;

use ipnetwork::IpNetwork;
use tracing::debug;

use pulse_core::config::GuardConfig;
use pulse_core::errors::GuardError;

/// One allowlist entry: an exact address or a CIDR block. CIDR containment
/// is bitwise on the parsed address, never string prefixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowRule {
    Exact(IpAddr),
    Network(IpNetwork),
}

impl AllowRule {
    /// Parse `203.0.113.7` or `10.1.0.0/16` (IPv6 forms included).
    pub fn parse(entry: &str) -> Result<Self, GuardError> {
        let entry = entry.trim();
        if entry.contains('/') {
            let network = IpNetwork::from_str(entry).map_err(|e| GuardError::InvalidAllowlist {
                entry: entry.to_string(),
                reason: e.to_string(),
            })?;
            Ok(AllowRule::Network(network))
        } else {
            let addr = IpAddr::from_str(entry).map_err(|e| GuardError::InvalidAllowlist {
                entry: entry.to_string(),
                reason: e.to_string(),
            })?;
            Ok(AllowRule::Exact(addr))
        }
    }

    pub fn matches(&self, ip: IpAddr) -> bool {
        match self {
            AllowRule::Exact(addr) => *addr == ip,
            AllowRule::Network(network) => network.contains(ip),
        }
    }
}

/// Authorization policy: an optional shared secret plus an IP allowlist.
/// Built explicitly from config — the guard never reads the environment.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    expected_key: Option<String>,
    allowlist: Vec<AllowRule>,
}

impl AccessPolicy {
    /// Build a policy from config, rejecting malformed allowlist entries up
    /// front rather than at request time.
    pub fn from_config(config: &GuardConfig) -> Result<Self, GuardError> {
        let allowlist = config
            .allowed_ips
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| AllowRule::parse(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            expected_key: config.api_key.clone(),
            allowlist,
        })
    }

    /// An open policy: no key, no allowlist, everything allowed.
    pub fn open() -> Self {
        Self {
            expected_key: None,
            allowlist: Vec::new(),
        }
    }

    /// True when neither credential is configured.
    pub fn is_open(&self) -> bool {
        self.expected_key.is_none() && self.allowlist.is_empty()
    }

    /// Decide whether a request may invoke the probes.
    ///
    /// Evaluation order: open system → shared secret (byte-equal) → IP
    /// allowlist. A key mismatch falls through to the allowlist so either
    /// credential can authorize on its own; when nothing passes, the caller
    /// gets an authentication-required rejection.
    pub fn authorize(
        &self,
        presented_key: Option<&str>,
        source_ip: Option<IpAddr>,
    ) -> Result<(), GuardError> {
        if self.is_open() {
            return Ok(());
        }

        if let (Some(expected), Some(presented)) = (&self.expected_key, presented_key) {
            if expected.as_bytes() == presented.as_bytes() {
                return Ok(());
            }
        }

        if let Some(ip) = source_ip {
            if self.allowlist.iter().any(|rule| rule.matches(ip)) {
                return Ok(());
            }
        }

        debug!(source_ip = ?source_ip, "request denied");
        Err(GuardError::Denied)
    }
}
