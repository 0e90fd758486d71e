//! Port selection policy.
//!
//! Resolution order: first CLI argument that parses as a port, then the
//! `PORT` environment value, then the default. Pure over its inputs so the
//! policy is testable without sockets; the same goes for the single-step
//! bind fallback.

pub fn resolve_port(argv: &[String], env_port: Option<&str>, default: u16) -> u16 {
    if let Some(port) = argv.first().and_then(|a| a.parse::<u16>().ok()) {
        return port;
    }
    if let Some(port) = env_port.and_then(|e| e.parse::<u16>().ok()) {
        return port;
    }
    default
}

/// The one alternative tried when the resolved port is already bound.
/// `None` means there is nowhere left to go (port 65535).
pub fn fallback_port(port: u16) -> Option<u16> {
    port.checked_add(1)
}
