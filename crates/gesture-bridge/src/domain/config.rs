//! Bridge configuration types.
//!
//! [`BridgeConfig`] is the single source of truth for runtime settings. It is
//! a plain struct: the binary populates it from CLI arguments and environment
//! variables, tests construct it directly. Keeping environment reads out of
//! the domain makes the bridge easy to embed.

use std::net::SocketAddr;

/// All runtime configuration for the bridge.
///
/// Build once at startup, then share behind an `Arc` with every connection
/// task.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// The address and port the WebSocket server binds to.
    ///
    /// `0.0.0.0` accepts connections from any interface. The default port
    /// 8885 is the one the vision pipeline is deployed against.
    pub ws_bind_addr: SocketAddr,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            // Compile-time-known valid socket address string.
            ws_bind_addr: "0.0.0.0:8885".parse().unwrap(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ws_port_is_8885() {
        let cfg = BridgeConfig::default();
        assert_eq!(cfg.ws_bind_addr.port(), 8885);
    }

    #[test]
    fn test_default_bind_accepts_any_interface() {
        let cfg = BridgeConfig::default();
        assert!(cfg.ws_bind_addr.ip().is_unspecified());
    }

    #[test]
    fn test_config_can_be_cloned() {
        // Cloneability is required so the config can be shared across
        // connection tasks.
        let cfg = BridgeConfig::default();
        assert_eq!(cfg.ws_bind_addr, cfg.clone().ws_bind_addr);
    }

    #[test]
    fn test_config_custom_address() {
        let cfg = BridgeConfig {
            ws_bind_addr: "127.0.0.1:9000".parse().unwrap(),
        };
        assert_eq!(cfg.ws_bind_addr.port(), 9000);
        assert!(cfg.ws_bind_addr.ip().is_loopback());
    }
}
