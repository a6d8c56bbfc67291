//! Domain layer for gesture-bridge.
//!
//! Pure types only: nothing here reads the environment, opens a socket, or
//! depends on an async runtime. The frame and hand types themselves live in
//! `gesture-core` so that embedders can parse frames without pulling in the
//! transport.

pub mod config;

pub use config::BridgeConfig;
