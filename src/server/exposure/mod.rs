//! API exposure of the plugin host
//!
//! An exposure consumes a `PluginHost` and produces a Router for its protocol.

pub mod rest;

pub use rest::RestExposure;
