//! HTTP adapter for the registration backend port.

pub mod backend;

pub use backend::HttpBackend;
