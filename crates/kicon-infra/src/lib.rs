//! # kicon-infra
//!
//! Infrastructure adapters for the KICON registration client: the
//! reqwest-backed implementation of the backend port and layered
//! configuration loading.

pub mod http;
pub mod settings;

pub use http::HttpBackend;
pub use settings::load_config;
