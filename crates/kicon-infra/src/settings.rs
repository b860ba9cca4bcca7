//! Client configuration loading.
//!
//! Layering, lowest priority first: built-in defaults, an optional TOML
//! file, then `KICON_*` environment variables.

use std::path::Path;

use config::{Config, Environment, File};
use kicon_core::ClientConfig;

/// Load the client configuration.
///
/// A missing file is not an error; the defaults and environment still apply.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    let defaults = ClientConfig::default();

    let mut builder = Config::builder()
        .set_default("base_url", defaults.base_url)?
        .set_default("request_timeout_secs", defaults.request_timeout_secs)?;

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(false));
    }

    let settings = builder
        .add_source(Environment::with_prefix("KICON"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_apply_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "base_url = \"https://backend.kicon.example\"").unwrap();
        file.flush().unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "https://backend.kicon.example");
        // untouched keys keep their defaults
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = load_config(Some(Path::new("/nonexistent/kicon.toml"))).unwrap();
        assert_eq!(config.base_url, "http://localhost:8001");
    }
}
