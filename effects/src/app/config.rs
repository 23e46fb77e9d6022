//! Reading and writing the TOML settings file of the `derive` subcommand.
//!
//! Every setting is optional, so an empty file is valid. A file listing each setting at its
//! default value is printed by `ledger-effects generate-config`.

use std::{fs, path::Path};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

/// Parses the settings file at `path`.
pub fn load_from_file<P: AsRef<Path>, C: DeserializeOwned>(path: P) -> anyhow::Result<C> {
    let path = path.as_ref();
    let raw = fs::read(path).with_context(|| format!("cannot read settings {}", path.display()))?;
    toml::from_slice(&raw).with_context(|| format!("invalid settings in {}", path.display()))
}

/// Renders settings as pretty-printed TOML.
pub fn to_string<C: Serialize>(settings: &C) -> anyhow::Result<String> {
    toml::to_string_pretty(settings).context("cannot render settings as TOML")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ledger_effects::Config;

    #[test]
    fn generated_config_should_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.pretty = true;
        fs::write(&config_path, super::to_string(&config).unwrap()).unwrap();

        let loaded: Config = super::load_from_file(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_should_fail() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result: anyhow::Result<Config> =
            super::load_from_file(temp_dir.path().join("missing.toml"));
        assert!(result.is_err());
    }
}
