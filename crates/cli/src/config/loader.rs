// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;

use anyhow::{Result, anyhow};
use core_model_builder::TranslationOptions;
use schema_loader::LoaderOptions;
use serde::Deserialize;
use tracing::debug;

use super::model::Config;

pub const CONFIG_FILE_NAME: &str = "gqlstore.toml";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigSer {
    pub schema: Option<SchemaSer>,
    pub translation: Option<TranslationSer>,
}

#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SchemaSer {
    pub pattern: Option<String>,
}

#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct TranslationSer {
    #[serde(rename = "description-fallback")]
    pub description_fallback: Option<bool>,
}

impl TryFrom<ConfigSer> for Config {
    type Error = anyhow::Error;

    fn try_from(config: ConfigSer) -> Result<Self, Self::Error> {
        Ok(Config {
            loader: config
                .schema
                .map(LoaderOptions::try_from)
                .transpose()?
                .unwrap_or_default(),
            translation: config
                .translation
                .map(TranslationOptions::from)
                .unwrap_or_default(),
        })
    }
}

impl TryFrom<SchemaSer> for LoaderOptions {
    type Error = anyhow::Error;

    fn try_from(config: SchemaSer) -> Result<Self, Self::Error> {
        match config.pattern {
            Some(pattern) if pattern.trim().is_empty() => {
                Err(anyhow!("Schema file pattern cannot be empty"))
            }
            Some(pattern) => Ok(LoaderOptions {
                file_pattern: pattern,
            }),
            None => Ok(LoaderOptions::default()),
        }
    }
}

impl From<TranslationSer> for TranslationOptions {
    fn from(config: TranslationSer) -> Self {
        let default = TranslationOptions::default();

        TranslationOptions {
            description_fallback: config
                .description_fallback
                .unwrap_or(default.description_fallback),
        }
    }
}

fn load_config_from_file(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read file '{}': {}", path.display(), e))?;
    let config: ConfigSer = toml::from_str(&toml_str)
        .map_err(|e| anyhow!("Failed to parse TOML file '{}': {}", path.display(), e))?;

    config.try_into()
}

/// Load `gqlstore.toml` from `work_dir`, falling back to the defaults if there is none.
pub fn load_config(work_dir: &Path) -> Result<Config> {
    let config_path = work_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        debug!("No {CONFIG_FILE_NAME} in '{}'", work_dir.display());
        return Ok(Config::default());
    }

    load_config_from_file(&config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_test_config(name: &str) -> Result<Config> {
        let test_configs_dir =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("src/config/test-configs");
        let file_path = test_configs_dir.join(format!("{name}.toml"));
        load_config_from_file(&file_path)
    }

    #[test]
    fn test_load_empty_config() {
        let config = load_test_config("empty").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.translation.description_fallback);
        assert_eq!(config.loader.file_pattern, "*.graphql");
    }

    #[test]
    fn test_load_full_config() {
        let config = load_test_config("full").unwrap();
        assert_eq!(
            config,
            Config {
                loader: LoaderOptions {
                    file_pattern: "*.gql".to_string(),
                },
                translation: TranslationOptions {
                    description_fallback: false,
                },
            }
        );
    }

    #[test]
    fn test_unknown_key() {
        let err = load_test_config("unknown-key").unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML file"));
    }

    #[test]
    fn test_empty_pattern() {
        let config = ConfigSer {
            schema: Some(SchemaSer {
                pattern: Some(" ".to_string()),
            }),
            translation: None,
        };

        let err = Config::try_from(config).unwrap_err();
        assert_eq!(err.to_string(), "Schema file pattern cannot be empty");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(load_config(dir.path()).unwrap(), Config::default());
    }
}
