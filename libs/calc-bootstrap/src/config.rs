//! Layered configuration loading.
//!
//! Sources are merged in this order, later ones winning:
//! 1. serialized `T::default()`
//! 2. YAML file (if a path is given; it must exist)
//! 3. environment variables under a prefix, nested with `__`
//!    (`CALC__LOGGING__LEVEL=debug` sets `logging.level`)
//!
//! Command-line overrides are applied by the binary on top of the result.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Configuration loading error.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {path}")]
    MissingFile { path: String },
    #[error("invalid configuration: {source}")]
    Invalid {
        #[source]
        source: Box<figment::Error>,
    },
    #[error("failed to render configuration as YAML: {0}")]
    Render(String),
}

/// Load a typed configuration from defaults, an optional YAML file and the
/// environment.
///
/// # Errors
/// Returns [`ConfigError::MissingFile`] if `path` is given but is not a file,
/// and [`ConfigError::Invalid`] if the merged sources do not deserialize
/// into `T`.
pub fn load_layered<T>(path: Option<&Path>, env_prefix: &str) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned + Default,
{
    let mut figment = Figment::from(Serialized::defaults(T::default()));

    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        tracing::debug!(path = %path.display(), "Loading configuration file");
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(env_prefix).split("__"))
        .extract()
        .map_err(|e| ConfigError::Invalid {
            source: Box::new(e),
        })
}

/// Render a configuration as YAML.
///
/// # Errors
/// Returns [`ConfigError::Render`] if serialization fails.
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String, ConfigError> {
    serde_saphyr::to_string(value).map_err(|e| ConfigError::Render(e.to_string()))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    const PREFIX: &str = "CALC_BOOTSTRAP_TEST__";

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct Sample {
        name: String,
        workers: usize,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self {
                name: "default".to_owned(),
                workers: 10,
            }
        }
    }

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write yaml");
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let cfg: Sample = load_layered(None, PREFIX).expect("defaults should load");
        assert_eq!(cfg, Sample::default());
    }

    #[test]
    fn test_yaml_overrides_defaults() {
        let file = yaml_file("workers: 3\n");
        let cfg: Sample = load_layered(Some(file.path()), PREFIX).expect("yaml should load");
        assert_eq!(cfg.workers, 3);
        assert_eq!(cfg.name, "default");
    }

    #[test]
    fn test_env_overrides_yaml() {
        let file = yaml_file("name: from-yaml\nworkers: 3\n");
        // Separate prefix so parallel tests never observe this variable.
        temp_env::with_var("CALC_BOOTSTRAP_ENV_TEST__WORKERS", Some("7"), || {
            let cfg: Sample = load_layered(Some(file.path()), "CALC_BOOTSTRAP_ENV_TEST__")
                .expect("env should load");
            assert_eq!(cfg.workers, 7);
            assert_eq!(cfg.name, "from-yaml");
        });
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let err = load_layered::<Sample>(Some(Path::new("/nonexistent/calc.yaml")), PREFIX)
            .expect_err("missing file must fail");
        assert!(matches!(err, ConfigError::MissingFile { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let file = yaml_file("workers: 3\nbogus: true\n");
        let err = load_layered::<Sample>(Some(file.path()), PREFIX).expect_err("must fail");
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_to_yaml_contains_fields() {
        let yaml = to_yaml(&Sample::default()).expect("render");
        assert!(yaml.contains("name"));
        assert!(yaml.contains("workers"));
    }
}
