#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the public bootstrap API: a nested process config
//! loaded through every layer, rendered back to YAML, and used to install
//! the global subscriber.

use std::io::Write;

use calc_bootstrap::{LogFormat, LoggingConfig, init_logging, load_layered, to_yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Section {
    listen_addr: String,
    max_workers: usize,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:50051".to_owned(),
            max_workers: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ProcessConfig {
    section: Section,
    logging: LoggingConfig,
}

const PREFIX: &str = "CALC_BOOTSTRAP_IT__";

#[test]
fn nested_sections_merge_across_layers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"section:\n  max_workers: 2\nlogging:\n  format: json\n")
        .unwrap();

    temp_env::with_vars(
        [
            ("CALC_BOOTSTRAP_IT__SECTION__LISTEN_ADDR", Some("127.0.0.1:9000")),
            ("CALC_BOOTSTRAP_IT__LOGGING__LEVEL", Some("debug")),
        ],
        || {
            let cfg: ProcessConfig = load_layered(Some(file.path()), PREFIX).unwrap();
            assert_eq!(cfg.section.listen_addr, "127.0.0.1:9000");
            assert_eq!(cfg.section.max_workers, 2);
            assert_eq!(cfg.logging.level, "debug");
            assert_eq!(cfg.logging.format, LogFormat::Json);
            assert!(cfg.logging.ansi, "untouched keys keep defaults");
        },
    );
}

#[test]
fn rendered_yaml_loads_back() {
    let cfg = ProcessConfig {
        section: Section {
            listen_addr: "127.0.0.1:7000".to_owned(),
            max_workers: 3,
        },
        logging: LoggingConfig {
            level: "warn".to_owned(),
            format: LogFormat::Json,
            ansi: false,
        },
    };

    let yaml = to_yaml(&cfg).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    // Own prefix: the merge test sets variables under `PREFIX` concurrently.
    let loaded: ProcessConfig = load_layered(Some(file.path()), "CALC_BOOTSTRAP_IT_YAML__").unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn subscriber_installs_once() {
    let cfg = LoggingConfig::default();
    init_logging(&cfg, 0).expect("first install succeeds");
    assert!(
        init_logging(&cfg, 2).is_err(),
        "a second global subscriber is rejected"
    );
}
