use ferrous_blacklist_domain::config::{EtcdConfig, ServerConfig};
use ferrous_blacklist_domain::{BlacklistSource, CliOverrides, Config, ConfigError};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert!(config.blacklist.file.is_none());
    assert!(!config.blacklist.etcd);
    assert_eq!(config.etcd.endpoints, vec!["http://127.0.0.1:2379".to_string()]);
    assert_eq!(config.etcd.key, "/blacklist");
    assert_eq!(config.etcd.request_timeout_ms, 1000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_listen_address() {
    let server = ServerConfig {
        bind_address: "127.0.0.1".to_string(),
        port: 9000,
    };
    assert_eq!(server.listen_address(), "127.0.0.1:9000");
}

#[test]
fn test_from_toml_partial_sections_use_defaults() {
    let config = Config::from_toml(
        r#"
        [blacklist]
        etcd = true

        [etcd]
        endpoints = ["http://10.0.0.5:2379"]
        "#,
    )
    .unwrap();

    assert!(config.blacklist.etcd);
    assert_eq!(config.etcd.endpoints, vec!["http://10.0.0.5:2379".to_string()]);
    assert_eq!(config.etcd.key, "/blacklist");
    assert_eq!(config.server.port, 8080);
}

#[test]
fn test_from_toml_invalid() {
    let result = Config::from_toml("[server]\nport = \"not a number\"");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_from_explicit_path_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nport = 9090\n\n[blacklist]\nfile = \"/srv/blacklist.txt\""
    )
    .unwrap();

    let overrides = CliOverrides {
        port: Some(7070),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.blacklist.file.as_deref(), Some("/srv/blacklist.txt"));
}

#[test]
fn test_load_missing_file() {
    let result = Config::load(Some("/nonexistent/ferrous-blacklist.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_source_from_file() {
    let mut config = Config::default();
    config.blacklist.file = Some("list.txt".to_string());

    assert_eq!(
        config.blacklist_source().unwrap(),
        BlacklistSource::File(PathBuf::from("list.txt"))
    );
}

#[test]
fn test_source_from_etcd() {
    let mut config = Config::default();
    config.blacklist.etcd = true;

    assert_eq!(
        config.blacklist_source().unwrap(),
        BlacklistSource::Etcd(EtcdConfig::default())
    );
}

#[test]
fn test_empty_file_path_is_unset() {
    let mut config = Config::default();
    config.blacklist.file = Some(String::new());

    assert!(matches!(config.blacklist_source(), Err(ConfigError::NoSource)));
}

#[test]
fn test_no_source_selected() {
    let config = Config::default();
    assert!(matches!(config.blacklist_source(), Err(ConfigError::NoSource)));
}

#[test]
fn test_both_sources_conflict() {
    let mut config = Config::default();
    config.blacklist.file = Some("list.txt".to_string());
    config.blacklist.etcd = true;

    assert!(matches!(
        config.blacklist_source(),
        Err(ConfigError::ConflictingSources)
    ));
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_etcd_settings() {
    let mut config = Config::default();
    config.blacklist.etcd = true;
    assert!(config.validate().is_ok());

    config.etcd.key = "blacklist".to_string();
    assert!(config.validate().is_err());

    config.etcd.key = "/blacklist".to_string();
    config.etcd.endpoints = vec![];
    assert!(config.validate().is_err());

    config.etcd.endpoints = vec!["http://127.0.0.1:2379".to_string()];
    config.etcd.request_timeout_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_ignores_etcd_settings_when_unused() {
    let mut config = Config::default();
    config.etcd.endpoints = vec![];
    assert!(config.validate().is_ok());
}
