use std::io::Write;
use std::time::Duration;

use hrms::config::{AppConfig, LogFormat, StoreBackendKind, StoreSection};
use hrms::store::StoreConfig;

#[test]
fn defaults_match_reference_deployment() {
    let config = AppConfig::default();

    assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    assert_eq!(config.store.backend, StoreBackendKind::Mongo);
    assert_eq!(config.store.database, "fiber-hrms");
    assert_eq!(config.store.collection, "employees");

    match config.store.to_runtime().expect("defaults should be valid") {
        StoreConfig::Mongo {
            uri,
            connect_timeout,
            ..
        } => {
            assert_eq!(uri, "mongodb://localhost:27017/fiber-hrms");
            assert_eq!(connect_timeout, Duration::from_secs(20));
        }
        other => panic!("Unexpected store config: {other:?}"),
    }
}

#[test]
fn mongo_backend_requires_database() {
    let section = StoreSection {
        database: "  ".into(),
        ..Default::default()
    };

    assert!(section.to_runtime().is_err());
}

#[test]
fn mongo_backend_rejects_zero_timeout() {
    let section = StoreSection {
        connect_timeout_secs: 0,
        ..Default::default()
    };

    assert!(section.to_runtime().is_err());
}

#[test]
fn memory_backend_ignores_mongo_settings() {
    let section = StoreSection {
        backend: StoreBackendKind::Memory,
        uri: String::new(),
        ..Default::default()
    };

    assert!(matches!(section.to_runtime(), Ok(StoreConfig::Memory)));
}

#[test]
fn loads_overrides_from_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"
[server]
port = 8080

[store]
backend = "memory"

[logging]
level = "debug"
format = "json"
"#
    )
    .unwrap();

    let config = AppConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.store.backend, StoreBackendKind::Memory);
    assert_eq!(config.store.collection, "employees");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = AppConfig::load_from(Some(&dir.path().join("absent.toml"))).unwrap();

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.logging.level, "info");
}
