use std::time::Duration;

use nowplaying::cli::Args;
use nowplaying::config::{Config, FileConfig, DEFAULT_PORT};
use nowplaying::player::normalize::DEFAULT_TRACK_URL_TEMPLATE;
use nowplaying::source::SourceSpec;

fn make_args(port: Option<u16>, source: Option<&str>) -> Args {
    Args {
        source: source.map(str::to_string),
        port,
        config: None,
        public: false,
        timeout_ms: None,
    }
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = Config::resolve(None, &make_args(None, None));
    assert_eq!(config.port, 9863);
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.enabled);
    assert!(!config.public, "public should default to false when neither CLI nor TOML sets it");
    assert_eq!(config.source, None);
    assert_eq!(config.fetch_timeout, Duration::from_millis(2000));
    assert_eq!(config.track_url_template, DEFAULT_TRACK_URL_TEMPLATE);
}

#[test]
fn test_cli_flag_overrides_default() {
    let config = Config::resolve(None, &make_args(Some(9000), None));
    assert_eq!(config.port, 9000);
}

#[test]
fn test_toml_overrides_default() {
    let file = FileConfig {
        port: Some(7777),
        timeout_ms: Some(500),
        ..Default::default()
    };
    let config = Config::resolve(Some(file), &make_args(None, None));
    assert_eq!(config.port, 7777);
    assert_eq!(config.fetch_timeout, Duration::from_millis(500));
}

#[test]
fn test_cli_overrides_toml() {
    let file = FileConfig {
        port: Some(7777),
        source: Some("/var/run/player.json".to_string()),
        ..Default::default()
    };
    let args = make_args(Some(9000), Some("http://127.0.0.1:27232/player"));
    let config = Config::resolve(Some(file), &args);
    assert_eq!(config.port, 9000); // CLI wins
    assert_eq!(
        config.source,
        Some(SourceSpec::Http("http://127.0.0.1:27232/player".to_string()))
    );
}

#[test]
fn test_source_from_toml_is_file_path() {
    let file = FileConfig {
        source: Some("/var/run/player.json".to_string()),
        ..Default::default()
    };
    let config = Config::resolve(Some(file), &make_args(None, None));
    assert_eq!(
        config.source,
        Some(SourceSpec::File("/var/run/player.json".into()))
    );
}

#[test]
fn test_blank_source_is_treated_as_missing() {
    let config = Config::resolve(None, &make_args(None, Some("   ")));
    assert_eq!(config.source, None);
}

#[test]
fn test_public_from_either_layer() {
    let file = FileConfig { public: Some(true), ..Default::default() };
    assert!(Config::resolve(Some(file), &make_args(None, None)).public);

    let mut args = make_args(None, None);
    args.public = true;
    assert!(Config::resolve(None, &args).public);
}

#[test]
fn test_toml_parse() {
    let toml_str = r#"
port = 9000
source = "http://localhost:27232/player"
timeout_ms = 750
track_url_template = "https://example.invalid/track/{id}"
enabled = false
"#;
    let parsed: FileConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(parsed.port, Some(9000));
    assert_eq!(parsed.source.as_deref(), Some("http://localhost:27232/player"));
    assert_eq!(parsed.timeout_ms, Some(750));
    assert_eq!(parsed.enabled, Some(false));

    let config = Config::resolve(Some(parsed), &make_args(None, None));
    assert!(!config.enabled);
    assert_eq!(config.track_url_template, "https://example.invalid/track/{id}");
}

#[test]
fn test_toml_unknown_fields_ignored() {
    // Future keys must not break parsing
    let toml_str = "port = 9000\nunknown_future_key = true\n";
    let parsed: Result<FileConfig, _> = toml::from_str(toml_str);
    assert!(parsed.is_ok());
}

#[test]
fn test_load_config_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowplaying.toml");
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();
    let err = nowplaying::config::load_config(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse"), "got: {err}");
}

#[test]
fn test_explicit_config_path_wins() {
    let path = std::path::Path::new("/somewhere/else.toml");
    assert_eq!(
        nowplaying::config::find_config_file(Some(path)),
        Some(path.to_path_buf())
    );
}
