use boardwatch::cli::Cli;
use boardwatch::config::Config;
use boardwatch::core::{AdminState, Severity};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_full_valid_config() {
    let toml_content = r#"
        log_level = "debug"
        [notification]
        service_url = "http://edgex-support-notifications:59860"
        subscription_name = "board-status-subscription"
        email_addresses = ["ops@example.com", "oncall@example.com"]
        receiver = "Site Operations"
        category = "HW_HEALTH"
        labels = ["HW_HEALTH"]
        sender = "controller-board-status"
        severity = "CRITICAL"
        admin_state = "UNLOCKED"
    "#;

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", toml_content).unwrap();

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let config = Config::load(&cli).unwrap();

    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.notification.service_url.as_deref(),
        Some("http://edgex-support-notifications:59860")
    );
    assert_eq!(
        config.notification.subscription_name,
        "board-status-subscription"
    );
    assert_eq!(
        config.notification.email_addresses,
        vec!["ops@example.com", "oncall@example.com"]
    );
    assert_eq!(config.notification.receiver, "Site Operations");
    assert_eq!(config.notification.category, "HW_HEALTH");
    assert_eq!(config.notification.labels, vec!["HW_HEALTH"]);
    assert_eq!(config.notification.sender, "controller-board-status");
    assert_eq!(config.notification.severity, Severity::Critical);
    assert_eq!(config.notification.admin_state, AdminState::Unlocked);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let cli = Cli {
        config: Some("/nonexistent/boardwatch.toml".into()),
        ..Default::default()
    };

    let config = Config::load(&cli).unwrap();

    assert_eq!(config.log_level, "info");
    assert!(config.notification.service_url.is_none());
    assert_eq!(config.notification.category, "HW_HEALTH");
}

#[test]
fn test_cli_service_url_overrides_file() {
    let toml_content = r#"
        [notification]
        service_url = "http://from-file:59860"
    "#;

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", toml_content).unwrap();

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        service_url: Some("http://from-cli:59860".to_string()),
        ..Default::default()
    };

    let config = Config::load(&cli).unwrap();

    assert_eq!(
        config.notification.service_url.as_deref(),
        Some("http://from-cli:59860")
    );
}
