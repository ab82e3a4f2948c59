use crate::logging::init;
use crate::shared::config::LoggingConfig;

#[test]
fn rejects_unknown_log_levels_before_installing() {
    let cfg = LoggingConfig {
        stdout_level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init(&cfg).is_err());

    let cfg = LoggingConfig {
        file_level: "verbose".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init(&cfg).is_err());
}
