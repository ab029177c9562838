use crate::config::{Config, ConfigError};

// Environment variables are process-global, so everything that touches them
// runs inside a single test.
#[test]
fn config_reads_and_validates_the_environment() {
    std::env::remove_var("PORT");
    std::env::remove_var("CORS_ORIGIN");
    std::env::remove_var("DATABASE_PATH");
    std::env::remove_var("TASKLIGHT_AUTH_SECRET");

    // Secret is required, never defaulted
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::MissingAuthSecret)
    ));

    std::env::set_var("TASKLIGHT_AUTH_SECRET", "s3cret");

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 5000);
    assert_eq!(config.cors_origin, "http://localhost:5173");
    assert_eq!(config.auth_secret, "s3cret");

    std::env::set_var("PORT", "8080");
    std::env::set_var("CORS_ORIGIN", "http://localhost:3000");
    std::env::set_var("DATABASE_PATH", "/tmp/tasklight-test.db");

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.cors_origin, "http://localhost:3000");
    assert_eq!(
        config.database_path,
        std::path::PathBuf::from("/tmp/tasklight-test.db")
    );

    std::env::set_var("PORT", "not-a-port");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::InvalidPort(_))
    ));

    std::env::set_var("PORT", "0");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::PortOutOfRange(0))
    ));

    std::env::remove_var("PORT");
    std::env::remove_var("CORS_ORIGIN");
    std::env::remove_var("DATABASE_PATH");
    std::env::remove_var("TASKLIGHT_AUTH_SECRET");
}
