use artify_database::{
    ConfigError, DatabaseConfig, Dialect, EnvironmentName, LoggingPolicy, TlsOptions,
};
use artify_env_vars::EnvSnapshot;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn config(pairs: &[(&str, &str)]) -> DatabaseConfig {
    artify_logging::testing::init();
    let env: EnvSnapshot = pairs.iter().copied().collect();
    DatabaseConfig::from_snapshot(&env)
}

fn full_environment() -> Vec<(&'static str, &'static str)> {
    vec![
        ("DB_USERNAME", "curator"),
        ("DB_PASSWORD", "gallery-pass"),
        ("DB_NAME", "gallery"),
        ("DB_HOST", "db.example.net"),
        ("DB_PORT", "6543"),
    ]
}

#[test]
fn dialect_is_postgres_everywhere() {
    for pairs in [vec![], full_environment()] {
        for (_, settings) in config(&pairs).iter() {
            assert_eq!(settings.dialect, Dialect::Postgres);
        }
    }
}

#[test_case(&[]; "unset")]
#[test_case(&[("DB_PORT", "")]; "empty")]
#[test_case(&[("DB_PORT", "not-a-port")]; "non numeric")]
#[test_case(&[("DB_PORT", "-1")]; "negative")]
fn port_defaults_outside_production(pairs: &[(&str, &str)]) {
    let config = config(pairs);
    assert_eq!(config.get(EnvironmentName::Development).port, Some(5432));
    assert_eq!(config.get(EnvironmentName::Test).port, Some(5432));
}

#[test]
fn test_database_name_defaults_before_suffix() {
    let config = config(&[]);
    assert_eq!(
        config.get(EnvironmentName::Test).database.as_deref(),
        Some("artify_db_test")
    );
}

#[test]
fn test_database_name_appends_suffix() {
    let config = config(&[("DB_NAME", "gallery")]);
    assert_eq!(
        config.get(EnvironmentName::Test).database.as_deref(),
        Some("gallery_test")
    );
    assert_eq!(
        config.get(EnvironmentName::Development).database.as_deref(),
        Some("gallery")
    );
}

#[test]
fn production_takes_values_verbatim() {
    let config = config(&full_environment());
    let production = config.get(EnvironmentName::Production);

    assert_eq!(production.username.as_deref(), Some("curator"));
    assert_eq!(production.password.as_deref(), Some("gallery-pass"));
    assert_eq!(production.database.as_deref(), Some("gallery"));
    assert_eq!(production.host.as_deref(), Some("db.example.net"));
    assert_eq!(production.port, Some(6543));
}

#[test]
fn production_never_fabricates_defaults() {
    let config = config(&[]);
    let production = config.get(EnvironmentName::Production);

    assert_eq!(production.username, None);
    assert_eq!(production.password, None);
    assert_eq!(production.database, None);
    assert_eq!(production.host, None);
    assert_eq!(production.port, None);

    let config = self::config(&[("DB_USERNAME", "")]);
    assert_eq!(
        config.get(EnvironmentName::Production).username.as_deref(),
        Some("")
    );
}

#[test_case(EnvironmentName::Development, LoggingPolicy::Verbose)]
#[test_case(EnvironmentName::Test, LoggingPolicy::Silent)]
#[test_case(EnvironmentName::Production, LoggingPolicy::Silent)]
fn logging_is_verbose_only_in_development(environment: EnvironmentName, expected: LoggingPolicy) {
    assert_eq!(config(&[]).get(environment).logging, expected);
}

#[test]
fn only_production_carries_tls() {
    for pairs in [vec![], full_environment()] {
        for (environment, settings) in config(&pairs).iter() {
            let expected = match environment {
                EnvironmentName::Production => Some(TlsOptions {
                    require: true,
                    reject_unauthorized: false,
                }),
                _ => None,
            };
            assert_eq!(settings.tls, expected);
        }
    }
}

#[test]
fn same_snapshot_same_config() {
    let env: EnvSnapshot = full_environment().into_iter().collect();
    assert_eq!(
        DatabaseConfig::from_snapshot(&env),
        DatabaseConfig::from_snapshot(&env)
    );
    assert_eq!(config(&[]), config(&[]));
}

#[test]
fn empty_production_fails_eager_validation() {
    let err = config(&[])
        .get(EnvironmentName::Production)
        .validate()
        .unwrap_err();

    assert_eq!(
        err,
        ConfigError::Incomplete {
            missing: vec!["DB_USERNAME", "DB_PASSWORD", "DB_NAME", "DB_HOST", "DB_PORT"],
        }
    );
}

#[test]
fn empty_production_fails_at_use() {
    let err = config(&[])
        .get(EnvironmentName::Production)
        .connect_options()
        .unwrap_err();

    assert_eq!(
        err,
        ConfigError::MissingProductionCredential { var: "DB_USERNAME" }
    );
}

#[test]
fn non_production_always_validates() {
    let config = config(&[]);
    for environment in [EnvironmentName::Development, EnvironmentName::Test] {
        assert_eq!(config.get(environment).validate(), Ok(()));
        assert!(config.get(environment).connect_options().is_ok());
    }
}

#[test]
fn config_is_shareable_across_threads() {
    let config = std::sync::Arc::new(config(&full_environment()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = config.clone();
            std::thread::spawn(move || config.get(EnvironmentName::Test).database.clone())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("gallery_test"));
    }
}
