use newsletter_dispatch::configuration::{get_configuration_from, Environment, UserSourceKind};

// An explicit, empty variable map keeps the developer's shell out of the test.
fn no_env_vars() -> Option<config::Map<String, String>> {
    Some(config::Map::new())
}

#[test]
fn the_local_environment_uses_the_fixture() {
    let configuration =
        get_configuration_from("configuration".into(), Environment::Local, no_env_vars())
            .expect("Failed to read configuration.");

    assert_eq!(configuration.application.name, "newsletter-dispatch");
    assert_eq!(configuration.application.log_level, "debug");
    assert_eq!(configuration.users.source, UserSourceKind::Fixture);
    assert_eq!(configuration.users.path, None);
}

#[test]
fn the_production_environment_reads_users_from_file() {
    let configuration =
        get_configuration_from("configuration".into(), Environment::Production, no_env_vars())
            .expect("Failed to read configuration.");

    assert_eq!(configuration.users.source, UserSourceKind::File);
    assert_eq!(
        configuration.users.path,
        Some(std::path::PathBuf::from("data/users.json"))
    );
}

#[test]
fn app_variables_override_the_files() {
    let mut env_vars = config::Map::new();
    env_vars.insert("APP_USERS__SOURCE".to_string(), "file".to_string());
    env_vars.insert("APP_USERS__PATH".to_string(), "elsewhere.json".to_string());

    let configuration =
        get_configuration_from("configuration".into(), Environment::Local, Some(env_vars))
            .expect("Failed to read configuration.");

    assert_eq!(configuration.users.source, UserSourceKind::File);
    assert_eq!(
        configuration.users.path,
        Some(std::path::PathBuf::from("elsewhere.json"))
    );
}

#[test]
fn environments_are_parsed_case_insensitively() {
    let test_cases = vec![("local", "local"), ("Production", "production")];

    for (input, expected) in test_cases {
        let environment: Environment = input.to_string().try_into().unwrap();
        assert_eq!(environment.as_str(), expected);
    }
}

#[test]
fn unknown_environments_are_rejected() {
    let result: Result<Environment, String> = "staging".to_string().try_into();

    assert!(result.is_err());
}
