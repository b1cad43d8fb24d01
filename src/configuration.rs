use std::path::PathBuf;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub users: UsersSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings {
    pub name: String,
    // Used when RUST_LOG is not set.
    pub log_level: String,
}

#[derive(serde::Deserialize, Debug)]
pub struct UsersSettings {
    pub source: UserSourceKind,
    pub path: Option<PathBuf>,
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserSourceKind {
    Fixture,
    File,
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Merge variables in .env file to OS environment variables.
    // This makes the variables accessible for `config` below.
    dotenv::dotenv().ok();

    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into()) // By default, we use Local environment.
        .try_into()
        .map_err(config::ConfigError::Message)?;

    // `None` makes `config` read the process environment.
    get_configuration_from(base_path.join("configuration"), environment, None)
}

/// Loads `base.yaml`, then the overlay for `environment`, then `APP_*`
/// variables. Variables come from `env_vars` when given, otherwise from the
/// process environment.
pub fn get_configuration_from(
    configuration_directory: PathBuf,
    environment: Environment,
    env_vars: Option<config::Map<String, String>>,
) -> Result<Settings, config::ConfigError> {
    // Depending on the environment (local or production), we load the corresponding configuration
    // file on top of the base one. Later sources override earlier ones.
    let environment_filename = format!("{}.yaml", environment.as_str());

    let base = config::File::from(configuration_directory.join("base.yaml"));
    let environment = config::File::from(configuration_directory.join(environment_filename));

    let settings = config::Config::builder()
        .add_source(base)
        .add_source(environment)
        // This determines the format of environment variables we must set.
        // APP_USERS__PATH will map to Settings.users.path
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .source(env_vars),
        )
        .build()?;

    // Serde will return it to us strongly typed.
    settings.try_deserialize::<Settings>()
}
