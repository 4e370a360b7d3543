use figment::{Figment, providers::Env};

pub trait ContextProvider<Config> {
    fn new(config: Config) -> Self;
}

/// Initialize the application context with configuration from environment
/// variables.
/// The configuration is extracted using figment.
///
/// # Arguments
/// None
///
/// # Returns
/// The application context with the configuration as specified by the trait.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
///
pub fn create_app_context<A, Config>() -> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
    Config: for<'de> serde::Deserialize<'de>,
{
    init_tracing();

    let config: Config = load_config()?;

    Ok(A::new(config))
}

/// Extract `Config` from the process environment, keys lowercased.
///
/// # Errors
/// If a required variable is missing or a value has the wrong shape.
pub fn load_config<Config>() -> Result<Config, figment::Error>
where
    Config: for<'de> serde::Deserialize<'de>,
{
    Figment::new().merge(Env::raw()).extract()
}

/// Install the JSON subscriber on stderr. Safe to call more than once.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .json()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // the host captures stderr into its own log, where colour codes
        // only get in the way
        .with_ansi(false)
        // the host log already stamps each line.
        .without_time()
        .with_target(false)
        // stdout carries the presentations
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestConfig {
        data_path: String,
        #[serde(default = "default_flavour")]
        flavour: String,
    }

    fn default_flavour() -> String {
        "plain".to_string()
    }

    struct TestContext {
        config: TestConfig,
    }

    impl ContextProvider<TestConfig> for TestContext {
        fn new(config: TestConfig) -> Self {
            Self { config }
        }
    }

    #[test]
    fn test_load_config_from_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DATA_PATH", "/tmp/widget.json");
            jail.set_env("FLAVOUR", "pink");

            let config: TestConfig = load_config()?;

            assert_eq!(config.data_path, "/tmp/widget.json");
            assert_eq!(config.flavour, "pink");
            Ok(())
        });
    }

    #[test]
    fn test_missing_required_key_is_an_error() {
        figment::Jail::expect_with(|_jail| {
            let result: Result<TestConfig, _> = load_config();

            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_create_app_context_applies_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DATA_PATH", "widget.json");

            let context: TestContext =
                create_app_context::<TestContext, TestConfig>()?;

            assert_eq!(context.config.data_path, "widget.json");
            assert_eq!(context.config.flavour, "plain");
            Ok(())
        });
    }
}
