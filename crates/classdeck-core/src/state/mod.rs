//! Application state: the running env and its config.

use crate::{error::Error, extension::TomlTableExt};
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
    time::Duration,
};
use toml::Table;

mod env;

pub use self::env::Env;

/// Environment variable that selects the running env.
pub const APP_ENV_VAR: &str = "CLASSDECK_APP_ENV";

/// Environment variable that selects the config directory.
pub const CONFIG_DIR_VAR: &str = "CLASSDECK_CONFIG_DIR";

/// Default delay before a search query is applied.
const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// A state is a record of the env and the config.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Environment.
    env: Env,
    /// Configuration.
    config: Table,
}

impl State {
    /// Creates a new instance with an empty config.
    #[inline]
    pub fn new(env: Env) -> Self {
        Self {
            env,
            config: Table::new(),
        }
    }

    /// Creates a new instance with the supplied config.
    #[inline]
    pub fn with_config(env: Env, config: Table) -> Self {
        Self { env, config }
    }

    /// Loads the `config.{env}.toml` file in the directory.
    /// A missing file leaves the config empty.
    pub fn load_config(&mut self, config_dir: &Path) -> Result<(), Error> {
        let env = self.env.as_str();
        let config_file = config_dir.join(format!("config.{env}.toml"));
        let data = match fs::read_to_string(&config_file) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let config_file = config_file.display();
                tracing::warn!(env, "config file `{config_file}` does not exist");
                return Ok(());
            }
            Err(err) => {
                let config_file = config_file.display();
                return Err(Error::with_source(
                    format!("fail to read the config file `{config_file}`"),
                    err,
                ));
            }
        };
        self.config = data.parse::<Table>().map_err(|err| {
            let config_file = config_file.display();
            Error::with_source(format!("fail to parse the config file `{config_file}`"), err)
        })?;
        if let Some(file_name) = config_file.file_name().and_then(|s| s.to_str()) {
            tracing::info!(env, "`{file_name}` loaded");
        }
        Ok(())
    }

    /// Returns the env.
    #[inline]
    pub fn env(&self) -> Env {
        self.env
    }

    /// Returns a reference to the config.
    #[inline]
    pub fn config(&self) -> &Table {
        &self.config
    }

    /// Returns a reference to the config table corresponding to the key.
    #[inline]
    pub fn get_config(&self, key: &str) -> Option<&Table> {
        self.config.get_table(key)
    }

    /// Returns the dashboard name shown next to the logo.
    pub fn dashboard_name(&self) -> &str {
        self.get_config("dashboard")
            .and_then(|config| config.get_str("name"))
            .unwrap_or("classdeck")
    }

    /// Returns the delay before a search query is applied.
    pub fn search_debounce(&self) -> Duration {
        self.get_config("search")
            .and_then(|config| config.get_u64("debounce-millis"))
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE)
    }

    /// Returns a reference to the shared state.
    #[inline]
    pub fn shared() -> &'static State {
        LazyLock::force(&SHARED_STATE)
    }
}

/// Returns the config directory, defaulting to `./config`.
fn config_dir() -> PathBuf {
    std::env::var_os(CONFIG_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config"))
}

/// Shared application state.
static SHARED_STATE: LazyLock<State> = LazyLock::new(|| {
    let app_env = std::env::var(APP_ENV_VAR).unwrap_or_default();
    let mut state = State::new(Env::from_name(&app_env));
    if let Err(err) = state.load_config(&config_dir()) {
        tracing::error!(env = state.env().as_str(), "{err}");
    }
    state
});

#[cfg(test)]
mod tests {
    use super::{Env, State};
    use std::{fs, time::Duration};

    #[test]
    fn it_parses_env_names() {
        assert_eq!(Env::from_name(""), Env::Dev);
        assert_eq!(Env::from_name("prod"), Env::Prod);
        assert_eq!(Env::from_name("staging").as_str(), "staging");
        assert!(Env::from_name(" dev ").is_dev());
    }

    #[test]
    fn it_loads_config_files() {
        let config_dir = std::env::temp_dir().join(format!(
            "classdeck-state-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.dev.toml"),
            "[dashboard]\nname = \"LMS\"\n\n[search]\ndebounce-millis = 250\n",
        )
        .unwrap();
        fs::write(config_dir.join("config.prod.toml"), "[dashboard\n").unwrap();

        let mut state = State::new(Env::Dev);
        state.load_config(&config_dir).unwrap();
        assert_eq!(state.dashboard_name(), "LMS");
        assert_eq!(state.search_debounce(), Duration::from_millis(250));

        let mut state = State::new(Env::Prod);
        assert!(state.load_config(&config_dir).is_err());

        let mut state = State::new(Env::Custom("missing"));
        state.load_config(&config_dir).unwrap();
        assert!(state.config().is_empty());
        assert_eq!(state.dashboard_name(), "classdeck");
        assert_eq!(state.search_debounce(), Duration::from_millis(500));

        fs::remove_dir_all(&config_dir).unwrap();
    }
}
