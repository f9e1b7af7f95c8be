use dotenv::dotenv;
use once_cell::sync::OnceCell;
use std::env;

/// Name of the environment variable echoed in the `env` field.
pub const ENV_KEY: &str = "ENV";

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Read-only view of the process configuration. Taken once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
}

impl AppConfig {
    pub fn new(env: impl Into<String>) -> Self {
        AppConfig { env: env.into() }
    }

    pub fn from_env() -> Self {
        AppConfig::new(get_optional_env_var(ENV_KEY))
    }
}

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    } else {
        log::info!("No .env file loaded, using process environment");
    }
}

/// Fetch an optional environment variable. Unset and non-unicode values read as empty.
pub fn get_optional_env_var(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

/// Process-wide configuration snapshot, read from the environment on first use.
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::from_env)
}
