//! Application configuration.
//!
//! Loaded from an optional YAML file and `ORDER_DESK__*` environment variables, on top of
//! built-in defaults.

use serde::Deserialize;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "order-desk.yaml";
/// Environment variable naming an additional configuration file.
pub const CONFIG_ENV_VAR: &str = "ORDER_DESK_CONFIG";
/// Prefix for configuration environment variables (`ORDER_DESK__HTTP__PORT=8080`).
pub const CONFIG_ENV_PREFIX: &str = "ORDER_DESK";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    /// Channel capacity of every actor mailbox.
    pub mailbox_size: usize,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Administrator created at startup when no administrator with that nickname exists.
    pub seed_administrator: Option<SeedAdministrator>,
    /// Seed the well-known `admin`/`admin123` account when `seed_administrator` is unset.
    /// Meant for local development only.
    pub default_administrator: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            mailbox_size: 32,
            log_filter: "info".to_string(),
            seed_administrator: None,
            default_administrator: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl HttpConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Deserialize)]
pub struct SeedAdministrator {
    pub nickname: String,
    pub password: String,
}

impl std::fmt::Debug for SeedAdministrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAdministrator")
            .field("nickname", &self.nickname)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// Sources, later overriding earlier:
    /// 1. `order-desk.yaml` in the current directory (if it exists)
    /// 2. File named by `ORDER_DESK_CONFIG` (must exist when set)
    /// 3. `ORDER_DESK__*` environment variables, `__` separating nested keys
    pub fn load() -> Result<Self, ::config::ConfigError> {
        use ::config::{Config, Environment, File, FileFormat};

        let mut builder =
            Config::builder().add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// The administrator to seed at startup. `None` means nothing was configured and the
    /// well-known account was not asked for either.
    pub fn administrator_seed(&self) -> Option<SeedAdministrator> {
        match (&self.seed_administrator, self.default_administrator) {
            (Some(seed), _) => Some(seed.clone()),
            (None, true) => Some(SeedAdministrator {
                nickname: "admin".to_string(),
                password: "admin123".to_string(),
            }),
            (None, false) => None,
        }
    }

    /// Config for tests: small mailboxes, server on an ephemeral port.
    pub fn for_test() -> Self {
        Self {
            http: HttpConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            mailbox_size: 8,
            ..Self::default()
        }
    }
}
