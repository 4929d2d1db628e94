use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Where items are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    Postgres,
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub storage: StorageBackend,
    /// Present only for [`StorageBackend::Postgres`]
    pub database: Option<PostgresConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let storage: StorageBackend = env_parse("STORAGE_BACKEND", "memory")?;

        let database = match storage {
            StorageBackend::Postgres => Some(PostgresConfig::from_env()?), // DATABASE_URL required
            StorageBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!("Items REST API"),
            server,
            environment,
            storage,
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_memory_storage() {
        temp_env::with_vars_unset(["STORAGE_BACKEND", "DATABASE_URL", "PORT"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.storage, StorageBackend::Memory);
            assert!(config.database.is_none());
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.app.name, "Items REST API");
            assert_eq!(config.app.version, "1.0.0");
        });
    }

    #[test]
    fn test_postgres_requires_database_url() {
        temp_env::with_vars(
            [("STORAGE_BACKEND", Some("postgres")), ("DATABASE_URL", None)],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_postgres_backend_is_case_insensitive() {
        temp_env::with_vars(
            [
                ("STORAGE_BACKEND", Some("PostgreS")),
                ("DATABASE_URL", Some("postgresql://localhost/items")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.storage, StorageBackend::Postgres);
                let database = config.database.unwrap();
                assert_eq!(database.url(), "postgresql://localhost/items");
            },
        );
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        temp_env::with_var("STORAGE_BACKEND", Some("redis"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("STORAGE_BACKEND"));
        });
    }
}
