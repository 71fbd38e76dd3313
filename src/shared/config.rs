use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup.
///
/// | Env Var                | Default                  |
/// |------------------------|--------------------------|
/// | `RUST_ENV`             | `development`            |
/// | `HOST`                 | `127.0.0.1`              |
/// | `PORT`                 | `5000`                   |
/// | `DATABASE_URL`         | required                 |
/// | `DB_MAX_CONNECTIONS`   | `10`                     |
/// | `CLIENT_URL`           | unset (any origin)       |
/// | `RESUME_PATH`          | `public/files/resume.pdf`|
/// | `RESUME_DOWNLOAD_NAME` | `resume.pdf`             |
/// | `PUBLIC_DIR`           | `public`                 |
/// | `SEED_FILE`            | `seed/portfolio.json`    |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub client_url: Option<String>,
    pub resume_path: PathBuf,
    pub resume_download_name: String,
    pub public_dir: PathBuf,
    pub seed_file: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set in the environment or .env file")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` if present, otherwise `.env`, then reads the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", get("PORT"), 5000u16)?;
        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 10u32)?;

        Ok(Self {
            environment,
            host,
            port,
            database_url,
            db_max_connections,
            client_url: get("CLIENT_URL"),
            resume_path: get("RESUME_PATH")
                .unwrap_or_else(|| "public/files/resume.pdf".to_string())
                .into(),
            resume_download_name: get("RESUME_DOWNLOAD_NAME")
                .unwrap_or_else(|| "resume.pdf".to_string()),
            public_dir: get("PUBLIC_DIR")
                .unwrap_or_else(|| "public".to_string())
                .into(),
            seed_file: get("SEED_FILE")
                .unwrap_or_else(|| "seed/portfolio.json".to_string())
                .into(),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// True when a production deployment has no `CLIENT_URL`, leaving CORS
    /// open to any origin.
    pub fn cors_open_in_production(&self) -> bool {
        self.is_production() && self.client_url.is_none()
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
