use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Allowed CORS origin; any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,

    /// Page size used when a list request omits `per_page`.
    pub default_page_size: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing `DATABASE_URL` or an unparsable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let default_page_size = match lookup("DEFAULT_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|v| !v.is_empty()),
            default_page_size,
        })
    }
}

fn parse_page_size(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "DEFAULT_PAGE_SIZE".to_string(),
        reason,
    };

    let size = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| invalid(e.to_string()))?;

    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        return Err(invalid(format!("must be between 1 and {}", MAX_PAGE_SIZE)));
    }

    Ok(size)
}
