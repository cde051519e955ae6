mod timeouts;

pub use timeouts::TimeoutConfig;

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use drive_domain::shared::DomainError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_USER_HEADER: &str = "x-user-id";
const APP_DIR: &str = "drive";

/// Runtime settings, read once at startup from `DRIVE_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    /// Header carrying the user id injected by the authenticating gateway
    pub user_header: String,
    /// Offset from UTC that defines the user's calendar day
    pub utc_offset_minutes: i32,
    pub allowed_origin: Option<String>,
    pub timeouts: TimeoutConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let data_dir = default_data_dir();

        let utc_offset_minutes: i32 = try_load(&var, "DRIVE_UTC_OFFSET_MINUTES", 0)?;
        if !(-14 * 60..=14 * 60).contains(&utc_offset_minutes) {
            return Err(DomainError::Validation(format!(
                "DRIVE_UTC_OFFSET_MINUTES out of range: {}",
                utc_offset_minutes
            )));
        }

        Ok(Self {
            port: try_load(&var, "DRIVE_PORT", DEFAULT_PORT)?,
            database_path: var("DRIVE_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("drive.db")),
            log_dir: var("DRIVE_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("logs")),
            user_header: var("DRIVE_USER_HEADER")
                .map(|h| h.trim().to_ascii_lowercase())
                .unwrap_or_else(|| DEFAULT_USER_HEADER.to_string()),
            utc_offset_minutes,
            allowed_origin: var("DRIVE_ALLOWED_ORIGIN"),
            timeouts: TimeoutConfig::default(),
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn try_load<T, F>(var: &F, key: &str, default: T) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| DomainError::Validation(format!("Invalid {} value {:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}
