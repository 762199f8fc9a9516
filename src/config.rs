/*
 * Responsibility
 * - 環境変数 / .env からの設定読み込み (DATABASE_URL, AUTH_*, CORS 許可など)
 * - 設定値のバリデーション (不足・不正なら起動失敗)
 * - 起動時に一度だけ読み、以降は不変の値として AppState 側へ渡す
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use jsonwebtoken::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Token verification settings.
///
/// `secret_key` holds the HMAC secret for `HS*`, or a PEM public key for the
/// asymmetric algorithms.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub validate_exp: bool,
    pub validate_nbf: bool,
    pub require_exp: bool,
    pub leeway_seconds: u64,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl AuthConfig {
    /// HS* 用の最小構成 (exp / nbf は存在すれば検証、必須ではない)
    pub fn new(secret_key: impl Into<String>, algorithm: Algorithm) -> Self {
        Self {
            secret_key: secret_key.into(),
            algorithm,
            validate_exp: true,
            validate_nbf: true,
            require_exp: false,
            leeway_seconds: 0,
            issuer: None,
            audience: None,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthConfig")
            .field("algorithm", &self.algorithm)
            .field("validate_exp", &self.validate_exp)
            .field("validate_nbf", &self.validate_nbf)
            .field("require_exp", &self.require_exp)
            .field("leeway_seconds", &self.leeway_seconds)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // DATABASE_URL may carry a password
        f.debug_struct("DatabaseConfig")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` returns the raw value of a key, or `None` when unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&lookup, "PORT", 8000)?;
        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let http = HttpConfig {
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECONDS", 30)?),
            body_limit_bytes: parse_or(&lookup, "REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?,
        };

        let database = DatabaseConfig {
            url: required(&lookup, "DATABASE_URL")?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECONDS",
                5,
            )?),
        };

        let secret_key = required(&lookup, "AUTH_SECRET_KEY")?.replace("\\n", "\n");
        let algorithm = Algorithm::from_str(required(&lookup, "AUTH_ALGORITHM")?.trim())
            .map_err(|_| ConfigError::Invalid("AUTH_ALGORITHM"))?;

        let auth = AuthConfig {
            validate_exp: parse_bool_or(&lookup, "AUTH_VALIDATE_EXP", true)?,
            validate_nbf: parse_bool_or(&lookup, "AUTH_VALIDATE_NBF", true)?,
            require_exp: parse_bool_or(&lookup, "AUTH_REQUIRE_EXP", false)?,
            leeway_seconds: parse_or(&lookup, "AUTH_LEEWAY_SECONDS", 0)?,
            issuer: optional(&lookup, "AUTH_ISSUER"),
            audience: optional(&lookup, "AUTH_AUDIENCE"),
            ..AuthConfig::new(secret_key, algorithm)
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            http,
            database,
            auth,
        })
    }
}

fn optional<F>(lookup: &F, key: &'static str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or(ConfigError::Missing(key))
}

// Unset falls back to the default; set-but-unparsable fails startup.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match optional(lookup, key) {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match optional(lookup, key).map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid(key)),
        },
    }
}
