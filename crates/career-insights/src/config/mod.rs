use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::assessment::{
    ClassificationThresholds, ScoringPolicy, UnansweredPolicy, DEVELOPING_THRESHOLD,
    STRENGTH_THRESHOLD,
};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Scoring policy and optional catalog override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentConfig {
    pub policy: ScoringPolicy,
    pub question_bank_path: Option<PathBuf>,
}

impl AssessmentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let strength = threshold_from_env("ASSESSMENT_STRENGTH_THRESHOLD", STRENGTH_THRESHOLD)?;
        let developing =
            threshold_from_env("ASSESSMENT_DEVELOPING_THRESHOLD", DEVELOPING_THRESHOLD)?;
        if developing >= strength || strength > 100 {
            return Err(ConfigError::InvalidThresholds {
                strength,
                developing,
            });
        }

        let unanswered = match env::var("ASSESSMENT_UNANSWERED_POLICY") {
            Ok(raw) => UnansweredPolicy::parse(&raw)
                .ok_or(ConfigError::InvalidUnansweredPolicy { value: raw })?,
            Err(_) => UnansweredPolicy::default(),
        };

        let question_bank_path = env::var("ASSESSMENT_QUESTION_BANK")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            policy: ScoringPolicy {
                thresholds: ClassificationThresholds {
                    strength,
                    developing,
                },
                unanswered,
            },
            question_bank_path,
        })
    }
}

fn threshold_from_env(key: &'static str, default: u8) -> Result<u8, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidThreshold { key }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { key: &'static str },
    InvalidThresholds { strength: u8, developing: u8 },
    InvalidUnansweredPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { key } => {
                write!(f, "{key} must be a whole number between 0 and 100")
            }
            ConfigError::InvalidThresholds {
                strength,
                developing,
            } => write!(
                f,
                "developing threshold ({developing}) must be below strength threshold ({strength}), which must not exceed 100"
            ),
            ConfigError::InvalidUnansweredPolicy { value } => write!(
                f,
                "ASSESSMENT_UNANSWERED_POLICY must be 'exclude' or 'include', got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
