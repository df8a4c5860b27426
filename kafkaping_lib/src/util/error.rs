use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ConfigError {
    MissingVar(&'static str),
    InvalidUrl(url::ParseError),
    MissingHost,
    MissingPort,
    MissingPartition,
    InvalidPartition(String),
    MissingCredentials,
}

impl Error for ConfigError {}

impl From<url::ParseError> for ConfigError {
    fn from(e: url::ParseError) -> Self {
        ConfigError::InvalidUrl(e)
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => write!(f, "Missing {} env variable", name),
            ConfigError::InvalidUrl(e) => write!(f, "Failed to parse the connection url: {}", e),
            ConfigError::MissingHost => write!(f, "The connection url does not contain a host"),
            ConfigError::MissingPort => write!(f, "The connection url does not contain a port"),
            ConfigError::MissingPartition => {
                write!(f, "Consumer mode requires a partition number in the connection url path")
            }
            ConfigError::InvalidPartition(raw) => {
                write!(f, "'{}' is not a valid partition number", raw)
            }
            ConfigError::MissingCredentials => write!(
                f,
                "SASL is enabled but the connection url does not contain a username and password"
            ),
        }
    }
}
