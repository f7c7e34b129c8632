use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for StatsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for StatsError {
    fn from(err: String) -> Self {
        Self::Config(err)
    }
}

impl From<&str> for StatsError {
    fn from(err: &str) -> Self {
        Self::Config(err.to_string())
    }
}
