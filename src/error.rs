use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Could not open browser: {0}")]
    Launch(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RsvpError>;
