//! Error type shared by the backend client, config loading and the GUI.
//!
//! `Clone` because errors travel inside `Message`.

use thiserror::Error;

/// Generic withdrawal failure text, used when the server gave no message.
pub const WITHDRAWAL_FAILED_TEXT: &str = "Erro ao gerar saque";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KioskError {
    /// Withdraw pressed with nothing accumulated. No request is made.
    #[error("Nenhum valor disponível para saque")]
    NoBalance,

    /// Withdrawal failed; carries the server's message when it sent one.
    #[error("{}", .0.as_deref().unwrap_or(WITHDRAWAL_FAILED_TEXT))]
    WithdrawalFailed(Option<String>),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("unexpected status {status} from {path}")]
    Status { status: u16, path: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for KioskError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<config::ConfigError> for KioskError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KioskError>;
