//! Crate-wide error type
//!
//! User mistakes at the menu (unknown product, bad choice, empty cart) are
//! not errors: they are printed and the session carries on. This type only
//! covers the infrastructure that can actually fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("terminal i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed shop config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid shop config: {0}")]
    Config(String),
}

pub type ShopResult<T> = Result<T, ShopError>;
