//! Error types for styled-order operations.

use thiserror::Error;

/// Errors that can occur while checking a style template.
#[derive(Error, Debug)]
pub enum Error {
    #[error("style syntax error: {0}")]
    StyleSyntax(String),

    #[error("invalid property order table: {0}")]
    OrderTable(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
