// src/error.rs
use std::net::SocketAddr;
use std::num::ParseIntError;

use thiserror::Error;

/// Failures that stop the server before or while serving.
/// Request handlers themselves never fail.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("PORT must be a number between 0 and 65535, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}
