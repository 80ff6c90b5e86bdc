//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::any::Any;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;
use tokio::task::JoinError;

use crate::config::{MSG_INVALID_IP, MSG_LOOKUP_FAILED};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding the HTTP listener.
    #[error("Failed to bind listener on {addr}: {source}")]
    BindError {
        /// Address the bind was attempted on
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by the lookup orchestrator.
///
/// Sub-lookup failures (reverse DNS, geo provider) never appear here; they
/// degrade their own fields in the result instead.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The queried string is not a well-formed IPv4 or IPv6 address.
    #[error("{}", MSG_INVALID_IP)]
    InvalidInput,

    /// Any other failure during orchestration.
    #[error("{}", internal_message(.message))]
    Internal {
        /// Status to report, if the failure carries one
        status: Option<StatusCode>,
        /// Human-readable description, if one is available
        message: Option<String>,
    },
}

impl LookupError {
    /// HTTP-equivalent status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::InvalidInput => StatusCode::BAD_REQUEST,
            LookupError::Internal { status, .. } => {
                status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl From<JoinError> for LookupError {
    fn from(err: JoinError) -> Self {
        let message = if err.is_panic() {
            panic_message(err.into_panic())
        } else {
            None
        };
        LookupError::Internal {
            status: None,
            message,
        }
    }
}

fn internal_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(MSG_LOOKUP_FAILED)
}

fn panic_message(payload: Box<dyn Any + Send>) -> Option<String> {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        Some((*msg).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}

/// Errors from a single geo provider request.
///
/// These never leave the `geoip` module's public fetch wrapper; they are
/// logged and folded into "no data".
#[derive(Error, Debug)]
pub enum GeoFetchError {
    /// Transport failure (connect, timeout, body read).
    #[error("Geo provider request failed: {0}")]
    RequestError(#[from] ReqwestError),

    /// Provider answered with a non-success status.
    #[error("Geo provider returned HTTP {0}")]
    StatusError(StatusCode),

    /// Provider body was not valid JSON.
    #[error("Geo provider returned malformed JSON: {0}")]
    DecodeError(#[from] serde_json::Error),
}
