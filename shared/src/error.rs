use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::PropertyId;

/// A raw listing that cannot become a [`crate::model::PropertyRecord`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("malformed record: {reason}")]
    MalformedRecord { reason: String },
}

impl RecordError {
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OverlayError {
    #[error("overlay open rejected: image sequence is empty")]
    EmptySequence,

    #[error("overlay open rejected: index {index} out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Why a thumbnail tap did not open the viewer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TapRejected {
    #[error("no listing with id {0}")]
    UnknownRecord(PropertyId),

    #[error(transparent)]
    Overlay(#[from] OverlayError),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("phone number is empty")]
    EmptyNumber,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("property id is empty")]
    EmptyId,

    #[error("property id must be numeric: {0:?}")]
    NotNumeric(String),

    #[error("invalid listing endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl LookupError {
    #[must_use]
    pub fn user_facing_message(&self) -> &'static str {
        match self {
            Self::EmptyId => "Please enter a property ID",
            Self::NotNumeric(_) => "Property ID must contain digits only",
            Self::Endpoint(_) => "Property search is unavailable right now",
        }
    }
}

/// Failure of the listing fetch, already detached from the HTTP layer.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("response had no body")]
    EmptyBody,

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} is not a valid url: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },

    #[error("{field} must use http or https, got {scheme:?}")]
    UnsupportedScheme { field: &'static str, scheme: String },
}
