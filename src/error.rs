// Failure taxonomy for a directions lookup. These errors stop at the
// fallback chain; callers only ever see a route or "no route".

use thiserror::Error;

/// Coarse classification of a failed directions lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Api,
    Malformed,
}

/// Everything that can go wrong between sending the directions request and
/// holding a `RouteResult`. None of these leave the fallback chain.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Http { status: u16 },

    // Non-zero `info.statuscode` in an otherwise valid body
    #[error("API error (code {code}): {}", .messages.join("; "))]
    Api { code: i64, messages: Vec<String> },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl RouteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteError::Network(_) => ErrorKind::Network,
            RouteError::Http { .. } | RouteError::Api { .. } => ErrorKind::Api,
            RouteError::Malformed(_) => ErrorKind::Malformed,
        }
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        RouteError::Malformed(err.to_string())
    }
}
