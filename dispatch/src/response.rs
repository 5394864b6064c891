//! Invocation response types.
//!
//! Every dispatched command terminates in a `Response`: either success
//! (optional message, optional raw payload) or error (message only).
//! There are no other outcomes; faults never escape as panics.

/// Outcome status of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    /// The command completed its store action.
    Success,
    /// The command failed; the message describes why.
    Error,
}

impl ResponseStatus {
    /// Returns true if the command succeeded.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Uniform response returned to the hosting transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Success or error.
    pub status: ResponseStatus,
    /// Human-readable message; the value or result for reads, the
    /// failure description for errors.
    pub message: String,
    /// Raw result bytes; empty when the operation has no payload.
    pub payload: Vec<u8>,
}

impl Response {
    /// A bare acknowledgement with no message or payload.
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            message: String::new(),
            payload: Vec::new(),
        }
    }

    /// A success carrying a message and a raw payload.
    pub fn success_with(message: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            payload,
        }
    }

    /// An error carrying a failure message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns true if this is a success response.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}
