//! Response structures shared by the REST surface

use serde::{Deserialize, Serialize};

/// JSON error payload returned by every failing REST endpoint.
///
/// The body is intentionally a single short human-readable message;
/// stack-trace-level detail is never surfaced to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(message: impl ToString) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
