//! Error taxonomy for the backend client

use thiserror::Error;

/// Failure reported by the remote mutation client.
///
/// `Server` carries the first message of the backend's structured error list
/// and is surfaced to the user verbatim. `Transport` covers network and parse
/// faults with no structured body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("{0}")]
    Server(String),
    #[error("request failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_displays_message_verbatim() {
        let err = RemoteError::Server("NIP sudah digunakan".to_string());
        assert_eq!(err.to_string(), "NIP sudah digunakan");
    }

    #[test]
    fn test_transport_error_display() {
        let err = RemoteError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
