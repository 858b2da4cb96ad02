use std::error::Error;
use std::fmt;

/// Failure modes of the inference call. `Display` is the user-facing message;
/// transport details are kept for logging only.
#[derive(Debug)]
pub enum FetchError {
    /// Network, timeout, or unreadable response.
    Transport(String),
    /// Service reachable but it reported `status: "error"`.
    Application(String),
}

impl FetchError {
    /// Writes the operational detail to stderr. The user only ever sees the
    /// `Display` text.
    pub fn log(&self) {
        match self {
            FetchError::Transport(detail) => {
                eprintln!("⚠️ Inference transport failure: {detail}");
            }
            FetchError::Application(msg) => {
                eprintln!("⚠️ Inference service error: {msg}");
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(_) => write!(f, "Could not connect to the server"),
            FetchError::Application(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for FetchError {}
