// errors.rs
use std::fmt;

/// Errors originating from the server surface (routing, bad form input)
/// or from building a response (xlsx export, catalog load at boot).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    CatalogError(String),
    XlsxError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::CatalogError(msg) => write!(f, "City catalog error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
