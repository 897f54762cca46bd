// errors.rs
use thiserror::Error;

/// Errors surfaced by the HTTP layer. Engine failures never reach here;
/// they are turned into notices on the page instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::Internal(_) => 500,
        }
    }
}
