use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mongodb::bson;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("MongoDB: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown statement: {0}")]
    UnknownStatement(String),

    #[error("Invalid page: number {number}, size {size}")]
    InvalidPage { number: u64, size: u64 },

    #[error("Invalid sort key: {0}")]
    InvalidSort(String),

    #[error("Invalid explain verbosity: {0}")]
    InvalidVerbosity(String),

    #[error("Statement '{name}' failed: {source}")]
    Statement {
        name: &'static str,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::UnknownStatement(_) => StatusCode::NOT_FOUND,
            Error::Config(_)
            | Error::InvalidPage { .. }
            | Error::InvalidSort(_)
            | Error::InvalidVerbosity(_) => StatusCode::BAD_REQUEST,
            Error::Mongo(_) | Error::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Statement { source, .. } => source.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "status": "Error",
            "message": self.to_string(),
        }))
    }
}
