//! Query statements against the `books` collection of a MongoDB `bookstore`
//! database, runnable as a fixed script or one at a time over HTTP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod routes;
pub mod runner;
pub mod state;

pub use error::{Error, Result};
