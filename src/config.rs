//! Runtime settings read from the process environment.
//!
//! The binary loads `bookstore.env` with `dotenv` before calling
//! [`Settings::from_env`], so values can live in that file or in the real
//! environment.

use std::env;

use crate::error::{Error, Result};

pub const ENV_FILE: &str = "bookstore.env";

const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "bookstore";
const DEFAULT_COLLECTION: &str = "books";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mongo_uri: String,
    pub database: String,
    pub collection: String,
    /// Address for the HTTP surface. `None` means run the script and exit.
    pub bind: Option<String>,
    pub run_script: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let run_script = match non_empty("BOOKSTORE_RUN_SCRIPT") {
            None => true,
            Some(value) => parse_flag(&value).ok_or_else(|| {
                Error::Config(format!("BOOKSTORE_RUN_SCRIPT must be a boolean, got '{}'", value))
            })?,
        };

        Ok(Settings {
            mongo_uri: non_empty("MONGO_URI").unwrap_or_else(|| DEFAULT_MONGO_URI.to_string()),
            database: non_empty("BOOKSTORE_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: non_empty("BOOKSTORE_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            bind: non_empty("BOOKSTORE_BIND"),
            run_script,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_bookstore() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(s.database, "bookstore");
        assert_eq!(s.collection, "books");
        assert_eq!(s.bind, None);
        assert!(s.run_script);
    }

    #[test]
    fn overrides_are_trimmed_and_blank_values_ignored() {
        let s = settings(&[
            ("MONGO_URI", " mongodb://db:27017 "),
            ("BOOKSTORE_DATABASE", "shop"),
            ("BOOKSTORE_COLLECTION", ""),
            ("BOOKSTORE_BIND", "0.0.0.0:8080"),
            ("BOOKSTORE_RUN_SCRIPT", "No"),
        ])
        .unwrap();
        assert_eq!(s.mongo_uri, "mongodb://db:27017");
        assert_eq!(s.database, "shop");
        assert_eq!(s.collection, "books");
        assert_eq!(s.bind.as_deref(), Some("0.0.0.0:8080"));
        assert!(!s.run_script);
    }

    #[test]
    fn bad_run_script_flag_is_a_config_error() {
        let err = settings(&[("BOOKSTORE_RUN_SCRIPT", "sometimes")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
