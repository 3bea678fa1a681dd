use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

/// A document of the `books` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub price: f64,
    pub in_stock: bool,
}

impl Book {
    pub fn new(title: &str, author: &str, genre: &str, published_year: i32, price: f64, in_stock: bool) -> Self {
        Book {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year,
            price,
            in_stock,
        }
    }

    pub fn decade(&self) -> String {
        decade_label(self.published_year)
    }
}

/// Projection `{title, author, price}`.
///
/// Books are seeded outside this crate, so any projected field may be absent
/// and `_id` need not be an ObjectId.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookListing {
    #[serde(rename = "_id")]
    pub id: Bson,
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
}

/// Projection `{title, price}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListing {
    #[serde(rename = "_id")]
    pub id: Bson,
    pub title: Option<String>,
    pub price: Option<f64>,
}

/// Label of the decade a year falls in: 1949 -> "1940s".
///
/// Truncates toward zero like the server's `$mod`, so -1949 -> "-1940s".
pub fn decade_label(year: i32) -> String {
    format!("{}s", year - year % 10)
}
