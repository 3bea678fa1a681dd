use serde::{Deserialize, Serialize};

/// One `$group` row of the average price by genre aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAveragePrice {
    #[serde(rename = "_id")]
    pub genre: Option<String>,
    /// `null` when no document of the genre carries a numeric price.
    #[serde(rename = "averagePrice")]
    pub average_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorBookCount {
    #[serde(rename = "_id")]
    pub author: Option<String>,
    #[serde(rename = "totalBooks")]
    pub total_books: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeCount {
    #[serde(rename = "_id")]
    pub decade: Option<String>,
    #[serde(rename = "booksCount")]
    pub books_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteSummary {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, Bson};

    #[test]
    fn group_rows_decode_from_aggregation_output() {
        let avg: GenreAveragePrice =
            bson::from_document(doc! { "_id": "SF", "averagePrice": 15.0 }).unwrap();
        assert_eq!(avg.genre.as_deref(), Some("SF"));
        assert_eq!(avg.average_price, Some(15.0));

        // $sum: 1 produces an int32
        let top: AuthorBookCount =
            bson::from_document(doc! { "_id": "A", "totalBooks": 2_i32 }).unwrap();
        assert_eq!(top.total_books, 2);

        let decade: DecadeCount =
            bson::from_document(doc! { "_id": Bson::Null, "booksCount": 3_i64 }).unwrap();
        assert_eq!(decade.decade, None);
        assert_eq!(decade.books_count, 3);
    }
}
