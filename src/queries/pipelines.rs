//! Aggregation pipelines over the `books` collection.

use mongodb::bson::{doc, Document};

/// `{_id: genre, averagePrice}` per genre.
pub fn average_price_by_genre() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": "$genre",
            "averagePrice": { "$avg": "$price" },
        }
    }]
}

/// Authors ranked by number of books, most first, truncated to `limit`.
///
/// Ties between authors with the same count come back in whatever order the
/// server's sort produces.
pub fn authors_by_book_count(limit: i64) -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$author",
                "totalBooks": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "totalBooks": -1 } },
        doc! { "$limit": limit },
    ]
}

pub fn top_author() -> Vec<Document> {
    authors_by_book_count(1)
}

/// Books counted per decade label ("1940s"), labels ascending.
///
/// The year goes through `$toInt` so both integer and string-stored years
/// bucket the same way; it is then floored with `year - year % 10`.
pub fn books_by_decade() -> Vec<Document> {
    let year = doc! { "$toInt": "$published_year" };
    vec![
        doc! {
            "$project": {
                "decade": {
                    "$concat": [
                        { "$toString": { "$subtract": [year.clone(), { "$mod": [year, 10] }] } },
                        "s",
                    ]
                }
            }
        },
        doc! {
            "$group": {
                "_id": "$decade",
                "booksCount": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "_id": 1 } },
    ]
}
