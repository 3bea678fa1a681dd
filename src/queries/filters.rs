//! Filter, projection, update and sort documents for the `books` collection.

use mongodb::bson::{doc, Document};

use crate::error::{Error, Result};

pub const TITLE: &str = "title";
pub const AUTHOR: &str = "author";
pub const GENRE: &str = "genre";
pub const PUBLISHED_YEAR: &str = "published_year";
pub const PRICE: &str = "price";
pub const IN_STOCK: &str = "in_stock";

pub fn by_genre(genre: &str) -> Document {
    doc! { GENRE: genre }
}

pub fn by_author(author: &str) -> Document {
    doc! { AUTHOR: author }
}

pub fn by_title(title: &str) -> Document {
    doc! { TITLE: title }
}

/// `published_year` strictly greater than `year`.
pub fn published_after(year: i32) -> Document {
    doc! { PUBLISHED_YEAR: { "$gt": year } }
}

pub fn in_stock_published_after(year: i32) -> Document {
    doc! {
        IN_STOCK: true,
        PUBLISHED_YEAR: { "$gt": year },
    }
}

pub fn set_price(price: f64) -> Document {
    doc! { "$set": { PRICE: price } }
}

/// `{title, author, price}`; the server adds `_id`.
pub fn listing_projection() -> Document {
    doc! { TITLE: 1, AUTHOR: 1, PRICE: 1 }
}

/// `{title, price}`; the server adds `_id`.
pub fn price_projection() -> Document {
    doc! { TITLE: 1, PRICE: 1 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }

    /// Parses `price` / `-price` style sort keys for the given field.
    pub fn parse_for(field: &str, key: &str) -> Result<Self> {
        match key.strip_prefix('-') {
            Some(rest) if rest == field => Ok(SortDirection::Descending),
            None if key == field => Ok(SortDirection::Ascending),
            _ => Err(Error::InvalidSort(key.to_string())),
        }
    }
}

pub fn sort_by(field: &str, direction: SortDirection) -> Document {
    doc! { field: direction.as_i32() }
}

/// One-based offset page: page 2 of size 5 skips 5 and keeps 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u64,
    size: u64,
}

impl Page {
    pub fn new(number: u64, size: u64) -> Result<Self> {
        if number == 0 || size == 0 || size > i64::MAX as u64 {
            return Err(Error::InvalidPage { number, size });
        }
        Ok(Page { number, size })
    }

    pub fn skip(&self) -> u64 {
        (self.number - 1).saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size as i64
    }
}

/// Ad-hoc conjunction of the book filters, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub genre: Option<String>,
    pub author: Option<String>,
    pub published_after: Option<i32>,
    pub in_stock: Option<bool>,
}

impl BookFilter {
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(genre) = &self.genre {
            filter.insert(GENRE, genre.as_str());
        }
        if let Some(author) = &self.author {
            filter.insert(AUTHOR, author.as_str());
        }
        if let Some(in_stock) = self.in_stock {
            filter.insert(IN_STOCK, in_stock);
        }
        if let Some(year) = self.published_after {
            filter.insert(PUBLISHED_YEAR, doc! { "$gt": year });
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_filter_matches_in_stock_and_recent() {
        assert_eq!(
            in_stock_published_after(2010),
            doc! { "in_stock": true, "published_year": { "$gt": 2010 } }
        );
        assert_eq!(published_after(2015), doc! { "published_year": { "$gt": 2015 } });
    }

    #[test]
    fn price_update_only_sets_price() {
        assert_eq!(set_price(199.99), doc! { "$set": { "price": 199.99 } });
    }

    #[test]
    fn sort_keys() {
        assert_eq!(sort_by(PRICE, SortDirection::Ascending), doc! { "price": 1 });
        assert_eq!(sort_by(PRICE, SortDirection::Descending), doc! { "price": -1 });
        assert_eq!(SortDirection::parse_for(PRICE, "price").unwrap(), SortDirection::Ascending);
        assert_eq!(SortDirection::parse_for(PRICE, "-price").unwrap(), SortDirection::Descending);
        assert!(matches!(
            SortDirection::parse_for(PRICE, "-title"),
            Err(Error::InvalidSort(_))
        ));
    }

    #[test]
    fn second_page_of_five_skips_five() {
        let page = Page::new(2, 5).unwrap();
        assert_eq!(page.skip(), 5);
        assert_eq!(page.limit(), 5);
        assert_eq!(Page::new(1, 5).unwrap().skip(), 0);
        assert!(Page::new(0, 5).is_err());
        assert!(Page::new(1, 0).is_err());
    }

    #[test]
    fn empty_book_filter_matches_everything() {
        assert_eq!(BookFilter::default().to_document(), Document::new());

        let filter = BookFilter {
            genre: Some("Science Fiction".into()),
            published_after: Some(2010),
            in_stock: Some(true),
            ..Default::default()
        };
        assert_eq!(
            filter.to_document(),
            doc! { "genre": "Science Fiction", "in_stock": true, "published_year": { "$gt": 2010 } }
        );
    }
}
