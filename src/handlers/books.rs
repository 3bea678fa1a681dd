use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use serde::Deserialize;

use crate::error::Error;
use crate::queries::{filters, BookFilter, Page, SortDirection};
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: u64 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct BooksQuery {
    pub genre: Option<String>,
    pub author: Option<String>,
    pub published_after: Option<i32>,
    pub in_stock: Option<bool>,
    /// `price` or `-price`.
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

// GET /books
pub async fn get_books(app_data: Data<AppState>, query: Query<BooksQuery>) -> Result<HttpResponse, Error> {
    let query = query.into_inner();

    let price_sort = query
        .sort
        .as_deref()
        .map(|key| SortDirection::parse_for(filters::PRICE, key))
        .transpose()?;
    let page = match (query.page, query.page_size) {
        (None, None) => None,
        (number, size) => Some(Page::new(number.unwrap_or(1), size.unwrap_or(DEFAULT_PAGE_SIZE))?),
    };
    let filter = BookFilter {
        genre: query.genre,
        author: query.author,
        published_after: query.published_after,
        in_stock: query.in_stock,
    };

    let books = app_data.queries.search(&filter, price_sort, page).await?;
    Ok(HttpResponse::Ok().json(books))
}
