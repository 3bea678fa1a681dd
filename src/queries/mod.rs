//! Named statements against the `books` collection.
//!
//! Every method is a single round trip through the driver. Errors raised by
//! the driver are propagated unchanged; a filter that matches nothing is not
//! an error.

pub mod filters;
pub mod indexes;
pub mod pipelines;

use futures_util::stream::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{self, Document},
    options::FindOptions,
    Collection, Database,
};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{
    AuthorBookCount, BookListing, DecadeCount, DeleteSummary, GenreAveragePrice, PriceListing,
    UpdateSummary,
};

pub use filters::{BookFilter, Page, SortDirection};
pub use indexes::{ExplainSummary, Verbosity};

#[derive(Clone, Debug)]
pub struct BookQueries {
    db: Database,
    books: Collection<Document>,
}

impl BookQueries {
    pub fn new(db: Database, collection_name: &str) -> Self {
        let books = db.collection::<Document>(collection_name);
        BookQueries { db, books }
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    pub fn collection_name(&self) -> &str {
        self.books.name()
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.books
    }

    async fn find_as<T>(&self, filter: Document, options: FindOptions) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        debug!("find on {}: {}", self.collection_name(), filter);
        let cursor = self.books.clone_with_type::<T>().find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn aggregate_as<T>(&self, pipeline: Vec<Document>) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        debug!("aggregate on {}: {} stage(s)", self.collection_name(), pipeline.len());
        let rows: Vec<Document> = self.books.aggregate(pipeline, None).await?.try_collect().await?;
        rows.into_iter()
            .map(|row| bson::from_document(row).map_err(Into::into))
            .collect()
    }

    fn listing_options() -> FindOptions {
        FindOptions::builder()
            .projection(filters::listing_projection())
            .build()
    }

    pub async fn find_by_genre(&self, genre: &str) -> Result<Vec<BookListing>> {
        self.find_as(filters::by_genre(genre), Self::listing_options()).await
    }

    pub async fn find_published_after(&self, year: i32) -> Result<Vec<BookListing>> {
        self.find_as(filters::published_after(year), Self::listing_options()).await
    }

    pub async fn find_by_author(&self, author: &str) -> Result<Vec<BookListing>> {
        self.find_as(filters::by_author(author), Self::listing_options()).await
    }

    pub async fn find_in_stock_published_after(&self, year: i32) -> Result<Vec<BookListing>> {
        self.find_as(filters::in_stock_published_after(year), Self::listing_options())
            .await
    }

    /// Sets `price` on the first book titled `title`.
    pub async fn update_price(&self, title: &str, price: f64) -> Result<UpdateSummary> {
        let result = self
            .books
            .update_one(filters::by_title(title), filters::set_price(price), None)
            .await?;
        Ok(UpdateSummary {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// Removes the first book titled `title`, in server order.
    pub async fn delete_by_title(&self, title: &str) -> Result<DeleteSummary> {
        let result = self.books.delete_one(filters::by_title(title), None).await?;
        Ok(DeleteSummary {
            deleted_count: result.deleted_count,
        })
    }

    pub async fn sorted_by_price(&self, direction: SortDirection) -> Result<Vec<PriceListing>> {
        let options = FindOptions::builder()
            .projection(filters::price_projection())
            .sort(filters::sort_by(filters::PRICE, direction))
            .build();
        self.find_as(Document::new(), options).await
    }

    /// Unsorted offset page over the whole collection.
    pub async fn page(&self, page: Page) -> Result<Vec<BookListing>> {
        self.search(&BookFilter::default(), None, Some(page)).await
    }

    pub async fn search(
        &self,
        filter: &BookFilter,
        price_sort: Option<SortDirection>,
        page: Option<Page>,
    ) -> Result<Vec<BookListing>> {
        let options = FindOptions::builder()
            .projection(filters::listing_projection())
            .sort(price_sort.map(|direction| filters::sort_by(filters::PRICE, direction)))
            .skip(page.map(|p| p.skip()))
            .limit(page.map(|p| p.limit()))
            .build();
        self.find_as(filter.to_document(), options).await
    }

    pub async fn average_price_by_genre(&self) -> Result<Vec<GenreAveragePrice>> {
        self.aggregate_as(pipelines::average_price_by_genre()).await
    }

    /// The author with the most books, `None` on an empty collection.
    pub async fn top_author(&self) -> Result<Option<AuthorBookCount>> {
        let mut rows = self.aggregate_as(pipelines::top_author()).await?;
        Ok(if rows.is_empty() { None } else { Some(rows.swap_remove(0)) })
    }

    pub async fn books_by_decade(&self) -> Result<Vec<DecadeCount>> {
        self.aggregate_as(pipelines::books_by_decade()).await
    }

    /// Returns the server-assigned index name.
    pub async fn create_title_index(&self) -> Result<String> {
        let created = self.books.create_index(indexes::title_index(), None).await?;
        Ok(created.index_name)
    }

    pub async fn create_author_year_index(&self) -> Result<String> {
        let created = self.books.create_index(indexes::author_year_index(), None).await?;
        Ok(created.index_name)
    }

    pub async fn explain_find(&self, filter: Document, verbosity: Verbosity) -> Result<Document> {
        let command = indexes::explain_find_command(self.collection_name(), filter, verbosity);
        Ok(self.db.run_command(command, None).await?)
    }

    pub async fn explain_title_lookup(&self, title: &str) -> Result<ExplainSummary> {
        let explain = self
            .explain_find(filters::by_title(title), Verbosity::ExecutionStats)
            .await?;
        Ok(ExplainSummary::from_explain(&explain))
    }
}
