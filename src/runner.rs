//! The fixed bookstore script: fifteen independent statements run in order.

use std::fmt;
use std::str::FromStr;

use log::info;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{
    AuthorBookCount, BookListing, DecadeCount, DeleteSummary, GenreAveragePrice, PriceListing,
    UpdateSummary,
};
use crate::queries::{BookQueries, ExplainSummary, Page, SortDirection};

/// Literals the script is run with.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptParams {
    pub genre: String,
    pub published_after: i32,
    pub author: String,
    pub reprice_title: String,
    pub new_price: f64,
    pub delete_title: String,
    pub in_stock_published_after: i32,
    pub page_number: u64,
    pub page_size: u64,
    pub explain_title: String,
}

impl Default for ScriptParams {
    fn default() -> Self {
        ScriptParams {
            genre: "Science Fiction".to_string(),
            published_after: 2015,
            author: "George Orwell".to_string(),
            reprice_title: "1984".to_string(),
            new_price: 199.99,
            delete_title: "Outdated Book Title".to_string(),
            in_stock_published_after: 2010,
            page_number: 2,
            page_size: 5,
            explain_title: "1984".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Statement {
    Genre,
    PublishedAfter,
    Author,
    UpdatePrice,
    DeleteByTitle,
    InStockRecent,
    PriceAscending,
    PriceDescending,
    Page,
    AveragePriceByGenre,
    TopAuthor,
    BooksByDecade,
    TitleIndex,
    AuthorYearIndex,
    ExplainTitle,
}

impl Statement {
    pub const ALL: [Statement; 15] = [
        Statement::Genre,
        Statement::PublishedAfter,
        Statement::Author,
        Statement::UpdatePrice,
        Statement::DeleteByTitle,
        Statement::InStockRecent,
        Statement::PriceAscending,
        Statement::PriceDescending,
        Statement::Page,
        Statement::AveragePriceByGenre,
        Statement::TopAuthor,
        Statement::BooksByDecade,
        Statement::TitleIndex,
        Statement::AuthorYearIndex,
        Statement::ExplainTitle,
    ];

    /// One-based position in the script.
    pub fn index(self) -> usize {
        Statement::ALL.iter().position(|s| *s == self).map_or(0, |i| i + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Statement::Genre => "genre",
            Statement::PublishedAfter => "published-after",
            Statement::Author => "author",
            Statement::UpdatePrice => "update-price",
            Statement::DeleteByTitle => "delete-by-title",
            Statement::InStockRecent => "in-stock-recent",
            Statement::PriceAscending => "price-ascending",
            Statement::PriceDescending => "price-descending",
            Statement::Page => "page",
            Statement::AveragePriceByGenre => "average-price-by-genre",
            Statement::TopAuthor => "top-author",
            Statement::BooksByDecade => "books-by-decade",
            Statement::TitleIndex => "title-index",
            Statement::AuthorYearIndex => "author-year-index",
            Statement::ExplainTitle => "explain-title",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Statement::Genre => "Books in a genre",
            Statement::PublishedAfter => "Books published after a year",
            Statement::Author => "Books by an author",
            Statement::UpdatePrice => "Set the price of a book by title",
            Statement::DeleteByTitle => "Delete a book by title",
            Statement::InStockRecent => "In-stock books published after a year",
            Statement::PriceAscending => "All books by price, cheapest first",
            Statement::PriceDescending => "All books by price, most expensive first",
            Statement::Page => "One page of books",
            Statement::AveragePriceByGenre => "Average price per genre",
            Statement::TopAuthor => "Author with the most books",
            Statement::BooksByDecade => "Book count per decade",
            Statement::TitleIndex => "Index on title",
            Statement::AuthorYearIndex => "Compound index on author and published year",
            Statement::ExplainTitle => "Execution stats of a lookup by title",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Statement::ALL
            .iter()
            .copied()
            .find(|statement| statement.name() == s)
            .ok_or_else(|| Error::UnknownStatement(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatementOutcome {
    Books { books: Vec<BookListing> },
    Prices { books: Vec<PriceListing> },
    Updated(UpdateSummary),
    Deleted(DeleteSummary),
    GenreAverages { genres: Vec<GenreAveragePrice> },
    TopAuthor { author: Option<AuthorBookCount> },
    Decades { decades: Vec<DecadeCount> },
    IndexCreated { name: String },
    Explained(ExplainSummary),
}

impl fmt::Display for StatementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementOutcome::Books { books } => write!(f, "{} book(s)", books.len()),
            StatementOutcome::Prices { books } => write!(f, "{} book(s)", books.len()),
            StatementOutcome::Updated(s) => {
                write!(f, "matched {}, modified {}", s.matched_count, s.modified_count)
            }
            StatementOutcome::Deleted(s) => write!(f, "deleted {}", s.deleted_count),
            StatementOutcome::GenreAverages { genres } => write!(f, "{} genre(s)", genres.len()),
            StatementOutcome::TopAuthor { author: Some(top) } => write!(
                f,
                "{} with {} book(s)",
                top.author.as_deref().unwrap_or("<none>"),
                top.total_books
            ),
            StatementOutcome::TopAuthor { author: None } => f.write_str("no authors"),
            StatementOutcome::Decades { decades } => write!(f, "{} decade(s)", decades.len()),
            StatementOutcome::IndexCreated { name } => write!(f, "index {}", name),
            StatementOutcome::Explained(summary) => write!(
                f,
                "plan {}, returned {}, docs examined {}, keys examined {}, {} ms",
                summary.stages.join(" <- "),
                summary.n_returned,
                summary.total_docs_examined,
                summary.total_keys_examined,
                summary.execution_time_millis
            ),
        }
    }
}

pub async fn run_statement(
    queries: &BookQueries,
    params: &ScriptParams,
    statement: Statement,
) -> Result<StatementOutcome> {
    let outcome = match statement {
        Statement::Genre => StatementOutcome::Books {
            books: queries.find_by_genre(&params.genre).await?,
        },
        Statement::PublishedAfter => StatementOutcome::Books {
            books: queries.find_published_after(params.published_after).await?,
        },
        Statement::Author => StatementOutcome::Books {
            books: queries.find_by_author(&params.author).await?,
        },
        Statement::UpdatePrice => StatementOutcome::Updated(
            queries
                .update_price(&params.reprice_title, params.new_price)
                .await?,
        ),
        Statement::DeleteByTitle => {
            StatementOutcome::Deleted(queries.delete_by_title(&params.delete_title).await?)
        }
        Statement::InStockRecent => StatementOutcome::Books {
            books: queries
                .find_in_stock_published_after(params.in_stock_published_after)
                .await?,
        },
        Statement::PriceAscending => StatementOutcome::Prices {
            books: queries.sorted_by_price(SortDirection::Ascending).await?,
        },
        Statement::PriceDescending => StatementOutcome::Prices {
            books: queries.sorted_by_price(SortDirection::Descending).await?,
        },
        Statement::Page => {
            let page = Page::new(params.page_number, params.page_size)?;
            StatementOutcome::Books {
                books: queries.page(page).await?,
            }
        }
        Statement::AveragePriceByGenre => StatementOutcome::GenreAverages {
            genres: queries.average_price_by_genre().await?,
        },
        Statement::TopAuthor => StatementOutcome::TopAuthor {
            author: queries.top_author().await?,
        },
        Statement::BooksByDecade => StatementOutcome::Decades {
            decades: queries.books_by_decade().await?,
        },
        Statement::TitleIndex => StatementOutcome::IndexCreated {
            name: queries.create_title_index().await?,
        },
        Statement::AuthorYearIndex => StatementOutcome::IndexCreated {
            name: queries.create_author_year_index().await?,
        },
        Statement::ExplainTitle => {
            StatementOutcome::Explained(queries.explain_title_lookup(&params.explain_title).await?)
        }
    };
    Ok(outcome)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementReport {
    pub index: usize,
    pub statement: Statement,
    pub outcome: StatementOutcome,
}

/// Runs every statement in order and stops at the first failure, which is
/// reported as [`Error::Statement`].
pub async fn run_script(queries: &BookQueries, params: &ScriptParams) -> Result<Vec<StatementReport>> {
    let mut reports = Vec::with_capacity(Statement::ALL.len());
    for statement in Statement::ALL {
        info!("[{}/{}] {}", statement.index(), Statement::ALL.len(), statement);
        let outcome = run_statement(queries, params, statement)
            .await
            .map_err(|source| Error::Statement {
                name: statement.name(),
                source: Box::new(source),
            })?;
        info!("[{}/{}] {}: {}", statement.index(), Statement::ALL.len(), statement, outcome);
        reports.push(StatementReport {
            index: statement.index(),
            statement,
            outcome,
        });
    }
    Ok(reports)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexComparison {
    pub index_name: String,
    pub before: ExplainSummary,
    pub after: ExplainSummary,
}

/// Explains a lookup by title, creates the title index, and explains it again.
pub async fn compare_title_lookup(queries: &BookQueries, title: &str) -> Result<IndexComparison> {
    let before = queries.explain_title_lookup(title).await?;
    let index_name = queries.create_title_index().await?;
    let after = queries.explain_title_lookup(title).await?;
    info!(
        "title lookup: {} docs examined before {}, {} after",
        before.total_docs_examined, index_name, after.total_docs_examined
    );
    Ok(IndexComparison {
        index_name,
        before,
        after,
    })
}
