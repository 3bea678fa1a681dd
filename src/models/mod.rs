pub mod book;
pub mod stats;

pub use book::{decade_label, Book, BookListing, PriceListing};
pub use stats::{AuthorBookCount, DecadeCount, DeleteSummary, GenreAveragePrice, UpdateSummary};
