pub mod books;
pub mod explain;
pub mod home;
pub mod stats;
pub mod statements;
