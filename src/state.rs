use crate::queries::BookQueries;
use crate::runner::ScriptParams;

/// Shared by every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub queries: BookQueries,
    pub params: ScriptParams,
}
