use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use mongodb::bson::Bson;
use serde::Deserialize;
use serde_json::json;

use crate::error::Error;
use crate::queries::{filters, ExplainSummary, Verbosity};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExplainQuery {
    /// Defaults to the script's explain title.
    pub title: Option<String>,
    /// `queryPlanner`, `executionStats` (default) or `allPlansExecution`.
    pub mode: Option<String>,
}

// GET /explain
pub async fn explain_title(app_data: Data<AppState>, query: Query<ExplainQuery>) -> Result<HttpResponse, Error> {
    let query = query.into_inner();
    let verbosity = match query.mode.as_deref() {
        Some(mode) => mode.parse()?,
        None => Verbosity::ExecutionStats,
    };
    let title = query.title.unwrap_or_else(|| app_data.params.explain_title.clone());

    let explain = app_data
        .queries
        .explain_find(filters::by_title(&title), verbosity)
        .await?;
    let summary = ExplainSummary::from_explain(&explain);
    Ok(HttpResponse::Ok().json(json!({
        "mode": verbosity.as_str(),
        "summary": summary,
        "explain": Bson::Document(explain).into_relaxed_extjson(),
    })))
}
