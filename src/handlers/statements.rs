use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use log::warn;
use serde::Serialize;
use serde_json::json;

use crate::error::Error;
use crate::runner::{self, Statement};
use crate::state::AppState;

#[derive(Serialize)]
struct StatementInfo {
    index: usize,
    name: &'static str,
    description: &'static str,
}

// GET /statements
pub async fn list_statements() -> HttpResponse {
    let statements: Vec<StatementInfo> = Statement::ALL
        .iter()
        .map(|s| StatementInfo {
            index: s.index(),
            name: s.name(),
            description: s.description(),
        })
        .collect();
    HttpResponse::Ok().json(statements)
}

// POST /statements/{name}
pub async fn run_statement(app_data: Data<AppState>, path: Path<String>) -> Result<HttpResponse, Error> {
    let statement: Statement = path.into_inner().parse()?;
    let outcome = runner::run_statement(&app_data.queries, &app_data.params, statement)
        .await
        .map_err(|e| {
            warn!("statement {} failed: {}", statement, e);
            e
        })?;
    Ok(HttpResponse::Ok().json(json!({
        "status": "Success",
        "statement": statement,
        "outcome": outcome,
    })))
}

// POST /script
pub async fn run_script(app_data: Data<AppState>) -> Result<HttpResponse, Error> {
    let reports = runner::run_script(&app_data.queries, &app_data.params).await?;
    Ok(HttpResponse::Ok().json(json!({
        "status": "Success",
        "statements": reports,
    })))
}
