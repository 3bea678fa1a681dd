//! Index definitions and `explain` plumbing used to compare lookups before
//! and after indexing.

use std::str::FromStr;

use mongodb::{
    bson::{doc, Bson, Document},
    IndexModel,
};
use serde::Serialize;

use super::filters::{AUTHOR, PUBLISHED_YEAR, TITLE};
use crate::error::{Error, Result};

pub fn title_index() -> IndexModel {
    IndexModel::builder().keys(doc! { TITLE: 1 }).build()
}

pub fn author_year_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { AUTHOR: 1, PUBLISHED_YEAR: -1 })
        .build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    QueryPlanner,
    ExecutionStats,
    AllPlansExecution,
}

impl Verbosity {
    pub const ALL: [Verbosity; 3] = [
        Verbosity::QueryPlanner,
        Verbosity::ExecutionStats,
        Verbosity::AllPlansExecution,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::QueryPlanner => "queryPlanner",
            Verbosity::ExecutionStats => "executionStats",
            Verbosity::AllPlansExecution => "allPlansExecution",
        }
    }
}

impl FromStr for Verbosity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Verbosity::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::InvalidVerbosity(s.to_string()))
    }
}

/// `explain` database command wrapping a `find` on `collection`.
pub fn explain_find_command(collection: &str, filter: Document, verbosity: Verbosity) -> Document {
    doc! {
        "explain": { "find": collection, "filter": filter },
        "verbosity": verbosity.as_str(),
    }
}

/// The parts of an explain result worth comparing between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExplainSummary {
    /// Winning plan stages from the root down to the leaf, e.g. `["FETCH", "IXSCAN"]`.
    pub stages: Vec<String>,
    pub index_name: Option<String>,
    pub n_returned: i64,
    pub total_docs_examined: i64,
    pub total_keys_examined: i64,
    pub execution_time_millis: i64,
}

impl ExplainSummary {
    pub fn from_explain(explain: &Document) -> Self {
        let mut summary = ExplainSummary::default();

        let winning = explain
            .get_document("queryPlanner")
            .and_then(|planner| planner.get_document("winningPlan"))
            .ok();
        // Slot-based engine nests the classic tree under `queryPlan`.
        let mut stage = winning.map(|plan| plan.get_document("queryPlan").unwrap_or(plan));
        while let Some(current) = stage {
            if let Ok(name) = current.get_str("stage") {
                summary.stages.push(name.to_string());
            }
            if let Ok(index) = current.get_str("indexName") {
                summary.index_name = Some(index.to_string());
            }
            stage = current.get_document("inputStage").ok();
        }

        if let Ok(stats) = explain.get_document("executionStats") {
            summary.n_returned = count(stats, "nReturned");
            summary.total_docs_examined = count(stats, "totalDocsExamined");
            summary.total_keys_examined = count(stats, "totalKeysExamined");
            summary.execution_time_millis = count(stats, "executionTimeMillis");
        }
        summary
    }

    pub fn leaf_stage(&self) -> Option<&str> {
        self.stages.last().map(String::as_str)
    }

    pub fn uses_index(&self) -> bool {
        self.stages.iter().any(|stage| stage == "IXSCAN")
    }
}

fn count(doc: &Document, key: &str) -> i64 {
    match doc.get(key) {
        Some(Bson::Int32(n)) => i64::from(*n),
        Some(Bson::Int64(n)) => *n,
        Some(Bson::Double(n)) => *n as i64,
        _ => 0,
    }
}
