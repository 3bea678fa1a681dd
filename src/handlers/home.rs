use actix_web::{web::Data, HttpResponse, Responder};
use mongodb::bson::{self, doc};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn index(app_data: Data<AppState>) -> impl Responder {
    let bson_data = doc! {
        "message": "Bookstore queries",
        "database": app_data.queries.database_name(),
        "collection": app_data.queries.collection_name(),
    };

    let json_data: Value = match bson::to_bson(&bson_data) {
        Ok(bson) => bson.into_relaxed_extjson(),
        Err(_) => json!({ "error": "Failed to convert BSON to JSON" }),
    };

    HttpResponse::Ok().json(json_data)
}
