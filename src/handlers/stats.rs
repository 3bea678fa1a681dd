use actix_web::{web::Data, HttpResponse};

use crate::error::Error;
use crate::state::AppState;

// GET /stats/genres
pub async fn genres(app_data: Data<AppState>) -> Result<HttpResponse, Error> {
    let genres = app_data.queries.average_price_by_genre().await?;
    Ok(HttpResponse::Ok().json(genres))
}

// GET /stats/top-author, `null` on an empty collection
pub async fn top_author(app_data: Data<AppState>) -> Result<HttpResponse, Error> {
    let top = app_data.queries.top_author().await?;
    Ok(HttpResponse::Ok().json(top))
}

// GET /stats/decades
pub async fn decades(app_data: Data<AppState>) -> Result<HttpResponse, Error> {
    let decades = app_data.queries.books_by_decade().await?;
    Ok(HttpResponse::Ok().json(decades))
}
