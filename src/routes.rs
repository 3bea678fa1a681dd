use actix_web::web;

use crate::handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(web::resource("/").route(web::get().to(handlers::home::index)))
        .service(
            web::resource("/books").route(web::get().to(handlers::books::get_books)),
        )
        .service(
            web::resource("/statements")
                .route(web::get().to(handlers::statements::list_statements)),
        )
        .service(
            web::resource("/statements/{name}")
                .route(web::post().to(handlers::statements::run_statement)),
        )
        .service(
            web::resource("/script").route(web::post().to(handlers::statements::run_script)),
        )
        .service(
            web::resource("/explain").route(web::get().to(handlers::explain::explain_title)),
        )
        .service(
            web::scope("/stats")
                .route("/genres", web::get().to(handlers::stats::genres))
                .route("/top-author", web::get().to(handlers::stats::top_author))
                .route("/decades", web::get().to(handlers::stats::decades)),
        );
}
