use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::{info, warn};
use mongodb::Client;

use bookstore_queries::config::{self, Settings};
use bookstore_queries::queries::BookQueries;
use bookstore_queries::runner::{self, ScriptParams};
use bookstore_queries::{routes, state::AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from bookstore.env file
    let env_file = dotenv::from_filename(config::ENV_FILE);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = env_file {
        warn!("{} not loaded: {}", config::ENV_FILE, e);
    }

    let settings = Settings::from_env().context("invalid configuration")?;

    let client = Client::with_uri_str(&settings.mongo_uri)
        .await
        .with_context(|| format!("failed to create MongoDB client for {}", settings.mongo_uri))?;
    let db = client.database(&settings.database);
    let queries = BookQueries::new(db, &settings.collection);
    let params = ScriptParams::default();

    if settings.run_script {
        info!(
            "running script against {}.{}",
            queries.database_name(),
            queries.collection_name()
        );
        runner::run_script(&queries, &params)
            .await
            .context("script aborted")?;
    }

    let Some(bind) = settings.bind else {
        return Ok(());
    };

    let shared_data = web::Data::new(AppState { queries, params });
    info!("listening on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(shared_data.clone())
            .configure(routes::config)
    })
    .bind(&bind)
    .with_context(|| format!("failed to bind {}", bind))?
    .run()
    .await?;

    Ok(())
}
