use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_api::config::Settings;
use blog_api::gateway::supabase::SupabaseGateway;
use blog_api::{handlers, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load()?;
    info!(
        environment = %settings.environment,
        "Starting blog-api v{}",
        env!("CARGO_PKG_VERSION")
    );

    let gateway = Arc::new(SupabaseGateway::new(settings.supabase.clone()));
    let state = web::Data::new(AppState::new(gateway));

    let bind_address = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Starting HTTP server at {}", bind_address);

    let allowed_origins = settings.cors.allowed_origins.clone();
    HttpServer::new(move || {
        // Build CORS configuration per worker
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await
    .context("HTTP server terminated unexpectedly")?;

    Ok(())
}
