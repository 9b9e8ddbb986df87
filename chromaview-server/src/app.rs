use std::time::Duration;

use axum::Router;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::ServerConfig, error::handle_panic, routes, state::AppState};

/// Router with the API routes, optional UI directory and middleware.
pub fn build_app(config: &ServerConfig, state: AppState) -> Router {
    let mut app = routes::create_router(state);

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving UI from {:?}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    app = app
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    if let Some(secs) = config.timeout {
        app = app.layer(TimeoutLayer::new(Duration::from_secs(secs)));
    }

    if config.cors {
        tracing::info!("CORS enabled for all origins");
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app
}
