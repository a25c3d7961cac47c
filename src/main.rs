use std::sync::Arc;

use sportshub::routes::build_router;
use sportshub::seed::seed_demo_data;
use sportshub::shared::AppState;
use sportshub::{InMemoryMatchRepository, InMemoryPlayerRepository, InMemoryTeamRepository};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sportshub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SportsHub tournament server");

    // Create shared application state with dependency injection.
    // Repositories are trait objects, so swapping the in-memory stores for a
    // persistent backend is a wiring change here, not a code change anywhere
    // else.
    let app_state = AppState::new(
        Arc::new(InMemoryMatchRepository::new()),
        Arc::new(InMemoryTeamRepository::new()),
        Arc::new(InMemoryPlayerRepository::new()),
    );

    if let Err(e) = seed_demo_data(&app_state).await {
        tracing::warn!(error = %e, "Failed to seed demo data");
    }

    let app = build_router(app_state);

    // run our app with hyper, listening globally on port 3000
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}
