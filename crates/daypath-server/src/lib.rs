pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

use axum::routing::{get, post};
use axum::Router;
use daypath_core::config::Config;
use tower_http::trace::TraceLayer;

/// Build the axum Router with every page, form action and middleware.
/// Used by `serve_on()` and by the integration tests.
pub fn build_router(app_state: state::AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        // Accounts
        .route(
            "/login",
            get(routes::auth::login_form).post(routes::auth::login),
        )
        .route(
            "/register",
            get(routes::auth::register_form).post(routes::auth::register),
        )
        .route("/logout", post(routes::auth::logout))
        // Dashboard and lesson flow
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route("/dashboard/complete", post(routes::dashboard::complete))
        .route("/dashboard/answer", post(routes::dashboard::answer))
        .route(
            "/dashboard/continue",
            post(routes::dashboard::continue_lesson),
        )
        .route("/dashboard/skill", post(routes::dashboard::answer_skill))
        // Checkpoints
        .route("/checkpoint/{day}", get(routes::checkpoint::show))
        .route("/checkpoint/{day}/answer", post(routes::checkpoint::answer))
        .route(
            "/checkpoint/{day}/continue",
            post(routes::checkpoint::continue_checkpoint),
        )
        .route(
            "/checkpoint/{day}/finalize",
            post(routes::checkpoint::finalize),
        )
        .route("/checkpoint/{day}/reset", post(routes::checkpoint::reset))
        // Side content
        .route(
            "/skill-check/{id}",
            get(routes::skill_check::show).post(routes::skill_check::submit),
        )
        .route("/patterns/{id}", get(routes::patterns::show))
        .route("/patterns/{id}/finish", post(routes::patterns::finish))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Serve on a pre-bound listener.
///
/// Accepting a bound `TcpListener` lets the caller read the actual port
/// before starting (useful when `port = 0` and the OS picks a free port).
pub async fn serve_on(
    config: Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(state::AppState::new(config));

    tracing::info!("daypath listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open browser: {e}");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
