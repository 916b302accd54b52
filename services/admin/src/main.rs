use sea_orm::Database;
use tracing::info;

use transify_admin::config::AdminConfig;
use transify_admin::infra::mailer::HttpMailer;
use transify_admin::router::build_router;
use transify_admin::state::AppState;

#[tokio::main]
async fn main() {
    transify_core::tracing::init_tracing();

    let config = AdminConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = HttpMailer::new(
        config.mailer_api_url,
        config.mailer_api_key,
        config.mailer_from,
    );

    let state = AppState {
        db,
        mailer,
        jwt_secret: config.jwt_secret,
        app_base_url: config.app_base_url,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.admin_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("admin service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
