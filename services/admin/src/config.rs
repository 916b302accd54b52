/// Admin service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AdminConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing admin session tokens.
    pub jwt_secret: String,
    /// Base URL of the web application; invite accept-URLs are built on it
    /// (e.g. "https://app.transify.example").
    pub app_base_url: String,
    /// Mail API endpoint the mailer POSTs messages to.
    pub mailer_api_url: String,
    /// Bearer key for the mail API.
    pub mailer_api_key: String,
    /// From address on outgoing mail (e.g. "Transify <no-reply@transify.example>").
    pub mailer_from: String,
    /// TCP port to listen on (default 3114). Env var: `ADMIN_PORT`.
    pub admin_port: u16,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            app_base_url: std::env::var("APP_BASE_URL").expect("APP_BASE_URL"),
            mailer_api_url: std::env::var("MAILER_API_URL").expect("MAILER_API_URL"),
            mailer_api_key: std::env::var("MAILER_API_KEY").expect("MAILER_API_KEY"),
            mailer_from: std::env::var("MAILER_FROM").expect("MAILER_FROM"),
            admin_port: std::env::var("ADMIN_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
        }
    }
}
