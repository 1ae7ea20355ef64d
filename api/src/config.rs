use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Secret for signing access tokens (HS256)
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub jwt_expiration_secs: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-not-for-production".to_string()),
            jwt_expiration_secs: env::var("JWT_EXPIRATION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        }
    }
}
