use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Seed data for the demo credential store. The store itself is pluggable;
/// this only configures the single built-in user.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoUserConfig {
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub demo_user: DemoUserConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "registrar".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "registrar-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };
        let demo_user = DemoUserConfig {
            username: std::env::var("DEMO_USERNAME").unwrap_or_else(|_| "johndoe".into()),
            password: std::env::var("DEMO_PASSWORD").unwrap_or_else(|_| "secret".into()),
            full_name: std::env::var("DEMO_FULL_NAME").ok(),
            email: std::env::var("DEMO_EMAIL").ok(),
        };
        Ok(Self {
            database_url,
            jwt,
            demo_user,
        })
    }
}
