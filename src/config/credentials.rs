use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;

pub const ENV_SERVER: &str = "PROD_SQL_SERVER";
pub const ENV_DATABASE: &str = "PROD_SQL_DATABASE";
pub const ENV_USER: &str = "PROD_SQL_USER";
pub const ENV_PASSWORD: &str = "PROD_SQL_PASSWORD";

/// Env file looked up in the working directory before reading variables.
pub const ENV_FILE: &str = ".env.production";

/// Credentials for the production source. Only constructible with a
/// non-blank user and password.
#[derive(Clone)]
pub struct ProductionCredentials {
    pub server: String,
    pub database: String,
    pub user: String,
    password: String,
}

impl ProductionCredentials {
    pub fn new(
        server: impl Into<String>,
        database: impl Into<String>,
        user: Option<String>,
        password: Option<String>,
    ) -> AppResult<Self> {
        let user = user.filter(|u| !u.trim().is_empty());
        let password = password.filter(|p| !p.is_empty());

        match (user, password) {
            (Some(user), Some(password)) => Ok(Self {
                server: server.into(),
                database: database.into(),
                user,
                password,
            }),
            _ => Err(AppError::Configuration(format!(
                "Production credentials not configured. \
                 Set {ENV_SERVER}, {ENV_USER}, {ENV_PASSWORD} in environment."
            ))),
        }
    }

    /// Resolve from the environment (after loading `.env.production` when
    /// present). Server and database fall back to the given defaults.
    pub fn from_env(default_server: &str, default_database: &str) -> AppResult<Self> {
        dotenvy::from_filename(ENV_FILE).ok();

        let var = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());

        Self::new(
            var(ENV_SERVER).unwrap_or_else(|| default_server.to_string()),
            var(ENV_DATABASE).unwrap_or_else(|| default_database.to_string()),
            var(ENV_USER),
            var(ENV_PASSWORD),
        )
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for ProductionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductionCredentials")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}
