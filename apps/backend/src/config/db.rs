use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    Prod,
    /// Test database profile - enforces the `_test` name rule
    Test,
}

/// Database URL for `profile`.
///
/// `DATABASE_URL` wins when set; otherwise a Postgres URL is assembled from
/// `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_DB`, `POSTGRES_USER` and
/// `POSTGRES_PASSWORD`.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    if let Some(url) = non_empty_var("DATABASE_URL") {
        if profile == DbProfile::Test && url.starts_with("postgres") {
            let name = url
                .rsplit('/')
                .next()
                .and_then(|tail| tail.split('?').next())
                .unwrap_or_default();
            ensure_test_name(name)?;
        }
        return Ok(url);
    }

    let host = non_empty_var("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = non_empty_var("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
    let db_name = must_var("POSTGRES_DB")?;
    if profile == DbProfile::Test {
        ensure_test_name(&db_name)?;
    }
    let username = must_var("POSTGRES_USER")?;
    let password = must_var("POSTGRES_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

fn ensure_test_name(db_name: &str) -> Result<(), AppError> {
    if !db_name.ends_with("_test") {
        return Err(AppError::config(format!(
            "Test profile requires database name to end with '_test', but got: '{db_name}'"
        )));
    }
    Ok(())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    non_empty_var(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
