//! Configuration management for the Blog API
//!
//! Settings come from environment variables, with a `.env` file loaded as a
//! convenience in local development builds. Only the Supabase credentials
//! are mandatory; everything else has a development-friendly default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub environment: String,
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub supabase: SupabaseSettings,
}

impl Settings {
    /// Load settings from environment variables (and `.env` in development)
    pub fn load() -> Result<Self> {
        // Load .env file in development
        if cfg!(debug_assertions) {
            dotenvy::dotenv().ok();
            info!("Loaded .env file for development");
        }

        Ok(Settings {
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            server: ServerSettings::from_env()?,
            cors: CorsSettings::from_env(),
            supabase: SupabaseSettings::from_env()?,
        })
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("BLOG_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BLOG_API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid BLOG_API_PORT")?,
        })
    }
}

/// CORS configuration
///
/// `allowed_origins` is a comma-separated list; `*` opens the API to any
/// origin, which mirrors the permissive default the frontend development
/// setup expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: String,
}

impl CorsSettings {
    fn from_env() -> Self {
        Self {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        }
    }
}

/// Supabase project credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseSettings {
    /// Project base URL (e.g., "https://xyzcompany.supabase.co")
    pub url: String,
    /// Service role API key, sent as both `apikey` and bearer token
    pub key: String,
}

impl SupabaseSettings {
    fn from_env() -> Result<Self> {
        let url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;

        Ok(Self {
            // Trailing slashes would produce double slashes in request URLs
            url: url.trim_end_matches('/').to_string(),
            key: env::var("SUPABASE_KEY").context("SUPABASE_KEY must be set")?,
        })
    }
}
