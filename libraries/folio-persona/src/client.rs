//! Bio rewrite client.

use crate::error::{PersonaError, Result};
use folio_core::{HeroBio, Language};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the bio generation service.
#[derive(Debug, Clone)]
pub struct PersonaConfig {
    /// Base URL of the generation endpoint, e.g. `https://persona.example.com`
    pub api_base: String,
    /// API key presented with every request
    pub api_key: String,
}

impl PersonaConfig {
    /// Create a new configuration
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }
}

/// Request body sent to the generation service
#[derive(Debug, Serialize)]
struct BioRequest<'a> {
    /// The role the visitor typed in
    role: &'a str,
    /// Language the rewrite must be written in ("en"/"bn")
    language: &'static str,
}

/// Client for the generation service that rewrites the hero intro.
///
/// The contract is a role and a language in, a [`HeroBio`] out: a short
/// replacement headline plus a one-paragraph description, both in the
/// requested language. On any failure the caller keeps the stored hero
/// text; a rewrite is never partially applied.
#[derive(Debug)]
pub struct PersonaClient {
    http: Client,
    config: PersonaConfig,
}

impl PersonaClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    /// Returns [`PersonaError::InvalidUrl`] if the base URL is empty or not
    /// http(s), and [`PersonaError::AuthRequired`] if the API key is empty.
    pub fn new(config: PersonaConfig) -> Result<Self> {
        if config.api_base.is_empty() {
            return Err(PersonaError::InvalidUrl("URL cannot be empty".into()));
        }

        let api_base = config.api_base.trim_end_matches('/').to_string();
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(PersonaError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(PersonaError::AuthRequired);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Folio/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PersonaError::Request)?;

        Ok(Self {
            http,
            config: PersonaConfig {
                api_base,
                api_key: config.api_key,
            },
        })
    }

    /// The configured base URL.
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    /// Request a hero rewrite for the given role and language.
    ///
    /// A blank role is rejected before any request is made.
    ///
    /// # Errors
    /// Returns [`PersonaError::EmptyRole`] for a blank role,
    /// [`PersonaError::AuthRequired`] on 401,
    /// [`PersonaError::ServerError`] on any other non-success status, and
    /// [`PersonaError::ParseError`] if the success body is not a bio.
    pub async fn generate_bio(&self, role: &str, language: Language) -> Result<HeroBio> {
        let role = role.trim();
        if role.is_empty() {
            return Err(PersonaError::EmptyRole);
        }

        debug!(role, language = language.code(), "requesting bio rewrite");

        let url = format!("{}/generate", self.config.api_base);
        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&BioRequest {
                role,
                language: language.code(),
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let bio: HeroBio = response.json().await.map_err(|e| {
                PersonaError::ParseError(format!("Failed to parse bio response: {e}"))
            })?;
            info!(role, title = %bio.title, "bio rewritten");
            Ok(bio)
        } else if status.as_u16() == 401 {
            Err(PersonaError::AuthRequired)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(PersonaError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
