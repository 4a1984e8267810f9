//! Drive upload client.

use crate::error::{DriveError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Configuration for the drive upload service.
#[derive(Debug, Clone)]
pub struct DriveConfig {
    /// Base URL of the upload endpoint, e.g. `https://drive.example.com`
    pub api_base: String,
    /// OAuth client identifier presented with every upload
    pub client_id: String,
}

impl DriveConfig {
    /// Create a new configuration
    pub fn new(api_base: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            client_id: client_id.into(),
        }
    }
}

/// Successful upload response body
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// Public URL of the stored file
    url: String,
}

/// Client for the cloud drive that hosts uploaded media.
///
/// The service accepts a multipart file and answers with the public URL the
/// site should embed. Uploads are not retried; the caller keeps whatever
/// URL the edited field held before.
#[derive(Debug)]
pub struct DriveClient {
    http: Client,
    config: DriveConfig,
}

impl DriveClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    /// Returns [`DriveError::InvalidUrl`] if the base URL is empty or not
    /// http(s), and [`DriveError::AuthRequired`] if the client id is empty.
    pub fn new(config: DriveConfig) -> Result<Self> {
        if config.api_base.is_empty() {
            return Err(DriveError::InvalidUrl("URL cannot be empty".into()));
        }

        let api_base = config.api_base.trim_end_matches('/').to_string();
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(DriveError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        if config.client_id.trim().is_empty() {
            return Err(DriveError::AuthRequired);
        }

        // HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Folio/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DriveError::Request)?;

        Ok(Self {
            http,
            config: DriveConfig {
                api_base,
                client_id: config.client_id,
            },
        })
    }

    /// The configured base URL.
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    /// Upload a media file and return its public URL.
    ///
    /// # Errors
    /// Returns [`DriveError::AuthRequired`] on 401,
    /// [`DriveError::ServerError`] on any other non-success status, and
    /// [`DriveError::ParseError`] if the success body has no URL.
    pub async fn upload_media(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<String> {
        let size = bytes.len();
        debug!(file = %file_name, size, "uploading media");

        let file_part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new()
            .part("file", file_part)
            .text("clientId", self.config.client_id.clone());

        let url = format!("{}/upload", self.config.api_base);
        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        if status.is_success() {
            let body: UploadResponse = response.json().await.map_err(|e| {
                DriveError::ParseError(format!("Failed to parse upload response: {e}"))
            })?;
            info!(file = %file_name, url = %body.url, "media uploaded");
            Ok(body.url)
        } else if status.as_u16() == 401 {
            Err(DriveError::AuthRequired)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(DriveError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Upload a file from disk, guessing the MIME type from the extension.
    ///
    /// # Errors
    /// Returns [`DriveError::FileNotFound`] if the path does not exist,
    /// otherwise as [`Self::upload_media`].
    pub async fn upload_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(DriveError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("media")
            .to_string();

        let mut file = File::open(path).await?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await?;

        self.upload_media(&file_name, contents, mime_type_for(path))
            .await
    }
}

/// Guess a MIME type from the file extension
fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_non_http_urls() {
        let err = DriveClient::new(DriveConfig::new("", "client")).unwrap_err();
        assert!(matches!(err, DriveError::InvalidUrl(_)));

        let err = DriveClient::new(DriveConfig::new("ftp://drive.example.com", "client"))
            .unwrap_err();
        assert!(matches!(err, DriveError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_blank_client_id() {
        let err = DriveClient::new(DriveConfig::new("https://drive.example.com", "  "))
            .unwrap_err();
        assert!(matches!(err, DriveError::AuthRequired));
    }

    #[test]
    fn normalizes_trailing_slash() {
        let client =
            DriveClient::new(DriveConfig::new("https://drive.example.com/", "client")).unwrap();
        assert_eq!(client.api_base(), "https://drive.example.com");
    }

    #[test]
    fn mime_guesses_cover_site_media() {
        assert_eq!(mime_type_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.webm")), "video/webm");
        assert_eq!(mime_type_for(Path::new("a.unknown")), "application/octet-stream");
    }
}
