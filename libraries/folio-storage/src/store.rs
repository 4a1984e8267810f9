//! Persisted site content
//!
//! The whole site is a handful of entity groups (bio text, projects, life
//! stories, highlights, hero images, social links, broadcast state). Each
//! group is stored as one JSON document under a well-known key, so a load
//! is a few point reads and a save is a single transaction.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::Row;
use std::path::Path;
use tracing::{debug, info, warn};

use folio_core::{
    BroadcastState, ContentBundle, Highlight, LifeStory, LocalizedContent, Project, SocialLink,
};

use crate::database::ContentDatabase;
use crate::error::Result;

// Group key constants
/// Bilingual page text
pub const GROUP_CONTENT: &str = "content";
/// Project grid entries
pub const GROUP_PROJECTS: &str = "projects";
/// Life story chapters
pub const GROUP_STORIES: &str = "stories";
/// Story highlights (24h shelf)
pub const GROUP_HIGHLIGHTS: &str = "highlights";
/// Hero slideshow image URLs
pub const GROUP_HERO_IMAGES: &str = "hero_images";
/// Social link entries
pub const GROUP_SOCIAL_LINKS: &str = "social_links";
/// Broadcast configuration
pub const GROUP_BROADCAST: &str = "broadcast";
/// Cloud drive client identifier
pub const GROUP_DRIVE_CLIENT_ID: &str = "drive_client_id";

/// Content store over a SQLite key-value table
pub struct ContentStore {
    db: ContentDatabase,
}

impl ContentStore {
    /// Open (or create) a store backed by the database file at `path`
    ///
    /// # Errors
    /// Returns an error if the connection fails or migrations fail
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = ContentDatabase::open_file(path).await?;
        Ok(Self { db })
    }

    /// Open an in-memory store (for testing)
    pub async fn in_memory() -> Result<Self> {
        let db = ContentDatabase::in_memory().await?;
        Ok(Self { db })
    }

    /// Wrap an already-open database
    pub fn with_database(db: ContentDatabase) -> Self {
        Self { db }
    }

    /// Access the underlying database
    pub fn database(&self) -> &ContentDatabase {
        &self.db
    }

    /// Load the full content bundle, pruning expired highlights
    ///
    /// Missing or unreadable groups fall back to the seeded defaults, so a
    /// fresh database produces a fully populated site. Highlights older
    /// than 24 hours are removed and the pruned list is written back.
    ///
    /// # Errors
    /// Returns an error if a query fails
    pub async fn load(&self) -> Result<ContentBundle> {
        self.load_at(Utc::now().timestamp_millis()).await
    }

    /// Load the bundle as of the given epoch-millis timestamp
    ///
    /// # Errors
    /// Returns an error if a query fails
    pub async fn load_at(&self, now_ms: i64) -> Result<ContentBundle> {
        let defaults = ContentBundle::default();

        let mut bundle = ContentBundle {
            content: self.get_group_or(GROUP_CONTENT, defaults.content).await?,
            projects: self.get_group_or(GROUP_PROJECTS, defaults.projects).await?,
            stories: self.get_group_or(GROUP_STORIES, defaults.stories).await?,
            highlights: self
                .get_group_or(GROUP_HIGHLIGHTS, defaults.highlights)
                .await?,
            hero_images: self
                .get_group_or(GROUP_HERO_IMAGES, defaults.hero_images)
                .await?,
            social_links: self
                .get_group_or(GROUP_SOCIAL_LINKS, defaults.social_links)
                .await?,
            broadcast: self.get_group_or(GROUP_BROADCAST, defaults.broadcast).await?,
        };

        let removed = bundle.prune_expired_highlights(now_ms);
        if removed > 0 {
            info!(removed, "pruned expired highlights");
            self.save_highlights(&bundle.highlights).await?;
        }

        Ok(bundle)
    }

    /// Persist every entity group in a single transaction
    ///
    /// # Errors
    /// Returns an error if any write fails; nothing is applied on failure
    pub async fn save(&self, bundle: &ContentBundle) -> Result<()> {
        let mut tx = self.db.pool().begin().await?;

        upsert(&mut tx, GROUP_CONTENT, &bundle.content).await?;
        upsert(&mut tx, GROUP_PROJECTS, &bundle.projects).await?;
        upsert(&mut tx, GROUP_STORIES, &bundle.stories).await?;
        upsert(&mut tx, GROUP_HIGHLIGHTS, &bundle.highlights).await?;
        upsert(&mut tx, GROUP_HERO_IMAGES, &bundle.hero_images).await?;
        upsert(&mut tx, GROUP_SOCIAL_LINKS, &bundle.social_links).await?;
        upsert(&mut tx, GROUP_BROADCAST, &bundle.broadcast).await?;

        tx.commit().await?;
        debug!("saved content bundle");
        Ok(())
    }

    /// Persist the bilingual page text
    pub async fn save_content(&self, content: &LocalizedContent) -> Result<()> {
        self.put_group(GROUP_CONTENT, content).await
    }

    /// Persist the project list
    pub async fn save_projects(&self, projects: &[Project]) -> Result<()> {
        self.put_group(GROUP_PROJECTS, projects).await
    }

    /// Persist the life story list
    pub async fn save_stories(&self, stories: &[LifeStory]) -> Result<()> {
        self.put_group(GROUP_STORIES, stories).await
    }

    /// Persist the highlight list
    pub async fn save_highlights(&self, highlights: &[Highlight]) -> Result<()> {
        self.put_group(GROUP_HIGHLIGHTS, highlights).await
    }

    /// Persist the hero image list
    pub async fn save_hero_images(&self, images: &[String]) -> Result<()> {
        self.put_group(GROUP_HERO_IMAGES, images).await
    }

    /// Persist the social links
    pub async fn save_social_links(&self, links: &[SocialLink]) -> Result<()> {
        self.put_group(GROUP_SOCIAL_LINKS, links).await
    }

    /// Persist the broadcast configuration
    pub async fn save_broadcast(&self, state: &BroadcastState) -> Result<()> {
        self.put_group(GROUP_BROADCAST, state).await
    }

    /// Get the configured cloud drive client id, if any
    ///
    /// # Errors
    /// Returns an error if the query fails
    pub async fn drive_client_id(&self) -> Result<Option<String>> {
        match self.get_raw(GROUP_DRIVE_CLIENT_ID).await? {
            Some(raw) => Ok(serde_json::from_str(&raw).ok()),
            None => Ok(None),
        }
    }

    /// Set or clear the cloud drive client id
    ///
    /// # Errors
    /// Returns an error if the write fails
    pub async fn set_drive_client_id(&self, client_id: Option<&str>) -> Result<()> {
        match client_id {
            Some(id) => self.put_group(GROUP_DRIVE_CLIENT_ID, &id).await,
            None => {
                sqlx::query("DELETE FROM content_groups WHERE key = ?")
                    .bind(GROUP_DRIVE_CLIENT_ID)
                    .execute(self.db.pool())
                    .await?;
                Ok(())
            }
        }
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM content_groups WHERE key = ?")
            .bind(key)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    async fn get_group_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        match self.get_raw(key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    // Unreadable stored value; serve defaults rather than fail the site
                    warn!(key, error = %e, "stored group is unreadable, using defaults");
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    async fn put_group<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| crate::error::StorageError::SerializationError(e.to_string()))?;
        sqlx::query(
            "INSERT INTO content_groups (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, \
             updated_at = datetime('now')",
        )
        .bind(key)
        .bind(json)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }
}

async fn upsert<T: Serialize + ?Sized>(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| crate::error::StorageError::SerializationError(e.to_string()))?;
    sqlx::query(
        "INSERT INTO content_groups (key, value) VALUES (?, ?) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, \
         updated_at = datetime('now')",
    )
    .bind(key)
    .bind(json)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
