//! Folio Storage
//!
//! `SQLite` persistence layer for the site content.
//!
//! The content model is small and document-shaped, so storage is a single
//! key-value table with one JSON document per entity group. This mirrors
//! how the site's content behaves: groups are always read and written
//! whole, never queried relationally.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_storage::ContentStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ContentStore::open("folio.db").await?;
//!
//! // Expired highlights are pruned on load
//! let mut bundle = store.load().await?;
//! bundle.hero_images.push("https://example.com/new.jpg".to_string());
//! store.save(&bundle).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod database;
mod error;
pub mod exchange;
mod store;

pub use database::ContentDatabase;
pub use error::{Result, StorageError};
pub use exchange::{export_bundle, import_bundle, ExportFile, ImportSummary};
pub use store::{
    ContentStore, GROUP_BROADCAST, GROUP_CONTENT, GROUP_DRIVE_CLIENT_ID, GROUP_HERO_IMAGES,
    GROUP_HIGHLIGHTS, GROUP_PROJECTS, GROUP_SOCIAL_LINKS, GROUP_STORIES,
};
