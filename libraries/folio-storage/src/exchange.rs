//! Content backup exchange
//!
//! Exports the editable entity groups as a single JSON document and merges
//! such documents back in. Import is lenient about coverage (a document may
//! carry only some groups) but strict about shape: a document that fails to
//! parse is rejected before any field is applied.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use folio_core::{ContentBundle, Highlight, LifeStory, LocalizedContent, Project, SocialLink};

use crate::error::{Result, StorageError};

/// On-disk backup document
///
/// Every group is optional so partial backups import cleanly. Broadcast
/// configuration is deliberately not part of the exchange format; it is
/// transient operator state, not content.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportFile {
    pub content: Option<LocalizedContent>,
    pub projects: Option<Vec<Project>>,
    pub stories: Option<Vec<LifeStory>>,
    pub highlights: Option<Vec<Highlight>>,
    pub hero_images: Option<Vec<String>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub exported_at: Option<String>,
}

/// What an import actually touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Page text replaced
    pub content: bool,
    /// Number of projects imported, if the group was present
    pub projects: Option<usize>,
    /// Number of life stories imported, if the group was present
    pub stories: Option<usize>,
    /// Number of highlights imported, if the group was present
    pub highlights: Option<usize>,
    /// Number of hero images imported, if the group was present
    pub hero_images: Option<usize>,
    /// Number of social links imported, if the group was present
    pub social_links: Option<usize>,
    /// Timestamp recorded in the document, if any
    pub exported_at: Option<String>,
}

impl ImportSummary {
    /// True if the document carried no recognized group at all
    pub fn is_empty(&self) -> bool {
        !self.content
            && self.projects.is_none()
            && self.stories.is_none()
            && self.highlights.is_none()
            && self.hero_images.is_none()
            && self.social_links.is_none()
    }
}

/// Serialize a bundle into the backup document format
///
/// # Errors
/// Returns an error if serialization fails
pub fn export_bundle(bundle: &ContentBundle) -> Result<String> {
    let file = ExportFile {
        content: Some(bundle.content.clone()),
        projects: Some(bundle.projects.clone()),
        stories: Some(bundle.stories.clone()),
        highlights: Some(bundle.highlights.clone()),
        hero_images: Some(bundle.hero_images.clone()),
        social_links: Some(bundle.social_links.clone()),
        exported_at: Some(Utc::now().to_rfc3339()),
    };
    serde_json::to_string_pretty(&file).map_err(|e| StorageError::SerializationError(e.to_string()))
}

/// Merge a backup document into a bundle, group by group
///
/// Groups absent from the document leave the bundle untouched. The whole
/// document is parsed before anything is applied; on a parse error the
/// bundle is guaranteed unchanged.
///
/// # Errors
/// Returns [`StorageError::InvalidImport`] if the document does not parse
pub fn import_bundle(json: &str, bundle: &mut ContentBundle) -> Result<ImportSummary> {
    let file: ExportFile =
        serde_json::from_str(json).map_err(|e| StorageError::InvalidImport(e.to_string()))?;

    let mut summary = ImportSummary {
        exported_at: file.exported_at,
        ..ImportSummary::default()
    };

    if let Some(content) = file.content {
        bundle.content = content;
        summary.content = true;
    }
    if let Some(projects) = file.projects {
        summary.projects = Some(projects.len());
        bundle.projects = projects;
    }
    if let Some(stories) = file.stories {
        summary.stories = Some(stories.len());
        bundle.stories = stories;
    }
    if let Some(highlights) = file.highlights {
        summary.highlights = Some(highlights.len());
        bundle.highlights = highlights;
    }
    if let Some(hero_images) = file.hero_images {
        summary.hero_images = Some(hero_images.len());
        bundle.hero_images = hero_images;
    }
    if let Some(social_links) = file.social_links {
        summary.social_links = Some(social_links.len());
        bundle.social_links = social_links;
    }

    info!(empty = summary.is_empty(), "imported backup document");
    Ok(summary)
}
