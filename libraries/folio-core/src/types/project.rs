//! Portfolio project entries

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project card in the portfolio grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Unique id (uuid v4 string)
    pub id: String,

    /// Project title
    pub title: String,

    /// Technology tags
    pub tags: Vec<String>,

    /// Card image URL
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Project {
    /// New project with the editor's "+ New Project" placeholder fields
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: "New Project".to_string(),
            tags: vec!["React".to_string()],
            image_url:
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800"
                    .to_string(),
        }
    }

    /// Seeded starter projects shown before any editing
    pub fn seeded() -> Vec<Self> {
        vec![
            Self {
                id: "seed-1".to_string(),
                title: "Fintech Dashboard".to_string(),
                tags: vec!["React".to_string(), "D3.js".to_string()],
                image_url:
                    "https://images.unsplash.com/photo-1551288049-bbda48642153?auto=format&fit=crop&q=80&w=800"
                        .to_string(),
            },
            Self {
                id: "seed-2".to_string(),
                title: "E-Commerce Suite".to_string(),
                tags: vec!["Next.js".to_string(), "Stripe".to_string()],
                image_url:
                    "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&q=80&w=800"
                        .to_string(),
            },
            Self {
                id: "seed-3".to_string(),
                title: "AI Image Generator".to_string(),
                tags: vec!["Gemini".to_string(), "Tailwind".to_string()],
                image_url:
                    "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=800"
                        .to_string(),
            },
        ]
    }
}
