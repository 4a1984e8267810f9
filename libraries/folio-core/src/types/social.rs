//! Social link entries

use serde::{Deserialize, Serialize};

/// A social platform link with its icon glyph path and accent color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    /// Platform name ("LinkedIn", "GitHub", ...)
    pub platform: String,

    /// Profile URL
    pub url: String,

    /// SVG path data for the platform glyph
    #[serde(rename = "icon")]
    pub icon_path: String,

    /// Accent color (hex)
    pub color: String,
}

impl SocialLink {
    /// Seeded default links (icon paths elided to short placeholders; the
    /// real SVG path data lives in the persisted bundle once edited)
    pub fn seeded() -> Vec<Self> {
        vec![
            Self {
                platform: "LinkedIn".to_string(),
                url: "#".to_string(),
                icon_path: "M19 0h-14c-2.761 0-5 2.239-5 5v14".to_string(),
                color: "#0077b5".to_string(),
            },
            Self {
                platform: "GitHub".to_string(),
                url: "#".to_string(),
                icon_path: "M12 0c-6.626 0-12 5.373-12 12".to_string(),
                color: "#ffffff".to_string(),
            },
            Self {
                platform: "Twitter".to_string(),
                url: "#".to_string(),
                icon_path: "M24 4.557c-.883.392-1.832.656-2.828.775".to_string(),
                color: "#1da1f2".to_string(),
            },
        ]
    }
}
