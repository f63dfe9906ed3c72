use crate::storage::DEFAULT_STORAGE_KEY;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub feed_url: String,
    pub contact_email: String,
    /// Height of the fixed header, subtracted when scrolling to a section.
    pub header_offset: f64,
    pub navbar_threshold: f64,
    pub reveal_step: f32,
    pub project_reveal_step: f32,
    /// Visible fraction at which a `.reveal` element fades in.
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            feed_url: "projects.json".to_string(),
            contact_email: "owner@example.com".to_string(),
            header_offset: 80.0,
            navbar_threshold: 100.0,
            reveal_step: 0.1,
            project_reveal_step: 0.15,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}
