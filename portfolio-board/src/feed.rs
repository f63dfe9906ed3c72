use crate::error::FeedError;
use serde::{Deserialize, Serialize};

/// Shown in place of the project grid when the feed cannot be loaded.
pub const FEED_UNAVAILABLE: &str = "Unable to load projects.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub fn parse_projects(raw: &str) -> Result<Vec<Project>, FeedError> {
    Ok(serde_json::from_str(raw)?)
}
