use crate::error::AppError;
use async_trait::async_trait;
use gloo_net::http::Request;
use portfolio_board::feed::{Project, parse_projects};

#[async_trait(?Send)]
pub trait FeedSource {
    async fn projects(&self) -> Result<Vec<Project>, AppError>;
}

/// Reads the static project feed served next to the page.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl FeedSource for HttpFeed {
    async fn projects(&self) -> Result<Vec<Project>, AppError> {
        let response = Request::get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status,
                message: text,
            });
        }

        let raw = response.text().await?;
        Ok(parse_projects(&raw)?)
    }
}
