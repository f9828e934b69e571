// src/application/queries/engagement.rs
use std::sync::Arc;

use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{article::ArticleId, engagement::EngagementRepository},
};

pub struct EngagementQueryService {
    engagement_repo: Arc<dyn EngagementRepository>,
}

impl EngagementQueryService {
    pub fn new(engagement_repo: Arc<dyn EngagementRepository>) -> Self {
        Self { engagement_repo }
    }

    /// Comments for an article, newest-first, author fields joined at the
    /// store so the feed renders without extra lookups.
    pub async fn list_comments(&self, article_id: i64) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::new(article_id)?;
        let comments = self.engagement_repo.list_comments(article_id).await?;
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}
