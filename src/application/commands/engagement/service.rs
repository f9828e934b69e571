// src/application/commands/engagement/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        account::AccountRepository, article::ArticleReadRepository,
        engagement::EngagementRepository,
    },
};

/// Business logic for likes, comments and shares. The counter/relation
/// consistency itself lives in the repository, which commits each change
/// atomically; this service validates input and resolves display fields.
pub struct EngagementCommandService {
    pub(super) engagement_repo: Arc<dyn EngagementRepository>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl EngagementCommandService {
    pub fn new(
        engagement_repo: Arc<dyn EngagementRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        account_repo: Arc<dyn AccountRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            engagement_repo,
            article_read_repo,
            account_repo,
            clock,
        }
    }
}
