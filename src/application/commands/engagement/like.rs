// src/application/commands/engagement/like.rs
use super::EngagementCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{account::AccountId, article::ArticleId},
};

pub struct ToggleLikeCommand {
    pub article_id: i64,
    pub account_id: i64,
}

impl EngagementCommandService {
    /// Flips the like state of the article for the given account and
    /// returns the article with its refreshed counters. Repeated calls
    /// with the same account alternate between liked and not liked.
    pub async fn toggle_like(&self, command: ToggleLikeCommand) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let account_id = AccountId::new(command.account_id)?;

        let outcome = self
            .engagement_repo
            .toggle_like(article_id, account_id)
            .await?;

        tracing::debug!(
            article_id = %article_id,
            account_id = %account_id,
            liked = outcome.liked,
            likes_count = outcome.likes_count,
            "like toggled"
        );

        self.article_read_repo
            .find_by_id(article_id)
            .await?
            .map(ArticleDto::from)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
