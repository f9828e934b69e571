// src/application/commands/engagement/share.rs
use super::EngagementCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct IncrementShareCommand {
    pub article_id: i64,
}

impl EngagementCommandService {
    /// Every call counts: shares are not attributed to a caller, so no
    /// deduplication applies. Returns the stored counter after the bump.
    pub async fn increment_share(&self, command: IncrementShareCommand) -> ApplicationResult<i64> {
        let article_id = ArticleId::new(command.article_id)?;
        let shares_count = self.engagement_repo.increment_share(article_id).await?;
        tracing::debug!(article_id = %article_id, shares_count, "share recorded");
        Ok(shares_count)
    }
}
