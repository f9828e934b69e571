// src/application/commands/engagement/comment.rs
use super::EngagementCommandService;
use crate::{
    application::{
        dto::{AuthorDto, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountId,
        article::ArticleId,
        comment::{CommentContent, NewComment},
    },
};

pub struct AddCommentCommand {
    pub article_id: i64,
    pub account_id: i64,
    pub content: String,
}

impl EngagementCommandService {
    /// Stores the comment and bumps the article's comment counter in one
    /// transaction, then returns the comment with the author's display
    /// fields resolved for immediate rendering.
    pub async fn add_comment(&self, command: AddCommentCommand) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let author_id = AccountId::new(command.account_id)?;
        let content = CommentContent::new(command.content)?;

        let author = self
            .account_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::validation("author account not found"))?;

        let comment = self
            .engagement_repo
            .add_comment(NewComment {
                content,
                author_id,
                article_id,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::debug!(article_id = %article_id, author_id = %author_id, "comment added");

        Ok(CommentDto::from_comment(
            comment,
            AuthorDto {
                id: author.id.into(),
                name: author.name.into(),
                profile_image: author.profile_image,
            },
        ))
    }
}
