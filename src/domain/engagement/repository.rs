use crate::domain::account::AccountId;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentWithAuthor, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Outcome of a like toggle: the new membership state and the counter as
/// stored after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_count: i64,
}

/// Engagement writes mutate the article's like set, comment collection and
/// denormalized counters. Every implementation must make each
/// "relation change + counter delta" pair a single atomic store operation;
/// reading a counter into memory and writing a computed value back over two
/// round trips loses updates under concurrency.
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Adds the account to the article's like set, or removes it when
    /// already present, moving `likes_count` by exactly one in the same
    /// atomic operation. Errors with NotFound when the article is absent.
    async fn toggle_like(
        &self,
        article_id: ArticleId,
        account_id: AccountId,
    ) -> DomainResult<LikeToggle>;

    /// Inserts the comment and bumps `comments_count` in one transaction.
    /// Errors with NotFound when the article is absent.
    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Comments for the article, newest-first, with author fields joined.
    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<CommentWithAuthor>>;

    /// Unconditional `shares_count + 1`; returns the stored value.
    /// Errors with NotFound when the article is absent.
    async fn increment_share(&self, article_id: ArticleId) -> DomainResult<i64>;
}
