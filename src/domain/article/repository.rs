use crate::domain::account::AccountId;
use crate::domain::article::entity::{Article, ArticleUpdate, ArticleWithAuthor, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Deletes the article and its like rows. Comments are retained.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>>;
    /// All articles, newest-first by creation timestamp.
    async fn list(&self) -> DomainResult<Vec<ArticleWithAuthor>>;
    /// Articles owned by `author`, newest-first.
    async fn list_by_author(&self, author: AccountId) -> DomainResult<Vec<ArticleWithAuthor>>;
}
