// src/application/queries/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, OwnerDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::{AccountId, AccountRepository},
        article::{ArticleId, ArticleReadRepository},
    },
};

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
    account_repo: Arc<dyn AccountRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        account_repo: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            read_repo,
            account_repo,
        }
    }

    /// Every article, newest-first, counters and like set annotated.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }

    pub async fn get_article(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(ArticleDto::from)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// The owner's profile together with their articles, newest-first.
    /// The article list is the author foreign key relation, so a deleted
    /// article can never linger here.
    pub async fn get_owner_articles(&self, account_id: i64) -> ApplicationResult<OwnerDto> {
        let account_id = AccountId::new(account_id)?;

        let owner = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        let articles = self.read_repo.list_by_author(account_id).await?;

        Ok(OwnerDto {
            id: owner.id.into(),
            name: owner.name.into(),
            profile_image: owner.profile_image,
            articles: articles.into_iter().map(ArticleDto::from).collect(),
        })
    }
}
