// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountId,
        article::{ArticleDescription, ArticleTitle, ArticleWithAuthor, NewArticle},
    },
};

const DEFAULT_IMAGE: &str = "placeholder.jpg";

pub struct CreateArticleCommand {
    pub title: String,
    pub desc: String,
    pub img: Option<String>,
    pub owner_id: i64,
}

impl ArticleCommandService {
    /// Persists a new article with zeroed counters and an empty like set.
    /// The owner must resolve to an existing account; the foreign key makes
    /// the article/owner linkage a single atomic write.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.desc)?;
        let owner_id = AccountId::new(command.owner_id)?;

        let owner = self
            .account_repo
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| ApplicationError::validation("owner account not found"))?;

        let image = command
            .img
            .filter(|img| !img.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE.to_string());

        let created = self
            .write_repo
            .insert(NewArticle {
                title,
                description,
                image,
                author_id: owner_id,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(article_id = %created.id, owner_id = %owner_id, "article created");

        Ok(ArticleWithAuthor {
            article: created,
            author_name: owner.name.as_str().to_owned(),
            author_profile_image: owner.profile_image,
        }
        .into())
    }
}
