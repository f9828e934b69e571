// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleDescription, ArticleId, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub desc: String,
}

impl ArticleCommandService {
    /// Only title and description are mutable; image and owner are fixed
    /// after creation.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.desc)?;

        self.write_repo
            .update(ArticleUpdate {
                id,
                title,
                description,
            })
            .await?;

        self.read_repo
            .find_by_id(id)
            .await?
            .map(ArticleDto::from)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
