// src/infrastructure/repositories/postgres_article.rs
use super::error::map_sqlx;
use crate::domain::account::AccountId;
use crate::domain::article::{
    Article, ArticleDescription, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWithAuthor, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    description: String,
    image: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    likes: Vec<i64>,
    likes_count: i64,
    comments_count: i64,
    shares_count: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            image: row.image,
            author_id: AccountId::new(row.author_id)?,
            created_at: row.created_at,
            likes: row
                .likes
                .into_iter()
                .map(AccountId::new)
                .collect::<Result<_, _>>()?,
            likes_count: row.likes_count,
            comments_count: row.comments_count,
            shares_count: row.shares_count,
        })
    }
}

/// Row shape for reads that join the author's display fields.
#[derive(Debug, FromRow)]
struct ArticleWithAuthorRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_name: String,
    author_profile_image: Option<String>,
}

impl TryFrom<ArticleWithAuthorRow> for ArticleWithAuthor {
    type Error = DomainError;

    fn try_from(row: ArticleWithAuthorRow) -> Result<Self, Self::Error> {
        Ok(ArticleWithAuthor {
            article: Article::try_from(row.article)?,
            author_name: row.author_name,
            author_profile_image: row.author_profile_image,
        })
    }
}

/// Select list shared by the read queries: the like set is materialised as
/// an array from the authoritative relation, the counters come from the
/// denormalized columns.
const READ_SELECT: &str = "SELECT a.id, a.title, a.description, a.image, a.author_id, a.created_at,
       ARRAY(SELECT l.account_id FROM article_likes l WHERE l.article_id = a.id ORDER BY l.created_at) AS likes,
       a.likes_count, a.comments_count, a.shares_count,
       u.name AS author_name, u.profile_image AS author_profile_image
 FROM articles a
 JOIN accounts u ON u.id = a.author_id";

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            description,
            image,
            author_id,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, description, image, author_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, description, image, author_id, created_at,
                       ARRAY[]::BIGINT[] AS likes, likes_count, comments_count, shares_count",
        )
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(&image)
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            description,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = $2, description = $3
             WHERE id = $1
             RETURNING id, title, description, image, author_id, created_at,
                       ARRAY(SELECT account_id FROM article_likes WHERE article_id = id ORDER BY created_at) AS likes,
                       likes_count, comments_count, shares_count",
        )
        .bind(i64::from(id))
        .bind(title.as_str())
        .bind(description.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // Like rows go with the article via ON DELETE CASCADE; comment rows
        // are retained on purpose.
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        let row = sqlx::query_as::<_, ArticleWithAuthorRow>(&format!(
            "{READ_SELECT} WHERE a.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleWithAuthor::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ArticleWithAuthor>> {
        let rows = sqlx::query_as::<_, ArticleWithAuthorRow>(&format!(
            "{READ_SELECT} ORDER BY a.created_at DESC, a.id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleWithAuthor::try_from).collect()
    }

    async fn list_by_author(&self, author: AccountId) -> DomainResult<Vec<ArticleWithAuthor>> {
        let rows = sqlx::query_as::<_, ArticleWithAuthorRow>(&format!(
            "{READ_SELECT} WHERE a.author_id = $1 ORDER BY a.created_at DESC, a.id DESC"
        ))
        .bind(i64::from(author))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleWithAuthor::try_from).collect()
    }
}
