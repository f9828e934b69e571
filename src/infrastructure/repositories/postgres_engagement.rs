// src/infrastructure/repositories/postgres_engagement.rs
use super::error::map_sqlx;
use crate::domain::account::AccountId;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentContent, CommentId, CommentWithAuthor, NewComment};
use crate::domain::engagement::{EngagementRepository, LikeToggle};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Engagement writes against PostgreSQL.
///
/// Every operation that changes a relation and its counter does so inside
/// one transaction, with the article row locked first so concurrent toggles
/// on the same article serialise. The counters are only ever moved with
/// relative `SET x = x + delta` updates; no counter value is computed in
/// application memory.
#[derive(Clone)]
pub struct PostgresEngagementRepository {
    pool: PgPool,
}

impl PostgresEngagementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    author_id: i64,
    article_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            content: CommentContent::new(row.content)?,
            author_id: AccountId::new(row.author_id)?,
            article_id: ArticleId::new(row.article_id)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentWithAuthorRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    author_name: String,
    author_profile_image: Option<String>,
}

impl TryFrom<CommentWithAuthorRow> for CommentWithAuthor {
    type Error = DomainError;

    fn try_from(row: CommentWithAuthorRow) -> Result<Self, Self::Error> {
        Ok(CommentWithAuthor {
            comment: Comment::try_from(row.comment)?,
            author_name: row.author_name,
            author_profile_image: row.author_profile_image,
        })
    }
}

#[async_trait]
impl EngagementRepository for PostgresEngagementRepository {
    async fn toggle_like(
        &self,
        article_id: ArticleId,
        account_id: AccountId,
    ) -> DomainResult<LikeToggle> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Lock the article row; concurrent toggles on the same article wait
        // here instead of racing the set against the counter.
        let locked: Option<i64> =
            sqlx::query_scalar("SELECT id FROM articles WHERE id = $1 FOR UPDATE")
                .bind(i64::from(article_id))
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx)?;

        if locked.is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }

        let removed = sqlx::query(
            "DELETE FROM article_likes WHERE article_id = $1 AND account_id = $2",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(account_id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        let liked = removed == 0;
        if liked {
            sqlx::query(
                "INSERT INTO article_likes (article_id, account_id) VALUES ($1, $2)",
            )
            .bind(i64::from(article_id))
            .bind(i64::from(account_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        let delta: i64 = if liked { 1 } else { -1 };
        let likes_count: i64 = sqlx::query_scalar(
            "UPDATE articles SET likes_count = likes_count + $2 WHERE id = $1 RETURNING likes_count",
        )
        .bind(i64::from(article_id))
        .bind(delta)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok(LikeToggle { liked, likes_count })
    }

    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            content,
            author_id,
            article_id,
            created_at,
        } = comment;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // The counter bump doubles as the existence check and locks the
        // article row for the rest of the transaction.
        let bumped = sqlx::query(
            "UPDATE articles SET comments_count = comments_count + 1 WHERE id = $1",
        )
        .bind(i64::from(article_id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        if bumped == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (content, author_id, article_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, content, author_id, article_id, created_at",
        )
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(i64::from(article_id))
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentWithAuthorRow>(
            "SELECT c.id, c.content, c.author_id, c.article_id, c.created_at,
                    u.name AS author_name, u.profile_image AS author_profile_image
             FROM comments c
             JOIN accounts u ON u.id = c.author_id
             WHERE c.article_id = $1
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentWithAuthor::try_from).collect()
    }

    async fn increment_share(&self, article_id: ArticleId) -> DomainResult<i64> {
        // A single atomic statement; no transaction needed.
        sqlx::query_scalar(
            "UPDATE articles SET shares_count = shares_count + 1 WHERE id = $1 RETURNING shares_count",
        )
        .bind(i64::from(article_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}
