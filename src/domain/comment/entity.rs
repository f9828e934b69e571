// src/domain/comment/entity.rs
use crate::domain::account::AccountId;
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use chrono::{DateTime, Utc};

/// Comments are immutable once created and are never deleted; they survive
/// the deletion of their parent article.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub author_id: AccountId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentContent,
    pub author_id: AccountId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}

/// A comment with the author's display fields joined in, the shape the
/// comment feed renders directly.
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_name: String,
    pub author_profile_image: Option<String>,
}
