use super::accounts::AuthorDto;
use crate::domain::comment::{Comment, CommentWithAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub content: String,
    pub article_id: i64,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    /// Joins the author's display fields onto a freshly stored comment,
    /// so the client can render it without a second fetch.
    pub fn from_comment(comment: Comment, author: AuthorDto) -> Self {
        Self {
            id: comment.id.into(),
            content: comment.content.into(),
            article_id: comment.article_id.into(),
            author,
            created_at: comment.created_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentDto {
    fn from(read: CommentWithAuthor) -> Self {
        let CommentWithAuthor {
            comment,
            author_name,
            author_profile_image,
        } = read;
        let author = AuthorDto {
            id: comment.author_id.into(),
            name: author_name,
            profile_image: author_profile_image,
        };
        Self::from_comment(comment, author)
    }
}
