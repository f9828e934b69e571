use super::accounts::AuthorDto;
use crate::domain::article::ArticleWithAuthor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub desc: String,
    pub img: String,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
    pub likes: Vec<i64>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
}

impl From<ArticleWithAuthor> for ArticleDto {
    fn from(read: ArticleWithAuthor) -> Self {
        let ArticleWithAuthor {
            article,
            author_name,
            author_profile_image,
        } = read;

        Self {
            id: article.id.into(),
            title: article.title.into(),
            desc: article.description.into(),
            img: article.image,
            author: AuthorDto {
                id: article.author_id.into(),
                name: author_name,
                profile_image: author_profile_image,
            },
            created_at: article.created_at,
            likes: article.likes.into_iter().map(i64::from).collect(),
            likes_count: article.likes_count,
            comments_count: article.comments_count,
            shares_count: article.shares_count,
        }
    }
}

/// Payload of `GET /articles/owner/:id`: the owner's profile plus their
/// articles, newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: i64,
    pub name: String,
    pub profile_image: Option<String>,
    pub articles: Vec<ArticleDto>,
}
