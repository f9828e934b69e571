// src/domain/article/entity.rs
use crate::domain::account::AccountId;
use crate::domain::article::value_objects::{ArticleDescription, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

/// A published post together with its engagement state.
///
/// `likes` is the authoritative relation; the three counters are
/// denormalized aggregates. `likes_count == likes.len()` must hold after
/// every mutation, which is why all engagement changes go through the
/// methods below (in memory) or through a single atomic store operation
/// (in the repositories).
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub image: String,
    pub author_id: AccountId,
    pub created_at: DateTime<Utc>,
    pub likes: Vec<AccountId>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
}

impl Article {
    /// Flip the like state for `account`. Returns `true` when the account
    /// now likes the article. Each account appears in the set at most once,
    /// so the counter moves by exactly one in either direction.
    pub fn toggle_like(&mut self, account: AccountId) -> bool {
        if let Some(pos) = self.likes.iter().position(|id| *id == account) {
            self.likes.remove(pos);
            self.likes_count -= 1;
            false
        } else {
            self.likes.push(account);
            self.likes_count += 1;
            true
        }
    }

    pub fn record_comment(&mut self) {
        self.comments_count += 1;
    }

    /// Shares are not deduplicated by caller; every call counts.
    pub fn record_share(&mut self) -> i64 {
        self.shares_count += 1;
        self.shares_count
    }

    pub fn set_content(&mut self, title: ArticleTitle, description: ArticleDescription) {
        self.title = title;
        self.description = description;
    }
}

/// Payload for inserting a fresh article: counters start at zero and the
/// like set starts empty.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub image: String,
    pub author_id: AccountId,
    pub created_at: DateTime<Utc>,
}

/// Title and description are the only fields mutable after creation;
/// image and owner are fixed for the lifetime of the article.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
}

/// An article with its author's display fields joined in, for list and
/// detail reads.
#[derive(Debug, Clone)]
pub struct ArticleWithAuthor {
    pub article: Article,
    pub author_name: String,
    pub author_profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            description: ArticleDescription::new("description").unwrap(),
            image: "cover.jpg".into(),
            author_id: AccountId::new(1).unwrap(),
            created_at: Utc::now(),
            likes: vec![],
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
        }
    }

    #[test]
    fn toggle_like_alternates_and_keeps_counter_in_sync() {
        let mut article = sample_article();
        let reader = AccountId::new(42).unwrap();

        assert!(article.toggle_like(reader));
        assert_eq!(article.likes_count, 1);
        assert_eq!(article.likes, vec![reader]);

        assert!(!article.toggle_like(reader));
        assert_eq!(article.likes_count, 0);
        assert!(article.likes.is_empty());
        assert_eq!(article.likes_count, article.likes.len() as i64);
    }

    #[test]
    fn toggle_like_tracks_distinct_accounts() {
        let mut article = sample_article();
        let first = AccountId::new(1).unwrap();
        let second = AccountId::new(2).unwrap();

        article.toggle_like(first);
        article.toggle_like(second);
        assert_eq!(article.likes_count, 2);

        article.toggle_like(first);
        assert_eq!(article.likes_count, 1);
        assert_eq!(article.likes, vec![second]);
    }

    #[test]
    fn record_share_is_monotonic() {
        let mut article = sample_article();
        assert_eq!(article.record_share(), 1);
        assert_eq!(article.record_share(), 2);
    }

    #[test]
    fn set_content_replaces_title_and_description() {
        let mut article = sample_article();
        article.set_content(
            ArticleTitle::new("new title").unwrap(),
            ArticleDescription::new("new description").unwrap(),
        );
        assert_eq!(article.title.as_str(), "new title");
        assert_eq!(article.description.as_str(), "new description");
    }
}
