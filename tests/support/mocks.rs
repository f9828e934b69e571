// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use scribe_core::application::ports::security::PasswordHasher;
use scribe_core::application::ports::time::Clock;
use scribe_core::application::{ApplicationResult, error::ApplicationError};
use scribe_core::domain::account::{
    Account, AccountId, AccountRepository, Email, NewAccount,
};
use scribe_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWithAuthor,
    ArticleWriteRepository, NewArticle,
};
use scribe_core::domain::comment::{Comment, CommentId, CommentWithAuthor, NewComment};
use scribe_core::domain::engagement::{EngagementRepository, LikeToggle};
use scribe_core::domain::errors::{DomainError, DomainResult};

/// In-memory stand-in for the PostgreSQL repositories. Implements all four
/// repository traits on one struct so a single `Arc` can be handed to
/// `ApplicationServices` for every seam.
#[derive(Default)]
pub struct InMemoryBlogStore {
    accounts: Mutex<HashMap<i64, Account>>,
    articles: Mutex<HashMap<i64, Article>>,
    comments: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn author_fields(&self, author_id: AccountId) -> DomainResult<(String, Option<String>)> {
        let accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get(&i64::from(author_id))
            .ok_or_else(|| DomainError::Persistence("author missing from store".into()))?;
        Ok((
            account.name.as_str().to_owned(),
            account.profile_image.clone(),
        ))
    }

    fn with_author(&self, article: Article) -> DomainResult<ArticleWithAuthor> {
        let (author_name, author_profile_image) = self.author_fields(article.author_id)?;
        Ok(ArticleWithAuthor {
            article,
            author_name,
            author_profile_image,
        })
    }
}

#[async_trait]
impl AccountRepository for InMemoryBlogStore {
    async fn insert(&self, account: NewAccount) -> DomainResult<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts
            .values()
            .any(|existing| existing.email == account.email)
        {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let id = self.next_id();
        let account = Account {
            id: AccountId::new(id).unwrap(),
            name: account.name,
            email: account.email,
            password_hash: account.password_hash,
            profile_image: account.profile_image,
            created_at: account.created_at,
        };
        accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        Ok(self.accounts.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|account| &account.email == email)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Account>> {
        let mut accounts: Vec<Account> =
            self.accounts.lock().unwrap().values().cloned().collect();
        accounts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(accounts)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryBlogStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        if !self
            .accounts
            .lock()
            .unwrap()
            .contains_key(&i64::from(article.author_id))
        {
            return Err(DomainError::Validation("owner account not found".into()));
        }
        let id = self.next_id();
        let article = Article {
            id: ArticleId::new(id).unwrap(),
            title: article.title,
            description: article.description,
            image: article.image,
            author_id: article.author_id,
            created_at: article.created_at,
            likes: vec![],
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
        };
        self.articles.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.set_content(update.title, update.description);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // Comments are retained, matching the PostgreSQL schema.
        self.articles
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryBlogStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        let article = self.articles.lock().unwrap().get(&i64::from(id)).cloned();
        article.map(|article| self.with_author(article)).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ArticleWithAuthor>> {
        let mut articles: Vec<Article> =
            self.articles.lock().unwrap().values().cloned().collect();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        articles
            .into_iter()
            .map(|article| self.with_author(article))
            .collect()
    }

    async fn list_by_author(&self, author: AccountId) -> DomainResult<Vec<ArticleWithAuthor>> {
        let all = ArticleReadRepository::list(self).await?;
        Ok(all
            .into_iter()
            .filter(|read| read.article.author_id == author)
            .collect())
    }
}

#[async_trait]
impl EngagementRepository for InMemoryBlogStore {
    async fn toggle_like(
        &self,
        article_id: ArticleId,
        account_id: AccountId,
    ) -> DomainResult<LikeToggle> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(article_id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        let liked = article.toggle_like(account_id);
        Ok(LikeToggle {
            liked,
            likes_count: article.likes_count,
        })
    }

    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(comment.article_id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.record_comment();

        let comment = Comment {
            id: CommentId::new(self.next_id()).unwrap(),
            content: comment.content,
            author_id: comment.author_id,
            article_id: comment.article_id,
            created_at: comment.created_at,
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<CommentWithAuthor>> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        comments
            .into_iter()
            .map(|comment| {
                let (author_name, author_profile_image) = self.author_fields(comment.author_id)?;
                Ok(CommentWithAuthor {
                    comment,
                    author_name,
                    author_profile_image,
                })
            })
            .collect()
    }

    async fn increment_share(&self, article_id: ArticleId) -> DomainResult<i64> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(article_id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Ok(article.record_share())
    }
}

/// Deterministic hasher so tests can exercise both login outcomes without
/// paying for argon2.
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Clock that advances one second per call, so newest-first ordering is
/// deterministic even when records are created back to back.
pub struct TickingClock {
    now: Mutex<DateTime<Utc>>,
}

impl TickingClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(
                DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap();
        *now += Duration::seconds(1);
        *now
    }
}
