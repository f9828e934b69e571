// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_account;
mod postgres_article;
mod postgres_engagement;

pub use postgres_account::PostgresAccountRepository;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_engagement::PostgresEngagementRepository;
