// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountId, AccountName, Email, PasswordHash};
use chrono::{DateTime, Utc};

/// A registered identity. Accounts are never hard-deleted; the articles an
/// account owns are reachable through `ArticleReadRepository::list_by_author`.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: AccountName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}
