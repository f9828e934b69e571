use crate::domain::account::entity::{Account, NewAccount};
use crate::domain::account::value_objects::{AccountId, Email};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, account: NewAccount) -> DomainResult<Account>;
    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>>;
    async fn list(&self) -> DomainResult<Vec<Account>>;
}
