// src/application/queries/accounts.rs
use std::sync::Arc;

use crate::{
    application::{dto::AccountDto, error::ApplicationResult},
    domain::account::AccountRepository,
};

pub struct AccountQueryService {
    account_repo: Arc<dyn AccountRepository>,
}

impl AccountQueryService {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self { account_repo }
    }

    pub async fn list_accounts(&self) -> ApplicationResult<Vec<AccountDto>> {
        let accounts = self.account_repo.list().await?;
        Ok(accounts.into_iter().map(AccountDto::from).collect())
    }
}
