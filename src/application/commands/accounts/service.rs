// src/application/commands/accounts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::PasswordHasher, time::Clock},
    domain::account::AccountRepository,
};

pub struct AccountCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AccountCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            clock,
        }
    }
}
