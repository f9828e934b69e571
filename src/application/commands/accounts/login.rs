// src/application/commands/accounts/login.rs
use super::AccountCommandService;
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::Email,
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AccountCommandService {
    /// Verifies the credentials and returns the account's public fields.
    /// No session or token is issued; engagement endpoints attribute writes
    /// to the account id the client supplies.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AccountDto> {
        let email = Email::new(command.email)?;

        let account = self
            .account_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        self.password_hasher
            .verify(&command.password, account.password_hash.as_str())
            .await?;

        Ok(account.into())
    }
}
