// src/application/commands/accounts/register.rs
use super::AccountCommandService;
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{AccountName, Email, NewAccount, PasswordHash},
};

pub struct RegisterAccountCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_image: Option<String>,
}

impl AccountCommandService {
    pub async fn register(&self, command: RegisterAccountCommand) -> ApplicationResult<AccountDto> {
        let name = AccountName::new(command.name)?;
        let email = Email::new(command.email)?;

        if command.password.trim().is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }

        // The unique index on email backstops this check; a racing signup
        // surfaces as Conflict from the repository.
        if self.account_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let password_hash = PasswordHash::new(self.password_hasher.hash(&command.password).await?);

        let account = self
            .account_repo
            .insert(NewAccount {
                name,
                email,
                password_hash,
                profile_image: command.profile_image,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(account_id = %account.id, "account registered");
        Ok(account.into())
    }
}
