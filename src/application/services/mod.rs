// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            accounts::AccountCommandService, articles::ArticleCommandService,
            engagement::EngagementCommandService,
        },
        ports::{security::PasswordHasher, time::Clock},
        queries::{
            accounts::AccountQueryService, articles::ArticleQueryService,
            engagement::EngagementQueryService,
        },
    },
    domain::{
        account::AccountRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
        engagement::EngagementRepository,
    },
};

/// Wires repositories and ports into the command/query services the HTTP
/// layer dispatches to.
pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub engagement_commands: Arc<EngagementCommandService>,
    pub account_queries: Arc<AccountQueryService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub engagement_queries: Arc<EngagementQueryService>,
}

impl ApplicationServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        engagement_repo: Arc<dyn EngagementRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&account_repo),
            Arc::clone(&clock),
        ));

        let engagement_commands = Arc::new(EngagementCommandService::new(
            Arc::clone(&engagement_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&account_repo),
            Arc::clone(&clock),
        ));

        let account_queries = Arc::new(AccountQueryService::new(Arc::clone(&account_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&account_repo),
        ));
        let engagement_queries =
            Arc::new(EngagementQueryService::new(Arc::clone(&engagement_repo)));

        Self {
            account_commands,
            article_commands,
            engagement_commands,
            account_queries,
            article_queries,
            engagement_queries,
        }
    }
}
