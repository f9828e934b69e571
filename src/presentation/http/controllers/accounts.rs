// src/presentation/http/controllers/accounts.rs
use crate::application::{
    commands::accounts::{LoginCommand, RegisterAccountCommand},
    dto::AccountDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account: AccountDto,
}

#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    pub accounts: Vec<AccountDto>,
}

pub async fn signup(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SignupRequest>,
) -> HttpResult<(StatusCode, Json<AccountResponse>)> {
    let account = state
        .services
        .account_commands
        .register(RegisterAccountCommand {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            profile_image: payload.profile_image,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(AccountResponse { account })))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AccountResponse>> {
    let account = state
        .services
        .account_commands
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;
    Ok(Json(AccountResponse { account }))
}

pub async fn list_accounts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<AccountsResponse>> {
    let accounts = state
        .services
        .account_queries
        .list_accounts()
        .await
        .into_http()?;
    Ok(Json(AccountsResponse { accounts }))
}
