// src/presentation/http/controllers/engagement.rs
use super::articles::ArticleResponse;
use crate::application::{
    commands::engagement::{AddCommentCommand, IncrementShareCommand, ToggleLikeCommand},
    dto::CommentDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub account_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub content: String,
    pub account_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub shares_count: i64,
}

pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<LikeRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .engagement_commands
        .toggle_like(ToggleLikeCommand {
            article_id: id,
            account_id: payload.account_id,
        })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let comment = state
        .services
        .engagement_commands
        .add_comment(AddCommentCommand {
            article_id: id,
            account_id: payload.account_id,
            content: payload.content,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CommentsResponse>> {
    let comments = state
        .services
        .engagement_queries
        .list_comments(id)
        .await
        .into_http()?;
    Ok(Json(CommentsResponse { comments }))
}

pub async fn increment_share(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ShareResponse>> {
    let shares_count = state
        .services
        .engagement_commands
        .increment_share(IncrementShareCommand { article_id: id })
        .await
        .into_http()?;
    Ok(Json(ShareResponse { shares_count }))
}
