// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, OwnerDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub img: Option<String>,
    pub owner: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize)]
pub struct OwnerResponse {
    pub owner: OwnerDto,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticlesResponse>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;
    Ok(Json(ArticlesResponse { articles }))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article(id)
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            title: payload.title,
            desc: payload.desc,
            img: payload.img,
            owner_id: payload.owner,
        })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            title: payload.title,
            desc: payload.desc,
        })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse { article }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(Json(MessageResponse {
        message: "successfully deleted".into(),
    }))
}

pub async fn get_owner_articles(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<OwnerResponse>> {
    let owner = state
        .services
        .article_queries
        .get_owner_articles(id)
        .await
        .into_http()?;
    Ok(Json(OwnerResponse { owner }))
}
