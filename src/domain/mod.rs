pub mod account;
pub mod article;
pub mod comment;
pub mod engagement;
pub mod errors;
