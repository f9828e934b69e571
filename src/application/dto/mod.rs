mod accounts;
mod articles;
mod comments;

pub use accounts::{AccountDto, AuthorDto};
pub use articles::{ArticleDto, OwnerDto};
pub use comments::CommentDto;
