pub mod entity;
pub mod value_objects;

pub use entity::{Comment, CommentWithAuthor, NewComment};
pub use value_objects::{CommentContent, CommentId};
