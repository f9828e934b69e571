mod comment;
mod like;
mod service;
mod share;

pub use comment::AddCommentCommand;
pub use like::ToggleLikeCommand;
pub use service::EngagementCommandService;
pub use share::IncrementShareCommand;
