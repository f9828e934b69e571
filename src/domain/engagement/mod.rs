pub mod repository;

pub use repository::{EngagementRepository, LikeToggle};
