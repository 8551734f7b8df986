//! HTTP 请求处理器

pub mod home;
pub mod review;

pub use home::handle_home;
pub use review::handle_get_review;
