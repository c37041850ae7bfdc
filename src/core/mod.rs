pub mod about_page;
pub mod client;
pub mod homepage;
pub mod image;

pub use crate::domain::model::{AboutPageData, HomepageData, ImageSource};
pub use crate::domain::ports::ContentSource;
pub use crate::utils::error::Result;
