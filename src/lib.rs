pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Page};
pub use crate::config::sanity::{build_sanity_config, SanityConfig, SanityEnv, DEFAULT_API_VERSION};
pub use crate::core::about_page::{fetch_about_page, normalize_about_page, ABOUT_PAGE_QUERY};
pub use crate::core::client::SanityClient;
pub use crate::core::homepage::{fetch_homepage, normalize_homepage, HOMEPAGE_QUERY};
pub use crate::core::image::image_url;
pub use crate::domain::model::{AboutPageData, HomepageData, ImageSource};
pub use crate::domain::ports::ContentSource;
pub use crate::utils::error::{ContentError, Result};
