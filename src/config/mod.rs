#[cfg(feature = "cli")]
pub mod cli;
pub mod sanity;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Page};
pub use sanity::{build_sanity_config, SanityConfig, SanityEnv, DEFAULT_API_VERSION};
