use crate::config::sanity::{build_sanity_config, SanityEnv};
use crate::domain::model::ImageSource;
use crate::utils::error::Result;
use regex::Regex;
use std::sync::OnceLock;

// id, width, height, format. Dimensions are carried verbatim into the URL.
const ASSET_REF_PATTERN: &str = r"^image-([a-zA-Z0-9]+)-(\d+)x(\d+)-(\w+)$";

fn asset_ref_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(ASSET_REF_PATTERN).unwrap())
}

/// Derives the public CDN URL for an uploaded image.
///
/// Returns `Ok(None)` when the source carries no asset reference or the
/// reference does not parse as an image ref; a missing required Sanity env
/// value is a configuration error. An absent image short-circuits before
/// configuration is consulted.
pub fn image_url(source: Option<&ImageSource>, env: &SanityEnv) -> Result<Option<String>> {
    let Some(reference) = source.and_then(ImageSource::asset_ref) else {
        return Ok(None);
    };

    let config = build_sanity_config(env)?;

    let Some(captures) = asset_ref_regex().captures(reference) else {
        tracing::debug!(reference, "asset reference is not an image ref");
        return Ok(None);
    };

    let (id, width, height, format) = (&captures[1], &captures[2], &captures[3], &captures[4]);
    Ok(Some(format!(
        "https://cdn.sanity.io/images/{}/{}/{}-{}x{}.{}",
        config.project_id, config.dataset, id, width, height, format
    )))
}
