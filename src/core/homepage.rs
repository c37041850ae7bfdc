use crate::domain::model::{HomepageData, PartialHomepage};
use crate::domain::ports::ContentSource;
use crate::utils::error::Result;

/// GROQ query for the single homepage document.
pub const HOMEPAGE_QUERY: &str = r#"*[_type == "homepage"][0]"#;

/// Overlays a possibly-absent partial document on the hardcoded defaults.
/// The merge is shallow and field-by-field: a field supplied by the CMS
/// wins verbatim, array fields replace the default array wholesale.
pub fn normalize_homepage(input: Option<PartialHomepage>) -> HomepageData {
    let defaults = HomepageData::default();
    let input = input.unwrap_or_default();

    HomepageData {
        hero_title: input.hero_title.unwrap_or(defaults.hero_title),
        hero_subtitle: input.hero_subtitle.unwrap_or(defaults.hero_subtitle),
        hero_cta_primary_label: input
            .hero_cta_primary_label
            .unwrap_or(defaults.hero_cta_primary_label),
        hero_cta_primary_url: input
            .hero_cta_primary_url
            .unwrap_or(defaults.hero_cta_primary_url),
        hero_cta_secondary_label: input
            .hero_cta_secondary_label
            .unwrap_or(defaults.hero_cta_secondary_label),
        hero_cta_secondary_url: input
            .hero_cta_secondary_url
            .unwrap_or(defaults.hero_cta_secondary_url),
        hero_image: input.hero_image.or(defaults.hero_image),
        fun_fact_text: input.fun_fact_text.unwrap_or(defaults.fun_fact_text),
        fun_fact_tags: input.fun_fact_tags.unwrap_or(defaults.fun_fact_tags),
        announcement_title: input
            .announcement_title
            .unwrap_or(defaults.announcement_title),
        announcement_text: input
            .announcement_text
            .unwrap_or(defaults.announcement_text),
        announcement_cta_label: input
            .announcement_cta_label
            .unwrap_or(defaults.announcement_cta_label),
        announcement_cta_url: input
            .announcement_cta_url
            .or(defaults.announcement_cta_url),
        announcement_enabled: input
            .announcement_enabled
            .unwrap_or(defaults.announcement_enabled),
    }
}

/// Fetches the homepage document and normalizes it. Issues exactly one
/// query against the source; upstream failures propagate unchanged.
pub async fn fetch_homepage(source: &impl ContentSource) -> Result<HomepageData> {
    tracing::debug!("Fetching homepage document");
    let raw = source.fetch(HOMEPAGE_QUERY).await?;

    let partial = raw
        .filter(|value| !value.is_null())
        .map(serde_json::from_value::<PartialHomepage>)
        .transpose()?;

    Ok(normalize_homepage(partial))
}
