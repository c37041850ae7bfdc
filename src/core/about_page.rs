use crate::domain::model::{AboutPageData, PartialAboutPage};
use crate::domain::ports::ContentSource;
use crate::utils::error::Result;

/// GROQ query for the single about-page document.
pub const ABOUT_PAGE_QUERY: &str = r#"*[_type == "aboutPage"][0]"#;

/// Same merge contract as the homepage normalizer; only the default table
/// and field set differ.
pub fn normalize_about_page(input: Option<PartialAboutPage>) -> AboutPageData {
    let defaults = AboutPageData::default();
    let input = input.unwrap_or_default();

    AboutPageData {
        hero_badge: input.hero_badge.unwrap_or(defaults.hero_badge),
        hero_title: input.hero_title.unwrap_or(defaults.hero_title),
        hero_subtitle: input.hero_subtitle.unwrap_or(defaults.hero_subtitle),
        hero_image: input.hero_image.or(defaults.hero_image),
        hero_image_title: input.hero_image_title.unwrap_or(defaults.hero_image_title),
        hero_image_subtitle: input
            .hero_image_subtitle
            .unwrap_or(defaults.hero_image_subtitle),
        hero_image_alt: input.hero_image_alt.unwrap_or(defaults.hero_image_alt),
        highlight_title: input.highlight_title.unwrap_or(defaults.highlight_title),
        highlight_body: input.highlight_body.unwrap_or(defaults.highlight_body),
        timeline_title: input.timeline_title.unwrap_or(defaults.timeline_title),
        timeline_items: input.timeline_items.unwrap_or(defaults.timeline_items),
        heroes_title: input.heroes_title.unwrap_or(defaults.heroes_title),
        heroes_subtitle: input.heroes_subtitle.or(defaults.heroes_subtitle),
        heroes: input.heroes.unwrap_or(defaults.heroes),
    }
}

/// Fetches the about-page document and normalizes it. Issues exactly one
/// query against the source; upstream failures propagate unchanged.
pub async fn fetch_about_page(source: &impl ContentSource) -> Result<AboutPageData> {
    tracing::debug!("Fetching about-page document");
    let raw = source.fetch(ABOUT_PAGE_QUERY).await?;

    let partial = raw
        .filter(|value| !value.is_null())
        .map(serde_json::from_value::<PartialAboutPage>)
        .transpose()?;

    Ok(normalize_about_page(partial))
}
