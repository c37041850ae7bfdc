use serde::{Deserialize, Serialize};

/// Reference to an uploaded CMS asset. The CMS owns the asset; the ref is
/// an opaque string like `image-abc123-800x600-png`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Image field as stored in a CMS document: a wrapper around an asset ref.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<ImageAsset>,
}

impl ImageSource {
    pub fn from_ref(reference: impl Into<String>) -> Self {
        Self {
            asset: Some(ImageAsset {
                reference: Some(reference.into()),
            }),
        }
    }

    /// The asset reference string, if one is set. Empty refs count as absent.
    pub fn asset_ref(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .and_then(|asset| asset.reference.as_deref())
            .filter(|reference| !reference.is_empty())
    }
}

/// Fully-populated homepage content. Every required field is guaranteed
/// present after normalization; field names follow the CMS document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageData {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_primary_label: String,
    pub hero_cta_primary_url: String,
    pub hero_cta_secondary_label: String,
    pub hero_cta_secondary_url: String,
    pub hero_image: Option<ImageSource>,
    pub fun_fact_text: String,
    pub fun_fact_tags: Vec<String>,
    pub announcement_title: String,
    pub announcement_text: String,
    pub announcement_cta_label: String,
    pub announcement_cta_url: Option<String>,
    pub announcement_enabled: bool,
}

impl Default for HomepageData {
    fn default() -> Self {
        Self {
            hero_title: "Selamat Datang di SDN Klagen 1".to_string(),
            hero_subtitle: "Bergabunglah dengan sekolah kami yang penuh warna di mana setiap hari membawa penemuan baru. Kami menumbuhkan rasa ingin tahu, kebaikan, dan kreativitas.".to_string(),
            hero_cta_primary_label: "Hubungi kami".to_string(),
            hero_cta_primary_url: "/kontak".to_string(),
            hero_cta_secondary_label: "Tentang Kami".to_string(),
            hero_cta_secondary_url: "/tentang-kami".to_string(),
            hero_image: None,
            fun_fact_text: "\"Tahukah kamu bahwa gurita memiliki tiga jantung? Dua memompa darah ke insang, sementara satu yang lebih besar mengalirkan darah ke seluruh tubuh.\"".to_string(),
            fun_fact_tags: vec!["Sains".to_string(), "Alam".to_string()],
            announcement_title: "Pengumuman".to_string(),
            announcement_text: "SPMB SDN Klagen 1 telah dibukaa! Jangan lupa untuk mendaftar.".to_string(),
            announcement_cta_label: "Baca Selengkapnya".to_string(),
            announcement_cta_url: None,
            announcement_enabled: true,
        }
    }
}

/// Homepage document as the CMS may return it: any subset of the fields.
/// Unknown fields are ignored, `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialHomepage {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_cta_primary_label: Option<String>,
    pub hero_cta_primary_url: Option<String>,
    pub hero_cta_secondary_label: Option<String>,
    pub hero_cta_secondary_url: Option<String>,
    pub hero_image: Option<ImageSource>,
    pub fun_fact_text: Option<String>,
    pub fun_fact_tags: Option<Vec<String>>,
    pub announcement_title: Option<String>,
    pub announcement_text: Option<String>,
    pub announcement_cta_label: Option<String>,
    pub announcement_cta_url: Option<String>,
    pub announcement_enabled: Option<bool>,
}

/// One entry in the about-page history timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub title: String,
    pub description: String,
}

/// One staff member in the about-page heroes section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPerson {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<ImageSource>,
}

/// Fully-populated about-page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPageData {
    pub hero_badge: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: Option<ImageSource>,
    pub hero_image_title: String,
    pub hero_image_subtitle: String,
    pub hero_image_alt: String,
    pub highlight_title: String,
    pub highlight_body: String,
    pub timeline_title: String,
    pub timeline_items: Vec<TimelineItem>,
    pub heroes_title: String,
    pub heroes_subtitle: Option<String>,
    pub heroes: Vec<HeroPerson>,
}

impl Default for AboutPageData {
    fn default() -> Self {
        Self {
            hero_badge: "Mulai Petualangan".to_string(),
            hero_title: "Petualangan Sekolah Kami".to_string(),
            hero_subtitle: "Selamat datang di dunia ajaib SDN Klagen 1! Ambil tas ransel dan petamu, kita akan berpetualang untuk menemukan tempat di mana belajar menjadi hidup.".to_string(),
            hero_image: None,
            hero_image_title: "Kerajaan Ajaib".to_string(),
            hero_image_subtitle: "Di mana setiap hari adalah cerita baru.".to_string(),
            hero_image_alt: "A vibrant cartoon-style illustration of a happy primary school building surrounded by green trees and blue sky".to_string(),
            highlight_title: "Tempat untuk Tumbuh & Bersinar".to_string(),
            highlight_body: "Di SDN Klagen 1, kami percaya setiap anak adalah pahlawan super dalam pelatihan. Misi kami adalah menyediakan lingkungan yang aman, menyenangkan, dan menginspirasi di mana rasa ingin tahu mekar menjadi pengetahuan.".to_string(),
            timeline_title: "Ikuti Jejak Kami".to_string(),
            timeline_items: vec![
                TimelineItem {
                    title: "1995: Awal Mula".to_string(),
                    description: "Petualangan kami dimulai hanya dengan dua ruang kelas dan mimpi besar. Seperti benih kecil, kami mulai dari yang kecil tapi dengan potensi yang luar biasa!".to_string(),
                },
                TimelineItem {
                    title: "2010: Perpustakaan Berkembang".to_string(),
                    description: "Kami membuka perpustakaan ajaib kami! Rak-rak penuh dengan cerita naga, antariksa, dan sains. Renovasi besar memberi kami ruang untuk terbang.".to_string(),
                },
                TimelineItem {
                    title: "Masa Kini: Kami Sedang Mekar!".to_string(),
                    description: "Kini menjadi sekolah unggulan dengan taman bagi pikiran-pikiran muda yang cerdas. Kami digital, kreatif, dan siap menyambut masa depan!".to_string(),
                },
            ],
            heroes_title: "Pahlawan Sekolah Kami".to_string(),
            heroes_subtitle: Some("Mereka yang menginspirasi dan membimbing setiap hari.".to_string()),
            heroes: vec![
                HeroPerson {
                    name: "Ibu Sari".to_string(),
                    role: "Kepala Sekolah".to_string(),
                    photo: None,
                },
                HeroPerson {
                    name: "Pak Budi".to_string(),
                    role: "Guru Kelas".to_string(),
                    photo: None,
                },
                HeroPerson {
                    name: "Bu Rani".to_string(),
                    role: "Guru Bahasa".to_string(),
                    photo: None,
                },
            ],
        }
    }
}

/// About-page document as the CMS may return it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialAboutPage {
    pub hero_badge: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image: Option<ImageSource>,
    pub hero_image_title: Option<String>,
    pub hero_image_subtitle: Option<String>,
    pub hero_image_alt: Option<String>,
    pub highlight_title: Option<String>,
    pub highlight_body: Option<String>,
    pub timeline_title: Option<String>,
    pub timeline_items: Option<Vec<TimelineItem>>,
    pub heroes_title: Option<String>,
    pub heroes_subtitle: Option<String>,
    pub heroes: Option<Vec<HeroPerson>>,
}
