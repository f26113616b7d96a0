use log::error;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config;

const PRICING_JSON: &str = include_str!("../content/pricing.json");
const FAQ_JSON: &str = include_str!("../content/faq.json");
const DASHBOARD_JSON: &str = include_str!("../content/dashboard.json");
const PRIVACY_JSON: &str = include_str!("../content/privacy.json");
const TERMS_JSON: &str = include_str!("../content/terms.json");

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PricingTier {
    pub name: String,
    pub plan: String,
    pub setup_fee: String,
    pub monthly_price: String,
    pub minutes: String,
    pub calls: String,
    pub overage: String,
    #[serde(default)]
    pub highlight: bool,
    pub perfect_for: String,
}

impl PricingTier {
    pub fn checkout_link(&self) -> Option<&'static str> {
        config::checkout_link(&self.plan)
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PricingContent {
    pub common_features: Vec<String>,
    pub tiers: Vec<PricingTier>,
    #[serde(default)]
    pub footnotes: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub note: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DailyBookings {
    pub day: String,
    pub value: u32,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StatusSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DashboardContent {
    pub stats: Vec<StatCard>,
    pub daily_bookings: Vec<DailyBookings>,
    pub job_status: Vec<StatusSlice>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LegalBlock {
    Subheading(String),
    Text(String),
    List(Vec<String>),
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TocEntry {
    pub anchor: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LegalSection {
    pub anchor: String,
    pub heading: String,
    pub blocks: Vec<LegalBlock>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LegalDocument {
    pub title: String,
    pub last_updated: String,
    #[serde(default)]
    pub intro: Vec<LegalBlock>,
    #[serde(default)]
    pub contents: Vec<TocEntry>,
    pub sections: Vec<LegalSection>,
}

// Bundled documents are static; a broken one blanks its section, not the page.
fn decode<T: DeserializeOwned + Default>(name: &str, raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        error!("Failed to decode {}: {}", name, err);
        T::default()
    })
}

pub fn pricing() -> PricingContent {
    decode("pricing.json", PRICING_JSON)
}

pub fn faq() -> Vec<FaqEntry> {
    decode("faq.json", FAQ_JSON)
}

pub fn dashboard() -> DashboardContent {
    decode("dashboard.json", DASHBOARD_JSON)
}

pub fn privacy_policy() -> LegalDocument {
    decode("privacy.json", PRIVACY_JSON)
}

pub fn terms_of_service() -> LegalDocument {
    decode("terms.json", TERMS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_documents_decode() {
        serde_json::from_str::<PricingContent>(PRICING_JSON).expect("pricing");
        serde_json::from_str::<Vec<FaqEntry>>(FAQ_JSON).expect("faq");
        serde_json::from_str::<DashboardContent>(DASHBOARD_JSON).expect("dashboard");
        serde_json::from_str::<LegalDocument>(PRIVACY_JSON).expect("privacy");
        serde_json::from_str::<LegalDocument>(TERMS_JSON).expect("terms");
    }

    #[test]
    fn test_pricing_has_three_linked_tiers() {
        let pricing = pricing();
        assert_eq!(pricing.tiers.len(), 3);
        assert_eq!(pricing.tiers.iter().filter(|tier| tier.highlight).count(), 1);
        for tier in &pricing.tiers {
            assert!(tier.checkout_link().is_some(), "{} has no checkout link", tier.name);
        }
        assert!(!pricing.common_features.is_empty());
    }

    #[test]
    fn test_broken_document_falls_back_to_default() {
        let broken: PricingContent = decode("broken.json", "{ \"tiers\": ");
        assert_eq!(broken, PricingContent::default());

        let faq: Vec<FaqEntry> = decode("faq.json", "not json");
        assert!(faq.is_empty());
    }

    #[test]
    fn test_legal_anchors_are_unique() {
        for document in [privacy_policy(), terms_of_service()] {
            let mut seen = HashSet::new();
            for section in &document.sections {
                assert!(seen.insert(section.anchor.clone()), "duplicate anchor {}", section.anchor);
            }
        }
    }

    #[test]
    fn test_terms_contents_point_at_real_sections_where_they_exist() {
        let terms = terms_of_service();
        let anchors: HashSet<_> = terms.sections.iter().map(|s| s.anchor.as_str()).collect();
        assert!(terms.contents.iter().any(|entry| entry.anchor == "subscriptions"));
        assert!(anchors.contains("subscriptions"));
        // Some entries have no section; following them is a silent no-op.
        assert!(terms.contents.iter().any(|entry| !anchors.contains(entry.anchor.as_str())));
    }

    #[test]
    fn test_dashboard_series_match_cards() {
        let dashboard = dashboard();
        assert_eq!(dashboard.daily_bookings.len(), 7);
        let confirmed = dashboard
            .job_status
            .iter()
            .find(|slice| slice.name == "Confirmed")
            .expect("confirmed slice");
        assert_eq!(confirmed.value, 5);
        assert_eq!(dashboard.stats.len(), 4);
    }

    #[test]
    fn test_legal_blocks_use_tagged_form() {
        let blocks: Vec<LegalBlock> =
            serde_json::from_str(r#"[{"subheading": "A"}, {"text": "b"}, {"list": ["c", "d"]}]"#).unwrap();
        assert_eq!(
            blocks,
            vec![
                LegalBlock::Subheading("A".into()),
                LegalBlock::Text("b".into()),
                LegalBlock::List(vec!["c".into(), "d".into()]),
            ]
        );
    }
}
