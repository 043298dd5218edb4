use crate::composer::compose_message;
use crate::core::CatalogItem;
use crate::keywords::{extract_keywords, KeywordSet};
use crate::ranker::rank;
use tracing::debug;

/// Reported with every recommendation. Fixed, not derived from match scores.
pub const CONFIDENCE: f32 = 0.85;

#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub message: String,
    pub items: Vec<&'a CatalogItem>,
    pub keywords: KeywordSet,
    pub confidence: f32,
}

/// Stateless entry point tying extraction, ranking and composition together.
pub struct Recommender;

impl Recommender {
    pub fn recommend<'a, S: AsRef<str>>(
        query: &str,
        preferences: &[S],
        catalog: &'a [CatalogItem],
    ) -> Recommendation<'a> {
        let keywords = extract_keywords(query).with_preferences(preferences);
        debug!(count = keywords.len(), keywords = ?keywords, "extracted keywords");

        let items: Vec<&CatalogItem> = rank(catalog, &keywords)
            .into_iter()
            .map(|scored| scored.item)
            .collect();

        Recommendation {
            message: compose_message(&items),
            items,
            keywords,
            confidence: CONFIDENCE,
        }
    }
}
