use crate::core::{CatalogItem, ScoredItem};
use crate::keywords::KeywordSet;
use crate::scorer::score_item;
use tracing::debug;

/// Maximum number of items in a shortlist.
pub const SHORTLIST_LEN: usize = 3;

/// Scores the whole catalog and returns the best matches, highest score first.
///
/// Items scoring zero are dropped rather than ranked last. Ties keep their
/// catalog order.
pub fn rank<'a>(catalog: &'a [CatalogItem], keywords: &KeywordSet) -> Vec<ScoredItem<'a>> {
    if keywords.is_empty() || catalog.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredItem<'a>> = catalog
        .iter()
        .map(|item| ScoredItem {
            item,
            score: score_item(item, keywords),
        })
        .filter(|s| s.score > 0)
        .collect();

    debug!(
        candidates = catalog.len(),
        matched = scored.len(),
        "scored catalog"
    );

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(SHORTLIST_LEN);
    scored
}
