use crate::core::CatalogItem;
use crate::keywords::KeywordSet;

pub const NAME_WEIGHT: u32 = 3;
pub const CATEGORY_WEIGHT: u32 = 2;
pub const TAG_WEIGHT: u32 = 2;
pub const DESCRIPTION_WEIGHT: u32 = 1;

/// Additive relevance of one item for a keyword set.
///
/// Every keyword is checked against every field independently, so an item can
/// collect points from the same field several times. Scores are not normalized
/// by field length or tag count: items with more tags or longer descriptions
/// accumulate more points.
pub fn score_item(item: &CatalogItem, keywords: &KeywordSet) -> u32 {
    if keywords.is_empty() {
        return 0;
    }

    let name = item.name.to_lowercase();
    let category = item.category.to_lowercase();
    let description = item.description.to_lowercase();
    let tags: Vec<String> = item.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut score = 0;
    for keyword in keywords.iter() {
        if name.contains(keyword) {
            score += NAME_WEIGHT;
        }
        if category.contains(keyword) {
            score += CATEGORY_WEIGHT;
        }
        for tag in &tags {
            if tag.contains(keyword) || keyword.contains(tag.as_str()) {
                score += TAG_WEIGHT;
            }
        }
        if description.contains(keyword) {
            score += DESCRIPTION_WEIGHT;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::item;
    use proptest::prelude::*;

    fn keywords(words: &[&str]) -> KeywordSet {
        words.iter().collect()
    }

    #[test]
    fn test_name_match_scores_three() {
        let tee = item("1", "Urban Graphic Tee", "clothing", &["Streetwear"], "A tee.");
        assert_eq!(score_item(&tee, &keywords(&["urban"])), 3);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let jacket = item("1", "Punk Jacket", "clothing", &["Punk"], "Leather.");
        assert_eq!(score_item(&jacket, &keywords(&["jazz"])), 0);
    }

    #[test]
    fn test_fields_accumulate() {
        let record = item("1", "Indie Mixtape", "music", &["Indie"], "indie vibes");
        // name 3 + tag 2 + description 1
        assert_eq!(score_item(&record, &keywords(&["indie"])), 6);
    }

    #[test]
    fn test_category_match() {
        let record = item("1", "Blue Note Sessions", "Music", &[], "");
        assert_eq!(score_item(&record, &keywords(&["music"])), 2);
    }

    #[test]
    fn test_tag_matches_in_both_directions() {
        let hoodie = item("1", "Hoodie", "clothing", &["hip hop", "rap"], "");
        // "hip hop" tag contains "hip"; "rap" tag is not involved
        assert_eq!(score_item(&hoodie, &keywords(&["hip"])), 2);
        // keyword "hip hop classics" contains tag "hip hop"
        assert_eq!(score_item(&hoodie, &keywords(&["hip hop classics"])), 2);
    }

    #[test]
    fn test_each_matching_tag_counts() {
        let jacket = item("1", "Jacket", "outerwear", &["Punk", "punk rock", "Post-Punk"], "");
        assert_eq!(score_item(&jacket, &keywords(&["punk"])), 6);
    }

    #[test]
    fn test_multiple_keywords_hit_same_field() {
        let tee = item("1", "Vintage Rock Tee", "clothing", &[], "");
        assert_eq!(score_item(&tee, &keywords(&["vintage", "rock", "tee"])), 9);
    }

    #[test]
    fn test_empty_keywords_score_zero() {
        let tee = item("1", "Tee", "clothing", &["tee"], "tee");
        assert_eq!(score_item(&tee, &KeywordSet::new()), 0);
    }

    proptest! {
        #[test]
        fn prop_adding_keyword_never_lowers_score(
            base in proptest::collection::vec("[a-z]{3,8}", 0..5),
            extra in "[a-z]{3,8}",
        ) {
            let record = item("1", "Retro Soul Vinyl", "music", &["soul", "retro"], "Warm analog soul pressing");
            let before: KeywordSet = base.iter().collect();
            let after = before.clone().with_preferences([extra]);
            prop_assert!(score_item(&record, &after) >= score_item(&record, &before));
        }
    }
}
