use crate::core::CatalogItem;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Plain product search by name, independent of the recommendation scoring.
pub struct SearchEngine;

impl SearchEngine {
    pub fn search<'a>(query: &str, catalog: &'a [CatalogItem]) -> Vec<(i64, &'a CatalogItem)> {
        let matcher = SkimMatcherV2::default();
        let mut results = Vec::new();

        for item in catalog {
            if let Some(score) = matcher.fuzzy_match(&item.name, query) {
                results.push((score, item));
            }
        }

        // Sort by relevance (descending)
        results.sort_by(|a, b| b.0.cmp(&a.0));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::item;

    #[test]
    fn test_fuzzy_name_search() {
        let catalog = vec![
            item("1", "Punk Jacket", "clothing", &[], ""),
            item("2", "Reggae Vinyl Box", "music", &[], ""),
            item("3", "Punk Rock Patch Kit", "accessories", &[], ""),
        ];

        let results = SearchEngine::search("pnk", &catalog);
        let names: Vec<&str> = results.iter().map(|(_, i)| i.name.as_str()).collect();
        assert_eq!(results.len(), 2);
        assert!(names.contains(&"Punk Jacket"));
        assert!(names.contains(&"Punk Rock Patch Kit"));
    }

    #[test]
    fn test_no_match() {
        let catalog = vec![item("1", "Punk Jacket", "clothing", &[], "")];
        assert!(SearchEngine::search("zzz", &catalog).is_empty());
    }
}
