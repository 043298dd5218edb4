use std::collections::BTreeSet;

/// Common English words that carry no product signal.
static STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old",
    "see", "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use",
    "what", "want", "like", "looking", "need", "some", "something", "with", "that", "this",
    "from", "have", "into", "about", "show", "find", "please", "would", "could", "should",
    "give", "recommend", "anything", "really", "very", "just", "also", "them", "they", "there",
    "their", "then", "than", "your", "mine", "more", "much", "of", "to", "in", "on",
    "a", "an", "is", "it", "me", "my", "i",
];

/// Style, genre and product-type terms matched as substrings of the whole query,
/// so multi-word phrases survive tokenization.
static VOCABULARY: &[&str] = &[
    // styles
    "streetwear", "urban", "vintage", "retro", "bohemian", "boho", "grunge", "minimalist",
    "gothic", "preppy", "casual", "traditional", "african", "afro", "kente", "ankara",
    "latin", "caribbean", "graphic",
    // music genres
    "hip hop", "hip-hop", "rap", "punk", "rock", "jazz", "blues", "soul", "funk", "reggae",
    "afrobeat", "afrobeats", "indie", "metal", "pop", "r&b", "electronic", "techno", "house",
    "salsa", "reggaeton", "k-pop",
    // product types
    "t-shirt", "tee", "hoodie", "jacket", "sneakers", "cap", "hat", "dress", "jeans",
    "accessories", "jewelry", "bag", "poster", "vinyl", "album", "headphones", "clothing",
    "music",
];

/// A deduplicated, lower-cased set of search terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return false;
        }
        self.0.insert(keyword)
    }

    /// Adds caller-supplied preference tags verbatim (normalized) as keywords.
    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in preferences {
            self.insert(tag.as_ref());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeywordSet::new().with_preferences(iter)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Turns free text into keywords. Never fails; text without usable terms yields
/// an empty set.
pub fn extract_keywords(text: &str) -> KeywordSet {
    let lowered = text.to_lowercase();
    let mut keywords = KeywordSet::new();

    for token in lowered.split(|c: char| !is_word_char(c)) {
        // Tokens are pure ASCII here, so byte length equals char count
        if token.len() > 2 && !STOP_WORDS.contains(&token) {
            keywords.insert(token);
        }
    }

    for term in VOCABULARY {
        if lowered.contains(term) {
            keywords.insert(term);
        }
    }

    keywords
}
