use crate::core::CatalogItem;
use std::fmt::Write;

pub const FOLLOW_UP: &str =
    "Would you like more details about any of these, or should I narrow it down by style, genre or budget?";

pub const NO_MATCH_MESSAGE: &str = "I couldn't find anything that matches just yet. \
Could you tell me a bit more about your style, or the music and culture you're into?";

/// Shown when the catalog itself is unavailable.
pub const FALLBACK_MESSAGE: &str = "Sorry, I'm having trouble reaching the catalog right now. \
Please try again in a moment.";

pub fn compose_message(items: &[&CatalogItem]) -> String {
    if items.is_empty() {
        return NO_MATCH_MESSAGE.to_string();
    }

    let mut message = String::from("Based on what you're looking for, here are my top picks:\n\n");
    for (i, item) in items.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = writeln!(
            message,
            "{}. {} ({}) - ${:.2}",
            i + 1,
            item.name,
            item.category,
            item.price
        );
    }
    message.push('\n');
    message.push_str(FOLLOW_UP);
    message
}
