use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn isbn(&self) -> &str;
    fn author(&self) -> &str;
    fn category(&self) -> &str;

    // case-insensitive full-string equality on author or category, no substring matching
    fn matches_author_or_category(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.author().to_lowercase() == needle || self.category().to_lowercase() == needle
    }
}
