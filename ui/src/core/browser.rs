//! Index-based browsing over a static catalog with clamped previous/next.

#[derive(Debug, PartialEq, Eq)]
pub struct CatalogBrowser<T: 'static> {
    items: &'static [T],
    index: usize,
}

// Manual impls: `T` itself need not be `Clone`/`Copy` for a borrowed slice.
impl<T: 'static> Clone for CatalogBrowser<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CatalogBrowser<T> {}

impl<T: 'static> CatalogBrowser<T> {
    pub fn new(items: &'static [T]) -> Self {
        Self { items, index: 0 }
    }

    pub fn items(&self) -> &'static [T] {
        self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&'static T> {
        self.items.get(self.index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    pub fn can_retreat(&self) -> bool {
        self.index > 0
    }

    pub fn can_advance(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    pub fn advance(&mut self) {
        if self.can_advance() {
            self.index += 1;
        }
    }

    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Jump to `index`, clamped to the last entry.
    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.items.len().saturating_sub(1));
    }

    /// One-based counter such as `3 / 8`.
    pub fn position_label(&self) -> String {
        if self.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LETTERS: [&str; 3] = ["a", "b", "c"];
    static NOTHING: [&str; 0] = [];

    #[test]
    fn starts_at_the_first_entry() {
        let browser = CatalogBrowser::new(&LETTERS);
        assert_eq!(browser.current(), Some(&"a"));
        assert!(!browser.can_retreat());
        assert!(browser.can_advance());
        assert_eq!(browser.position_label(), "1 / 3");
    }

    #[test]
    fn moves_clamp_at_both_ends() {
        let mut browser = CatalogBrowser::new(&LETTERS);
        browser.retreat();
        assert_eq!(browser.index(), 0);

        browser.advance();
        browser.advance();
        browser.advance();
        assert_eq!(browser.index(), 2);
        assert!(!browser.can_advance());
        assert_eq!(browser.position_label(), "3 / 3");
    }

    #[test]
    fn select_clamps_out_of_range() {
        let mut browser = CatalogBrowser::new(&LETTERS);
        browser.select(1);
        assert_eq!(browser.current(), Some(&"b"));
        assert!(browser.is_selected(1));
        browser.select(42);
        assert_eq!(browser.current(), Some(&"c"));
    }

    #[test]
    fn empty_catalog_is_inert() {
        let mut browser = CatalogBrowser::new(&NOTHING);
        browser.advance();
        browser.retreat();
        browser.select(3);
        assert_eq!(browser.current(), None);
        assert_eq!(browser.index(), 0);
        assert!(!browser.is_selected(0));
        assert_eq!(browser.position_label(), "0 / 0");
    }
}
